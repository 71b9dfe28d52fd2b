//! # ps-infra
//!
//! Infrastructure adapters implementing the ps-core ports: HTTP recipe
//! service client, HTTP and in-memory profile stores, config loading.

pub mod config;
pub mod http;
pub mod profile;

pub use http::{HttpProfileStore, HttpRecipeService};
pub use profile::InMemoryProfileStore;
