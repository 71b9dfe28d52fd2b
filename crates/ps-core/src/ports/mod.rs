//! Ports: typed contracts toward external collaborators.
//!
//! Use cases depend on these traits only; concrete transports live in
//! ps-infra.

mod profile_store;
mod recipe_service;

pub use profile_store::{ProfileStoreError, ProfileStorePort};
pub use recipe_service::{RecipeServiceError, RecipeServicePort};
