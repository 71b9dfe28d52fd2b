//! HTTP adapters for the ps-core ports.

mod profile_store;
mod recipe_service;

pub use profile_store::HttpProfileStore;
pub use recipe_service::HttpRecipeService;
