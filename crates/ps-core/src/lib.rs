//! # ps-core
//!
//! Core domain models and business logic for PantryScan.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod config;
pub mod ids;
pub mod ports;
pub mod profile;
pub mod protocol;
pub mod recipe;
pub mod scan;
pub mod session;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use ids::{RecipeId, SessionId, UserId};
pub use profile::UserProfile;
pub use protocol::{
    GenerateRecipesRequest, GenerateRecipesResponse, GenerationMode, HealthResponse, ScanResponse,
    ServiceConnectivity,
};
pub use recipe::{Recipe, RecipeSet};
pub use scan::{DietaryPreference, FilterState, IdentifiedItem, ItemSource, ScanSession, SelectionSet};
pub use session::{Completion, Epoch, PipelineStage, SessionError, SessionState};
