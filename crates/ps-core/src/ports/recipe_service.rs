use async_trait::async_trait;
use thiserror::Error;

use crate::protocol::{
    GenerateRecipesRequest, GenerateRecipesResponse, GenerationMode, HealthResponse, ScanResponse,
};

#[derive(Debug, Clone, Error)]
pub enum RecipeServiceError {
    /// Caller-correctable input problem (empty payload, empty ingredient list).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The upstream vision/recipe model is unreachable (transient outage).
    #[error("upstream model unreachable: {0}")]
    UpstreamUnavailable(String),

    /// Any other non-success status.
    #[error("request failed with status {0}")]
    RequestFailed(u16),

    /// The request never produced a status (connect error, timeout).
    #[error("transport error: {0}")]
    Transport(String),
}

/// Typed request/response wrapper for the recipe service.
///
/// Surfaces typed errors only; there is no retry logic anywhere behind this
/// trait — every retry is a fresh caller-initiated action.
#[async_trait]
pub trait RecipeServicePort: Send + Sync {
    /// Check API and model-host connectivity.
    async fn check_health(&self) -> Result<HealthResponse, RecipeServiceError>;

    /// Upload a pantry image; returns identified items and suggested filters.
    async fn scan(&self, image: Vec<u8>) -> Result<ScanResponse, RecipeServiceError>;

    /// Generate recipes for the given selection in the requested mode.
    async fn generate_recipes(
        &self,
        mode: GenerationMode,
        request: &GenerateRecipesRequest,
    ) -> Result<GenerateRecipesResponse, RecipeServiceError>;
}
