use std::sync::Arc;

use ps_core::ports::{RecipeServiceError, RecipeServicePort};
use ps_core::protocol::HealthResponse;

/// Check recipe service and model-host connectivity.
pub struct CheckServiceHealth {
    service: Arc<dyn RecipeServicePort>,
}

impl CheckServiceHealth {
    pub fn new(service: Arc<dyn RecipeServicePort>) -> Self {
        Self { service }
    }

    pub async fn execute(&self) -> Result<HealthResponse, RecipeServiceError> {
        self.service.check_health().await
    }
}
