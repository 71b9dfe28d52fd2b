use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use tracing::debug;

use ps_core::config::ServiceConfig;
use ps_core::ports::{RecipeServiceError, RecipeServicePort};
use ps_core::protocol::{
    GenerateRecipesRequest, GenerateRecipesResponse, GenerationMode, HealthResponse, ScanResponse,
};

/// Error body shape the recipe service emits for non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// HTTP client for the recipe service.
///
/// Pure request/response wrapper: typed errors, no retries, no caching.
pub struct HttpRecipeService {
    client: Client,
    base_url: String,
}

impl HttpRecipeService {
    pub fn new(config: &ServiceConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Map a non-success response to the typed error taxonomy.
    async fn error_for(response: Response) -> RecipeServiceError {
        let status = response.status();
        let detail = response
            .json::<ErrorBody>()
            .await
            .map(|body| body.detail)
            .unwrap_or_else(|_| status.to_string());

        match status {
            StatusCode::BAD_REQUEST => RecipeServiceError::InvalidInput(detail),
            StatusCode::BAD_GATEWAY => RecipeServiceError::UpstreamUnavailable(detail),
            other => RecipeServiceError::RequestFailed(other.as_u16()),
        }
    }
}

fn transport(err: reqwest::Error) -> RecipeServiceError {
    RecipeServiceError::Transport(err.to_string())
}

#[async_trait]
impl RecipeServicePort for HttpRecipeService {
    async fn check_health(&self) -> Result<HealthResponse, RecipeServiceError> {
        let response = self
            .client
            .get(self.url("/health"))
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }
        response.json().await.map_err(transport)
    }

    async fn scan(&self, image: Vec<u8>) -> Result<ScanResponse, RecipeServiceError> {
        debug!(bytes = image.len(), "uploading pantry image");
        let part = Part::bytes(image)
            .file_name("pantry.jpg")
            .mime_str("image/jpeg")
            .map_err(transport)?;
        let form = Form::new().part("image", part);

        let response = self
            .client
            .post(self.url("/scan"))
            .multipart(form)
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }
        response.json().await.map_err(transport)
    }

    async fn generate_recipes(
        &self,
        mode: GenerationMode,
        request: &GenerateRecipesRequest,
    ) -> Result<GenerateRecipesResponse, RecipeServiceError> {
        let response = self
            .client
            .post(self.url("/generate-recipes"))
            .query(&[("mode", mode.as_str())])
            .json(request)
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }
        response.json().await.map_err(transport)
    }
}
