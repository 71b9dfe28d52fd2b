//! Wire protocol DTOs for the recipe service.
//!
//! Field names mirror the backend JSON exactly (snake_case).

use serde::{Deserialize, Serialize};

use crate::ids::SessionId;
use crate::recipe::Recipe;
use crate::scan::IdentifiedItem;

/// Connectivity of the upstream model host as reported by the health check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceConnectivity {
    Connected,
    Unreachable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub connectivity: ServiceConnectivity,
    pub vision_model: String,
    pub text_model: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanResponse {
    pub session_id: SessionId,
    pub identified_items: Vec<IdentifiedItem>,
    pub suggested_filters: Vec<String>,
}

/// Which generation backend to use.
///
/// Purely an input parameter: both modes resolve through the identical
/// begin/complete generation contract and have no state-machine impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /// Deterministic matcher over the curated recipe database.
    Database,
    /// Generative chef model.
    Ai,
}

impl GenerationMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Database => "database",
            Self::Ai => "ai",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateRecipesRequest {
    /// Session token from the scan response, threaded unchanged.
    pub session_id: SessionId,
    pub identified_items: Vec<String>,
    #[serde(default)]
    pub filters: Vec<String>,
    #[serde(default)]
    pub dietary_preferences: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateRecipesResponse {
    pub recipes: Vec<Recipe>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::ItemSource;

    #[test]
    fn scan_response_parses_backend_json() {
        let json = r#"{
            "session_id": "3f2c",
            "identified_items": [
                {"name": "Rice", "confidence": 0.92, "source": "ASUCD Pantry"},
                {"name": "Peanut Butter", "confidence": 0.81, "source": "Personal"}
            ],
            "suggested_filters": ["High Protein", "Quick (<15 min)"]
        }"#;

        let response: ScanResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.session_id.as_str(), "3f2c");
        assert_eq!(response.identified_items.len(), 2);
        assert_eq!(response.identified_items[0].source, ItemSource::PantryStock);
        assert_eq!(response.suggested_filters[1], "Quick (<15 min)");
    }

    #[test]
    fn generate_request_serializes_snake_case() {
        let request = GenerateRecipesRequest {
            session_id: SessionId::from("3f2c"),
            identified_items: vec!["Rice".to_string()],
            filters: vec!["Quick (<15 min)".to_string()],
            dietary_preferences: vec!["Vegan".to_string()],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["session_id"], "3f2c");
        assert_eq!(value["identified_items"][0], "Rice");
        assert_eq!(value["dietary_preferences"][0], "Vegan");
    }

    #[test]
    fn generate_request_filters_default_to_empty() {
        let json = r#"{"session_id": "s", "identified_items": ["Rice"]}"#;
        let request: GenerateRecipesRequest = serde_json::from_str(json).unwrap();
        assert!(request.filters.is_empty());
        assert!(request.dietary_preferences.is_empty());
    }

    #[test]
    fn generation_mode_labels() {
        assert_eq!(GenerationMode::Database.as_str(), "database");
        assert_eq!(GenerationMode::Ai.as_str(), "ai");
        assert_eq!(serde_json::to_string(&GenerationMode::Ai).unwrap(), "\"ai\"");
    }

    #[test]
    fn health_response_parses_connectivity() {
        let json = r#"{
            "status": "ok",
            "connectivity": "unreachable",
            "vision_model": "llava",
            "text_model": "llama3"
        }"#;
        let health: HealthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(health.connectivity, ServiceConnectivity::Unreachable);
    }
}
