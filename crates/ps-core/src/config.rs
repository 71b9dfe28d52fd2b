//! Application configuration domain model

use serde::{Deserialize, Serialize};

/// Application configuration
///
/// Only the configuration the session and synchronization engine needs;
/// presentation-level settings live with the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Recipe service settings
    pub service: ServiceConfig,

    /// Profile store settings
    pub profile_store: ProfileStoreConfig,
}

/// Recipe service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the recipe service
    pub base_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

/// Profile store configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileStoreConfig {
    /// Base URL of the profile document store
    pub base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                base_url: "http://localhost:8000".to_string(),
                timeout_secs: 60,
            },
            profile_store: ProfileStoreConfig {
                base_url: "http://localhost:8800".to_string(),
            },
        }
    }
}
