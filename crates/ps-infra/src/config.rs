//! Config file loading.

use std::path::Path;

use anyhow::Context;

use ps_core::config::AppConfig;

/// Load the application config from a TOML file.
///
/// A missing file yields the defaults; a present but malformed file is an
/// error rather than a silent fallback.
pub async fn load_config(path: impl AsRef<Path>) -> anyhow::Result<AppConfig> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading config file {}", path.display()))?;
    let config: AppConfig =
        toml::from_str(&raw).with_context(|| format!("parsing config file {}", path.display()))?;
    Ok(config)
}
