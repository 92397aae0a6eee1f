//! Configuration loader for askdoc.
//!
//! Reads `askdoc.toml` and deserializes it into [`AppConfig`]. Falls back
//! to defaults when the file is missing or malformed.

use std::path::Path;

use askdoc_types::config::AppConfig;

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "askdoc.toml";

/// Load configuration from `path`.
///
/// - If the file does not exist, returns [`AppConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
///
/// `agent.max_iterations` is raised to 1 so a turn always reaches the model.
pub async fn load_config(path: &Path) -> AppConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return AppConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return AppConfig::default();
        }
    };

    match toml::from_str::<AppConfig>(&content) {
        Ok(mut config) => {
            if config.agent.max_iterations == 0 {
                tracing::warn!("agent.max_iterations is 0 in {}, using 1", path.display());
                config.agent.max_iterations = 1;
            }
            config
        }
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            AppConfig::default()
        }
    }
}
