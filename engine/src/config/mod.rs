// Toolbar configuration: theme capabilities plus telemetry settings.
pub mod settings;

use std::path::Path;

use serde::Deserialize;
use shared::models::ToolbarCapabilities;

use crate::error::ToolbarError;
pub use settings::TelemetrySettings;

const DEFAULT_CONFIG: &str = include_str!("../../assets/config/default.json");

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ToolbarConfig {
    pub version: String,
    #[serde(default)]
    pub capabilities: ToolbarCapabilities,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

impl ToolbarConfig {
    /// The configuration embedded in the binary.
    pub fn load_default() -> Result<Self, ToolbarError> {
        Self::from_json_str(DEFAULT_CONFIG)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ToolbarError> {
        let path = path.as_ref();
        tracing::debug!("Loading toolbar configuration from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(contents: &str) -> Result<Self, ToolbarError> {
        let config: ToolbarConfig = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ToolbarError> {
        if self.version.trim().is_empty() {
            return Err(ToolbarError::ConfigError("version must not be empty".to_string()));
        }
        if self.capabilities.download.any() && self.capabilities.download_icon.trim().is_empty() {
            return Err(ToolbarError::ConfigError(
                "download_icon must be set when a download target is enabled".to_string(),
            ));
        }
        Ok(())
    }
}
