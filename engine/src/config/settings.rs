// Telemetry settings, part of the toolbar configuration file
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TelemetrySettings {
    /// When false, the tracing sink drops events instead of logging them.
    pub enabled: bool,
    /// Default filter for the subscriber when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        TelemetrySettings {
            enabled: true,
            log_level: "info".to_string(),
        }
    }
}
