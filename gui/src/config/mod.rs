// GUI configuration module
pub mod theme;

use anyhow::Context;
use toolbar_engine::config::ToolbarConfig;

/// Environment variable naming a user configuration file.
pub const CONFIG_ENV: &str = "TOOLBAR_CONFIG";

/// Loads the user configuration when `TOOLBAR_CONFIG` is set, the embedded
/// default otherwise.
pub fn load_toolbar_config() -> anyhow::Result<ToolbarConfig> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => ToolbarConfig::load_from_path(&path)
            .with_context(|| format!("loading toolbar configuration from {:?}", path)),
        None => ToolbarConfig::load_default().context("loading embedded toolbar configuration"),
    }
}
