// GUI main entry point using Dioxus
#![allow(non_snake_case)] // Common for Dioxus components

use dioxus::prelude::*;
use dioxus_desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};
use tracing_subscriber::EnvFilter;

mod app;
mod components;
mod config;
mod state;

use app::App;

fn main() -> anyhow::Result<()> {
    let toolbar_config = config::load_toolbar_config()?;

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&toolbar_config.telemetry.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(
        "Starting editor toolbar shell with configuration version {}",
        toolbar_config.version
    );

    let desktop_config = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Editor Toolbar")
            .with_inner_size(LogicalSize::new(1280.0, 720.0)),
    );

    // The configuration is injected as context; components never read globals.
    LaunchBuilder::desktop()
        .with_cfg(desktop_config)
        .with_context(toolbar_config)
        .launch(App);

    tracing::info!("Editor toolbar shell finished.");
    Ok(())
}
