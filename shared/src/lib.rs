pub mod layout;
pub mod models;
pub mod telemetry;

pub use layout::{Control, ControlKind, ControlSize, NameInput, ProjectArea, ToolbarLayout};
pub use models::{
    DownloadTargets, SimRunState, ToolbarAction, ToolbarCapabilities, ToolbarState, ViewportClass,
};
pub use telemetry::TelemetryEvent;
