// Toolbar engine library root
// Layout computation, action dispatch, telemetry and configuration for the editor toolbar.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod layout;
pub mod telemetry;

pub use config::ToolbarConfig;
pub use dispatch::{DispatchOutcome, Editor, SessionController, SimulatorOptions, SuppressReason, ToolbarDispatcher};
pub use error::ToolbarError;
pub use layout::layout;
pub use layout::viewport::classify;
pub use telemetry::{RecordingTelemetry, TelemetrySink, TracingTelemetry};
