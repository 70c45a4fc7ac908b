// Telemetry sinks for toolbar usage events
use shared::telemetry::TelemetryEvent;

use crate::config::TelemetrySettings;

pub trait TelemetrySink {
    fn record(&mut self, event: &TelemetryEvent);
}

/// Logs each event as a structured `tracing` event under the `telemetry` target.
#[derive(Debug, Clone, Default)]
pub struct TracingTelemetry {
    disabled: bool,
}

impl TracingTelemetry {
    pub fn new(settings: &TelemetrySettings) -> Self {
        Self { disabled: !settings.enabled }
    }
}

impl TelemetrySink for TracingTelemetry {
    fn record(&mut self, event: &TelemetryEvent) {
        if self.disabled {
            return;
        }
        let attributes = event.attributes_json().unwrap_or_default();
        tracing::info!(
            target: "telemetry",
            event_name = %event.name,
            interactive_consent = event.interactive_consent,
            timestamp = %event.timestamp,
            attributes = %attributes,
            "toolbar event"
        );
    }
}

/// Keeps events in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingTelemetry {
    pub events: Vec<TelemetryEvent>,
}

impl RecordingTelemetry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn names(&self) -> Vec<&str> {
        self.events.iter().map(|e| e.name.as_str()).collect()
    }
}

impl TelemetrySink for RecordingTelemetry {
    fn record(&mut self, event: &TelemetryEvent) {
        self.events.push(event.clone());
    }
}
