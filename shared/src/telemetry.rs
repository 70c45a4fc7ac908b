use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A structured usage event emitted before a toolbar action is forwarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryEvent {
    pub name: String,
    pub attributes: BTreeMap<String, String>,
    pub interactive_consent: bool,
    pub timestamp: DateTime<Utc>,
}

impl TelemetryEvent {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            attributes: BTreeMap::new(),
            interactive_consent: true,
            timestamp: Utc::now(),
        }
    }

    pub fn with_attribute(mut self, key: &str, value: impl Into<String>) -> Self {
        self.attributes.insert(key.to_string(), value.into());
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Attributes rendered as a compact JSON object, for log lines.
    pub fn attributes_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.attributes)
    }
}
