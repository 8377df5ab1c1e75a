//! Relay configuration.

use serde::{Deserialize, Serialize};

/// Destination used when the configuration does not name one.
pub const DEFAULT_DESTINATION: &str = "udp://127.0.0.1:7767";

/// Configuration for the status relay.
///
/// Hosts typically hand over a JSON section; missing fields take their
/// defaults so a minimal `{}` section enables reporting to localhost.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Destination URI for status datagrams (`udp://host[:port]`).
    #[serde(default = "default_destination")]
    pub destination: String,
    /// Whether unit activity reporting is enabled.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl Default for RelayConfig {
    fn default() -> Self {
        RelayConfig {
            destination: DEFAULT_DESTINATION.to_string(),
            enabled: true,
        }
    }
}

impl RelayConfig {
    /// Parse a configuration from a JSON document.
    pub fn from_json(json: &str) -> Result<RelayConfig, serde_json::Error> {
        serde_json::from_str(json)
    }
}

fn default_destination() -> String {
    DEFAULT_DESTINATION.to_string()
}

fn default_enabled() -> bool {
    true
}
