// Transport configuration for building reqwest::Client instances.
//
// The gateway speaks plain HTTP on the local network, so this is only
// about timeouts and the user agent -- no TLS or cookie concerns.

use std::time::Duration;

/// Transport configuration for building the gateway HTTP client.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, crate::error::Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent("fanctl/0.1.0")
            .build()
            .map_err(crate::error::Error::Transport)
    }
}
