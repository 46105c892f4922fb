// ── Controller configuration ──

use std::time::Duration;

use url::Url;

use crate::error::CoreError;

/// Connection parameters for the fan controller gateway.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Gateway address: a bare host/IP (`192.168.1.50`) or a full URL.
    pub address: String,

    /// Per-request timeout.
    pub timeout: Duration,
}

impl ControllerConfig {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resolve the configured address to a base URL.
    ///
    /// A bare host or IP gets an `http://` scheme; anything already
    /// carrying a scheme is parsed as-is.
    pub fn base_url(&self) -> Result<Url, CoreError> {
        let raw = if self.address.contains("://") {
            self.address.clone()
        } else {
            format!("http://{}", self.address)
        };

        Url::parse(&raw).map_err(|e| CoreError::Config {
            message: format!("invalid controller address '{}': {e}", self.address),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn bare_host_gets_http_scheme() {
        let config = ControllerConfig::new("192.168.1.50");
        assert_eq!(config.base_url().unwrap().as_str(), "http://192.168.1.50/");
    }

    #[test]
    fn explicit_scheme_is_preserved() {
        let config = ControllerConfig::new("https://fans.local:8443");
        let url = config.base_url().unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.port(), Some(8443));
    }

    #[test]
    fn garbage_address_is_config_error() {
        let config = ControllerConfig::new("http://[not a host");
        assert!(matches!(
            config.base_url(),
            Err(CoreError::Config { .. })
        ));
    }
}
