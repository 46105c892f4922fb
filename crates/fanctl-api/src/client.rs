// Gateway HTTP client
//
// Wraps `reqwest::Client` with gateway-specific URL construction and
// envelope unwrapping. All endpoint methods are implemented as inherent
// methods in `fans.rs` to keep this module focused on transport mechanics.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::GatewayResponse;
use crate::transport::TransportConfig;

/// Raw HTTP client for the fan controller gateway.
///
/// Handles the `{ data: [], meta: { rc, msg } }` envelope and URL
/// construction. All methods return unwrapped `data` payloads -- the
/// envelope is stripped before the caller sees it.
pub struct GatewayClient {
    http: reqwest::Client,
    base_url: Url,
}

impl GatewayClient {
    /// Create a new gateway client from a `TransportConfig`.
    ///
    /// `base_url` is the gateway root, e.g. `http://192.168.1.50`.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self { http, base_url })
    }

    /// Create a gateway client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// The gateway base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build a full URL for a gateway API path: `{base}/api/{path}`.
    pub(crate) fn api_url(&self, path: &str) -> Result<Url, Error> {
        self.base_url
            .join(&format!("api/{path}"))
            .map_err(Error::InvalidUrl)
    }

    /// Build a fan-scoped URL: `{base}/api/fans/{uid}/{path}`.
    pub(crate) fn fan_url(&self, uid: &str, path: &str) -> Result<Url, Error> {
        self.api_url(&format!("fans/{uid}/{path}"))
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and unwrap the gateway envelope.
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<Vec<T>, Error> {
        debug!("GET {}", url);

        let resp = self.http.get(url).send().await.map_err(Error::Transport)?;

        Self::parse_envelope(resp).await
    }

    /// Send a POST request with JSON body and unwrap the gateway envelope.
    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        url: Url,
        body: &impl Serialize,
    ) -> Result<Vec<T>, Error> {
        debug!("POST {}", url);

        let resp = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(Error::Transport)?;

        Self::parse_envelope(resp).await
    }

    /// Parse the `{ meta, data }` envelope, returning `data` on success
    /// or an `Error::Gateway` if `meta.rc != "ok"`.
    async fn parse_envelope<T: DeserializeOwned>(
        resp: reqwest::Response,
    ) -> Result<Vec<T>, Error> {
        let status = resp.status();
        let body = resp.text().await.map_err(Error::Transport)?;

        if !status.is_success() {
            return Err(Error::Gateway {
                message: format!("HTTP {status}: {body}"),
            });
        }

        let envelope: GatewayResponse<T> =
            serde_json::from_str(&body).map_err(|e| Error::Deserialization {
                message: e.to_string(),
                body: body.clone(),
            })?;

        if !envelope.meta.is_ok() {
            return Err(Error::Gateway {
                message: envelope
                    .meta
                    .msg
                    .unwrap_or_else(|| format!("rc = {}", envelope.meta.rc)),
            });
        }

        Ok(envelope.data)
    }
}
