// Wire types for the gateway API.
//
// These mirror the JSON the gateway emits byte-for-byte; nothing here is
// ergonomic to consume directly. fanctl-core owns the typed domain model.

use serde::{Deserialize, Serialize};

/// Response envelope wrapping every gateway payload:
/// `{ "meta": { "rc": "ok", "msg": ... }, "data": [ ... ] }`.
#[derive(Debug, Deserialize)]
pub struct GatewayResponse<T> {
    pub meta: ResponseMeta,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMeta {
    pub rc: String,
    pub msg: Option<String>,
}

impl ResponseMeta {
    pub fn is_ok(&self) -> bool {
        self.rc == "ok"
    }
}

/// Discovery record: one entry per known fan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FanUid {
    pub uid: String,
}

/// Per-fan info payload from `GET /api/fans/{uid}/info`.
///
/// `status` is the power state: `1` on, `0` off.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FanInfoData {
    pub name: String,
    pub status: u8,
}

/// Per-fan status payload from `GET /api/fans/{uid}/status`.
///
/// `speed` is the current tier (`3` high, `2` medium, `1` low).
/// `sequence` is the speed-family code (`0` -> 3 tiers, `1` -> 2, `4` -> 1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FanStatusData {
    pub speed: u8,
    pub sequence: u8,
}
