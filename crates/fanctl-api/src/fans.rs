// Fan endpoints
//
// Discovery and per-fan reads via /api/fans, control commands via the
// cmd/fanmgr endpoint. One method per gateway operation.

use serde_json::json;
use tracing::debug;

use crate::client::GatewayClient;
use crate::error::Error;
use crate::models::{FanInfoData, FanStatusData, FanUid};

impl GatewayClient {
    /// List the identifiers of every fan the controller knows about.
    ///
    /// `GET /api/fans`
    pub async fn list_fans(&self) -> Result<Vec<FanUid>, Error> {
        let url = self.api_url("fans")?;
        debug!("listing fans");
        self.get(url).await
    }

    /// Fetch name and power state for one fan.
    ///
    /// `GET /api/fans/{uid}/info`
    pub async fn get_info(&self, uid: &str) -> Result<FanInfoData, Error> {
        let url = self.fan_url(uid, "info")?;
        let mut data: Vec<FanInfoData> = self.get(url).await?;
        single(data.pop(), uid, "info")
    }

    /// Fetch current speed tier and speed-family code for one fan.
    ///
    /// `GET /api/fans/{uid}/status`
    pub async fn get_status(&self, uid: &str) -> Result<FanStatusData, Error> {
        let url = self.fan_url(uid, "status")?;
        let mut data: Vec<FanStatusData> = self.get(url).await?;
        single(data.pop(), uid, "status")
    }

    /// Power a fan on.
    ///
    /// `POST /api/cmd/fanmgr` with `{"cmd": "turn-on", "uid": "..."}`
    pub async fn turn_on(&self, uid: &str) -> Result<(), Error> {
        debug!(uid, "turning fan on");
        self.fanmgr(&json!({ "cmd": "turn-on", "uid": uid })).await
    }

    /// Power a fan off.
    ///
    /// `POST /api/cmd/fanmgr` with `{"cmd": "turn-off", "uid": "..."}`
    pub async fn turn_off(&self, uid: &str) -> Result<(), Error> {
        debug!(uid, "turning fan off");
        self.fanmgr(&json!({ "cmd": "turn-off", "uid": uid })).await
    }

    /// Set the current speed tier (`3` high, `2` medium, `1` low).
    ///
    /// `POST /api/cmd/fanmgr` with `{"cmd": "set-speed", "uid": ..., "speed": n}`
    pub async fn set_current_speed(&self, uid: &str, speed: u8) -> Result<(), Error> {
        debug!(uid, speed, "setting fan speed");
        self.fanmgr(&json!({ "cmd": "set-speed", "uid": uid, "speed": speed }))
            .await
    }

    /// Rename a fan.
    ///
    /// `POST /api/cmd/fanmgr` with `{"cmd": "set-name", "uid": ..., "name": "..."}`
    pub async fn update_name(&self, uid: &str, name: &str) -> Result<(), Error> {
        debug!(uid, name, "renaming fan");
        self.fanmgr(&json!({ "cmd": "set-name", "uid": uid, "name": name }))
            .await
    }

    /// Change how many speed tiers the fan is configured for (1-3).
    ///
    /// `POST /api/cmd/fanmgr` with `{"cmd": "set-speed-count", "uid": ..., "count": n}`
    pub async fn update_speed_count(&self, uid: &str, count: u8) -> Result<(), Error> {
        debug!(uid, count, "updating fan speed count");
        self.fanmgr(&json!({ "cmd": "set-speed-count", "uid": uid, "count": count }))
            .await
    }

    /// POST a command body to `cmd/fanmgr`, discarding the ack payload.
    async fn fanmgr(&self, body: &serde_json::Value) -> Result<(), Error> {
        let url = self.api_url("cmd/fanmgr")?;
        let _: Vec<serde_json::Value> = self.post(url, body).await?;
        Ok(())
    }
}

/// Unwrap the single record a per-fan read must return.
fn single<T>(item: Option<T>, uid: &str, what: &str) -> Result<T, Error> {
    item.ok_or_else(|| Error::Gateway {
        message: format!("empty {what} response for fan {uid}"),
    })
}
