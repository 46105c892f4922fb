// ── Controller facade ──
//
// Owns the gateway client and implements FanService by translating
// domain values back to wire codes. This is the production half of the
// service seam; tests substitute their own FanService.

use async_trait::async_trait;

use fanctl_api::{GatewayClient, TransportConfig};

use crate::config::ControllerConfig;
use crate::directory::Directory;
use crate::error::CoreError;
use crate::model::{FanId, SpeedCount, SpeedTier};
use crate::service::FanService;

/// Live connection to a fan controller gateway.
pub struct Controller {
    client: GatewayClient,
}

impl Controller {
    /// Build a controller from configuration. Fails only on an
    /// unusable address; no network traffic happens here.
    pub fn new(config: &ControllerConfig) -> Result<Self, CoreError> {
        let base_url = config.base_url()?;
        let transport = TransportConfig {
            timeout: config.timeout,
        };
        let client = GatewayClient::new(base_url, &transport)?;
        Ok(Self { client })
    }

    /// Access the underlying gateway client.
    pub fn client(&self) -> &GatewayClient {
        &self.client
    }
}

#[async_trait]
impl FanService for Controller {
    async fn load_directory(&self) -> Result<Directory, CoreError> {
        Directory::load(&self.client).await
    }

    async fn turn_on(&self, id: &FanId) -> Result<(), CoreError> {
        self.client.turn_on(id.as_str()).await?;
        Ok(())
    }

    async fn turn_off(&self, id: &FanId) -> Result<(), CoreError> {
        self.client.turn_off(id.as_str()).await?;
        Ok(())
    }

    async fn set_current_speed(&self, id: &FanId, tier: SpeedTier) -> Result<(), CoreError> {
        self.client
            .set_current_speed(id.as_str(), tier.level())
            .await?;
        Ok(())
    }

    async fn update_name(&self, id: &FanId, name: &str) -> Result<(), CoreError> {
        self.client.update_name(id.as_str(), name).await?;
        Ok(())
    }

    async fn update_speed_count(&self, id: &FanId, count: SpeedCount) -> Result<(), CoreError> {
        self.client
            .update_speed_count(id.as_str(), count.count())
            .await?;
        Ok(())
    }
}
