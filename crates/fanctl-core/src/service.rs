// ── FanService ──
//
// The seam between the console's session loop and the controller.
// Everything the menus can cause to happen goes through this trait,
// which keeps the session testable against a scripted double.

use async_trait::async_trait;

use crate::directory::Directory;
use crate::error::CoreError;
use crate::model::{FanId, SpeedCount, SpeedTier};

/// Async boundary to the fan controller: one directory load plus the
/// five mutating operations a menu can dispatch.
#[async_trait]
pub trait FanService: Send + Sync {
    /// Fetch a fresh, complete directory snapshot.
    async fn load_directory(&self) -> Result<Directory, CoreError>;

    async fn turn_on(&self, id: &FanId) -> Result<(), CoreError>;

    async fn turn_off(&self, id: &FanId) -> Result<(), CoreError>;

    async fn set_current_speed(&self, id: &FanId, tier: SpeedTier) -> Result<(), CoreError>;

    async fn update_name(&self, id: &FanId, name: &str) -> Result<(), CoreError>;

    async fn update_speed_count(&self, id: &FanId, count: SpeedCount) -> Result<(), CoreError>;
}
