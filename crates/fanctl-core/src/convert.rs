// ── Wire -> domain conversion ──
//
// The only place numeric gateway codes are interpreted. An out-of-range
// code is a hard error: the directory loader is all-or-nothing, and a
// fan whose state can't be decoded must never reach a menu.

use fanctl_api::{FanInfoData, FanStatusData};

use crate::error::CoreError;
use crate::model::{Fan, FanId, Power, SpeedCount, SpeedTier};

/// Assemble a canonical [`Fan`] from one info + one status payload.
pub fn fan_from_wire(
    uid: String,
    info: FanInfoData,
    status: FanStatusData,
) -> Result<Fan, CoreError> {
    let power = Power::from_code(info.status).ok_or_else(|| {
        CoreError::Internal(format!(
            "fan {uid}: unknown power code {}",
            info.status
        ))
    })?;

    let speed = SpeedTier::from_level(status.speed).ok_or_else(|| {
        CoreError::Internal(format!(
            "fan {uid}: unknown speed level {}",
            status.speed
        ))
    })?;

    let speeds = SpeedCount::from_family_code(status.sequence).ok_or_else(|| {
        CoreError::Internal(format!(
            "fan {uid}: unknown speed family code {}",
            status.sequence
        ))
    })?;

    Ok(Fan {
        id: FanId::new(uid),
        name: info.name,
        power,
        speed,
        speeds,
    })
}
