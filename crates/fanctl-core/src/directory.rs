// ── Fan directory ──
//
// A snapshot of every fan the controller knows about, keyed by id and
// iterated in discovery order. Rebuilt fresh on every main-menu entry;
// never cached or mutated in place.

use indexmap::IndexMap;
use tracing::debug;

use fanctl_api::GatewayClient;

use crate::convert;
use crate::error::CoreError;
use crate::model::{Fan, FanId};

/// One consistent snapshot of the fan fleet.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    fans: IndexMap<FanId, Fan>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a complete directory from the gateway.
    ///
    /// One discovery call, then an info + status fetch per fan, strictly
    /// in sequence -- at most one request is outstanding at any time.
    /// Any single failure aborts the whole load; a partial directory is
    /// never returned.
    pub async fn load(client: &GatewayClient) -> Result<Self, CoreError> {
        let uids = client.list_fans().await?;
        debug!(fans = uids.len(), "discovered fans, gathering state");

        let mut directory = Self::new();
        for record in uids {
            let info = client.get_info(&record.uid).await?;
            let status = client.get_status(&record.uid).await?;
            directory.insert(convert::fan_from_wire(record.uid, info, status)?);
        }

        debug!(fans = directory.len(), "directory load complete");
        Ok(directory)
    }

    /// Insert a fan, replacing any existing entry with the same id.
    pub fn insert(&mut self, fan: Fan) {
        self.fans.insert(fan.id.clone(), fan);
    }

    pub fn get(&self, id: &FanId) -> Option<&Fan> {
        self.fans.get(id)
    }

    /// Fans in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &Fan> {
        self.fans.values()
    }

    pub fn len(&self) -> usize {
        self.fans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fans.is_empty()
    }
}

impl FromIterator<Fan> for Directory {
    fn from_iter<I: IntoIterator<Item = Fan>>(iter: I) -> Self {
        let mut directory = Self::new();
        for fan in iter {
            directory.insert(fan);
        }
        directory
    }
}
