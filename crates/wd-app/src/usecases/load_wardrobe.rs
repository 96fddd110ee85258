use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use wd_core::ports::{ClockPort, WardrobeSnapshotPort};
use wd_core::wardrobe::{sample::sample_wardrobe, Wardrobe, WardrobeSnapshot};

use crate::store::WardrobeStore;

/// Startup: restores the stored wardrobe, or creates one on a fresh install.
/// 启动时恢复衣橱；首次安装时创建（可选示例数据）。
pub struct LoadWardrobe {
    snapshots: Arc<dyn WardrobeSnapshotPort>,
    clock: Arc<dyn ClockPort>,
}

impl LoadWardrobe {
    pub fn from_ports(snapshots: Arc<dyn WardrobeSnapshotPort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { snapshots, clock }
    }

    /// # Returns
    /// - the restored store when a snapshot exists
    /// - a fresh store (sample or empty) otherwise; its first save is best-effort
    /// - `Err` when the stored snapshot cannot be read, decoded or migrated
    #[tracing::instrument(name = "usecase.load_wardrobe.execute", skip(self))]
    pub async fn execute(&self, seed_sample_data: bool) -> Result<WardrobeStore> {
        let stored = self
            .snapshots
            .load()
            .await
            .context("load wardrobe snapshot failed")?;

        match stored {
            Some(snapshot) => {
                let wardrobe = Wardrobe::from_snapshot(snapshot);
                info!(
                    items = wardrobe.clothing_items().len(),
                    outfits = wardrobe.outfits().len(),
                    "Restored wardrobe"
                );
                Ok(self.store(wardrobe))
            }
            None => {
                let snapshot = if seed_sample_data {
                    sample_wardrobe()
                } else {
                    WardrobeSnapshot::default()
                };
                info!(seed_sample_data, "No stored wardrobe, starting fresh");
                // A failed first save is retried by the next mutation.
                let store = self.store(Wardrobe::from_snapshot(snapshot));
                store.persist().await;
                Ok(store)
            }
        }
    }

    fn store(&self, wardrobe: Wardrobe) -> WardrobeStore {
        WardrobeStore::new(wardrobe, self.snapshots.clone(), self.clock.clone())
    }
}
