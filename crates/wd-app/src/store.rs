//! Persisting facade over the in-memory [`Wardrobe`].
//! 持久化的衣橱门面：每次变更后写入快照。

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, warn};
use wd_core::ports::{ClockPort, WardrobeSnapshotPort};
use wd_core::wardrobe::{
    ClothingItem, ClothingItemDraft, ClothingItemPatch, Outfit, OutfitDraft, OutfitPatch,
    PlannedOutfit, PlannedOutfitDraft, PlannedOutfitPatch, ValidationError, Wardrobe,
};
use wd_core::{ItemId, OutfitId, PlanId};

/// Owns the live wardrobe and writes a snapshot after every mutation that
/// changed something.
///
/// Saving is best effort: a failed write is logged and the in-memory state
/// stays authoritative until the next successful save.
pub struct WardrobeStore {
    wardrobe: Wardrobe,
    snapshots: Arc<dyn WardrobeSnapshotPort>,
    clock: Arc<dyn ClockPort>,
}

impl WardrobeStore {
    pub fn new(
        wardrobe: Wardrobe,
        snapshots: Arc<dyn WardrobeSnapshotPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            wardrobe,
            snapshots,
            clock,
        }
    }

    /// Read access to every collection and derived lookup.
    pub fn wardrobe(&self) -> &Wardrobe {
        &self.wardrobe
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub(crate) async fn persist(&self) {
        match self.snapshots.save(&self.wardrobe.snapshot()).await {
            Ok(()) => debug!("wardrobe snapshot saved"),
            Err(err) => warn!(error = %format!("{err:#}"), "failed to save wardrobe snapshot"),
        }
    }

    async fn persist_if(&self, changed: bool) {
        if changed {
            self.persist().await;
        }
    }

    // ----- clothing items -------------------------------------------------

    pub async fn add_clothing_item(
        &mut self,
        draft: ClothingItemDraft,
    ) -> Result<ClothingItem, ValidationError> {
        let item = self.wardrobe.add_clothing_item(draft)?;
        self.persist().await;
        Ok(item)
    }

    pub async fn update_clothing_item(
        &mut self,
        id: &ItemId,
        patch: ClothingItemPatch,
    ) -> Result<bool, ValidationError> {
        let updated = self.wardrobe.update_clothing_item(id, patch)?;
        self.persist_if(updated).await;
        Ok(updated)
    }

    pub async fn remove_clothing_item(&mut self, id: &ItemId) -> Option<ClothingItem> {
        let removed = self.wardrobe.remove_clothing_item(id);
        self.persist_if(removed.is_some()).await;
        removed
    }

    pub async fn toggle_favorite_item(&mut self, id: &ItemId) -> Option<bool> {
        let favorite = self.wardrobe.toggle_favorite_item(id);
        self.persist_if(favorite.is_some()).await;
        favorite
    }

    /// Records a wear dated today.
    pub async fn increment_item_worn(&mut self, id: &ItemId) -> Option<u32> {
        let today = self.clock.today();
        let worn = self.wardrobe.increment_item_worn(id, today);
        self.persist_if(worn.is_some()).await;
        worn
    }

    // ----- outfits ----------------------------------------------------------

    pub async fn add_outfit(&mut self, draft: OutfitDraft) -> Result<Outfit, ValidationError> {
        let outfit = self.wardrobe.add_outfit(draft)?;
        self.persist().await;
        Ok(outfit)
    }

    pub async fn update_outfit(
        &mut self,
        id: &OutfitId,
        patch: OutfitPatch,
    ) -> Result<bool, ValidationError> {
        let updated = self.wardrobe.update_outfit(id, patch)?;
        self.persist_if(updated).await;
        Ok(updated)
    }

    pub async fn remove_outfit(&mut self, id: &OutfitId) -> Option<Outfit> {
        let removed = self.wardrobe.remove_outfit(id);
        self.persist_if(removed.is_some()).await;
        removed
    }

    pub async fn toggle_favorite_outfit(&mut self, id: &OutfitId) -> Option<bool> {
        let favorite = self.wardrobe.toggle_favorite_outfit(id);
        self.persist_if(favorite.is_some()).await;
        favorite
    }

    /// Records a wear of the outfit and its garments dated today.
    pub async fn increment_outfit_worn(&mut self, id: &OutfitId) -> Option<u32> {
        let today = self.clock.today();
        let worn = self.wardrobe.increment_outfit_worn(id, today);
        self.persist_if(worn.is_some()).await;
        worn
    }

    // ----- outfit photos ------------------------------------------------------

    pub async fn add_outfit_photo(&mut self, uri: impl Into<String>) {
        self.wardrobe.add_outfit_photo(uri);
        self.persist().await;
    }

    pub async fn remove_outfit_photo(&mut self, uri: &str) -> usize {
        let removed = self.wardrobe.remove_outfit_photo(uri);
        self.persist_if(removed > 0).await;
        removed
    }

    // ----- calendar -----------------------------------------------------------

    pub async fn plan_outfit(&mut self, draft: PlannedOutfitDraft) -> PlannedOutfit {
        let plan = self.wardrobe.plan_outfit(draft);
        self.persist().await;
        plan
    }

    pub async fn update_planned_outfit(&mut self, id: &PlanId, patch: PlannedOutfitPatch) -> bool {
        let updated = self.wardrobe.update_planned_outfit(id, patch);
        self.persist_if(updated).await;
        updated
    }

    pub async fn remove_planned_outfit(&mut self, id: &PlanId) -> Option<PlannedOutfit> {
        let removed = self.wardrobe.remove_planned_outfit(id);
        self.persist_if(removed.is_some()).await;
        removed
    }
}
