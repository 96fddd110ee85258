use std::cmp::Reverse;
use std::fmt::Display;

use chrono::NaiveDate;

use super::{
    ClothingCategory, ClothingItem, ClothingItemDraft, ClothingItemPatch, Outfit, OutfitDraft,
    OutfitPatch, PlannedOutfit, PlannedOutfitDraft, PlannedOutfitPatch, ValidationError,
    WardrobeSnapshot, WardrobeStats,
};
use crate::ids::{ItemId, OutfitId, PlanId};

/// In-memory owner of every garment, outfit, calendar entry and outfit photo.
///
/// Unknown ids are never an error: updates and removals report whether they
/// matched anything, lookups return `None` or an empty list.
///
/// Removing a garment leaves outfits that reference it untouched, and removing
/// an outfit leaves its calendar entries in place. Read-side lookups skip
/// whatever no longer resolves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wardrobe {
    clothing_items: Vec<ClothingItem>,
    outfits: Vec<Outfit>,
    planned_outfits: Vec<PlannedOutfit>,
    outfit_photos: Vec<String>,
}

fn not_found(kind: &str, id: &dyn Display, op: &str) {
    #[cfg(feature = "tracing")]
    tracing::debug!(kind, id = %id, op, "wardrobe write skipped: id not found");
    #[cfg(not(feature = "tracing"))]
    let _ = (kind, id, op);
}

impl Wardrobe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: WardrobeSnapshot) -> Self {
        Self {
            clothing_items: snapshot.clothing_items,
            outfits: snapshot.outfits,
            planned_outfits: snapshot.planned_outfits,
            outfit_photos: snapshot.outfit_photos,
        }
    }

    pub fn snapshot(&self) -> WardrobeSnapshot {
        WardrobeSnapshot {
            clothing_items: self.clothing_items.clone(),
            outfits: self.outfits.clone(),
            planned_outfits: self.planned_outfits.clone(),
            outfit_photos: self.outfit_photos.clone(),
            ..WardrobeSnapshot::default()
        }
    }

    // ----- clothing items -------------------------------------------------

    pub fn clothing_items(&self) -> &[ClothingItem] {
        &self.clothing_items
    }

    pub fn add_clothing_item(
        &mut self,
        draft: ClothingItemDraft,
    ) -> Result<ClothingItem, ValidationError> {
        let item = draft.into_item()?;
        self.clothing_items.push(item.clone());
        Ok(item)
    }

    /// Returns `Ok(false)` when no item has this id.
    pub fn update_clothing_item(
        &mut self,
        id: &ItemId,
        patch: ClothingItemPatch,
    ) -> Result<bool, ValidationError> {
        patch.validate()?;
        match self.item_mut(id) {
            Some(item) => {
                patch.apply(item);
                Ok(true)
            }
            None => {
                not_found("clothing_item", id, "update");
                Ok(false)
            }
        }
    }

    /// Outfits referencing the item keep the dangling id.
    pub fn remove_clothing_item(&mut self, id: &ItemId) -> Option<ClothingItem> {
        let index = self.clothing_items.iter().position(|i| &i.id == id);
        match index {
            Some(index) => Some(self.clothing_items.remove(index)),
            None => {
                not_found("clothing_item", id, "remove");
                None
            }
        }
    }

    /// Returns the new favorite flag.
    pub fn toggle_favorite_item(&mut self, id: &ItemId) -> Option<bool> {
        let Some(item) = self.item_mut(id) else {
            not_found("clothing_item", id, "toggle_favorite");
            return None;
        };
        item.favorite = !item.favorite;
        Some(item.favorite)
    }

    /// Returns the new wear count.
    pub fn increment_item_worn(&mut self, id: &ItemId, on: NaiveDate) -> Option<u32> {
        let Some(item) = self.item_mut(id) else {
            not_found("clothing_item", id, "increment_worn");
            return None;
        };
        item.record_wear(on);
        Some(item.times_worn)
    }

    pub fn item(&self, id: &ItemId) -> Option<&ClothingItem> {
        self.clothing_items.iter().find(|i| &i.id == id)
    }

    fn item_mut(&mut self, id: &ItemId) -> Option<&mut ClothingItem> {
        self.clothing_items.iter_mut().find(|i| &i.id == id)
    }

    /// `None` returns every item.
    pub fn items_in_category(&self, category: Option<ClothingCategory>) -> Vec<&ClothingItem> {
        self.clothing_items
            .iter()
            .filter(|i| category.map_or(true, |c| i.category == c))
            .collect()
    }

    pub fn favorite_items(&self) -> Vec<&ClothingItem> {
        self.clothing_items.iter().filter(|i| i.favorite).collect()
    }

    // ----- outfits --------------------------------------------------------

    pub fn outfits(&self) -> &[Outfit] {
        &self.outfits
    }

    pub fn add_outfit(&mut self, draft: OutfitDraft) -> Result<Outfit, ValidationError> {
        let outfit = draft.into_outfit()?;
        self.outfits.push(outfit.clone());
        Ok(outfit)
    }

    pub fn update_outfit(
        &mut self,
        id: &OutfitId,
        patch: OutfitPatch,
    ) -> Result<bool, ValidationError> {
        patch.validate()?;
        match self.outfit_mut(id) {
            Some(outfit) => {
                patch.apply(outfit);
                Ok(true)
            }
            None => {
                not_found("outfit", id, "update");
                Ok(false)
            }
        }
    }

    /// Calendar entries pointing at the outfit are left in place.
    pub fn remove_outfit(&mut self, id: &OutfitId) -> Option<Outfit> {
        let index = self.outfits.iter().position(|o| &o.id == id);
        match index {
            Some(index) => Some(self.outfits.remove(index)),
            None => {
                not_found("outfit", id, "remove");
                None
            }
        }
    }

    pub fn toggle_favorite_outfit(&mut self, id: &OutfitId) -> Option<bool> {
        let Some(outfit) = self.outfit_mut(id) else {
            not_found("outfit", id, "toggle_favorite");
            return None;
        };
        outfit.favorite = !outfit.favorite;
        Some(outfit.favorite)
    }

    /// Records one wear of the outfit and of every garment it lists, all on
    /// the same date. A garment listed twice is counted twice; ids that no
    /// longer resolve are skipped.
    ///
    /// Returns the outfit's new wear count, or `None` (and touches nothing)
    /// when the outfit does not exist.
    pub fn increment_outfit_worn(&mut self, id: &OutfitId, on: NaiveDate) -> Option<u32> {
        let Some(outfit) = self.outfit_mut(id) else {
            not_found("outfit", id, "increment_worn");
            return None;
        };
        outfit.record_wear(on);
        let times_worn = outfit.times_worn;
        let item_ids = outfit.items.clone();

        for item_id in &item_ids {
            self.increment_item_worn(item_id, on);
        }

        Some(times_worn)
    }

    pub fn outfit(&self, id: &OutfitId) -> Option<&Outfit> {
        self.outfits.iter().find(|o| &o.id == id)
    }

    fn outfit_mut(&mut self, id: &OutfitId) -> Option<&mut Outfit> {
        self.outfits.iter_mut().find(|o| &o.id == id)
    }

    /// Resolves the outfit's garments in outfit order, dropping ids that no
    /// longer exist. Unknown outfit yields an empty list.
    pub fn outfit_items(&self, outfit_id: &OutfitId) -> Vec<&ClothingItem> {
        self.outfit(outfit_id)
            .map(|outfit| outfit.items.iter().filter_map(|id| self.item(id)).collect())
            .unwrap_or_default()
    }

    /// Most recently worn first; never-worn outfits go last.
    pub fn recent_outfits(&self, limit: usize) -> Vec<&Outfit> {
        let mut outfits: Vec<&Outfit> = self.outfits.iter().collect();
        outfits.sort_by_key(|o| Reverse(o.last_worn));
        outfits.truncate(limit);
        outfits
    }

    // ----- outfit photos --------------------------------------------------

    pub fn outfit_photos(&self) -> &[String] {
        &self.outfit_photos
    }

    pub fn add_outfit_photo(&mut self, uri: impl Into<String>) {
        self.outfit_photos.push(uri.into());
    }

    /// Removes every entry equal to `uri`; returns how many were removed.
    pub fn remove_outfit_photo(&mut self, uri: &str) -> usize {
        let before = self.outfit_photos.len();
        self.outfit_photos.retain(|p| p != uri);
        before - self.outfit_photos.len()
    }

    pub fn latest_outfit_photo(&self) -> Option<&str> {
        self.outfit_photos.last().map(String::as_str)
    }

    // ----- planned outfits ------------------------------------------------

    pub fn planned_outfits(&self) -> &[PlannedOutfit] {
        &self.planned_outfits
    }

    pub fn plan_outfit(&mut self, draft: PlannedOutfitDraft) -> PlannedOutfit {
        let plan = draft.into_plan();
        self.planned_outfits.push(plan.clone());
        plan
    }

    pub fn update_planned_outfit(&mut self, id: &PlanId, patch: PlannedOutfitPatch) -> bool {
        match self.planned_outfits.iter_mut().find(|p| &p.id == id) {
            Some(plan) => {
                patch.apply(plan);
                true
            }
            None => {
                not_found("planned_outfit", id, "update");
                false
            }
        }
    }

    pub fn remove_planned_outfit(&mut self, id: &PlanId) -> Option<PlannedOutfit> {
        let index = self.planned_outfits.iter().position(|p| &p.id == id);
        match index {
            Some(index) => Some(self.planned_outfits.remove(index)),
            None => {
                not_found("planned_outfit", id, "remove");
                None
            }
        }
    }

    pub fn planned_outfits_on(&self, date: NaiveDate) -> Vec<&PlannedOutfit> {
        self.planned_outfits
            .iter()
            .filter(|p| p.date == date)
            .collect()
    }

    /// Calendar entries for `date` joined with their outfit; entries whose
    /// outfit is gone are dropped.
    pub fn agenda_for(&self, date: NaiveDate) -> Vec<(&PlannedOutfit, &Outfit)> {
        self.planned_outfits_on(date)
            .into_iter()
            .filter_map(|plan| self.outfit(&plan.outfit_id).map(|outfit| (plan, outfit)))
            .collect()
    }

    // ----- aggregates -----------------------------------------------------

    pub fn stats(&self) -> WardrobeStats {
        let mut stats = WardrobeStats {
            total_items: self.clothing_items.len(),
            total_outfits: self.outfits.len(),
            ..WardrobeStats::default()
        };

        for item in &self.clothing_items {
            stats.total_wears += u64::from(item.times_worn);
            if item.favorite {
                stats.favorite_items += 1;
            }
            *stats.items_per_category.entry(item.category).or_default() += 1;
        }

        stats
    }
}
