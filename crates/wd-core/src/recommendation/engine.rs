use serde::Serialize;

use super::OutfitRequest;
use crate::ids::ItemId;
use crate::ports::RandomSourcePort;
use crate::wardrobe::{ClothingCategory, ClothingItem};

/// A favorite is preferred when the draw exceeds this (≈70% of the time).
pub const FAVORITE_THRESHOLD: f64 = 0.3;
/// A dress replaces top + bottom when the draw exceeds this (≈40%).
pub const DRESS_THRESHOLD: f64 = 0.6;
/// Outside dressy occasions an accessory is added when the draw exceeds this (≈70%).
pub const ACCESSORY_THRESHOLD: f64 = 0.3;

/// Position a garment fills in a suggested outfit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Top,
    Bottom,
    Dress,
    Outerwear,
    Shoes,
    Accessory,
}

impl Slot {
    fn category(self) -> ClothingCategory {
        match self {
            Slot::Top => ClothingCategory::Tops,
            Slot::Bottom => ClothingCategory::Bottoms,
            Slot::Dress => ClothingCategory::Dresses,
            Slot::Outerwear => ClothingCategory::Outerwear,
            Slot::Shoes => ClothingCategory::Shoes,
            Slot::Accessory => ClothingCategory::Accessories,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotPick {
    pub slot: Slot,
    pub item_id: ItemId,
}

/// Ordered picks: top or dress, bottom, outerwear, shoes, accessory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub picks: Vec<SlotPick>,
}

impl Recommendation {
    pub fn item_ids(&self) -> Vec<ItemId> {
        self.picks.iter().map(|p| p.item_id.clone()).collect()
    }

    pub fn slot(&self, slot: Slot) -> Option<&ItemId> {
        self.picks
            .iter()
            .find(|p| p.slot == slot)
            .map(|p| &p.item_id)
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    fn push(&mut self, slot: Slot, item: &ClothingItem) {
        self.picks.push(SlotPick {
            slot,
            item_id: item.id.clone(),
        });
    }
}

/// Items that pass every hard filter in the request, in pool order.
fn filter_pool<'a>(request: &OutfitRequest, items: &'a [ClothingItem]) -> Vec<&'a ClothingItem> {
    items
        .iter()
        .filter(|item| request.occasion.map_or(true, |o| item.has_occasion(o)))
        .filter(|item| request.season.map_or(true, |s| item.fits_season(s)))
        .filter(|item| request.colors.is_empty() || item.has_any_color(&request.colors))
        .filter(|item| !request.exclude_items.contains(&item.id))
        .collect()
}

fn candidates<'a>(pool: &[&'a ClothingItem], slot: Slot) -> Vec<&'a ClothingItem> {
    let category = slot.category();
    pool.iter()
        .copied()
        .filter(|item| item.category == category)
        .collect()
}

/// Uniform pick, biased toward favorites when the slot has any.
fn pick<'a>(
    candidates: &[&'a ClothingItem],
    rng: &mut dyn RandomSourcePort,
) -> Option<&'a ClothingItem> {
    if candidates.is_empty() {
        return None;
    }

    let favorites: Vec<&ClothingItem> = candidates.iter().copied().filter(|i| i.favorite).collect();
    let from = if !favorites.is_empty() && rng.next_unit() > FAVORITE_THRESHOLD {
        favorites.as_slice()
    } else {
        candidates
    };

    Some(from[rng.pick_index(from.len())])
}

/// Suggests one outfit from `items`.
///
/// Never fails: an empty or over-constrained pool yields an empty or partial
/// recommendation. Callers decide what counts as usable.
pub fn recommend(
    request: &OutfitRequest,
    items: &[ClothingItem],
    rng: &mut dyn RandomSourcePort,
) -> Recommendation {
    let pool = filter_pool(request, items);
    let mut outfit = Recommendation::default();

    if let Some(top) = pick(&candidates(&pool, Slot::Top), rng) {
        outfit.push(Slot::Top, top);
    }

    let dresses = candidates(&pool, Slot::Dress);
    let bottoms = candidates(&pool, Slot::Bottom);
    let take_dress = !dresses.is_empty()
        && (request.prefers_dresses() || rng.next_unit() > DRESS_THRESHOLD);

    if take_dress {
        // A dress stands in for the top as well as the bottom.
        outfit.picks.retain(|p| p.slot != Slot::Top);
        if let Some(dress) = pick(&dresses, rng) {
            outfit.push(Slot::Dress, dress);
        }
    } else if let Some(bottom) = pick(&bottoms, rng) {
        outfit.push(Slot::Bottom, bottom);
    }

    if request.wants_outerwear() {
        if let Some(layer) = pick(&candidates(&pool, Slot::Outerwear), rng) {
            outfit.push(Slot::Outerwear, layer);
        }
    }

    if let Some(shoes) = pick(&candidates(&pool, Slot::Shoes), rng) {
        outfit.push(Slot::Shoes, shoes);
    }

    let accessories = candidates(&pool, Slot::Accessory);
    let take_accessory = !accessories.is_empty()
        && (request.occasion.is_some_and(|o| o.is_dressy())
            || rng.next_unit() > ACCESSORY_THRESHOLD);
    if take_accessory {
        if let Some(accessory) = pick(&accessories, rng) {
            outfit.push(Slot::Accessory, accessory);
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        pool = pool.len(),
        picked = outfit.len(),
        "outfit recommendation computed"
    );

    outfit
}
