use std::collections::BTreeMap;

use serde::Serialize;

use super::ClothingCategory;

/// Aggregate wardrobe usage figures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WardrobeStats {
    pub total_items: usize,
    pub total_outfits: usize,
    /// Sum of item wear counters (outfit counters are not added on top).
    pub total_wears: u64,
    pub favorite_items: usize,
    pub items_per_category: BTreeMap<ClothingCategory, usize>,
}
