use serde::{Deserialize, Serialize};

use super::{ClothingItem, Outfit, PlannedOutfit};

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Full persisted state of the four wardrobe collections, stored as one unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WardrobeSnapshot {
    #[serde(default = "current_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub clothing_items: Vec<ClothingItem>,

    #[serde(default)]
    pub outfits: Vec<Outfit>,

    #[serde(default)]
    pub planned_outfits: Vec<PlannedOutfit>,

    #[serde(default)]
    pub outfit_photos: Vec<String>,
}

fn current_schema_version() -> u32 {
    CURRENT_SCHEMA_VERSION
}

impl Default for WardrobeSnapshot {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            clothing_items: Vec::new(),
            outfits: Vec::new(),
            planned_outfits: Vec::new(),
            outfit_photos: Vec::new(),
        }
    }
}
