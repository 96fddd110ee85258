//! Wardrobe domain: garments, outfits, calendar entries and the repository
//! that owns them.

mod error;
mod item;
mod outfit;
mod plan;
mod repository;
pub mod sample;
mod snapshot;
mod stats;
mod vocabulary;

pub use error::ValidationError;
pub use item::{ClothingItem, ClothingItemDraft, ClothingItemPatch};
pub use outfit::{Outfit, OutfitDraft, OutfitPatch};
pub use plan::{PlannedOutfit, PlannedOutfitDraft, PlannedOutfitPatch};
pub use repository::Wardrobe;
pub use snapshot::{WardrobeSnapshot, CURRENT_SCHEMA_VERSION};
pub use stats::WardrobeStats;
pub use vocabulary::{normalize_seasons, ClothingCategory, ClothingColor, Occasion, Season};
