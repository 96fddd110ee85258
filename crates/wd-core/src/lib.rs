//! # wd-core
//!
//! Core domain models and business logic for Wardrobe.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod config;
pub mod ids;
pub mod ports;
pub mod recommendation;
pub mod wardrobe;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use ids::{ItemId, OutfitId, PlanId};
pub use recommendation::{recommend, OutfitRequest, Recommendation, Slot, SlotPick};
pub use wardrobe::{
    ClothingCategory, ClothingColor, ClothingItem, ClothingItemDraft, ClothingItemPatch, Occasion,
    Outfit, OutfitDraft, OutfitPatch, PlannedOutfit, PlannedOutfitDraft, PlannedOutfitPatch,
    Season, ValidationError, Wardrobe, WardrobeSnapshot, WardrobeStats,
};
