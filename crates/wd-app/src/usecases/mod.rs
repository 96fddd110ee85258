//! Business logic use cases
//!
//! LoadWardrobe        → startup, restore or seed
//!         ↓
//! WardrobeStore       → every edit, persisted
//!         ↓
//! SuggestOutfit       → engine over the live items
//!         ↓
//! SaveSuggestedOutfit → keep a suggestion as an outfit

pub mod analyze_clothing_photo;
pub mod create_outfit;
pub mod load_wardrobe;
pub mod save_suggested_outfit;
pub mod suggest_outfit;

#[cfg(test)]
pub(crate) mod mock_ports;

pub use analyze_clothing_photo::{AnalyzeClothingPhoto, ItemProposal};
pub use create_outfit::CreateOutfit;
pub use load_wardrobe::LoadWardrobe;
pub use save_suggested_outfit::{SaveSuggestedOutfit, SaveSuggestionError};
pub use suggest_outfit::{SuggestOutfit, SuggestedOutfit};
