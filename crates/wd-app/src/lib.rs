//! Wardrobe Application Orchestration Layer
//!
//! Use cases wiring the pure wardrobe domain to its ports: snapshot
//! persistence, the clock, randomness and image analysis.

pub mod app_paths;
pub mod store;
pub mod usecases;

pub use app_paths::AppPaths;
pub use store::WardrobeStore;
pub use usecases::{
    AnalyzeClothingPhoto, CreateOutfit, ItemProposal, LoadWardrobe, SaveSuggestedOutfit,
    SaveSuggestionError, SuggestOutfit, SuggestedOutfit,
};
