use thiserror::Error;
use tracing::info;
use wd_core::wardrobe::{Occasion, Outfit, OutfitDraft, Season, ValidationError};

use super::suggest_outfit::SuggestedOutfit;
use crate::store::WardrobeStore;

/// Fewest garments a suggestion needs before it can be kept.
pub const MIN_SAVED_ITEMS: usize = 2;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SaveSuggestionError {
    #[error("suggestion has {actual} items, at least {required} are needed to save it")]
    NotEnoughItems { required: usize, actual: usize },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Keeps a suggestion as a regular outfit.
pub struct SaveSuggestedOutfit;

impl SaveSuggestedOutfit {
    pub fn new() -> Self {
        Self
    }

    /// Name, occasion and notes are derived from the request that produced
    /// the suggestion.
    pub fn draft_for(suggestion: &SuggestedOutfit) -> Result<OutfitDraft, SaveSuggestionError> {
        let actual = suggestion.items.len();
        if actual < MIN_SAVED_ITEMS {
            return Err(SaveSuggestionError::NotEnoughItems {
                required: MIN_SAVED_ITEMS,
                actual,
            });
        }

        let request = &suggestion.request;
        let name = match request.occasion {
            Some(occasion) if !suggestion.for_today => format!("{} Outfit", occasion.title()),
            _ => "Today's Outfit".to_string(),
        };
        let items = suggestion.items.iter().map(|i| i.id.clone()).collect();
        let mut draft = OutfitDraft::new(name, request.occasion.unwrap_or(Occasion::Casual), items)
            .seasons([Season::All]);

        if let (Some(weather), Some(mood)) = (&request.weather, &request.mood) {
            draft = draft.notes(format!(
                "Generated for {weather} weather with a {mood} mood."
            ));
        }

        Ok(draft)
    }

    #[tracing::instrument(name = "usecase.save_suggested_outfit.execute", skip_all)]
    pub async fn execute(
        &self,
        store: &mut WardrobeStore,
        suggestion: &SuggestedOutfit,
    ) -> Result<Outfit, SaveSuggestionError> {
        let draft = Self::draft_for(suggestion)?;
        let outfit = store.add_outfit(draft).await?;

        info!(outfit_id = %outfit.id, name = %outfit.name, "Saved suggested outfit");
        Ok(outfit)
    }
}

impl Default for SaveSuggestedOutfit {
    fn default() -> Self {
        Self::new()
    }
}
