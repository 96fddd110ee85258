use tracing::info;
use wd_core::wardrobe::{Outfit, OutfitDraft, ValidationError};

use crate::store::WardrobeStore;

/// Fewest garments a hand-built outfit may list.
pub const MIN_OUTFIT_ITEMS: usize = 2;

/// Manual outfit creation from hand-picked garments.
pub struct CreateOutfit;

impl CreateOutfit {
    pub fn new() -> Self {
        Self
    }

    #[tracing::instrument(
        name = "usecase.create_outfit.execute",
        skip_all,
        fields(name = %draft.name, items = draft.items.len())
    )]
    pub async fn execute(
        &self,
        store: &mut WardrobeStore,
        draft: OutfitDraft,
    ) -> Result<Outfit, ValidationError> {
        if draft.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if draft.items.len() < MIN_OUTFIT_ITEMS {
            return Err(ValidationError::TooFewItems {
                required: MIN_OUTFIT_ITEMS,
                actual: draft.items.len(),
            });
        }

        let outfit = store.add_outfit(draft).await?;
        info!(outfit_id = %outfit.id, "Created outfit");
        Ok(outfit)
    }
}

impl Default for CreateOutfit {
    fn default() -> Self {
        Self::new()
    }
}
