use anyhow::Result;
use serde::Serialize;
use wd_app::{CreateOutfit, WardrobeStore};
use wd_core::wardrobe::{ClothingItem, Outfit, OutfitDraft};
use wd_core::{ItemId, OutfitId};

use super::format::{item_line, lines, outfit_line};
use super::{not_found, Rendered};
use crate::cli::OutfitCommand;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OutfitDetail<'a> {
    #[serde(flatten)]
    outfit: &'a Outfit,
    resolved_items: Vec<&'a ClothingItem>,
}

fn render_outfit(store: &WardrobeStore, id: &OutfitId, verb: &str) -> Result<Rendered> {
    let outfit = store
        .wardrobe()
        .outfit(id)
        .ok_or_else(|| not_found("outfit", id.as_str()))?;
    Rendered::new(outfit, format!("{verb} {}", outfit_line(outfit)))
}

pub async fn run(command: OutfitCommand, store: &mut WardrobeStore) -> Result<Rendered> {
    match command {
        OutfitCommand::List { favorites, recent } => {
            let wardrobe = store.wardrobe();
            let outfits: Vec<&Outfit> = match recent {
                Some(limit) => wardrobe.recent_outfits(limit),
                None => wardrobe.outfits().iter().collect(),
            }
            .into_iter()
            .filter(|outfit| !favorites || outfit.favorite)
            .collect();
            Rendered::new(
                &outfits,
                lines(outfits.iter().map(|o| outfit_line(o)), "No outfits."),
            )
        }
        OutfitCommand::Show { id } => {
            let id = OutfitId::from(id);
            let wardrobe = store.wardrobe();
            let outfit = wardrobe
                .outfit(&id)
                .ok_or_else(|| not_found("outfit", id.as_str()))?;
            let detail = OutfitDetail {
                outfit,
                resolved_items: wardrobe.outfit_items(&id),
            };

            let mut text = outfit_line(outfit);
            for item in &detail.resolved_items {
                text.push_str(&format!("\n  - {}", item_line(item)));
            }
            let missing = outfit.items.len() - detail.resolved_items.len();
            if missing > 0 {
                text.push_str(&format!("\n  ({missing} item(s) no longer in the wardrobe)"));
            }
            if let Some(notes) = &outfit.notes {
                text.push_str(&format!("\n  {notes}"));
            }
            Rendered::new(&detail, text)
        }
        OutfitCommand::Create {
            name,
            occasion,
            items,
            seasons,
            notes,
            favorite,
        } => {
            let items = items.into_iter().map(ItemId::from).collect();
            let mut draft = OutfitDraft::new(name, occasion, items).favorite(favorite);
            if !seasons.is_empty() {
                draft = draft.seasons(seasons);
            }
            if let Some(notes) = notes {
                draft = draft.notes(notes);
            }
            let outfit = CreateOutfit::new().execute(store, draft).await?;
            Rendered::new(&outfit, format!("Created {}", outfit_line(&outfit)))
        }
        OutfitCommand::Remove { id } => {
            let outfit = store
                .remove_outfit(&OutfitId::from(id.as_str()))
                .await
                .ok_or_else(|| not_found("outfit", id))?;
            Rendered::new(&outfit, format!("Removed {}", outfit.name))
        }
        OutfitCommand::Favorite { id } => {
            let id = OutfitId::from(id);
            store
                .toggle_favorite_outfit(&id)
                .await
                .ok_or_else(|| not_found("outfit", id.as_str()))?;
            render_outfit(store, &id, "Updated")
        }
        OutfitCommand::Wear { id } => {
            let id = OutfitId::from(id);
            store
                .increment_outfit_worn(&id)
                .await
                .ok_or_else(|| not_found("outfit", id.as_str()))?;
            render_outfit(store, &id, "Wore")
        }
    }
}
