use anyhow::{anyhow, Result};
use serde::Serialize;
use wd_app::{AnalyzeClothingPhoto, ItemProposal, WardrobeStore};
use wd_core::wardrobe::{ClothingCategory, ClothingItem, ClothingItemDraft, ClothingItemPatch};
use wd_core::ItemId;

use super::format::{clearable, item_line, join, lines};
use super::{not_found, Rendered};
use crate::bootstrap::AppDeps;
use crate::cli::{ItemArgs, ItemCommand};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisReport<'a> {
    proposal: &'a ItemProposal,
    saved: Option<&'a ClothingItem>,
}

fn draft_from(args: ItemArgs) -> ClothingItemDraft {
    let mut draft = ClothingItemDraft::new(args.name, args.category, args.image)
        .colors(args.colors)
        .seasons(args.seasons)
        .occasions(args.occasions)
        .favorite(args.favorite);
    if let Some(brand) = args.brand {
        draft = draft.brand(brand);
    }
    if let Some(notes) = args.notes {
        draft = draft.notes(notes);
    }
    draft
}

fn render_item(store: &WardrobeStore, id: &ItemId, verb: &str) -> Result<Rendered> {
    let item = store
        .wardrobe()
        .item(id)
        .ok_or_else(|| not_found("clothing item", id.as_str()))?;
    Rendered::new(item, format!("{verb} {}", item_line(item)))
}

fn proposal_text(proposal: &ItemProposal) -> String {
    let category = proposal
        .category
        .map(|c| c.to_string())
        .unwrap_or_else(|| "unknown".to_string());
    let mut text = format!(
        "Proposed {}  [{}]  colors: {}\n{}",
        proposal.name,
        category,
        join(&proposal.colors),
        proposal.caption
    );
    if !proposal.similar_items.is_empty() {
        text.push_str(&format!("\nAlready owned in this category: {}", join(&proposal.similar_items)));
    }
    text
}

async fn analyze(
    uri: &str,
    category: Option<ClothingCategory>,
    save: bool,
    store: &mut WardrobeStore,
    deps: &AppDeps,
) -> Result<Rendered> {
    let proposal = AnalyzeClothingPhoto::from_ports(deps.analyzer.clone())
        .execute(store.wardrobe(), uri)
        .await?;
    let mut text = proposal_text(&proposal);

    let saved = if save {
        let draft = proposal
            .clone()
            .into_draft(category)
            .ok_or_else(|| anyhow!("could not tell the category of {uri}; pass --category"))?;
        let item = store.add_clothing_item(draft).await?;
        text.push_str(&format!("\nAdded {}", item_line(&item)));
        Some(item)
    } else {
        None
    };

    Rendered::new(
        &AnalysisReport {
            proposal: &proposal,
            saved: saved.as_ref(),
        },
        text,
    )
}

pub async fn run(
    command: ItemCommand,
    store: &mut WardrobeStore,
    deps: &AppDeps,
) -> Result<Rendered> {
    match command {
        ItemCommand::List {
            category,
            favorites,
        } => {
            let items: Vec<&ClothingItem> = store
                .wardrobe()
                .items_in_category(category)
                .into_iter()
                .filter(|item| !favorites || item.favorite)
                .collect();
            Rendered::new(&items, lines(items.iter().map(|i| item_line(i)), "No items."))
        }
        ItemCommand::Add(args) => {
            let item = store.add_clothing_item(draft_from(args)).await?;
            Rendered::new(&item, format!("Added {}", item_line(&item)))
        }
        ItemCommand::Update {
            id,
            name,
            category,
            image,
            colors,
            seasons,
            occasions,
            brand,
            notes,
        } => {
            let id = ItemId::from(id);
            let patch = ClothingItemPatch {
                name,
                category,
                image_uri: image,
                colors: colors.map(|c| c.into_iter().collect()),
                seasons: seasons.map(|s| s.into_iter().collect()),
                occasions: occasions.map(|o| o.into_iter().collect()),
                brand: clearable(brand),
                favorite: None,
                notes: clearable(notes),
            };
            if !store.update_clothing_item(&id, patch).await? {
                return Err(not_found("clothing item", id.into_inner()));
            }
            render_item(store, &id, "Updated")
        }
        ItemCommand::Remove { id } => {
            let item = store
                .remove_clothing_item(&ItemId::from(id.as_str()))
                .await
                .ok_or_else(|| not_found("clothing item", id))?;
            Rendered::new(&item, format!("Removed {}", item.name))
        }
        ItemCommand::Favorite { id } => {
            let id = ItemId::from(id);
            store
                .toggle_favorite_item(&id)
                .await
                .ok_or_else(|| not_found("clothing item", id.as_str()))?;
            render_item(store, &id, "Updated")
        }
        ItemCommand::Wear { id } => {
            let id = ItemId::from(id);
            store
                .increment_item_worn(&id)
                .await
                .ok_or_else(|| not_found("clothing item", id.as_str()))?;
            render_item(store, &id, "Wore")
        }
        ItemCommand::Analyze {
            uri,
            category,
            save,
        } => analyze(&uri, category, save, store, deps).await,
    }
}
