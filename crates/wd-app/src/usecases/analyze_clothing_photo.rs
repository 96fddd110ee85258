use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;
use wd_core::ports::ImageAnalysisPort;
use wd_core::wardrobe::{
    ClothingCategory, ClothingColor, ClothingItemDraft, Occasion, Season, Wardrobe,
};
use wd_core::ItemId;

const NAME_WORDS: usize = 3;
const FALLBACK_NAME: &str = "New Item";

/// Pre-filled garment built from a photo analysis, awaiting the user's
/// confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemProposal {
    pub image_uri: String,
    pub name: String,
    /// `None` when the analysis could not tell; the caller must supply one.
    pub category: Option<ClothingCategory>,
    pub colors: Vec<ClothingColor>,
    pub style: Option<String>,
    pub caption: String,
    /// Garments already owned in the proposed category.
    pub similar_items: Vec<ItemId>,
}

impl ItemProposal {
    /// Draft for the repository. `category` overrides the detected one.
    pub fn into_draft(self, category: Option<ClothingCategory>) -> Option<ClothingItemDraft> {
        let category = category.or(self.category)?;
        let mut draft = ClothingItemDraft::new(self.name, category, self.image_uri)
            .colors(self.colors)
            .seasons([Season::All])
            .occasions([Occasion::Casual]);
        if !self.caption.trim().is_empty() {
            draft = draft.notes(self.caption);
        }
        Some(draft)
    }
}

fn proposed_name(caption: &str) -> String {
    let words: Vec<&str> = caption.split_whitespace().take(NAME_WORDS).collect();
    if words.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        words.join(" ")
    }
}

/// Turns a garment photo into an [`ItemProposal`].
/// 分析衣物照片并生成待确认的单品草稿。
pub struct AnalyzeClothingPhoto {
    analyzer: Arc<dyn ImageAnalysisPort>,
}

impl AnalyzeClothingPhoto {
    pub fn from_ports(analyzer: Arc<dyn ImageAnalysisPort>) -> Self {
        Self { analyzer }
    }

    #[tracing::instrument(name = "usecase.analyze_clothing_photo.execute", skip(self, wardrobe))]
    pub async fn execute(&self, wardrobe: &Wardrobe, image_uri: &str) -> Result<ItemProposal> {
        let analysis = self
            .analyzer
            .analyze(image_uri)
            .await
            .with_context(|| format!("analyze clothing photo failed: {image_uri}"))?;

        let similar_items = match analysis.category {
            Some(category) => wardrobe
                .items_in_category(Some(category))
                .into_iter()
                .map(|item| item.id.clone())
                .collect(),
            None => Vec::new(),
        };

        info!(
            category = ?analysis.category,
            similar = similar_items.len(),
            "Analyzed clothing photo"
        );

        Ok(ItemProposal {
            image_uri: image_uri.to_string(),
            name: proposed_name(&analysis.caption),
            category: analysis.category,
            colors: analysis.colors,
            style: analysis.style,
            caption: analysis.caption,
            similar_items,
        })
    }
}
