use std::sync::Mutex;

use anyhow::anyhow;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;
use wd_core::ports::{ImageAnalysis, ImageAnalysisPort};
use wd_core::wardrobe::{ClothingCategory, ClothingColor};

/// Checked in order; the first category with a matching keyword wins.
const CATEGORY_KEYWORDS: &[(ClothingCategory, &[&str])] = &[
    (ClothingCategory::Tops, &["shirt", "tee", "top"]),
    (ClothingCategory::Bottoms, &["pant", "jean", "trouser"]),
    (ClothingCategory::Dresses, &["dress"]),
    (ClothingCategory::Outerwear, &["jacket", "coat", "sweater"]),
    (ClothingCategory::Shoes, &["shoe", "boot", "sneaker"]),
    (ClothingCategory::Accessories, &["hat", "bag", "accessory"]),
];

const COLOR_KEYWORDS: &[ClothingColor] = &[
    ClothingColor::Black,
    ClothingColor::White,
    ClothingColor::Red,
    ClothingColor::Blue,
    ClothingColor::Green,
    ClothingColor::Yellow,
    ClothingColor::Purple,
    ClothingColor::Pink,
    ClothingColor::Orange,
    ClothingColor::Brown,
    ClothingColor::Gray,
    ClothingColor::Beige,
    ClothingColor::Navy,
];

/// Guessed when the file name names no color.
const FALLBACK_COLORS: &[ClothingColor] = &[
    ClothingColor::Black,
    ClothingColor::White,
    ClothingColor::Blue,
    ClothingColor::Gray,
    ClothingColor::Beige,
];

const STYLE_KEYWORDS: &[&str] = &["casual", "formal", "sporty", "elegant", "vintage", "modern"];
const DEFAULT_STYLE: &str = "casual";

/// Offline photo analysis that reads hints from the image file name
/// (`navy-wool-coat.jpg` → outerwear, navy). Anything it cannot tell falls
/// back to tops, a common color and a casual style.
pub struct FilenameImageAnalyzer {
    rng: Mutex<StdRng>,
}

impl FilenameImageAnalyzer {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Reproducible fallback colors.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn fallback_color(&self) -> anyhow::Result<ClothingColor> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| anyhow!("photo analyzer rng lock poisoned"))?;
        Ok(FALLBACK_COLORS[rng.random_range(0..FALLBACK_COLORS.len())])
    }
}

impl Default for FilenameImageAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

fn file_name(image_uri: &str) -> String {
    image_uri
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

fn detect_category(name: &str) -> ClothingCategory {
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| name.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(ClothingCategory::Tops)
}

fn detect_colors(name: &str) -> Vec<ClothingColor> {
    COLOR_KEYWORDS
        .iter()
        .copied()
        .filter(|color| name.contains(color.as_str()))
        .collect()
}

fn detect_style(name: &str) -> &'static str {
    STYLE_KEYWORDS
        .iter()
        .copied()
        .find(|style| name.contains(style))
        .unwrap_or(DEFAULT_STYLE)
}

fn singular(category: ClothingCategory) -> &'static str {
    match category {
        ClothingCategory::Tops => "top",
        ClothingCategory::Bottoms => "bottom",
        ClothingCategory::Outerwear => "outerwear piece",
        ClothingCategory::Dresses => "dress",
        ClothingCategory::Shoes => "pair of shoes",
        ClothingCategory::Accessories => "accessory",
    }
}

#[async_trait]
impl ImageAnalysisPort for FilenameImageAnalyzer {
    async fn analyze(&self, image_uri: &str) -> anyhow::Result<ImageAnalysis> {
        let name = file_name(image_uri);
        let category = detect_category(&name);
        let mut colors = detect_colors(&name);
        if colors.is_empty() {
            colors.push(self.fallback_color()?);
        }
        let style = detect_style(&name);
        let caption = format!("A {} {} {}", colors[0], style, singular(category));

        debug!(file = %name, %category, "photo analyzed from file name");

        Ok(ImageAnalysis {
            category: Some(category),
            colors,
            style: Some(style.to_string()),
            caption,
        })
    }
}
