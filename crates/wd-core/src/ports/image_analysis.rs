use async_trait::async_trait;

use crate::wardrobe::{ClothingCategory, ClothingColor};

/// Best guess about a garment photo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageAnalysis {
    pub category: Option<ClothingCategory>,
    pub colors: Vec<ClothingColor>,
    /// Passed through untouched.
    pub style: Option<String>,
    pub caption: String,
}

/// External image-analysis service. Only `category` and `colors` feed the
/// wardrobe; the rest is shown to the user as-is.
#[async_trait]
pub trait ImageAnalysisPort: Send + Sync {
    async fn analyze(&self, image_uri: &str) -> anyhow::Result<ImageAnalysis>;
}
