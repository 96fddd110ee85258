use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::ids::ItemId;
use crate::wardrobe::{ClothingColor, Occasion, Season};

/// What the caller wants from a suggestion. Every field is optional; an
/// absent field (or empty set) places no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitRequest {
    #[serde(default)]
    pub occasion: Option<Occasion>,
    #[serde(default)]
    pub season: Option<Season>,
    /// Free-form; `"cold"` activates the outerwear slot.
    #[serde(default)]
    pub weather: Option<String>,
    #[serde(default)]
    pub colors: BTreeSet<ClothingColor>,
    /// Free-form label, never used for filtering.
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub exclude_items: BTreeSet<ItemId>,
    /// Free-form; `"dresses"` always takes a dress when one is available.
    #[serde(default)]
    pub style_preference: Option<String>,
}

fn is_keyword(value: &Option<String>, keyword: &str) -> bool {
    value
        .as_deref()
        .is_some_and(|v| v.trim().eq_ignore_ascii_case(keyword))
}

impl OutfitRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn occasion(mut self, occasion: Occasion) -> Self {
        self.occasion = Some(occasion);
        self
    }

    pub fn season(mut self, season: Season) -> Self {
        self.season = Some(season);
        self
    }

    pub fn weather(mut self, weather: impl Into<String>) -> Self {
        self.weather = Some(weather.into());
        self
    }

    pub fn mood(mut self, mood: impl Into<String>) -> Self {
        self.mood = Some(mood.into());
        self
    }

    pub fn colors(mut self, colors: impl IntoIterator<Item = ClothingColor>) -> Self {
        self.colors = colors.into_iter().collect();
        self
    }

    pub fn exclude(mut self, ids: impl IntoIterator<Item = ItemId>) -> Self {
        self.exclude_items.extend(ids);
        self
    }

    pub fn style_preference(mut self, style: impl Into<String>) -> Self {
        self.style_preference = Some(style.into());
        self
    }

    pub fn is_cold_weather(&self) -> bool {
        is_keyword(&self.weather, "cold")
    }

    pub fn prefers_dresses(&self) -> bool {
        is_keyword(&self.style_preference, "dresses")
    }

    /// Outerwear is considered in fall, in winter, or when it is cold out.
    pub fn wants_outerwear(&self) -> bool {
        self.season.is_some_and(Season::is_cold) || self.is_cold_weather()
    }
}
