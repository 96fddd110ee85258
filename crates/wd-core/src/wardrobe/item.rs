use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{ClothingCategory, ClothingColor, Occasion, Season, ValidationError};
use crate::ids::ItemId;

/// One physical garment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClothingItem {
    pub id: ItemId,
    pub name: String,
    pub category: ClothingCategory,
    pub image_uri: String,
    #[serde(default)]
    pub colors: BTreeSet<ClothingColor>,
    #[serde(default)]
    pub seasons: BTreeSet<Season>,
    #[serde(default)]
    pub occasions: BTreeSet<Occasion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    pub times_worn: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_worn: Option<NaiveDate>,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ClothingItem {
    pub fn has_occasion(&self, occasion: Occasion) -> bool {
        self.occasions.contains(&occasion)
    }

    pub fn fits_season(&self, season: Season) -> bool {
        Season::matches(&self.seasons, season)
    }

    pub fn has_any_color(&self, colors: &BTreeSet<ClothingColor>) -> bool {
        !self.colors.is_disjoint(colors)
    }

    pub(crate) fn record_wear(&mut self, on: NaiveDate) {
        self.times_worn = self.times_worn.saturating_add(1);
        self.last_worn = Some(on);
    }
}

/// Caller-supplied fields for a new garment. The repository assigns the id
/// and starts the wear counter at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClothingItemDraft {
    pub name: String,
    pub category: ClothingCategory,
    pub image_uri: String,
    pub colors: BTreeSet<ClothingColor>,
    pub seasons: BTreeSet<Season>,
    pub occasions: BTreeSet<Occasion>,
    pub brand: Option<String>,
    pub favorite: bool,
    pub notes: Option<String>,
}

impl ClothingItemDraft {
    pub fn new(
        name: impl Into<String>,
        category: ClothingCategory,
        image_uri: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            image_uri: image_uri.into(),
            colors: BTreeSet::new(),
            seasons: BTreeSet::new(),
            occasions: BTreeSet::new(),
            brand: None,
            favorite: false,
            notes: None,
        }
    }

    pub fn colors(mut self, colors: impl IntoIterator<Item = ClothingColor>) -> Self {
        self.colors = colors.into_iter().collect();
        self
    }

    pub fn seasons(mut self, seasons: impl IntoIterator<Item = Season>) -> Self {
        self.seasons = seasons.into_iter().collect();
        self
    }

    pub fn occasions(mut self, occasions: impl IntoIterator<Item = Occasion>) -> Self {
        self.occasions = occasions.into_iter().collect();
        self
    }

    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn favorite(mut self, favorite: bool) -> Self {
        self.favorite = favorite;
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub(crate) fn into_item(self) -> Result<ClothingItem, ValidationError> {
        let name = require_name(self.name)?;
        Ok(ClothingItem {
            id: ItemId::new(),
            name,
            category: self.category,
            image_uri: self.image_uri,
            colors: self.colors,
            seasons: self.seasons,
            occasions: self.occasions,
            brand: self.brand,
            times_worn: 0,
            last_worn: None,
            favorite: self.favorite,
            notes: self.notes,
        })
    }
}

/// Partial update for a garment. `None` leaves the field untouched; the
/// nested `Option`s clear the value when set to `Some(None)`.
///
/// Wear data is not patchable: it only moves through wear increments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClothingItemPatch {
    pub name: Option<String>,
    pub category: Option<ClothingCategory>,
    pub image_uri: Option<String>,
    pub colors: Option<BTreeSet<ClothingColor>>,
    pub seasons: Option<BTreeSet<Season>>,
    pub occasions: Option<BTreeSet<Occasion>>,
    pub brand: Option<Option<String>>,
    pub favorite: Option<bool>,
    pub notes: Option<Option<String>>,
}

impl ClothingItemPatch {
    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        match &self.name {
            Some(name) if name.trim().is_empty() => Err(ValidationError::EmptyName),
            _ => Ok(()),
        }
    }

    pub(crate) fn apply(self, item: &mut ClothingItem) {
        if let Some(name) = self.name {
            item.name = name.trim().to_string();
        }
        if let Some(category) = self.category {
            item.category = category;
        }
        if let Some(image_uri) = self.image_uri {
            item.image_uri = image_uri;
        }
        if let Some(colors) = self.colors {
            item.colors = colors;
        }
        if let Some(seasons) = self.seasons {
            item.seasons = seasons;
        }
        if let Some(occasions) = self.occasions {
            item.occasions = occasions;
        }
        if let Some(brand) = self.brand {
            item.brand = brand;
        }
        if let Some(favorite) = self.favorite {
            item.favorite = favorite;
        }
        if let Some(notes) = self.notes {
            item.notes = notes;
        }
    }
}

pub(crate) fn require_name(name: String) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(trimmed.to_string())
}
