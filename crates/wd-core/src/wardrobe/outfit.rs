use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::item::require_name;
use super::vocabulary::normalize_seasons;
use super::{Occasion, Season, ValidationError};
use crate::ids::{ItemId, OutfitId};

/// A named bundle of garments. `items` order carries slot meaning
/// (top or dress first, shoes and accessories last) and is kept as supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outfit {
    pub id: OutfitId,
    pub name: String,
    pub items: Vec<ItemId>,
    pub occasion: Occasion,
    #[serde(default)]
    pub seasons: BTreeSet<Season>,
    #[serde(default)]
    pub favorite: bool,
    pub times_worn: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_worn: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Outfit {
    pub(crate) fn record_wear(&mut self, on: NaiveDate) {
        self.times_worn = self.times_worn.saturating_add(1);
        self.last_worn = Some(on);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutfitDraft {
    pub name: String,
    pub items: Vec<ItemId>,
    pub occasion: Occasion,
    pub seasons: BTreeSet<Season>,
    pub favorite: bool,
    pub notes: Option<String>,
}

impl OutfitDraft {
    pub fn new(name: impl Into<String>, occasion: Occasion, items: Vec<ItemId>) -> Self {
        Self {
            name: name.into(),
            items,
            occasion,
            seasons: BTreeSet::from([Season::All]),
            favorite: false,
            notes: None,
        }
    }

    pub fn seasons(mut self, seasons: impl IntoIterator<Item = Season>) -> Self {
        self.seasons = seasons.into_iter().collect();
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

    pub(crate) fn into_outfit(self) -> Result<Outfit, ValidationError> {
        let name = require_name(self.name)?;
        Ok(Outfit {
            id: OutfitId::new(),
            name,
            items: self.items,
            occasion: self.occasion,
            seasons: normalize_seasons(self.seasons),
            favorite: self.favorite,
            times_worn: 0,
            last_worn: None,
            notes: self.notes,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutfitPatch {
    pub name: Option<String>,
    pub items: Option<Vec<ItemId>>,
    pub occasion: Option<Occasion>,
    pub seasons: Option<BTreeSet<Season>>,
    pub favorite: Option<bool>,
    pub notes: Option<Option<String>>,
}

impl OutfitPatch {
    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        match &self.name {
            Some(name) if name.trim().is_empty() => Err(ValidationError::EmptyName),
            _ => Ok(()),
        }
    }

    pub(crate) fn apply(self, outfit: &mut Outfit) {
        if let Some(name) = self.name {
            outfit.name = name.trim().to_string();
        }
        if let Some(items) = self.items {
            outfit.items = items;
        }
        if let Some(occasion) = self.occasion {
            outfit.occasion = occasion;
        }
        if let Some(seasons) = self.seasons {
            outfit.seasons = normalize_seasons(seasons);
        }
        if let Some(favorite) = self.favorite {
            outfit.favorite = favorite;
        }
        if let Some(notes) = self.notes {
            outfit.notes = notes;
        }
    }
}
