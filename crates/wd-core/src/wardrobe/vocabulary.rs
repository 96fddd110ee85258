//! Closed vocabularies used to describe garments and outfits.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::ValidationError;

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => $text:literal),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),*
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),*
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let needle = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(needle))
                    .ok_or_else(|| ValidationError::UnknownValue {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

vocabulary! {
    /// Garment category; each recommendation slot draws from one of these.
    ClothingCategory, "category" {
        Tops => "tops",
        Bottoms => "bottoms",
        Outerwear => "outerwear",
        Dresses => "dresses",
        Shoes => "shoes",
        Accessories => "accessories",
    }
}

vocabulary! {
    ClothingColor, "color" {
        Black => "black",
        White => "white",
        Gray => "gray",
        Beige => "beige",
        Brown => "brown",
        Navy => "navy",
        Blue => "blue",
        Green => "green",
        Red => "red",
        Pink => "pink",
        Purple => "purple",
        Yellow => "yellow",
        Orange => "orange",
        Multicolor => "multicolor",
    }
}

vocabulary! {
    /// `All` is a wildcard: an item tagged with it matches every season query.
    Season, "season" {
        Spring => "spring",
        Summer => "summer",
        Fall => "fall",
        Winter => "winter",
        All => "all",
    }
}

vocabulary! {
    Occasion, "occasion" {
        Casual => "casual",
        Work => "work",
        Formal => "formal",
        Athletic => "athletic",
        Special => "special",
    }
}

impl Season {
    /// Meteorological season of the month `date` falls in (northern hemisphere).
    pub fn for_month(date: NaiveDate) -> Season {
        match date.month() {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Fall,
            _ => Season::Winter,
        }
    }

    /// Whether a garment tagged with `tags` is wearable in the `query` season.
    pub fn matches(tags: &BTreeSet<Season>, query: Season) -> bool {
        tags.contains(&query) || tags.contains(&Season::All)
    }

    /// Whether this season asks for a layer on top.
    pub fn is_cold(self) -> bool {
        matches!(self, Season::Fall | Season::Winter)
    }
}

impl Occasion {
    /// Dressy occasions always get an accessory when one is available.
    pub fn is_dressy(self) -> bool {
        matches!(self, Occasion::Formal | Occasion::Special)
    }

    /// Title-cased label, e.g. `Casual`.
    pub fn title(self) -> String {
        let text = self.as_str();
        let mut chars = text.chars();
        match chars.next() {
            Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
            None => String::new(),
        }
    }
}

/// `All` is exclusive; an empty set means "all seasons".
pub fn normalize_seasons(seasons: BTreeSet<Season>) -> BTreeSet<Season> {
    if seasons.is_empty() || seasons.contains(&Season::All) {
        return BTreeSet::from([Season::All]);
    }
    seasons
}
