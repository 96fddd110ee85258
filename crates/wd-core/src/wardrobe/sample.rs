//! Starter wardrobe used on a fresh install.

use chrono::NaiveDate;

use super::snapshot::CURRENT_SCHEMA_VERSION;
use super::{
    ClothingCategory as Cat, ClothingColor as Color, ClothingItem, Occasion as Occ, Outfit,
    PlannedOutfit, Season as S, WardrobeSnapshot,
};

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

#[allow(clippy::too_many_arguments)]
fn item(
    id: &str,
    name: &str,
    category: Cat,
    photo: &str,
    colors: &[Color],
    seasons: &[S],
    occasions: &[Occ],
    brand: &str,
    times_worn: u32,
    last_worn: Option<NaiveDate>,
    favorite: bool,
    notes: Option<&str>,
) -> ClothingItem {
    ClothingItem {
        id: id.into(),
        name: name.to_string(),
        category,
        image_uri: format!(
            "https://images.unsplash.com/{photo}?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80"
        ),
        colors: colors.iter().copied().collect(),
        seasons: seasons.iter().copied().collect(),
        occasions: occasions.iter().copied().collect(),
        brand: Some(brand.to_string()),
        times_worn,
        last_worn,
        favorite,
        notes: notes.map(str::to_string),
    }
}

#[allow(clippy::too_many_arguments)]
fn outfit(
    id: &str,
    name: &str,
    items: &[&str],
    occasion: Occ,
    seasons: &[S],
    favorite: bool,
    last_worn: Option<NaiveDate>,
    times_worn: u32,
    notes: Option<&str>,
) -> Outfit {
    Outfit {
        id: id.into(),
        name: name.to_string(),
        items: items.iter().map(|i| (*i).into()).collect(),
        occasion,
        seasons: seasons.iter().copied().collect(),
        favorite,
        times_worn,
        last_worn,
        notes: notes.map(str::to_string),
    }
}

fn plan(id: &str, on: Option<NaiveDate>, outfit_id: &str, event: &str) -> Option<PlannedOutfit> {
    Some(PlannedOutfit {
        id: id.into(),
        date: on?,
        outfit_id: outfit_id.into(),
        event: Some(event.to_string()),
    })
}

/// Eight garments ("1".."8"), four outfits and three calendar entries.
#[rustfmt::skip]
pub fn sample_wardrobe() -> WardrobeSnapshot {
    let clothing_items = vec![
        item(
            "1", "White T-Shirt", Cat::Tops, "photo-1521572163474-6864f9cf17ab",
            &[Color::White], &[S::Spring, S::Summer, S::Fall], &[Occ::Casual],
            "Uniqlo", 12, date(2025, 5, 20), true, Some("Super comfortable basic tee"),
        ),
        item(
            "2", "Blue Jeans", Cat::Bottoms, "photo-1542272604-787c3835535d",
            &[Color::Blue], &[S::All], &[Occ::Casual],
            "Levi's", 25, date(2025, 5, 22), true, Some("Classic 501s"),
        ),
        item(
            "3", "Black Blazer", Cat::Outerwear, "photo-1591047139829-d91aecb6caea",
            &[Color::Black], &[S::Fall, S::Winter, S::Spring], &[Occ::Work, Occ::Formal],
            "Zara", 8, date(2025, 5, 15), false, None,
        ),
        item(
            "4", "Floral Dress", Cat::Dresses, "photo-1572804013309-59a88b7e92f1",
            &[Color::Multicolor], &[S::Spring, S::Summer], &[Occ::Casual, Occ::Special],
            "H&M", 3, date(2025, 4, 10), true, None,
        ),
        item(
            "5", "White Sneakers", Cat::Shoes, "photo-1549298916-b41d501d3772",
            &[Color::White], &[S::All], &[Occ::Casual, Occ::Athletic],
            "Nike", 30, date(2025, 5, 25), true, None,
        ),
        item(
            "6", "Black Dress Shoes", Cat::Shoes, "photo-1543163521-1bf539c55dd2",
            &[Color::Black], &[S::All], &[Occ::Work, Occ::Formal],
            "Cole Haan", 10, date(2025, 5, 18), false, None,
        ),
        item(
            "7", "Beige Sweater", Cat::Tops, "photo-1576871337622-98d48d1cf531",
            &[Color::Beige], &[S::Fall, S::Winter], &[Occ::Casual, Occ::Work],
            "Madewell", 15, date(2025, 3, 10), true, None,
        ),
        item(
            "8", "Black Leather Jacket", Cat::Outerwear, "photo-1551028719-00167b16eac5",
            &[Color::Black], &[S::Fall, S::Winter, S::Spring], &[Occ::Casual],
            "AllSaints", 20, date(2025, 4, 15), true, None,
        ),
    ];

    let outfits = vec![
        outfit(
            "1", "Casual Weekend", &["1", "2", "5"], Occ::Casual,
            &[S::Spring, S::Summer, S::Fall], true, date(2025, 5, 22), 5,
            Some("Go-to weekend outfit"),
        ),
        outfit(
            "2", "Business Meeting", &["3", "2", "6"], Occ::Work,
            &[S::Fall, S::Winter, S::Spring], false, date(2025, 5, 15), 3, None,
        ),
        outfit(
            "3", "Summer Party", &["4", "5"], Occ::Special,
            &[S::Summer], true, date(2025, 4, 10), 1, None,
        ),
        outfit(
            "4", "Fall Casual", &["7", "2", "5"], Occ::Casual,
            &[S::Fall], true, date(2025, 3, 10), 4, None,
        ),
    ];

    let planned_outfits = [
        plan("1", date(2025, 5, 27), "2", "Work Presentation"),
        plan("2", date(2025, 5, 29), "3", "Dinner with Friends"),
        plan("3", date(2025, 5, 31), "1", "Weekend Errands"),
    ]
    .into_iter()
    .flatten()
    .collect();

    WardrobeSnapshot {
        schema_version: CURRENT_SCHEMA_VERSION,
        clothing_items,
        outfits,
        planned_outfits,
        outfit_photos: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_has_expected_shape() {
        let snapshot = sample_wardrobe();
        assert_eq!(snapshot.clothing_items.len(), 8);
        assert_eq!(snapshot.outfits.len(), 4);
        assert_eq!(snapshot.planned_outfits.len(), 3);
        assert!(snapshot.outfit_photos.is_empty());

        let ids: Vec<&str> = snapshot.clothing_items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6", "7", "8"]);
    }

    #[test]
    fn sample_outfits_reference_existing_items() {
        let snapshot = sample_wardrobe();
        for outfit in &snapshot.outfits {
            for id in &outfit.items {
                assert!(snapshot.clothing_items.iter().any(|i| &i.id == id));
            }
        }
    }
}
