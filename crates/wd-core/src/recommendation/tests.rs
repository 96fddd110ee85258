//! Tests for [`recommend`]: hard filters, slot rules and draw order.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;
use crate::ids::ItemId;
use crate::ports::RandomSourcePort;
use crate::testing::ScriptedRandom;
use crate::wardrobe::sample::sample_wardrobe;
use crate::wardrobe::{ClothingCategory, ClothingColor, ClothingItem, Occasion, Season};

struct SeededRandom(StdRng);

impl SeededRandom {
    fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSourcePort for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

fn garment(
    id: &str,
    category: ClothingCategory,
    seasons: &[Season],
    occasions: &[Occasion],
    favorite: bool,
) -> ClothingItem {
    ClothingItem {
        id: id.into(),
        name: format!("item {id}"),
        category,
        image_uri: format!("file:///{id}.jpg"),
        colors: BTreeSet::new(),
        seasons: seasons.iter().copied().collect(),
        occasions: occasions.iter().copied().collect(),
        brand: None,
        times_worn: 0,
        last_worn: None,
        favorite,
        notes: None,
    }
}

fn ids(recommendation: &Recommendation) -> Vec<String> {
    recommendation
        .item_ids()
        .into_iter()
        .map(ItemId::into_inner)
        .collect()
}

fn sample_items() -> Vec<ClothingItem> {
    sample_wardrobe().clothing_items
}

#[test]
fn scripted_draws_pick_top_bottom_and_shoes() {
    let items = sample_items();
    let request = OutfitRequest::new()
        .occasion(Occasion::Casual)
        .season(Season::Summer);
    // top: favorite coin, index; dress coin (miss); bottom: coin, index; shoes: coin, index
    let mut rng = ScriptedRandom::new([0.9, 0.0, 0.5, 0.9, 0.0, 0.9, 0.0]);

    let outfit = recommend(&request, &items, &mut rng);

    assert_eq!(ids(&outfit), ["1", "2", "5"]);
    assert_eq!(outfit.slot(Slot::Top), Some(&ItemId::from("1")));
    assert_eq!(outfit.slot(Slot::Bottom), Some(&ItemId::from("2")));
    assert_eq!(outfit.slot(Slot::Shoes), Some(&ItemId::from("5")));
    assert_eq!(rng.consumed(), 7);
}

#[test]
fn dress_replaces_the_already_chosen_top() {
    let items = sample_items();
    let request = OutfitRequest::new()
        .occasion(Occasion::Casual)
        .season(Season::Summer);
    let mut rng = ScriptedRandom::new([0.9, 0.0, 0.7, 0.9, 0.0, 0.9, 0.0]);

    let outfit = recommend(&request, &items, &mut rng);

    assert_eq!(ids(&outfit), ["4", "5"]);
    assert_eq!(outfit.slot(Slot::Top), None);
    assert_eq!(outfit.slot(Slot::Bottom), None);
}

#[test]
fn dress_preference_skips_the_dress_coin() {
    let items = sample_items();
    let request = OutfitRequest::new()
        .season(Season::Summer)
        .occasion(Occasion::Casual)
        .style_preference("Dresses");
    let mut rng = ScriptedRandom::new([0.9, 0.0, 0.9, 0.0, 0.9, 0.0]);

    let outfit = recommend(&request, &items, &mut rng);

    assert_eq!(ids(&outfit), ["4", "5"]);
    assert_eq!(rng.consumed(), 6);
}

#[test]
fn low_favorite_coin_picks_from_the_whole_slot() {
    let items = vec![
        garment("fav", ClothingCategory::Tops, &[Season::All], &[Occasion::Casual], true),
        garment("plain", ClothingCategory::Tops, &[Season::All], &[Occasion::Casual], false),
    ];

    let mut biased = ScriptedRandom::new([0.31, 0.99]);
    assert_eq!(ids(&recommend(&OutfitRequest::new(), &items, &mut biased)), ["fav"]);

    let mut unbiased = ScriptedRandom::new([0.3, 0.99]);
    assert_eq!(ids(&recommend(&OutfitRequest::new(), &items, &mut unbiased)), ["plain"]);
}

#[test]
fn slot_without_favorites_takes_no_coin() {
    let items = vec![
        garment("a", ClothingCategory::Shoes, &[Season::All], &[], false),
        garment("b", ClothingCategory::Shoes, &[Season::All], &[], false),
    ];
    let mut rng = ScriptedRandom::new([0.6]);

    let outfit = recommend(&OutfitRequest::new(), &items, &mut rng);

    assert_eq!(ids(&outfit), ["b"]);
    assert_eq!(rng.consumed(), 1);
}

#[test]
fn cold_weather_adds_outerwear_outside_cold_seasons() {
    let items = vec![
        garment("shirt", ClothingCategory::Tops, &[Season::Spring], &[], false),
        garment("coat", ClothingCategory::Outerwear, &[Season::All], &[], false),
    ];

    let mild = OutfitRequest::new().season(Season::Spring);
    let outfit = recommend(&mild, &items, &mut ScriptedRandom::constant(0.0));
    assert_eq!(ids(&outfit), ["shirt"]);

    let cold = OutfitRequest::new().season(Season::Spring).weather(" Cold ");
    let outfit = recommend(&cold, &items, &mut ScriptedRandom::constant(0.0));
    assert_eq!(ids(&outfit), ["shirt", "coat"]);
}

#[test]
fn dressy_occasions_always_accessorize() {
    let items = vec![
        garment("tie", ClothingCategory::Accessories, &[Season::All], &[Occasion::Formal, Occasion::Casual], false),
    ];

    // every draw is 0.0, so the accessory coin alone would never pass
    let formal = OutfitRequest::new().occasion(Occasion::Formal);
    assert_eq!(ids(&recommend(&formal, &items, &mut ScriptedRandom::constant(0.0))), ["tie"]);

    let casual = OutfitRequest::new().occasion(Occasion::Casual);
    assert!(recommend(&casual, &items, &mut ScriptedRandom::constant(0.0)).is_empty());
    assert_eq!(ids(&recommend(&casual, &items, &mut ScriptedRandom::constant(0.5))), ["tie"]);
}

#[test]
fn color_and_exclusion_filters_narrow_the_pool() {
    let mut red = garment("red", ClothingCategory::Tops, &[Season::All], &[], false);
    red.colors = BTreeSet::from([ClothingColor::Red, ClothingColor::White]);
    let mut blue = garment("blue", ClothingCategory::Tops, &[Season::All], &[], false);
    blue.colors = BTreeSet::from([ClothingColor::Blue]);
    let items = vec![red, blue];

    let request = OutfitRequest::new().colors([ClothingColor::White]);
    for seed in 0..20 {
        let outfit = recommend(&request, &items, &mut SeededRandom::new(seed));
        assert_eq!(ids(&outfit), ["red"]);
    }

    let request = OutfitRequest::new().exclude([ItemId::from("red")]);
    for seed in 0..20 {
        let outfit = recommend(&request, &items, &mut SeededRandom::new(seed));
        assert_eq!(ids(&outfit), ["blue"]);
    }
}

#[test]
fn empty_pool_yields_empty_result_without_draws() {
    let mut rng = ScriptedRandom::new([]);
    let outfit = recommend(&OutfitRequest::new().occasion(Occasion::Formal), &[], &mut rng);

    assert!(outfit.is_empty());
    assert_eq!(rng.consumed(), 0);
}

#[test]
fn formal_request_only_returns_formal_items() {
    let items = sample_items();
    let request = OutfitRequest::new().occasion(Occasion::Formal);

    for seed in 0..200 {
        let outfit = recommend(&request, &items, &mut SeededRandom::new(seed));
        for id in outfit.item_ids() {
            let item = items.iter().find(|i| i.id == id).unwrap();
            assert!(item.has_occasion(Occasion::Formal), "{id} is not formal");
        }
    }
}

#[test]
fn formal_request_without_formal_items_is_empty() {
    let items: Vec<ClothingItem> = sample_items()
        .into_iter()
        .filter(|i| !i.has_occasion(Occasion::Formal))
        .collect();
    let request = OutfitRequest::new().occasion(Occasion::Formal);

    for seed in 0..50 {
        assert!(recommend(&request, &items, &mut SeededRandom::new(seed)).is_empty());
    }
}

#[test]
fn dress_share_is_roughly_forty_percent_and_never_with_a_bottom() {
    let items = vec![
        garment("dress", ClothingCategory::Dresses, &[Season::Summer], &[], false),
        garment("skirt", ClothingCategory::Bottoms, &[Season::Summer], &[], false),
    ];
    let request = OutfitRequest::new().season(Season::Summer);
    let mut rng = SeededRandom::new(42);

    let mut dresses = 0;
    for _ in 0..1000 {
        let outfit = recommend(&request, &items, &mut rng);
        let has_dress = outfit.slot(Slot::Dress).is_some();
        let has_bottom = outfit.slot(Slot::Bottom).is_some();
        assert!(has_dress != has_bottom, "exactly one of dress/bottom");
        if has_dress {
            dresses += 1;
        }
    }

    assert!((300..=500).contains(&dresses), "dress chosen {dresses} times");
}

#[test]
fn winter_always_includes_exactly_one_outerwear() {
    let items = sample_items();
    let request = OutfitRequest::new().season(Season::Winter);

    for seed in 0..200 {
        let outfit = recommend(&request, &items, &mut SeededRandom::new(seed));
        let layers = outfit
            .picks
            .iter()
            .filter(|p| p.slot == Slot::Outerwear)
            .count();
        assert_eq!(layers, 1);
    }
}

#[test]
fn casual_summer_never_suggests_work_only_pieces() {
    let items = sample_items();
    let request = OutfitRequest::new()
        .occasion(Occasion::Casual)
        .season(Season::Summer);

    for seed in 0..500 {
        let outfit = recommend(&request, &items, &mut SeededRandom::new(seed));
        let ids = ids(&outfit);
        assert!(!ids.contains(&"3".to_string()), "Black Blazer suggested");
        assert!(!ids.contains(&"6".to_string()), "Black Dress Shoes suggested");
    }
}

#[test]
fn picks_follow_slot_order() {
    let items = vec![
        garment("acc", ClothingCategory::Accessories, &[Season::All], &[], false),
        garment("shoe", ClothingCategory::Shoes, &[Season::All], &[], false),
        garment("coat", ClothingCategory::Outerwear, &[Season::All], &[], false),
        garment("pants", ClothingCategory::Bottoms, &[Season::All], &[], false),
        garment("tee", ClothingCategory::Tops, &[Season::All], &[], false),
    ];
    let request = OutfitRequest::new().season(Season::Winter);
    // dress pool is empty, so no dress coin; the accessory coin is 0.5
    let outfit = recommend(&request, &items, &mut ScriptedRandom::constant(0.5));

    let slots: Vec<Slot> = outfit.picks.iter().map(|p| p.slot).collect();
    assert_eq!(
        slots,
        [Slot::Top, Slot::Bottom, Slot::Outerwear, Slot::Shoes, Slot::Accessory]
    );
}
