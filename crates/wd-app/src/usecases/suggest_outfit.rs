use std::sync::Arc;

use serde::Serialize;
use tracing::info;
use wd_core::ports::{ClockPort, RandomSourcePort};
use wd_core::recommendation::{recommend, OutfitRequest, Recommendation};
use wd_core::wardrobe::{ClothingItem, Occasion, Season, Wardrobe};

/// A recommendation with its ids resolved against the wardrobe.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedOutfit {
    pub request: OutfitRequest,
    pub recommendation: Recommendation,
    /// Picked garments in slot order.
    pub items: Vec<ClothingItem>,
    /// Produced by [`SuggestOutfit::for_today`].
    pub for_today: bool,
}

impl SuggestedOutfit {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Runs the recommendation engine over the live wardrobe.
pub struct SuggestOutfit {
    clock: Arc<dyn ClockPort>,
    rng: Box<dyn RandomSourcePort>,
}

impl SuggestOutfit {
    pub fn from_ports(clock: Arc<dyn ClockPort>, rng: Box<dyn RandomSourcePort>) -> Self {
        Self { clock, rng }
    }

    #[tracing::instrument(name = "usecase.suggest_outfit.execute", skip(self, wardrobe))]
    pub fn execute(&mut self, wardrobe: &Wardrobe, request: OutfitRequest) -> SuggestedOutfit {
        let recommendation = recommend(&request, wardrobe.clothing_items(), self.rng.as_mut());
        let items: Vec<ClothingItem> = recommendation
            .picks
            .iter()
            .filter_map(|pick| wardrobe.item(&pick.item_id).cloned())
            .collect();

        info!(picked = items.len(), "Suggested outfit");
        SuggestedOutfit {
            request,
            recommendation,
            items,
            for_today: false,
        }
    }

    /// Suggestion for the current season; casual unless told otherwise.
    pub fn for_today(&mut self, wardrobe: &Wardrobe, occasion: Option<Occasion>) -> SuggestedOutfit {
        let season = Season::for_month(self.clock.today());
        let request = OutfitRequest::new()
            .season(season)
            .occasion(occasion.unwrap_or(Occasion::Casual));

        SuggestedOutfit {
            for_today: true,
            ..self.execute(wardrobe, request)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::mock_ports::MockClock;
    use chrono::NaiveDate;
    use wd_core::testing::ScriptedRandom;
    use wd_core::wardrobe::sample::sample_wardrobe;

    fn clock_on(date: NaiveDate) -> Arc<MockClock> {
        let mut clock = MockClock::new();
        clock.expect_today().returning(move || date);
        Arc::new(clock)
    }

    #[test]
    fn resolves_picks_to_items_in_slot_order() {
        let wardrobe = Wardrobe::from_snapshot(sample_wardrobe());
        let clock = clock_on(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());
        // top coin+index, dress coin (miss), bottom coin+index, shoes coin+index
        let rng = ScriptedRandom::new([0.9, 0.0, 0.5, 0.9, 0.0, 0.9, 0.0]);
        let mut usecase = SuggestOutfit::from_ports(clock, Box::new(rng));

        let request = OutfitRequest::new()
            .occasion(Occasion::Casual)
            .season(Season::Summer);
        let suggestion = usecase.execute(&wardrobe, request);

        let names: Vec<&str> = suggestion.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["White T-Shirt", "Blue Jeans", "White Sneakers"]);
        assert!(!suggestion.for_today);
    }

    #[test]
    fn for_today_uses_season_from_clock_and_casual_default() {
        let wardrobe = Wardrobe::from_snapshot(sample_wardrobe());
        let clock = clock_on(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
        let mut usecase = SuggestOutfit::from_ports(clock, Box::new(ScriptedRandom::constant(0.5)));

        let suggestion = usecase.for_today(&wardrobe, None);

        assert!(suggestion.for_today);
        assert_eq!(suggestion.request.season, Some(Season::Winter));
        assert_eq!(suggestion.request.occasion, Some(Occasion::Casual));
        for item in &suggestion.items {
            assert!(item.fits_season(Season::Winter), "{} is not for winter", item.name);
        }
    }

    #[test]
    fn empty_wardrobe_gives_empty_suggestion() {
        let clock = clock_on(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());
        let mut usecase = SuggestOutfit::from_ports(clock, Box::new(ScriptedRandom::constant(0.9)));

        let suggestion = usecase.execute(&Wardrobe::new(), OutfitRequest::new());

        assert!(suggestion.is_empty());
    }
}
