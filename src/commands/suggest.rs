use anyhow::Result;
use serde::Serialize;
use wd_app::{SaveSuggestedOutfit, SuggestOutfit, SuggestedOutfit, WardrobeStore};
use wd_core::recommendation::OutfitRequest;
use wd_core::wardrobe::Outfit;
use wd_core::ItemId;

use super::format::item_line;
use super::Rendered;
use crate::bootstrap::wiring::random_source;
use crate::bootstrap::AppDeps;
use crate::cli::SuggestArgs;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SuggestReport<'a> {
    suggestion: &'a SuggestedOutfit,
    saved: Option<&'a Outfit>,
}

fn request_from(args: &SuggestArgs) -> OutfitRequest {
    let mut request = OutfitRequest::new()
        .colors(args.colors.iter().copied())
        .exclude(args.exclude.iter().map(|id| ItemId::from(id.as_str())));
    if let Some(occasion) = args.occasion {
        request = request.occasion(occasion);
    }
    if let Some(season) = args.season {
        request = request.season(season);
    }
    if let Some(weather) = &args.weather {
        request = request.weather(weather.clone());
    }
    if let Some(mood) = &args.mood {
        request = request.mood(mood.clone());
    }
    if let Some(style) = &args.style {
        request = request.style_preference(style.clone());
    }
    request
}

pub async fn run(args: SuggestArgs, store: &mut WardrobeStore, deps: &AppDeps) -> Result<Rendered> {
    let mut usecase = SuggestOutfit::from_ports(deps.clock.clone(), random_source(args.seed));
    let suggestion = if args.today {
        usecase.for_today(store.wardrobe(), args.occasion)
    } else {
        usecase.execute(store.wardrobe(), request_from(&args))
    };

    let mut text = if suggestion.is_empty() {
        "No matching items for this request.".to_string()
    } else {
        suggestion
            .recommendation
            .picks
            .iter()
            .zip(&suggestion.items)
            .map(|(pick, item)| format!("{:<9} {}", format!("{:?}", pick.slot), item_line(item)))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let saved = if args.save {
        let outfit = SaveSuggestedOutfit::new().execute(store, &suggestion).await?;
        text.push_str(&format!("\nSaved as {} ({})", outfit.name, outfit.id));
        Some(outfit)
    } else {
        None
    };

    let report = SuggestReport {
        suggestion: &suggestion,
        saved: saved.as_ref(),
    };
    Rendered::new(&report, text)
}
