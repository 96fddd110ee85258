use anyhow::Result;
use wd_app::WardrobeStore;

use super::format::join;
use super::Rendered;

pub fn run(store: &WardrobeStore) -> Result<Rendered> {
    let wardrobe = store.wardrobe();
    let stats = wardrobe.stats();

    let mut text = format!(
        "{} items ({} favorites), {} outfits, {} wears recorded",
        stats.total_items, stats.favorite_items, stats.total_outfits, stats.total_wears
    );
    if !stats.items_per_category.is_empty() {
        let per_category = join(
            stats
                .items_per_category
                .iter()
                .map(|(category, count)| format!("{category}: {count}")),
        );
        text.push_str(&format!("\n{per_category}"));
    }
    if let Some(outfit) = wardrobe.recent_outfits(1).first().filter(|o| o.last_worn.is_some()) {
        text.push_str(&format!("\nLast worn outfit: {}", outfit.name));
    }
    if let Some(photo) = wardrobe.latest_outfit_photo() {
        text.push_str(&format!("\nLatest photo: {photo}"));
    }

    Rendered::new(&stats, text)
}
