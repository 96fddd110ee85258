use wd_core::wardrobe::{ClothingItem, Outfit, PlannedOutfit};

pub(crate) fn join<T: std::fmt::Display>(values: impl IntoIterator<Item = T>) -> String {
    values
        .into_iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn star(favorite: bool) -> &'static str {
    if favorite {
        " ★"
    } else {
        ""
    }
}

pub(crate) fn item_line(item: &ClothingItem) -> String {
    let mut line = format!(
        "{}  {}{}  [{}]  worn {}x",
        item.id,
        item.name,
        star(item.favorite),
        item.category,
        item.times_worn
    );
    if !item.colors.is_empty() {
        line.push_str(&format!("  colors: {}", join(&item.colors)));
    }
    if let Some(last_worn) = item.last_worn {
        line.push_str(&format!("  last worn {last_worn}"));
    }
    line
}

pub(crate) fn outfit_line(outfit: &Outfit) -> String {
    let mut line = format!(
        "{}  {}{}  [{}]  {} items  worn {}x",
        outfit.id,
        outfit.name,
        star(outfit.favorite),
        outfit.occasion,
        outfit.items.len(),
        outfit.times_worn
    );
    if let Some(last_worn) = outfit.last_worn {
        line.push_str(&format!("  last worn {last_worn}"));
    }
    line
}

pub(crate) fn plan_line(plan: &PlannedOutfit, outfit_name: Option<&str>) -> String {
    let mut line = format!(
        "{}  {}  {}",
        plan.id,
        plan.date,
        outfit_name.unwrap_or("(missing outfit)")
    );
    if let Some(event) = &plan.event {
        line.push_str(&format!("  {event}"));
    }
    line
}

pub(crate) fn lines(lines: impl IntoIterator<Item = String>, empty: &str) -> String {
    let text = lines.into_iter().collect::<Vec<_>>().join("\n");
    if text.is_empty() {
        empty.to_string()
    } else {
        text
    }
}

/// Empty text clears an optional field.
pub(crate) fn clearable(value: Option<String>) -> Option<Option<String>> {
    value.map(|v| {
        let trimmed = v.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}
