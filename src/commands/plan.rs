use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;
use wd_app::WardrobeStore;
use wd_core::wardrobe::{
    Outfit, PlannedOutfit, PlannedOutfitDraft, PlannedOutfitPatch, Wardrobe,
};
use wd_core::{OutfitId, PlanId};

use super::format::{clearable, lines, plan_line};
use super::{not_found, Rendered};
use crate::cli::PlanCommand;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AgendaEntry<'a> {
    plan: &'a PlannedOutfit,
    outfit: &'a Outfit,
}

/// One day of the calendar. Plans whose outfit was removed are listed apart.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DayAgenda<'a> {
    date: NaiveDate,
    entries: Vec<AgendaEntry<'a>>,
    missing_outfit: Vec<&'a PlannedOutfit>,
}

impl<'a> DayAgenda<'a> {
    fn build(wardrobe: &'a Wardrobe, date: NaiveDate) -> Self {
        let entries: Vec<AgendaEntry> = wardrobe
            .agenda_for(date)
            .into_iter()
            .map(|(plan, outfit)| AgendaEntry { plan, outfit })
            .collect();
        let missing_outfit = wardrobe
            .planned_outfits_on(date)
            .into_iter()
            .filter(|plan| !entries.iter().any(|e| e.plan.id == plan.id))
            .collect();
        Self {
            date,
            entries,
            missing_outfit,
        }
    }

    fn text(&self) -> String {
        let resolved = self
            .entries
            .iter()
            .map(|e| plan_line(e.plan, Some(e.outfit.name.as_str())));
        let dangling = self.missing_outfit.iter().map(|plan| plan_line(plan, None));
        lines(
            resolved.chain(dangling),
            &format!("Nothing planned on {}.", self.date),
        )
    }
}

fn outfit_name<'a>(store: &'a WardrobeStore, id: &OutfitId) -> Option<&'a str> {
    store.wardrobe().outfit(id).map(|o| o.name.as_str())
}

pub async fn run(command: PlanCommand, store: &mut WardrobeStore) -> Result<Rendered> {
    match command {
        PlanCommand::Add {
            date,
            outfit,
            event,
        } => {
            let outfit_id = OutfitId::from(outfit);
            if store.wardrobe().outfit(&outfit_id).is_none() {
                return Err(not_found("outfit", outfit_id.into_inner()));
            }
            let mut draft = PlannedOutfitDraft::new(date, outfit_id);
            if let Some(event) = event.filter(|e| !e.trim().is_empty()) {
                draft = draft.event(event);
            }
            let plan = store.plan_outfit(draft).await;
            let text = format!("Planned {}", plan_line(&plan, outfit_name(store, &plan.outfit_id)));
            Rendered::new(&plan, text)
        }
        PlanCommand::Update {
            id,
            date,
            outfit,
            event,
        } => {
            let id = PlanId::from(id);
            let patch = PlannedOutfitPatch {
                date,
                outfit_id: outfit.map(OutfitId::from),
                event: clearable(event),
            };
            if !store.update_planned_outfit(&id, patch).await {
                return Err(not_found("plan", id.into_inner()));
            }
            let plan = store
                .wardrobe()
                .planned_outfits()
                .iter()
                .find(|p| p.id == id)
                .ok_or_else(|| not_found("plan", id.as_str()))?;
            let text = format!("Updated {}", plan_line(plan, outfit_name(store, &plan.outfit_id)));
            Rendered::new(plan, text)
        }
        PlanCommand::Remove { id } => {
            let plan = store
                .remove_planned_outfit(&PlanId::from(id.as_str()))
                .await
                .ok_or_else(|| not_found("plan", id))?;
            Rendered::new(&plan, format!("Removed plan for {}", plan.date))
        }
        PlanCommand::On { date } => {
            let date = date.unwrap_or_else(|| store.today());
            let agenda = DayAgenda::build(store.wardrobe(), date);
            let text = agenda.text();
            Rendered::new(&agenda, text)
        }
    }
}
