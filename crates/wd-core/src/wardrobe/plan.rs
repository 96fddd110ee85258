use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ids::{OutfitId, PlanId};

/// Binds one outfit to one calendar date. Several plans on the same date are
/// representable; one per day is only a convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedOutfit {
    pub id: PlanId,
    pub date: NaiveDate,
    pub outfit_id: OutfitId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedOutfitDraft {
    pub date: NaiveDate,
    pub outfit_id: OutfitId,
    pub event: Option<String>,
}

impl PlannedOutfitDraft {
    pub fn new(date: NaiveDate, outfit_id: OutfitId) -> Self {
        Self {
            date,
            outfit_id,
            event: None,
        }
    }

    pub fn event(mut self, event: impl Into<String>) -> Self {
        self.event = Some(event.into());
        self
    }

    pub(crate) fn into_plan(self) -> PlannedOutfit {
        PlannedOutfit {
            id: PlanId::new(),
            date: self.date,
            outfit_id: self.outfit_id,
            event: self.event,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlannedOutfitPatch {
    pub date: Option<NaiveDate>,
    pub outfit_id: Option<OutfitId>,
    pub event: Option<Option<String>>,
}

impl PlannedOutfitPatch {
    pub(crate) fn apply(self, plan: &mut PlannedOutfit) {
        if let Some(date) = self.date {
            plan.date = date;
        }
        if let Some(outfit_id) = self.outfit_id {
            plan.outfit_id = outfit_id;
        }
        if let Some(event) = self.event {
            plan.event = event;
        }
    }
}
