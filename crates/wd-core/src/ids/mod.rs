//! ID type wrappers for type safety.

mod id_macro;

use serde::{Deserialize, Serialize};

use id_macro::impl_id;

/// Identifier of a single garment.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

/// Identifier of a saved outfit.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutfitId(String);

/// Identifier of a calendar entry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanId(String);

impl_id!(ItemId, OutfitId, PlanId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        let a = ItemId::new();
        let b = ItemId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn legacy_numeric_ids_round_trip_as_plain_strings() {
        let id: OutfitId = serde_json::from_str("\"3\"").unwrap();
        assert_eq!(id.as_str(), "3");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"3\"");
    }

    #[test]
    fn ids_compare_by_value() {
        assert_eq!(PlanId::from("7"), PlanId::from("7".to_string()));
        assert_eq!(ItemId::from("1").to_string(), "1");
    }
}
