use serde_json::{Map, Value};
use thiserror::Error;
use wd_core::ports::SnapshotMigrationPort;
use wd_core::wardrobe::CURRENT_SCHEMA_VERSION;

const COLLECTIONS: [&str; 4] = ["clothingItems", "outfits", "plannedOutfits", "outfitPhotos"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnapshotMigrationError {
    #[error("snapshot schema version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("no migration found from schema version {0}")]
    NoMigrationPath(u32),

    #[error("snapshot document is not a JSON object")]
    NotAnObject,
}

/// Runs the raw snapshot document through the upgrade chain until it reaches
/// [`CURRENT_SCHEMA_VERSION`].
pub struct SnapshotMigrator {
    migrations: Vec<Box<dyn SnapshotMigrationPort>>,
}

impl SnapshotMigrator {
    pub fn new() -> Self {
        Self {
            migrations: vec![Box::new(LegacyEnvelopeMigration)],
        }
    }

    /// Schema version of a raw document.
    ///
    /// Documents without `schemaVersion` are version 0 when they carry the
    /// legacy `state` envelope and current otherwise.
    pub fn detect_version(document: &Value) -> Result<u32, SnapshotMigrationError> {
        let obj = document
            .as_object()
            .ok_or(SnapshotMigrationError::NotAnObject)?;

        if let Some(version) = obj.get("schemaVersion").and_then(Value::as_u64) {
            return Ok(u32::try_from(version).unwrap_or(u32::MAX));
        }
        if obj.contains_key("state") {
            return Ok(0);
        }
        Ok(CURRENT_SCHEMA_VERSION)
    }

    pub fn migrate_to_latest(&self, mut document: Value) -> anyhow::Result<Value> {
        loop {
            let current = Self::detect_version(&document)?;

            if current == CURRENT_SCHEMA_VERSION {
                break;
            }
            if current > CURRENT_SCHEMA_VERSION {
                return Err(SnapshotMigrationError::UnsupportedVersion {
                    found: current,
                    supported: CURRENT_SCHEMA_VERSION,
                }
                .into());
            }

            let migration = self
                .migrations
                .iter()
                .find(|m| m.from_version() == current)
                .ok_or(SnapshotMigrationError::NoMigrationPath(current))?;

            tracing::info!(
                from = migration.from_version(),
                to = migration.to_version(),
                "migrating wardrobe snapshot"
            );
            document = migration.migrate(document)?;
        }

        Ok(document)
    }
}

impl Default for SnapshotMigrator {
    fn default() -> Self {
        Self::new()
    }
}

/// v0 → v1: unwraps the `{ "state": {...}, "version": 0 }` envelope.
///
/// Blank optional strings become absent and timestamps are cut down to their
/// calendar date.
pub struct LegacyEnvelopeMigration;

impl SnapshotMigrationPort for LegacyEnvelopeMigration {
    fn from_version(&self) -> u32 {
        0
    }

    fn to_version(&self) -> u32 {
        1
    }

    fn migrate(&self, document: Value) -> anyhow::Result<Value> {
        let mut state = match document {
            Value::Object(mut obj) => match obj.remove("state") {
                Some(Value::Object(state)) => state,
                Some(_) => anyhow::bail!("legacy snapshot `state` is not an object"),
                None => Map::new(),
            },
            _ => return Err(SnapshotMigrationError::NotAnObject.into()),
        };

        let mut migrated = Map::new();
        migrated.insert("schemaVersion".into(), Value::from(self.to_version()));
        for key in COLLECTIONS {
            let mut collection = state.remove(key).unwrap_or_else(|| Value::Array(Vec::new()));
            if let Value::Array(records) = &mut collection {
                records.iter_mut().for_each(tidy_record);
            }
            migrated.insert(key.into(), collection);
        }

        Ok(Value::Object(migrated))
    }
}

fn tidy_record(record: &mut Value) {
    let Value::Object(fields) = record else {
        return;
    };

    for key in ["brand", "notes", "event"] {
        if fields.get(key).and_then(Value::as_str).is_some_and(|s| s.trim().is_empty()) {
            fields.remove(key);
        }
    }
    for key in ["lastWorn", "date"] {
        if let Some(Value::String(text)) = fields.get_mut(key) {
            if text.len() > 10 && text.is_char_boundary(10) {
                text.truncate(10);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn detects_versions() {
        assert_eq!(SnapshotMigrator::detect_version(&json!({"schemaVersion": 1})), Ok(1));
        assert_eq!(SnapshotMigrator::detect_version(&json!({"state": {}, "version": 0})), Ok(0));
        assert_eq!(SnapshotMigrator::detect_version(&json!({"clothingItems": []})), Ok(1));
        assert_eq!(
            SnapshotMigrator::detect_version(&json!([])),
            Err(SnapshotMigrationError::NotAnObject)
        );
    }

    #[test]
    fn legacy_envelope_is_unwrapped() {
        let legacy = json!({
            "state": {
                "clothingItems": [{
                    "id": "1",
                    "brand": "",
                    "notes": "soft",
                    "lastWorn": "2025-05-20T08:30:00.000Z"
                }],
                "plannedOutfits": [{"id": "p", "date": "2025-06-01", "outfitId": "o", "event": " "}],
                "outfitPhotos": ["file:///a.jpg"]
            },
            "version": 0
        });

        let migrated = SnapshotMigrator::new().migrate_to_latest(legacy).unwrap();

        assert_eq!(migrated["schemaVersion"], json!(1));
        assert_eq!(migrated["outfits"], json!([]));
        assert_eq!(migrated["outfitPhotos"], json!(["file:///a.jpg"]));
        let item = &migrated["clothingItems"][0];
        assert!(item.get("brand").is_none());
        assert_eq!(item["notes"], json!("soft"));
        assert_eq!(item["lastWorn"], json!("2025-05-20"));
        assert!(migrated["plannedOutfits"][0].get("event").is_none());
        assert!(migrated.get("state").is_none());
    }

    #[test]
    fn newer_version_is_rejected() {
        let err = SnapshotMigrator::new()
            .migrate_to_latest(json!({"schemaVersion": 7}))
            .unwrap_err();

        assert_eq!(
            err.downcast_ref::<SnapshotMigrationError>(),
            Some(&SnapshotMigrationError::UnsupportedVersion {
                found: 7,
                supported: CURRENT_SCHEMA_VERSION
            })
        );
    }

    #[test]
    fn missing_step_is_reported() {
        let migrator = SnapshotMigrator { migrations: Vec::new() };
        let err = migrator
            .migrate_to_latest(json!({"state": {}, "version": 0}))
            .unwrap_err();

        assert_eq!(
            err.downcast_ref::<SnapshotMigrationError>(),
            Some(&SnapshotMigrationError::NoMigrationPath(0))
        );
    }
}
