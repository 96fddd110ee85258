use serde_json::json;
use tempfile::TempDir;
use wd_core::ports::WardrobeSnapshotPort;
use wd_core::wardrobe::{sample::sample_wardrobe, Wardrobe, WardrobeSnapshot, CURRENT_SCHEMA_VERSION};
use wd_infra::snapshot::{FileSnapshotStore, SnapshotMigrationError};

fn store_in(dir: &TempDir) -> FileSnapshotStore {
    FileSnapshotStore::new(dir.path().join("nested").join("wardrobe.json"))
}

#[tokio::test]
async fn missing_file_loads_as_none() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    assert!(store.load().await.unwrap().is_none());
    assert!(!store.path().exists());
}

#[tokio::test]
async fn saved_snapshot_loads_back_unchanged() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let mut wardrobe = Wardrobe::from_snapshot(sample_wardrobe());
    wardrobe.add_outfit_photo("file:///mirror.jpg");

    store.save(&wardrobe.snapshot()).await.unwrap();
    let loaded = store.load().await.unwrap().unwrap();

    assert_eq!(loaded, wardrobe.snapshot());
    assert!(!store.path().with_extension("json.tmp").exists());
}

#[tokio::test]
async fn save_writes_pretty_versioned_json() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.save(&WardrobeSnapshot::default()).await.unwrap();
    let text = std::fs::read_to_string(store.path()).unwrap();

    assert!(text.contains('\n'));
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["schemaVersion"], json!(CURRENT_SCHEMA_VERSION));
}

#[tokio::test]
async fn corrupt_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    std::fs::write(store.path(), "{ not json").unwrap();

    assert!(store.load().await.is_err());
}

#[tokio::test]
async fn legacy_envelope_is_migrated_and_rewritten() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let legacy = json!({
        "state": {
            "clothingItems": [{
                "id": "1",
                "name": "White T-Shirt",
                "category": "tops",
                "imageUri": "file:///tee.jpg",
                "colors": ["white"],
                "seasons": ["summer"],
                "occasions": ["casual"],
                "brand": "",
                "timesWorn": 3,
                "lastWorn": "2025-05-20",
                "favorite": true
            }],
            "outfits": [],
            "plannedOutfits": [],
            "outfitPhotos": []
        },
        "version": 0
    });
    std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    std::fs::write(store.path(), legacy.to_string()).unwrap();

    let snapshot = store.load().await.unwrap().unwrap();

    assert_eq!(snapshot.schema_version, CURRENT_SCHEMA_VERSION);
    assert_eq!(snapshot.clothing_items.len(), 1);
    assert_eq!(snapshot.clothing_items[0].brand, None);
    assert_eq!(snapshot.clothing_items[0].times_worn, 3);

    let rewritten: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
    assert_eq!(rewritten["schemaVersion"], json!(CURRENT_SCHEMA_VERSION));
    assert!(rewritten.get("state").is_none());
}

#[tokio::test]
async fn newer_schema_is_refused() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    std::fs::write(store.path(), r#"{"schemaVersion": 99, "clothingItems": []}"#).unwrap();

    let err = store.load().await.unwrap_err();

    assert!(matches!(
        err.downcast_ref::<SnapshotMigrationError>(),
        Some(SnapshotMigrationError::UnsupportedVersion { found: 99, .. })
    ));
    // untouched on failure
    assert!(std::fs::read_to_string(store.path()).unwrap().contains("99"));
}
