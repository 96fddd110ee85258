use async_trait::async_trait;

use crate::wardrobe::WardrobeSnapshot;

/// Durable home of the wardrobe snapshot: read once at startup, rewritten
/// after every mutation.
#[async_trait]
pub trait WardrobeSnapshotPort: Send + Sync {
    /// `Ok(None)` when nothing has been stored yet (fresh install). Any other
    /// failure, including an unreadable or unsupported snapshot, is an error.
    async fn load(&self) -> anyhow::Result<Option<WardrobeSnapshot>>;
    async fn save(&self, snapshot: &WardrobeSnapshot) -> anyhow::Result<()>;
}

/// One step of the snapshot schema upgrade chain, applied to the raw JSON
/// document before it is deserialized.
pub trait SnapshotMigrationPort: Send + Sync {
    fn from_version(&self) -> u32;
    fn to_version(&self) -> u32;
    fn migrate(&self, document: serde_json::Value) -> anyhow::Result<serde_json::Value>;
}
