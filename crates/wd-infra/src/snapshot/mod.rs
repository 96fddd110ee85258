mod file_store;
mod migration;

pub use file_store::FileSnapshotStore;
pub use migration::{LegacyEnvelopeMigration, SnapshotMigrationError, SnapshotMigrator};
