use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};
use wd_core::{
    ports::WardrobeSnapshotPort,
    wardrobe::{WardrobeSnapshot, CURRENT_SCHEMA_VERSION},
};

use super::migration::SnapshotMigrator;

/// Wardrobe snapshot stored as one pretty-printed JSON file.
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    /// Store backed by the file at `path`; nothing is touched until the
    /// first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create snapshot dir failed: {}", dir.display()))?;
        }
        Ok(())
    }

    /// Writes to a sibling temp file and renames it over the target, so
    /// readers see either the old or the new snapshot.
    async fn atomic_write(&self, content: &str) -> Result<()> {
        self.ensure_parent_dir().await?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp snapshot failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp snapshot to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}

#[async_trait]
impl WardrobeSnapshotPort for FileSnapshotStore {
    /// Reads, migrates and decodes the snapshot.
    ///
    /// A missing file is a fresh install and yields `Ok(None)`. Snapshots
    /// upgraded from an older schema are written back immediately.
    async fn load(&self) -> Result<Option<WardrobeSnapshot>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no wardrobe snapshot yet");
                return Ok(None);
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read snapshot failed: {}", self.path.display()))
            }
        };

        let document: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("parse snapshot failed: {}", self.path.display()))?;
        let original_version = SnapshotMigrator::detect_version(&document)?;
        let migrated = SnapshotMigrator::new().migrate_to_latest(document)?;
        let snapshot: WardrobeSnapshot =
            serde_json::from_value(migrated).context("decode snapshot failed")?;

        if original_version < CURRENT_SCHEMA_VERSION {
            info!(
                from = original_version,
                to = CURRENT_SCHEMA_VERSION,
                "re-saving migrated wardrobe snapshot"
            );
            self.save(&snapshot).await?;
        }

        Ok(Some(snapshot))
    }

    async fn save(&self, snapshot: &WardrobeSnapshot) -> Result<()> {
        let content =
            serde_json::to_string_pretty(snapshot).context("serialize snapshot failed")?;

        self.atomic_write(&content).await
    }
}
