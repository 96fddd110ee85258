//! # Dependency Injection / 依赖注入模块
//!
//! The only place that knows both `wd-infra` adapters and `wd-app` use cases.
//! Assembly only: no business decisions, no config validation.

use std::sync::Arc;

use wd_core::config::AppConfig;
use wd_core::ports::{ClockPort, ImageAnalysisPort, RandomSourcePort, WardrobeSnapshotPort};
use wd_infra::{FileSnapshotStore, FilenameImageAnalyzer, StdRandomSource, SystemClock};

/// Port implementations shared by every command.
#[derive(Clone)]
pub struct AppDeps {
    pub snapshots: Arc<dyn WardrobeSnapshotPort>,
    pub clock: Arc<dyn ClockPort>,
    pub analyzer: Arc<dyn ImageAnalysisPort>,
}

pub fn wire_dependencies(config: &AppConfig) -> AppDeps {
    AppDeps {
        snapshots: Arc::new(FileSnapshotStore::new(config.snapshot_path.clone())),
        clock: Arc::new(SystemClock),
        analyzer: Arc::new(FilenameImageAnalyzer::new()),
    }
}

/// OS-seeded, or reproducible when `seed` is given.
pub fn random_source(seed: Option<u64>) -> Box<dyn RandomSourcePort> {
    match seed {
        Some(seed) => Box::new(StdRandomSource::seeded(seed)),
        None => Box::new(StdRandomSource::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn wired_store_writes_to_configured_path() {
        let dir = TempDir::new().unwrap();
        let mut config = AppConfig::empty();
        config.snapshot_path = dir.path().join("closet.json");

        let deps = wire_dependencies(&config);
        deps.snapshots
            .save(&wd_core::wardrobe::WardrobeSnapshot::default())
            .await
            .unwrap();

        assert!(config.snapshot_path.exists());
    }

    #[test]
    fn seeded_sources_agree() {
        let mut a = random_source(Some(5));
        let mut b = random_source(Some(5));
        assert_eq!(a.next_unit(), b.next_unit());
    }
}
