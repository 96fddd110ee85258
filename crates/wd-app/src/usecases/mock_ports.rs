//! `mockall` doubles for the ports the use cases depend on.

use async_trait::async_trait;
use chrono::NaiveDate;
use mockall::mock;
use wd_core::ports::{ClockPort, ImageAnalysis, ImageAnalysisPort, WardrobeSnapshotPort};
use wd_core::wardrobe::WardrobeSnapshot;

mock! {
    pub Snapshots {}

    #[async_trait]
    impl WardrobeSnapshotPort for Snapshots {
        async fn load(&self) -> anyhow::Result<Option<WardrobeSnapshot>>;
        async fn save(&self, snapshot: &WardrobeSnapshot) -> anyhow::Result<()>;
    }
}

mock! {
    pub Clock {}

    impl ClockPort for Clock {
        fn today(&self) -> NaiveDate;
    }
}

mock! {
    pub Analyzer {}

    #[async_trait]
    impl ImageAnalysisPort for Analyzer {
        async fn analyze(&self, image_uri: &str) -> anyhow::Result<ImageAnalysis>;
    }
}
