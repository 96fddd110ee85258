pub mod analysis;
pub mod random;
pub mod snapshot;
pub mod time;

pub use analysis::FilenameImageAnalyzer;
pub use random::StdRandomSource;
pub use snapshot::{FileSnapshotStore, SnapshotMigrator};
pub use time::SystemClock;
