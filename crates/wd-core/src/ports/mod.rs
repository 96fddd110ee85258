//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. The core only ever sees these traits;
//! file storage, the system clock and the OS random generator live behind
//! them in `wd-infra`.

mod clock;
pub mod image_analysis;
mod random;
pub mod snapshot;

pub use clock::*;
pub use image_analysis::{ImageAnalysis, ImageAnalysisPort};
pub use random::RandomSourcePort;
pub use snapshot::{SnapshotMigrationPort, WardrobeSnapshotPort};
