pub mod config;
pub mod init;
pub mod paths;
pub mod tracing;
pub mod wiring;

pub use config::load_config;
pub use init::resolve_config;
pub use paths::default_data_root;
pub use wiring::{wire_dependencies, AppDeps};
