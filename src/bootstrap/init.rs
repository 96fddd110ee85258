//! Startup configuration resolution.
//!
//! The config file only states facts; this is where unset values are filled
//! with system defaults derived from the data root.

use std::path::Path;

use tracing::debug;
use wd_app::AppPaths;
use wd_core::config::AppConfig;

use super::config::load_config;

/// Loads `explicit` (which must exist) or the default `config.toml` (which may
/// not), then fills every unset value from [`AppConfig::with_system_defaults`].
pub fn resolve_config(explicit: Option<&Path>, paths: &AppPaths) -> anyhow::Result<AppConfig> {
    let loaded = match explicit {
        Some(path) => load_config(path)?,
        None if paths.config_path.exists() => load_config(&paths.config_path)?,
        None => {
            debug!(path = %paths.config_path.display(), "no config file, using defaults");
            AppConfig::empty()
        }
    };

    Ok(fill_defaults(loaded, paths))
}

fn fill_defaults(mut config: AppConfig, paths: &AppPaths) -> AppConfig {
    let defaults = AppConfig::with_system_defaults(paths.data_root.clone());

    if config.snapshot_path.as_os_str().is_empty() {
        config.snapshot_path = defaults.snapshot_path;
    }
    if config.seed_sample_data.is_none() {
        config.seed_sample_data = defaults.seed_sample_data;
    }
    if config.log_filter.trim().is_empty() {
        config.log_filter = defaults.log_filter;
    }
    config
}
