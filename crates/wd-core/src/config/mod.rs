//! # Pure Data Module - Data Transfer Objects Only
//!
//! ## Responsibilities
//!
//! - Define configuration data structures
//! - Provide TOML → DTO mapping
//!
//! ## Prohibited
//!
//! - No business logic or policies
//! - No validation logic
//! - No default value calculation
//!
//! > **This module contains data only.** Missing keys become empty values;
//! > filling them in is the caller's job.

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Snapshot file path (path info only, no existence check)
    pub snapshot_path: PathBuf,

    /// Seed the starter wardrobe when no snapshot exists yet (`None` = unset)
    pub seed_sample_data: Option<bool>,

    /// `tracing` filter directives (may be empty)
    pub log_filter: String,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// **Prohibited**: This method must NOT contain any validation
    /// or default value logic. Empty strings are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            snapshot_path: PathBuf::from(
                toml_value
                    .get("storage")
                    .and_then(|s| s.get("snapshot_path"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            seed_sample_data: toml_value
                .get("wardrobe")
                .and_then(|w| w.get("seed_sample_data"))
                .and_then(|v| v.as_bool()),
            log_filter: toml_value
                .get("logging")
                .and_then(|l| l.get("filter"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            snapshot_path: PathBuf::new(),
            seed_sample_data: None,
            log_filter: String::new(),
        }
    }

    /// Create AppConfig with system-default paths for production use
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Base directory for app data (e.g., `~/.local/share/wardrobe`)
    pub fn with_system_defaults(data_dir: PathBuf) -> Self {
        Self {
            snapshot_path: data_dir.join("wardrobe.json"),
            seed_sample_data: Some(true),
            log_filter: String::new(),
        }
    }
}
