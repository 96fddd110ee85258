//! Locating the wardrobe's data root.
//!
//! `WARDROBE_HOME` points the whole app (snapshot, config, logs) at one
//! directory, e.g. a synced folder or a second closet. Without it the platform
//! local data directory is used.

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::Context;

pub const HOME_ENV: &str = "WARDROBE_HOME";
const APP_DIR_NAME: &str = "wardrobe";

/// Data root for this process, from the environment and the platform.
pub fn default_data_root() -> anyhow::Result<PathBuf> {
    data_root_from(std::env::var_os(HOME_ENV), dirs::data_local_dir())
}

fn data_root_from(home: Option<OsString>, data_local: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    if let Some(home) = home.filter(|h| !h.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    data_local
        .map(|dir| dir.join(APP_DIR_NAME))
        .with_context(|| format!("no local data directory on this platform; set {HOME_ENV}"))
}
