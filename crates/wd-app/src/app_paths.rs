use std::path::{Path, PathBuf};

/// Files the app keeps under one data root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub data_root: PathBuf,
    pub snapshot_path: PathBuf,
    pub config_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppPaths {
    pub fn under(data_root: impl AsRef<Path>) -> Self {
        let data_root = data_root.as_ref();
        Self {
            data_root: data_root.to_path_buf(),
            snapshot_path: data_root.join("wardrobe.json"),
            config_path: data_root.join("config.toml"),
            logs_dir: data_root.join("logs"),
        }
    }
}
