//! Working root resolution

use std::path::PathBuf;
use tracing::warn;

use super::config::Config;

/// Environment variable for the working root
pub const HOME_ENV: &str = "TAGBOOSTER_HOME";

/// Working root plus the config loaded from it
pub struct AppPaths {
    pub root: PathBuf,
    pub database: PathBuf,
    pub config: Config,
}

impl AppPaths {
    /// Resolve from environment variable or current directory
    pub fn new() -> Self {
        Self::from_root(get_root())
    }

    pub fn from_root(root: PathBuf) -> Self {
        let config = Config::load(&root);
        Self::from_root_with_config(root, config)
    }

    pub fn from_root_with_config(root: PathBuf, config: Config) -> Self {
        let database = config.database_path(&root);
        Self {
            root,
            database,
            config,
        }
    }
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}

/// Priority: TAGBOOSTER_HOME env var > current directory
pub fn get_root() -> PathBuf {
    if let Ok(path) = std::env::var(HOME_ENV) {
        let root = PathBuf::from(&path);
        if root.exists() {
            return root;
        }
        warn!(
            "{} is set to '{}' but path does not exist. Falling back to current directory.",
            HOME_ENV, path
        );
    }
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
