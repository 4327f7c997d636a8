//! tagbooster configuration module
//!
//! Config lives in `.tagbooster.json` at the working root. Every section is
//! optional; missing fields fall back to defaults so a partial file works.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::boost::tokenizer::StemLanguage;

pub const CONFIG_FILE: &str = ".tagbooster.json";
pub const CONFIG_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub boost: BoostConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

/// Where the vocabulary database lives
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Relative paths resolve against the working root
    #[serde(default = "default_database_path")]
    pub path: String,
}

fn default_database_path() -> String {
    "data/tagbooster.db".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
        }
    }
}

/// Matching behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoostConfig {
    /// Relevance assigned to every boosted tag
    #[serde(default = "default_relevance")]
    pub relevance: f32,

    #[serde(default)]
    pub language: StemLanguage,
}

fn default_relevance() -> f32 {
    1.0
}

impl Default for BoostConfig {
    fn default() -> Self {
        Self {
            relevance: default_relevance(),
            language: StemLanguage::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Level for the `tagbooster` target; `RUST_LOG` overrides it
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            database: DatabaseConfig::default(),
            boost: BoostConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load config from `root`, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(CONFIG_FILE);

        if !config_path.exists() {
            return Self::default();
        }

        match Self::load_from_file(&config_path) {
            Ok(config) => {
                if config.version > CONFIG_VERSION {
                    warn!(
                        "Config version {} is newer than supported version {}",
                        config.version, CONFIG_VERSION
                    );
                }
                config
            }
            Err(e) => {
                warn!("Failed to load {}: {:#}. Using defaults.", CONFIG_FILE, e);
                Self::default()
            }
        }
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let config_path = root.join(CONFIG_FILE);
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    /// Generate default config file content
    pub fn default_json() -> Result<String> {
        Ok(serde_json::to_string_pretty(&Config::default())?)
    }

    /// Absolute database path for this root
    pub fn database_path(&self, root: &Path) -> PathBuf {
        let path = Path::new(&self.database.path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            root.join(path)
        }
    }
}
