//! Configuration with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/kintree/kintree.toml`
//! 3. Environment variables: `KINTREE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Resolved settings for the CLI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Directory the interactive selector searches for lineage files
    pub data_dir: PathBuf,
    /// File suffix the selector filters on
    pub suffix: String,
}

impl Default for Settings {
    fn default() -> Self {
        // A ./data directory takes precedence when one exists
        let data_dir = if Path::new("data").is_dir() {
            PathBuf::from("data")
        } else {
            PathBuf::from(".")
        };
        Self {
            data_dir,
            suffix: ".txt".to_string(),
        }
    }
}

impl Settings {
    /// Load settings: defaults, then the global config file, then
    /// `KINTREE_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        if let Some(path) = Self::global_config_path() {
            builder = builder.add_source(File::from(path).required(false));
        }

        builder
            .add_source(Environment::with_prefix("KINTREE"))
            .build()?
            .try_deserialize()
    }

    /// Path of the global config file, if a home directory exists.
    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "kintree").map(|dirs| dirs.config_dir().join("kintree.toml"))
    }

    /// TOML rendering of these settings, suitable as a config template.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
