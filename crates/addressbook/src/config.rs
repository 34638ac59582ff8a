//! # Configuration
//!
//! Address book configuration is loaded with [`confique`], layered from
//! environment variables, a TOML file and compiled defaults.
//!
//! ## Priority
//!
//! 1. **Environment variables**: `ADDRESSBOOK_DATA_FILE`, `ADDRESSBOOK_LOG_LEVEL`.
//! 2. **Config file**: `config.toml` in the data directory.
//! 3. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! The CLI `--file` flag overrides the data file after loading.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_file` | `addressbook.json` | Where persons are saved; relative paths are under the data directory |
//! | `log_level` | `warn` | Default log filter when `RUST_LOG` is unset |

use crate::error::{AddressBookError, Result};
use confique::Config;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.toml";

// `#[config(default)]` only takes literals; these must match them.
pub const DEFAULT_DATA_FILE: &str = "addressbook.json";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Config, Debug, Clone, PartialEq, Eq)]
pub struct AddressBookConfig {
    /// File the address book is saved to.
    #[config(default = "addressbook.json", env = "ADDRESSBOOK_DATA_FILE")]
    pub data_file: String,

    /// One of error, warn, info, debug, trace.
    #[config(default = "warn", env = "ADDRESSBOOK_LOG_LEVEL")]
    pub log_level: String,
}

impl Default for AddressBookConfig {
    fn default() -> Self {
        Self {
            data_file: DEFAULT_DATA_FILE.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AddressBookConfig {
    /// Loads configuration from the environment and `config.toml` in `data_dir`.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let config = Self::builder()
            .env()
            .file(data_dir.join(CONFIG_FILE_NAME))
            .load()
            .map_err(|e| AddressBookError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.data_file.trim().is_empty() {
            return Err(AddressBookError::Config("data_file cannot be empty".into()));
        }
        if !LOG_LEVELS.contains(&self.log_level().as_str()) {
            return Err(AddressBookError::Config(format!(
                "unknown log_level '{}' (expected one of {})",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }

    /// The data file path, resolved against `data_dir` when relative.
    pub fn data_path(&self, data_dir: &Path) -> PathBuf {
        let path = PathBuf::from(&self.data_file);
        if path.is_absolute() {
            path
        } else {
            data_dir.join(path)
        }
    }

    /// The log level, normalized to lowercase.
    pub fn log_level(&self) -> String {
        self.log_level.trim().to_lowercase()
    }

    /// `key = value` lines for display.
    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        vec![
            ("data_file", self.data_file.clone()),
            ("log_level", self.log_level.clone()),
        ]
    }
}
