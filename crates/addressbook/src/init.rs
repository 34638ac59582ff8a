//! # Startup: Locating Data and Configuration
//!
//! ## Data Directory
//!
//! Resolved in order:
//! 1. `ADDRESSBOOK_DATA` environment variable (primarily for testing).
//! 2. The OS-appropriate data directory (via the `directories` crate).
//!
//! `config.toml` is read from the data directory; the data file defaults to
//! `addressbook.json` next to it (see [`crate::config`]).
//!
//! ## File Override
//!
//! An explicit file path (the CLI `--file` flag) wins over the configured
//! `data_file`. The data directory is still used for `config.toml`.

use crate::api::AddressBookApi;
use crate::config::AddressBookConfig;
use crate::error::{AddressBookError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const DATA_DIR_ENV: &str = "ADDRESSBOOK_DATA";

/// Where everything lives for this run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub data_file: PathBuf,
    pub config: AddressBookConfig,
}

pub fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "addressbook", "addressbook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| AddressBookError::Config("could not determine data directory".into()))
}

pub fn load_settings(file_override: Option<PathBuf>) -> Result<Settings> {
    let data_dir = data_dir()?;
    settings_in(&data_dir, file_override)
}

/// Like [`load_settings`], for a known data directory.
pub fn settings_in(data_dir: &Path, file_override: Option<PathBuf>) -> Result<Settings> {
    let config = AddressBookConfig::load(data_dir)?;
    let data_file = file_override.unwrap_or_else(|| config.data_path(data_dir));
    Ok(Settings {
        data_dir: data_dir.to_path_buf(),
        data_file,
        config,
    })
}

/// Opens the file-backed API described by `settings`.
///
/// With `full_view` set, index commands address the whole collection in
/// stored order without a prior `list`.
pub fn open(settings: &Settings, full_view: bool) -> Result<AddressBookApi<FileStore>> {
    let store = FileStore::new(settings.data_file.clone());
    if full_view {
        AddressBookApi::open_with_full_view(store)
    } else {
        AddressBookApi::open(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DataStore;
    use crate::test_utils::typical_book;
    use tempfile::TempDir;

    #[test]
    fn override_wins_over_config() {
        let dir = TempDir::new().unwrap();
        let custom = dir.path().join("elsewhere.json");
        let settings = settings_in(dir.path(), Some(custom.clone())).unwrap();
        assert_eq!(settings.data_file, custom);
        assert_eq!(settings.data_dir, dir.path());
    }

    #[test]
    fn open_loads_existing_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("book.json");
        FileStore::new(file.clone()).save(&typical_book()).unwrap();

        let settings = settings_in(dir.path(), Some(file)).unwrap();
        let api = open(&settings, true).unwrap();
        assert_eq!(api.book().len(), 4);
        assert_eq!(api.view().len(), 4);

        let api = open(&settings, false).unwrap();
        assert!(api.view().is_empty());
    }
}
