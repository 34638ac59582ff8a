use super::DataStore;
use crate::book::UniquePersonList;
use crate::error::{AddressBookError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<PathBuf> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if !parent.exists() {
            fs::create_dir_all(&parent).map_err(AddressBookError::Io)?;
        }
        Ok(parent)
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<UniquePersonList> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no data file yet, starting empty");
            return Ok(UniquePersonList::new());
        }
        let content = fs::read_to_string(&self.path).map_err(AddressBookError::Io)?;
        if content.trim().is_empty() {
            return Ok(UniquePersonList::new());
        }
        let book: UniquePersonList = serde_json::from_str(&content).map_err(|e| {
            AddressBookError::Store(format!(
                "could not read {}: {}",
                self.path.display(),
                e
            ))
        })?;
        debug!(path = %self.path.display(), persons = book.len(), "loaded address book");
        Ok(book)
    }

    fn save(&mut self, book: &UniquePersonList) -> Result<()> {
        let dir = self.ensure_parent_dir()?;
        let content = serde_json::to_string_pretty(book).map_err(AddressBookError::Serialization)?;

        // Atomic write: temp file in the same directory, then rename over.
        let tmp_file = dir.join(format!(".addressbook-{}.tmp", Uuid::new_v4()));
        if let Err(e) = fs::write(&tmp_file, content)
            .and_then(|()| fs::rename(&tmp_file, &self.path))
        {
            let _ = fs::remove_file(&tmp_file);
            return Err(AddressBookError::Io(e));
        }

        debug!(path = %self.path.display(), persons = book.len(), "saved address book");
        Ok(())
    }
}
