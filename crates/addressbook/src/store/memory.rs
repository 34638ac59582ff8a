use super::DataStore;
use crate::book::UniquePersonList;
use crate::error::Result;

/// Keeps the saved collection in memory and counts saves.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    saved: UniquePersonList,
    save_count: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `book`, as if it had been saved earlier.
    pub fn with_book(book: UniquePersonList) -> Self {
        Self {
            saved: book,
            save_count: 0,
        }
    }

    pub fn saved(&self) -> &UniquePersonList {
        &self.saved
    }

    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<UniquePersonList> {
        Ok(self.saved.clone())
    }

    fn save(&mut self, book: &UniquePersonList) -> Result<()> {
        self.saved = book.clone();
        self.save_count += 1;
        Ok(())
    }
}
