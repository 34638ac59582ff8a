//! # Person Identifiers: Display Index
//!
//! Users refer to persons by number: `delete 2`, `change 1 91234567`. Those
//! numbers are positions in the **last list the user saw**, not positions in
//! the address book. `find Doe` followed by `delete 2` removes the second Doe,
//! whatever its place in the full collection.
//!
//! ## The Snapshot Model
//!
//! A [`DisplayView`] is a copy of the persons a listing command produced, in
//! the order they were shown. It is replaced wholesale by the next listing
//! command and never updated in place. Mutations made after it was captured
//! do not show up in it, so a view can go **stale**: an entry may point at a
//! person the collection no longer holds.
//!
//! Index resolution therefore has two separate failure modes (see
//! [`crate::commands::helpers::resolve_target`]):
//! - the number is outside `1..=len` of the view, or
//! - the number is fine but the person it names is gone from the collection.
//!
//! ## Indexes Are Signed
//!
//! A [`DisplayIndex`] wraps an `i64` so that `0` and negative input survive
//! parsing and are rejected at execution time like any other out-of-range
//! number.

use crate::model::Person;

/// Offset between the 1-based numbers users type and 0-based positions.
pub const DISPLAYED_INDEX_OFFSET: i64 = 1;

/// A user-facing, 1-based index into a [`DisplayView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayIndex(pub i64);

impl DisplayIndex {
    pub fn value(&self) -> i64 {
        self.0
    }

    /// The 0-based position in a view of `len` entries, if in range.
    pub fn position(&self, len: usize) -> Option<usize> {
        let position = usize::try_from(self.0.checked_sub(DISPLAYED_INDEX_OFFSET)?).ok()?;
        (position < len).then_some(position)
    }
}

impl From<i64> for DisplayIndex {
    fn from(value: i64) -> Self {
        DisplayIndex(value)
    }
}

impl std::fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A person paired with the index it is shown under.
#[derive(Debug, Clone, Copy)]
pub struct DisplayedPerson<'a> {
    pub index: usize,
    pub person: &'a Person,
}

/// Ordered snapshot of the persons most recently shown to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayView {
    persons: Vec<Person>,
}

impl DisplayView {
    pub fn new(persons: Vec<Person>) -> Self {
        Self { persons }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    pub fn get(&self, index: DisplayIndex) -> Option<&Person> {
        index.position(self.persons.len()).map(|i| &self.persons[i])
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    /// Iterates entries with their 1-based display index.
    pub fn indexed(&self) -> impl Iterator<Item = DisplayedPerson<'_>> {
        self.persons
            .iter()
            .enumerate()
            .map(|(i, person)| DisplayedPerson {
                index: i + DISPLAYED_INDEX_OFFSET as usize,
                person,
            })
    }
}
