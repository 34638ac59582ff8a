//! # The Canonical Collection
//!
//! [`UniquePersonList`] is the single owned list of persons for a session.
//! It keeps insertion order and guarantees no two entries are the same person
//! (see [`Person`] for what "same" means).
//!
//! Only the list itself mutates its contents. Commands borrow it mutably for
//! the duration of one `execute` call; views hold copies, never references.
//!
//! ## Replace
//!
//! Editing a person is remove-then-add. [`UniquePersonList::replace`] does both
//! as one step. The new person takes the old one's position; if it collides
//! with another entry, the removed person is put back instead and the list is
//! returned unchanged.

use crate::error::{AddressBookError, Result};
use crate::model::Person;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Person>", into = "Vec<Person>")]
pub struct UniquePersonList {
    persons: Vec<Person>,
}

impl UniquePersonList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from `persons`, failing on the first duplicate.
    pub fn from_persons(persons: impl IntoIterator<Item = Person>) -> Result<Self> {
        let mut list = Self::new();
        for person in persons {
            list.add(person)?;
        }
        Ok(list)
    }

    pub fn contains(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p == person)
    }

    /// The stored entry equal to `person`.
    ///
    /// Equality ignores tags and privacy flags, so the stored entry may carry
    /// different ones than `person`.
    pub fn find(&self, person: &Person) -> Option<&Person> {
        self.persons.iter().find(|p| *p == person)
    }

    pub fn add(&mut self, person: Person) -> Result<()> {
        if self.contains(&person) {
            return Err(AddressBookError::DuplicatePerson);
        }
        self.persons.push(person);
        Ok(())
    }

    /// Removes the entry equal to `person` and returns it.
    pub fn remove(&mut self, person: &Person) -> Result<Person> {
        let position = self
            .position(person)
            .ok_or(AddressBookError::PersonNotFound)?;
        Ok(self.persons.remove(position))
    }

    /// Swaps `old` for `new`, leaving the list untouched on failure.
    pub fn replace(&mut self, old: &Person, new: Person) -> Result<()> {
        let position = self.position(old).ok_or(AddressBookError::PersonNotFound)?;
        let removed = self.persons.remove(position);
        if self.contains(&new) {
            self.persons.insert(position, removed);
            return Err(AddressBookError::DuplicatePerson);
        }
        self.persons.insert(position, new);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.persons.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Person> {
        self.persons.iter()
    }

    /// A copy of every person, in insertion order.
    pub fn all(&self) -> Vec<Person> {
        self.persons.clone()
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    fn position(&self, person: &Person) -> Option<usize> {
        self.persons.iter().position(|p| p == person)
    }
}

impl TryFrom<Vec<Person>> for UniquePersonList {
    type Error = AddressBookError;

    fn try_from(persons: Vec<Person>) -> Result<Self> {
        Self::from_persons(persons)
    }
}

impl From<UniquePersonList> for Vec<Person> {
    fn from(list: UniquePersonList) -> Self {
        list.persons
    }
}

impl<'a> IntoIterator for &'a UniquePersonList {
    type Item = &'a Person;
    type IntoIter = std::slice::Iter<'a, Person>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
