//! # Domain Model: Persons
//!
//! A [`Person`] is the stored contact: name, phone, email, address and tags.
//! Persons are immutable once built. Editing a person means building a new
//! one (see [`Person::with_phone`]) and swapping it into the collection.
//!
//! ## Identity
//!
//! Two persons are the same person when their name, phone, email and address
//! values are equal. Tags and privacy flags do not count. This is the
//! equality [`crate::book::UniquePersonList`] enforces uniqueness with, and it
//! is what `PartialEq` on `Person` implements.
//!
//! ## Raw vs Validated
//!
//! [`PersonRecord`] is the unvalidated shape: plain strings plus privacy
//! flags. It is what the parser produces and what the JSON store writes.
//! Turning a record into a `Person` runs every field check; the first failing
//! field is reported as a [`FieldError`].
//!
//! ## Text Forms
//!
//! - [`Person::as_text_show_all`]: every field, private ones marked `(private)`.
//!   This is also the `Display` output.
//! - [`Person::as_text_hide_private`]: private fields left out.

use crate::error::FieldError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub mod fields;
pub mod tag;

pub use fields::{Address, Email, Name, Phone};
pub use tag::Tag;

const PRIVATE_MARKER: &str = "(private) ";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "PersonRecord", into = "PersonRecord")]
pub struct Person {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    tags: BTreeSet<Tag>,
}

impl Person {
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        tags: impl IntoIterator<Item = Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags: tags.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Builds a copy of this person with a new phone number.
    ///
    /// The phone keeps its current privacy flag. Fails if `raw_phone` is not
    /// a valid phone number; `self` is never touched.
    pub fn with_phone(&self, raw_phone: &str) -> Result<Person, FieldError> {
        let phone = Phone::new(raw_phone, self.phone.is_private())?;
        Ok(Person {
            phone,
            ..self.clone()
        })
    }

    pub fn as_text_show_all(&self) -> String {
        let mut text = format!("{} Phone:", self.name);
        push_field(&mut text, self.phone.value(), self.phone.is_private());
        text.push_str(" Email:");
        push_field(&mut text, self.email.value(), self.email.is_private());
        text.push_str(" Address:");
        push_field(&mut text, self.address.value(), self.address.is_private());
        text.push_str(" Tags:");
        text.push_str(&self.tags_text());
        text
    }

    pub fn as_text_hide_private(&self) -> String {
        let mut text = self.name.to_string();
        if !self.phone.is_private() {
            text.push_str(&format!(" Phone:{}", self.phone));
        }
        if !self.email.is_private() {
            text.push_str(&format!(" Email:{}", self.email));
        }
        if !self.address.is_private() {
            text.push_str(&format!(" Address:{}", self.address));
        }
        text.push_str(" Tags:");
        text.push_str(&self.tags_text());
        text
    }

    fn tags_text(&self) -> String {
        self.tags.iter().map(Tag::to_string).collect()
    }
}

fn push_field(text: &mut String, value: &str, is_private: bool) {
    if is_private {
        text.push_str(PRIVATE_MARKER);
    }
    text.push_str(value);
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.phone == other.phone
            && self.email == other.email
            && self.address == other.address
    }
}

impl Eq for Person {}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_text_show_all())
    }
}

/// Unvalidated person data, as typed by a user or read from storage.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PersonRecord {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub phone_private: bool,
    pub email: String,
    #[serde(default)]
    pub email_private: bool,
    pub address: String,
    #[serde(default)]
    pub address_private: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl TryFrom<PersonRecord> for Person {
    type Error = FieldError;

    fn try_from(record: PersonRecord) -> Result<Self, Self::Error> {
        Person::try_from(&record)
    }
}

impl TryFrom<&PersonRecord> for Person {
    type Error = FieldError;

    fn try_from(record: &PersonRecord) -> Result<Self, Self::Error> {
        let name = Name::new(&record.name)?;
        let phone = Phone::new(&record.phone, record.phone_private)?;
        let email = Email::new(&record.email, record.email_private)?;
        let address = Address::new(&record.address, record.address_private)?;
        let tags = record
            .tags
            .iter()
            .map(|t| Tag::new(t))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Person::new(name, phone, email, address, tags))
    }
}

impl From<Person> for PersonRecord {
    fn from(person: Person) -> Self {
        PersonRecord {
            name: person.name.value().to_string(),
            phone: person.phone.value().to_string(),
            phone_private: person.phone.is_private(),
            email: person.email.value().to_string(),
            email_private: person.email.is_private(),
            address: person.address.value().to_string(),
            address_private: person.address.is_private(),
            tags: person.tags.iter().map(|t| t.name().to_string()).collect(),
        }
    }
}
