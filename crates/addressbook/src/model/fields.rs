//! Validated person fields.
//!
//! Each field is a newtype that can only be built through its validating
//! constructor. Phone, email and address also carry a privacy flag; the flag
//! never takes part in equality.

use crate::error::FieldError;
use once_cell::sync::Lazy;
use regex::Regex;

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9 ]+$").expect("valid name regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w.]+@[\w.]+$").expect("valid email regex"));

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(value: &str) -> Result<Self, FieldError> {
        let trimmed = value.trim();
        if trimmed.is_empty() || !NAME_RE.is_match(trimmed) {
            return Err(FieldError::Name(value.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// Whitespace-separated words of the name, as used by keyword search.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Phone {
    value: String,
    is_private: bool,
}

impl Phone {
    pub fn new(value: &str, is_private: bool) -> Result<Self, FieldError> {
        let trimmed = value.trim();
        if !PHONE_RE.is_match(trimmed) {
            return Err(FieldError::Phone(value.to_string()));
        }
        Ok(Self {
            value: trimmed.to_string(),
            is_private,
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_private(&self) -> bool {
        self.is_private
    }
}

impl PartialEq for Phone {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Phone {}

impl std::fmt::Display for Phone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

#[derive(Debug, Clone)]
pub struct Email {
    value: String,
    is_private: bool,
}

impl Email {
    pub fn new(value: &str, is_private: bool) -> Result<Self, FieldError> {
        let trimmed = value.trim();
        if !EMAIL_RE.is_match(trimmed) {
            return Err(FieldError::Email(value.to_string()));
        }
        Ok(Self {
            value: trimmed.to_string(),
            is_private,
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_private(&self) -> bool {
        self.is_private
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Email {}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

#[derive(Debug, Clone)]
pub struct Address {
    value: String,
    is_private: bool,
}

impl Address {
    pub fn new(value: &str, is_private: bool) -> Result<Self, FieldError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(FieldError::Address(value.to_string()));
        }
        Ok(Self {
            value: trimmed.to_string(),
            is_private,
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_private(&self) -> bool {
        self.is_private
    }
}

impl PartialEq for Address {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Address {}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}
