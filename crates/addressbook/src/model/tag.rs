//! Tag names for persons.
//!
//! Valid tags:
//! - At least one character
//! - ASCII letters and digits only

use crate::error::FieldError;
use serde::{Deserialize, Serialize};

/// Validates a tag name.
///
/// # Examples
/// ```
/// use addressbook::model::tag::validate_tag_name;
///
/// assert!(validate_tag_name("friends").is_ok());
/// assert!(validate_tag_name("team2").is_ok());
///
/// assert!(validate_tag_name("").is_err());
/// assert!(validate_tag_name("best-friend").is_err());
/// assert!(validate_tag_name("two words").is_err());
/// ```
pub fn validate_tag_name(name: &str) -> Result<(), TagValidationError> {
    if name.is_empty() {
        return Err(TagValidationError::Empty);
    }

    if let Some(ch) = name.chars().find(|ch| !ch.is_ascii_alphanumeric()) {
        return Err(TagValidationError::InvalidCharacter(ch));
    }

    Ok(())
}

/// Error type for tag name validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagValidationError {
    /// Tag name is empty
    Empty,
    /// Tag name contains a non-alphanumeric character
    InvalidCharacter(char),
}

impl std::fmt::Display for TagValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TagValidationError::Empty => write!(f, "tag name cannot be empty"),
            TagValidationError::InvalidCharacter(ch) => write!(
                f,
                "tag name contains invalid character '{}' (only letters and digits allowed)",
                ch
            ),
        }
    }
}

impl std::error::Error for TagValidationError {}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    pub fn new(name: &str) -> Result<Self, FieldError> {
        let name = name.trim();
        validate_tag_name(name).map_err(|reason| FieldError::Tag {
            name: name.to_string(),
            reason,
        })?;
        Ok(Self(name.to_string()))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Tag {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Tag::new(&value)
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.0
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.0)
    }
}
