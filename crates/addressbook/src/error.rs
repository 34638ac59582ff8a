use crate::messages;
use crate::model::tag::TagValidationError;
use thiserror::Error;

/// A field value that failed its format check.
///
/// The display text is the field's constraint message, which is what the user sees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("{}", messages::NAME_CONSTRAINTS)]
    Name(String),

    #[error("{}", messages::PHONE_CONSTRAINTS)]
    Phone(String),

    #[error("{}", messages::EMAIL_CONSTRAINTS)]
    Email(String),

    #[error("{}", messages::ADDRESS_CONSTRAINTS)]
    Address(String),

    /// `reason` says which rule the name broke; it stays out of the display text.
    #[error("{}", messages::TAG_CONSTRAINTS)]
    Tag {
        name: String,
        #[source]
        reason: TagValidationError,
    },
}

#[derive(Error, Debug)]
pub enum AddressBookError {
    #[error(transparent)]
    InvalidField(#[from] FieldError),

    #[error("{}", messages::INVALID_PERSON_DISPLAYED_INDEX)]
    InvalidDisplayedIndex { index: i64, len: usize },

    #[error("{}", messages::PERSON_NOT_IN_ADDRESSBOOK)]
    PersonNotFound,

    #[error("{}", messages::DUPLICATE_PERSON)]
    DuplicatePerson,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl AddressBookError {
    /// True for failures a command reports back to the user instead of propagating.
    pub fn is_command_failure(&self) -> bool {
        matches!(
            self,
            AddressBookError::InvalidField(_)
                | AddressBookError::InvalidDisplayedIndex { .. }
                | AddressBookError::PersonNotFound
                | AddressBookError::DuplicatePerson
        )
    }
}

pub type Result<T> = std::result::Result<T, AddressBookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_errors_display_constraint_messages() {
        let err = FieldError::Phone("12a".into());
        assert_eq!(err.to_string(), messages::PHONE_CONSTRAINTS);

        let wrapped: AddressBookError = err.into();
        assert_eq!(wrapped.to_string(), messages::PHONE_CONSTRAINTS);
    }

    #[test]
    fn domain_errors_display_user_messages() {
        let err = AddressBookError::InvalidDisplayedIndex { index: 0, len: 3 };
        assert_eq!(err.to_string(), "The person index provided is invalid");
        assert_eq!(
            AddressBookError::PersonNotFound.to_string(),
            "Person could not be found in address book"
        );
        assert_eq!(
            AddressBookError::DuplicatePerson.to_string(),
            "This person already exists in the address book"
        );
    }

    #[test]
    fn ambient_errors_are_not_command_failures() {
        assert!(AddressBookError::PersonNotFound.is_command_failure());
        assert!(!AddressBookError::Store("disk".into()).is_command_failure());
    }
}
