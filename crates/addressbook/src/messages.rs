//! User-facing message templates.
//!
//! Every string a command can report lives here so the wording stays stable.
//! Templates carry a single `{}` slot, filled by [`fill`].

pub const INVALID_COMMAND_FORMAT: &str = "Invalid command format! \n{}";
pub const INVALID_PERSON_DISPLAYED_INDEX: &str = "The person index provided is invalid";
pub const PERSON_NOT_IN_ADDRESSBOOK: &str = "Person could not be found in address book";
pub const PERSONS_LISTED_OVERVIEW: &str = "{} persons listed!";
pub const DUPLICATE_PERSON: &str = "This person already exists in the address book";

pub const ADD_SUCCESS: &str = "New person added: {}";
pub const DELETE_SUCCESS: &str = "Deleted Person: {}";
pub const CHANGE_SUCCESS: &str = "Person number changed: {}";
pub const VIEW_SUCCESS: &str = "Viewing person: {}";
pub const CLEAR_SUCCESS: &str = "Address book has been cleared!";
pub const EXIT_ACKNOWLEDGEMENT: &str = "Exiting Address Book as requested ...";

pub const NAME_CONSTRAINTS: &str = "Person names should be spaces or alphanumeric characters";
pub const PHONE_CONSTRAINTS: &str = "Person phone numbers should only contain numbers";
pub const EMAIL_CONSTRAINTS: &str =
    "Person emails should be 2 alphanumeric/period strings separated by '@'";
pub const ADDRESS_CONSTRAINTS: &str = "Person addresses can be in any format";
pub const TAG_CONSTRAINTS: &str = "Tags names should be alphanumeric";

/// Substitutes `value` into the first `{}` of `template`.
pub fn fill(template: &str, value: impl std::fmt::Display) -> String {
    template.replacen("{}", &value.to_string(), 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_replaces_slot() {
        assert_eq!(fill(PERSONS_LISTED_OVERVIEW, 3), "3 persons listed!");
        assert_eq!(
            fill(CHANGE_SUCCESS, "Jane Doe"),
            "Person number changed: Jane Doe"
        );
    }

    #[test]
    fn fill_without_slot_is_identity() {
        assert_eq!(fill(CLEAR_SUCCESS, "x"), CLEAR_SUCCESS);
    }
}
