use crate::book::UniquePersonList;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::messages;
use crate::model::{Person, PersonRecord};
use tracing::info;

pub const COMMAND_WORD: &str = "add";
pub const USAGE: &str = "add: Adds a person to the address book. \
Contact details can be marked private by prepending 'p' to the prefix.\n\
\tParameters: NAME [p]p/PHONE [p]e/EMAIL [p]a/ADDRESS [t/TAG]...\n\
\tExample: add John Doe p/98765432 e/johnd@gmail.com a/311, Clementi Ave 2, #02-25 t/friends t/owesMoney";

pub fn run(book: &mut UniquePersonList, record: &PersonRecord) -> Result<CmdResult> {
    let person = Person::try_from(record)?;
    book.add(person.clone())?;
    info!(name = person.name().value(), "person added");
    Ok(CmdResult::new(CmdMessage::success(messages::fill(
        messages::ADD_SUCCESS,
        &person,
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AddressBookError, FieldError};
    use crate::test_utils::{jane_doe, typical_book};

    fn record(name: &str, phone: &str) -> PersonRecord {
        PersonRecord {
            name: name.into(),
            phone: phone.into(),
            email: "valid@e.mail".into(),
            address: "Valid Road".into(),
            tags: vec!["friends".into()],
            ..Default::default()
        }
    }

    #[test]
    fn adds_new_person() {
        let mut book = typical_book();
        let result = run(&mut book, &record("Valid Name", "123")).unwrap();

        assert_eq!(book.len(), 5);
        assert_eq!(
            result.feedback(),
            "New person added: Valid Name Phone:123 Email:valid@e.mail Address:Valid Road Tags:[friends]"
        );
        assert!(result.listed.is_none());
    }

    #[test]
    fn rejects_duplicate() {
        let mut book = typical_book();
        let dup = PersonRecord::from(jane_doe());
        let err = run(&mut book, &dup).unwrap_err();
        assert!(matches!(err, AddressBookError::DuplicatePerson));
        assert_eq!(book, typical_book());
    }

    #[test]
    fn rejects_invalid_field() {
        let mut book = typical_book();
        let err = run(&mut book, &record("Valid Name", "12x")).unwrap_err();
        assert!(matches!(
            err,
            AddressBookError::InvalidField(FieldError::Phone(_))
        ));
        assert_eq!(book, typical_book());
    }
}
