use crate::book::UniquePersonList;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{DisplayIndex, DisplayView};
use crate::messages;
use tracing::info;

use super::helpers::resolve_target;

pub const COMMAND_WORD: &str = "delete";
pub const USAGE: &str = "delete: Deletes the person identified by the index number used in the last person listing.\n\
\tParameters: INDEX\n\
\tExample: delete 1";

pub fn run(
    book: &mut UniquePersonList,
    view: &DisplayView,
    target: DisplayIndex,
) -> Result<CmdResult> {
    let person = resolve_target(book, view, target)?;
    let removed = book.remove(&person)?;
    info!(index = %target, name = removed.name().value(), "person deleted");
    Ok(CmdResult::new(CmdMessage::success(messages::fill(
        messages::DELETE_SUCCESS,
        &removed,
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AddressBookError;
    use crate::test_utils::{
        david_grant, jane_doe, john_doe, sam_doe, typical_book, view_of_everyone,
        view_of_surname_doe,
    };

    #[test]
    fn deletes_person_from_filtered_view() {
        let mut book = typical_book();
        let result = run(&mut book, &view_of_surname_doe(), DisplayIndex(3)).unwrap();

        assert_eq!(book.all(), vec![john_doe(), jane_doe(), david_grant()]);
        assert_eq!(
            result.feedback(),
            format!("Deleted Person: {}", sam_doe())
        );
    }

    #[test]
    fn invalid_index_leaves_collection() {
        let mut book = typical_book();
        for index in [0, -1, 5] {
            let err = run(&mut book, &view_of_everyone(), DisplayIndex(index)).unwrap_err();
            assert!(matches!(err, AddressBookError::InvalidDisplayedIndex { .. }));
        }
        assert_eq!(book, typical_book());
    }

    #[test]
    fn empty_collection_with_stale_view_is_not_found() {
        let mut book = UniquePersonList::new();
        let err = run(&mut book, &view_of_surname_doe(), DisplayIndex(1)).unwrap_err();
        assert!(matches!(err, AddressBookError::PersonNotFound));
        assert!(book.is_empty());
    }

    #[test]
    fn deleting_twice_from_same_view_is_not_found() {
        let mut book = typical_book();
        let view = view_of_everyone();
        run(&mut book, &view, DisplayIndex(2)).unwrap();
        let err = run(&mut book, &view, DisplayIndex(2)).unwrap_err();
        assert!(matches!(err, AddressBookError::PersonNotFound));
        assert_eq!(book.len(), 3);
    }
}
