use crate::book::UniquePersonList;
use crate::commands::{CmdResult, Command};
use crate::index::DisplayView;

/// Holds the canonical collection and the last view shown to the user.
///
/// Commands run one at a time against both. The view is replaced only when a
/// command returns a new one.
#[derive(Debug, Default)]
pub struct Session {
    book: UniquePersonList,
    view: DisplayView,
}

impl Session {
    /// Starts with an empty view; index commands fail until something is listed.
    pub fn new(book: UniquePersonList) -> Self {
        Self {
            book,
            view: DisplayView::empty(),
        }
    }

    /// Starts with a view of the whole collection, as if `list` had just run.
    pub fn with_full_view(book: UniquePersonList) -> Self {
        let view = DisplayView::new(book.all());
        Self { book, view }
    }

    pub fn execute(&mut self, command: &Command) -> CmdResult {
        let result = command.execute(&mut self.book, &self.view);
        if let Some(view) = &result.listed {
            self.view = view.clone();
        }
        result
    }

    pub fn book(&self) -> &UniquePersonList {
        &self.book
    }

    pub fn view(&self) -> &DisplayView {
        &self.view
    }

    pub fn into_book(self) -> UniquePersonList {
        self.book
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::DisplayIndex;
    use crate::messages;
    use crate::test_utils::{jane_doe, sam_doe, typical_book, view_of_surname_doe};

    #[test]
    fn fresh_session_has_no_view() {
        let mut session = Session::new(typical_book());
        let result = session.execute(&Command::Delete {
            target: DisplayIndex(1),
        });
        assert_eq!(result.feedback(), messages::INVALID_PERSON_DISPLAYED_INDEX);
        assert_eq!(session.book(), &typical_book());
    }

    #[test]
    fn find_replaces_view_for_later_commands() {
        let mut session = Session::new(typical_book());
        session.execute(&Command::Find {
            keywords: vec!["Doe".into()],
        });
        assert_eq!(session.view(), &view_of_surname_doe());

        session.execute(&Command::Delete {
            target: DisplayIndex(3),
        });
        assert!(!session.book().contains(&sam_doe()));
    }

    #[test]
    fn mutations_do_not_refresh_view() {
        let mut session = Session::with_full_view(typical_book());
        session.execute(&Command::Delete {
            target: DisplayIndex(2),
        });
        assert_eq!(session.view().len(), 4);

        let result = session.execute(&Command::Delete {
            target: DisplayIndex(2),
        });
        assert_eq!(result.feedback(), messages::PERSON_NOT_IN_ADDRESSBOOK);
        assert!(!session.book().contains(&jane_doe()));
    }

    #[test]
    fn non_listing_commands_keep_view() {
        let mut session = Session::with_full_view(typical_book());
        session.execute(&Command::Help);
        assert_eq!(session.view().len(), 4);
    }
}
