use crate::book::UniquePersonList;
use crate::commands::{CmdMessage, CmdResult};
use crate::index::DisplayView;
use crate::messages;
use crate::model::Person;

pub const COMMAND_WORD: &str = "find";
pub const USAGE: &str = "find: Finds all persons whose names contain any of the specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
\tParameters: KEYWORD [MORE_KEYWORDS]...\n\
\tExample: find alice bob charlie";

/// Lists persons whose name has a word containing any keyword.
///
/// Matching is case-insensitive and keeps collection order.
pub fn run(book: &UniquePersonList, keywords: &[String]) -> CmdResult {
    let keywords: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
    let found: Vec<Person> = book
        .iter()
        .filter(|person| name_matches(person, &keywords))
        .cloned()
        .collect();

    CmdResult::new(CmdMessage::info(messages::fill(
        messages::PERSONS_LISTED_OVERVIEW,
        found.len(),
    )))
    .with_listed(DisplayView::new(found))
}

fn name_matches(person: &Person, keywords: &[String]) -> bool {
    person.name().words().any(|word| {
        let word = word.to_lowercase();
        keywords.iter().any(|k| !k.is_empty() && word.contains(k.as_str()))
    })
}
