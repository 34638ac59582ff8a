//! Turns one line of user input into a [`Command`].
//!
//! Parsing never fails outright. Input that does not fit a command's grammar
//! becomes [`Command::Incorrect`] carrying the usage text, and an unknown
//! command word becomes [`Command::Help`]. Index arguments only need to be
//! integers here; range checks happen when the command executes.

use crate::commands::{self, add, change, clear, delete, find, help, list, view, Command};
use crate::index::DisplayIndex;
use crate::messages;
use crate::model::PersonRecord;
use once_cell::sync::Lazy;
use regex::Regex;

static BASIC_COMMAND_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<word>\S+)(?P<arguments>.*)$").expect("valid command regex")
});

static PERSON_DATA_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<name>[^/]+) (?P<phone_private>p?)p/(?P<phone>[^/]+) (?P<email_private>p?)e/(?P<email>[^/]+) (?P<address_private>p?)a/(?P<address>[^/]+?)(?P<tags>(?: t/[^/]+)*)$",
    )
    .expect("valid person data regex")
});

static CHANGE_ARGS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<index>\S+)\s+(?P<phone>\S+)$").expect("valid change regex")
});

pub fn parse(input: &str) -> Command {
    let Some(caps) = BASIC_COMMAND_RE.captures(input.trim()) else {
        return incorrect(help::USAGE);
    };
    let arguments = caps["arguments"].trim();

    match &caps["word"] {
        add::COMMAND_WORD => parse_add(arguments),
        delete::COMMAND_WORD => parse_index(arguments, delete::USAGE)
            .map_or_else(|c| c, |target| Command::Delete { target }),
        change::COMMAND_WORD => parse_change(arguments),
        view::COMMAND_WORD => parse_index(arguments, view::USAGE)
            .map_or_else(|c| c, |target| Command::View { target }),
        view::VIEW_ALL_COMMAND_WORD => parse_index(arguments, view::VIEW_ALL_USAGE)
            .map_or_else(|c| c, |target| Command::ViewAll { target }),
        find::COMMAND_WORD => parse_find(arguments),
        list::COMMAND_WORD => Command::List,
        clear::COMMAND_WORD => Command::Clear,
        commands::EXIT_COMMAND_WORD => Command::Exit,
        _ => Command::Help,
    }
}

fn incorrect(usage: &str) -> Command {
    Command::Incorrect(messages::fill(messages::INVALID_COMMAND_FORMAT, usage))
}

fn parse_add(arguments: &str) -> Command {
    let Some(caps) = PERSON_DATA_RE.captures(arguments) else {
        return incorrect(add::USAGE);
    };

    let tags = caps["tags"]
        .split(" t/")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();

    Command::Add(PersonRecord {
        name: caps["name"].to_string(),
        phone: caps["phone"].to_string(),
        phone_private: !caps["phone_private"].is_empty(),
        email: caps["email"].to_string(),
        email_private: !caps["email_private"].is_empty(),
        address: caps["address"].to_string(),
        address_private: !caps["address_private"].is_empty(),
        tags,
    })
}

fn parse_index(arguments: &str, usage: &str) -> Result<DisplayIndex, Command> {
    arguments
        .parse::<i64>()
        .map(DisplayIndex)
        .map_err(|_| incorrect(usage))
}

fn parse_change(arguments: &str) -> Command {
    let Some(caps) = CHANGE_ARGS_RE.captures(arguments) else {
        return incorrect(change::USAGE);
    };
    match parse_index(&caps["index"], change::USAGE) {
        Ok(target) => Command::Change {
            target,
            new_phone: caps["phone"].to_string(),
        },
        Err(command) => command,
    }
}

fn parse_find(arguments: &str) -> Command {
    let keywords: Vec<String> = arguments.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return incorrect(find::USAGE);
    }
    Command::Find { keywords }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_incorrect(input: &str, usage: &str) {
        match parse(input) {
            Command::Incorrect(message) => {
                assert_eq!(message, format!("Invalid command format! \n{}", usage))
            }
            other => panic!("expected incorrect command for {input:?}, got {other:?}"),
        }
    }

    #[test]
    fn parses_simple_words() {
        assert_eq!(parse("list"), Command::List);
        assert_eq!(parse("  clear  "), Command::Clear);
        assert_eq!(parse("exit"), Command::Exit);
        assert_eq!(parse("help"), Command::Help);
    }

    #[test]
    fn unknown_word_shows_help() {
        assert_eq!(parse("frobnicate 1 2"), Command::Help);
    }

    #[test]
    fn empty_input_is_incorrect() {
        assert_incorrect("", help::USAGE);
        assert_incorrect("   ", help::USAGE);
    }

    #[test]
    fn parses_index_commands() {
        assert_eq!(
            parse("delete 2"),
            Command::Delete {
                target: DisplayIndex(2)
            }
        );
        assert_eq!(
            parse("view 1"),
            Command::View {
                target: DisplayIndex(1)
            }
        );
        assert_eq!(
            parse("viewall 3"),
            Command::ViewAll {
                target: DisplayIndex(3)
            }
        );
    }

    #[test]
    fn zero_and_negative_indexes_survive_parsing() {
        assert_eq!(
            parse("delete 0"),
            Command::Delete {
                target: DisplayIndex(0)
            }
        );
        assert_eq!(
            parse("delete -1"),
            Command::Delete {
                target: DisplayIndex(-1)
            }
        );
    }

    #[test]
    fn non_numeric_index_is_incorrect() {
        assert_incorrect("delete abc", delete::USAGE);
        assert_incorrect("delete", delete::USAGE);
        assert_incorrect("view 1 2", view::USAGE);
    }

    #[test]
    fn parses_change() {
        assert_eq!(
            parse("change 2 777777"),
            Command::Change {
                target: DisplayIndex(2),
                new_phone: "777777".into()
            }
        );
        // Phone format is checked at execution time.
        assert_eq!(
            parse("change 1 12ab"),
            Command::Change {
                target: DisplayIndex(1),
                new_phone: "12ab".into()
            }
        );
    }

    #[test]
    fn malformed_change_is_incorrect() {
        assert_incorrect("change 2", change::USAGE);
        assert_incorrect("change x 777", change::USAGE);
    }

    #[test]
    fn parses_find_keywords() {
        assert_eq!(
            parse("find Doe  grant"),
            Command::Find {
                keywords: vec!["Doe".into(), "grant".into()]
            }
        );
        assert_incorrect("find", find::USAGE);
    }

    #[test]
    fn parses_add_with_private_fields_and_tags() {
        let command =
            parse("add John Doe pp/98765432 e/johnd@gmail.com pa/311, Clementi Ave 2 t/friends t/owesMoney");
        assert_eq!(
            command,
            Command::Add(PersonRecord {
                name: "John Doe".into(),
                phone: "98765432".into(),
                phone_private: true,
                email: "johnd@gmail.com".into(),
                email_private: false,
                address: "311, Clementi Ave 2".into(),
                address_private: true,
                tags: vec!["friends".into(), "owesMoney".into()],
            })
        );
    }

    #[test]
    fn parses_add_without_tags() {
        match parse("add Jane p/1 e/j@d.c a/Road") {
            Command::Add(record) => {
                assert_eq!(record.address, "Road");
                assert!(record.tags.is_empty());
            }
            other => panic!("expected add, got {other:?}"),
        }
    }

    #[test]
    fn add_with_missing_prefix_is_incorrect() {
        assert_incorrect("add John Doe 98765432 e/j@d.c a/Road", add::USAGE);
        assert_incorrect("add", add::USAGE);
    }

    #[test]
    fn add_field_values_are_not_validated_by_parser() {
        assert!(matches!(
            parse("add John p/notdigits e/j@d.c a/Road"),
            Command::Add(_)
        ));
    }
}
