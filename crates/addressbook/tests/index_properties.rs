use addressbook::book::UniquePersonList;
use addressbook::commands::Command;
use addressbook::index::{DisplayIndex, DisplayView};
use addressbook::messages;
use addressbook::model::{Person, PersonRecord};
use proptest::prelude::*;

fn person(n: usize) -> Person {
    Person::try_from(PersonRecord {
        name: format!("Person {n}"),
        phone: format!("9{n:07}"),
        email: format!("person{n}@example.com"),
        address: format!("{n} Main Street"),
        ..Default::default()
    })
    .unwrap()
}

fn book_of(len: usize) -> UniquePersonList {
    UniquePersonList::from_persons((0..len).map(person)).unwrap()
}

fn index_command(kind: u8, target: i64) -> Command {
    let target = DisplayIndex(target);
    match kind % 3 {
        0 => Command::Delete { target },
        1 => Command::Change {
            target,
            new_phone: "12345".to_string(),
        },
        _ => Command::ViewAll { target },
    }
}

proptest! {
    #[test]
    fn out_of_range_index_is_rejected_without_change(
        len in 0usize..8,
        offset in 1i64..1_000,
        below in any::<bool>(),
        kind in any::<u8>(),
    ) {
        let mut book = book_of(len);
        let view = DisplayView::new(book.all());
        let before = book.all();
        let target = if below { 1 - offset } else { len as i64 + offset };

        let result = index_command(kind, target).execute(&mut book, &view);

        prop_assert_eq!(result.feedback(), messages::INVALID_PERSON_DISPLAYED_INDEX);
        prop_assert_eq!(book.all(), before);
    }

    #[test]
    fn extreme_indexes_are_rejected(target in prop_oneof![Just(i64::MIN), Just(i64::MAX)]) {
        let mut book = book_of(3);
        let view = DisplayView::new(book.all());
        let result = Command::Delete { target: DisplayIndex(target) }.execute(&mut book, &view);
        prop_assert_eq!(result.feedback(), messages::INVALID_PERSON_DISPLAYED_INDEX);
        prop_assert_eq!(book.len(), 3);
    }

    #[test]
    fn delete_in_range_removes_exactly_that_person(len in 1usize..8, pick in any::<prop::sample::Index>()) {
        let mut book = book_of(len);
        let view = DisplayView::new(book.all());
        let position = pick.index(len);
        let target = view.persons()[position].clone();

        let result = Command::Delete { target: DisplayIndex(position as i64 + 1) }
            .execute(&mut book, &view);

        prop_assert!(!result.is_failure());
        prop_assert_eq!(book.len(), len - 1);
        prop_assert!(!book.contains(&target));
    }

    #[test]
    fn change_in_range_swaps_in_place(len in 1usize..8, pick in any::<prop::sample::Index>()) {
        let mut book = book_of(len);
        let view = DisplayView::new(book.all());
        let position = pick.index(len);

        let result = Command::Change {
            target: DisplayIndex(position as i64 + 1),
            new_phone: "777777".to_string(),
        }
        .execute(&mut book, &view);

        prop_assert!(!result.is_failure());
        let all = book.all();
        prop_assert_eq!(all.len(), len);
        prop_assert_eq!(all[position].phone().value(), "777777");
        prop_assert_eq!(all[position].name(), view.persons()[position].name());
        for (i, p) in all.iter().enumerate().filter(|(i, _)| *i != position) {
            prop_assert_eq!(p, &view.persons()[i]);
        }
    }

    #[test]
    fn stale_entries_report_not_found(len in 1usize..8, pick in any::<prop::sample::Index>()) {
        let mut book = book_of(len);
        let view = DisplayView::new(book.all());
        let position = pick.index(len);
        book.remove(&view.persons()[position]).unwrap();
        let before = book.all();

        let result = Command::Delete { target: DisplayIndex(position as i64 + 1) }
            .execute(&mut book, &view);

        prop_assert_eq!(result.feedback(), messages::PERSON_NOT_IN_ADDRESSBOOK);
        prop_assert_eq!(book.all(), before);
    }
}
