use crate::book::UniquePersonList;
use crate::index::DisplayView;
use crate::model::{Person, PersonRecord};

pub fn person(name: &str, phone: &str, email: &str, address: &str) -> Person {
    Person::try_from(PersonRecord {
        name: name.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        address: address.to_string(),
        ..Default::default()
    })
    .expect("fixture person is valid")
}

pub fn john_doe() -> Person {
    person("John Doe", "61234567", "john@doe.com", "395C Ben Road")
}

pub fn jane_doe() -> Person {
    person("Jane Doe", "91234567", "jane@doe.com", "33G Ohm Road")
}

pub fn sam_doe() -> Person {
    person("Sam Doe", "63345566", "sam@doe.com", "55G Abc Road")
}

pub fn david_grant() -> Person {
    person("David Grant", "61121122", "david@grant.com", "44H Define Road")
}

/// John, Jane, David, Sam, in that order.
pub fn typical_book() -> UniquePersonList {
    UniquePersonList::from_persons(vec![john_doe(), jane_doe(), david_grant(), sam_doe()])
        .expect("fixture persons are unique")
}

pub fn view_of_everyone() -> DisplayView {
    DisplayView::new(vec![john_doe(), jane_doe(), david_grant(), sam_doe()])
}

pub fn view_of_surname_doe() -> DisplayView {
    DisplayView::new(vec![john_doe(), jane_doe(), sam_doe()])
}
