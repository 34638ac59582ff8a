use crate::book::UniquePersonList;
use crate::error::{AddressBookError, Result};
use crate::index::{DisplayIndex, DisplayView};
use crate::model::Person;

/// Resolves a user-facing index to the stored person it names.
///
/// Bounds are checked against the **view**; existence is checked against the
/// **collection**. The two failures stay distinct:
/// - [`AddressBookError::InvalidDisplayedIndex`] when `index` is outside `1..=view.len()`
/// - [`AddressBookError::PersonNotFound`] when the view entry is stale
///
/// The returned person is the collection's entry, not the view's copy. A
/// stale copy can differ from it in tags and privacy flags.
pub fn resolve_target(
    book: &UniquePersonList,
    view: &DisplayView,
    index: DisplayIndex,
) -> Result<Person> {
    let candidate = view
        .get(index)
        .ok_or(AddressBookError::InvalidDisplayedIndex {
            index: index.value(),
            len: view.len(),
        })?;

    book.find(candidate)
        .cloned()
        .ok_or(AddressBookError::PersonNotFound)
}
