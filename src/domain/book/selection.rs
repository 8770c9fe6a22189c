// SPDX-License-Identifier: MPL-2.0
//! Selection of the book shown in the detail view.
//!
//! The view mode is never stored on its own: it is resolved from the
//! selection against the current collection, so a selection that no longer
//! points at a book always falls back to the list.

use super::{Book, BookCollection, BookId};

/// Which book, if any, the user opened.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection(Option<BookId>);

impl Selection {
    /// No book selected.
    #[must_use]
    pub fn none() -> Self {
        Self(None)
    }

    /// Selects `id`.
    #[must_use]
    pub fn of(id: BookId) -> Self {
        Self(Some(id))
    }

    /// The selected identifier, if any.
    #[must_use]
    pub fn id(&self) -> Option<&BookId> {
        self.0.as_ref()
    }

    /// Returns `true` if an identifier is set (resolvable or not).
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    /// Resolves the selection against `books`.
    #[must_use]
    pub fn resolve<'a>(&self, books: &'a BookCollection) -> ViewMode<'a> {
        match self.0.as_ref().and_then(|id| books.get(id)) {
            Some(book) => ViewMode::Detail(book),
            None => ViewMode::List,
        }
    }

    /// Returns `true` when an identifier is set but no longer matches a book.
    #[must_use]
    pub fn is_stale(&self, books: &BookCollection) -> bool {
        self.0.as_ref().is_some_and(|id| !books.contains(id))
    }
}

/// Which of the two screens to render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewMode<'a> {
    /// Filterable list plus the add form.
    List,
    /// Detail page of one book.
    Detail(&'a Book),
}

impl ViewMode<'_> {
    /// Returns `true` for the list screen.
    #[must_use]
    pub fn is_list(&self) -> bool {
        matches!(self, ViewMode::List)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::book::NewBook;

    fn books() -> BookCollection {
        BookCollection::from_books([Book::from_new(
            BookId::from("a"),
            NewBook {
                name: "Dune".into(),
                ..NewBook::default()
            },
            None,
        )])
    }

    #[test]
    fn initial_selection_resolves_to_list() {
        assert!(Selection::default().resolve(&books()).is_list());
    }

    #[test]
    fn existing_id_resolves_to_detail() {
        let books = books();
        match Selection::of(BookId::from("a")).resolve(&books) {
            ViewMode::Detail(book) => assert_eq!(book.name, "Dune"),
            ViewMode::List => panic!("expected detail view"),
        }
    }

    #[test]
    fn unknown_id_falls_back_to_list() {
        let books = books();
        let selection = Selection::of(BookId::from("gone"));

        assert!(selection.resolve(&books).is_list());
        assert!(selection.is_stale(&books));
    }

    #[test]
    fn none_is_never_stale() {
        assert!(!Selection::none().is_stale(&books()));
        assert!(!Selection::none().is_set());
    }
}
