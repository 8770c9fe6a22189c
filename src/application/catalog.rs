// SPDX-License-Identifier: MPL-2.0
//! Book catalog use cases.
//!
//! The [`Catalog`] owns the current [`BookCollection`] and replaces it on
//! every change. It is the only place where identifiers are drawn and where
//! new books receive their default cover and read flag.

use crate::application::port::IdGenerator;
use crate::domain::book::{Book, BookCollection, BookId, NewBook};
use std::fmt;

/// Command side of the book list.
pub struct Catalog {
    books: BookCollection,
    ids: Box<dyn IdGenerator>,
    placeholder_image_url: String,
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("books", &self.books.len())
            .field("placeholder_image_url", &self.placeholder_image_url)
            .finish_non_exhaustive()
    }
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new(ids: Box<dyn IdGenerator>, placeholder_image_url: impl Into<String>) -> Self {
        Self {
            books: BookCollection::new(),
            ids,
            placeholder_image_url: placeholder_image_url.into(),
        }
    }

    /// Current collection.
    #[must_use]
    pub fn books(&self) -> &BookCollection {
        &self.books
    }

    /// Image reference given to new books.
    #[must_use]
    pub fn placeholder_image_url(&self) -> &str {
        &self.placeholder_image_url
    }

    /// Adds a book at the end of the list and returns its identifier.
    ///
    /// The book gets a fresh identifier, the placeholder cover and
    /// `is_read = false`. No field is validated: empty names and authors
    /// are accepted as-is.
    pub fn append(&mut self, fields: NewBook) -> BookId {
        let id = self.fresh_id();
        let book = Book::from_new(
            id.clone(),
            fields,
            Some(self.placeholder_image_url.clone()),
        );
        self.books = self.books.appended(book);
        id
    }

    /// Flips the read flag of the book with identifier `id`.
    ///
    /// Returns `false` and leaves the collection untouched when no book
    /// matches.
    pub fn toggle_read(&mut self, id: &BookId) -> bool {
        let next = self.books.with_read_toggled(id);
        let changed = !next.same_as(&self.books);
        self.books = next;
        changed
    }

    fn fresh_id(&mut self) -> BookId {
        loop {
            let id = self.ids.generate();
            if !self.books.contains(&id) {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::book::{Rating, DEFAULT_PLACEHOLDER_IMAGE_URL};
    use crate::infrastructure::SequentialIdGenerator;

    /// Yields each scripted identifier once, in order.
    struct ScriptedIds(std::vec::IntoIter<&'static str>);

    impl IdGenerator for ScriptedIds {
        fn generate(&mut self) -> BookId {
            BookId::from(self.0.next().expect("script exhausted"))
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(
            Box::new(SequentialIdGenerator::default()),
            DEFAULT_PLACEHOLDER_IMAGE_URL,
        )
    }

    fn dune() -> NewBook {
        NewBook {
            name: "Dune".into(),
            author: "Herbert".into(),
            genre: "SciFi".into(),
            rating: Rating::from(5u8),
            description: "...".into(),
        }
    }

    #[test]
    fn append_fills_defaults() {
        let mut catalog = catalog();
        let id = catalog.append(dune());

        let book = catalog.books().get(&id).expect("book was appended");
        assert!(!book.is_read);
        assert_eq!(book.image.as_deref(), Some(DEFAULT_PLACEHOLDER_IMAGE_URL));
        assert_eq!(book.name, "Dune");
        assert_eq!(book.author, "Herbert");
        assert_eq!(book.genre, "SciFi");
        assert_eq!(book.rating, Rating::from(5u8));
        assert_eq!(book.description, "...");
    }

    #[test]
    fn append_grows_by_one_with_new_id() {
        let mut catalog = catalog();
        catalog.append(dune());
        let before = catalog.books().clone();

        let id = catalog.append(dune());

        assert_eq!(catalog.books().len(), before.len() + 1);
        assert!(!before.contains(&id));
        assert_eq!(catalog.books().as_slice().last().map(|b| &b.id), Some(&id));
    }

    #[test]
    fn append_redraws_taken_identifiers() {
        let mut catalog = Catalog::new(
            Box::new(ScriptedIds(vec!["a", "a", "a", "b"].into_iter())),
            "ph",
        );

        let first = catalog.append(dune());
        let second = catalog.append(dune());

        assert_eq!(first.as_str(), "a");
        assert_eq!(second.as_str(), "b");
    }

    #[test]
    fn append_accepts_empty_fields() {
        let mut catalog = catalog();
        catalog.append(NewBook::default());
        assert_eq!(catalog.books().len(), 1);
    }

    #[test]
    fn append_uses_configured_placeholder() {
        let mut catalog = Catalog::new(Box::new(SequentialIdGenerator::default()), "local://cover");
        let id = catalog.append(dune());
        assert_eq!(
            catalog.books().get(&id).and_then(|b| b.image.as_deref()),
            Some("local://cover")
        );
    }

    #[test]
    fn toggle_read_reports_change() {
        let mut catalog = catalog();
        let id = catalog.append(dune());

        assert!(catalog.toggle_read(&id));
        assert!(catalog.books().get(&id).is_some_and(|b| b.is_read));
        assert!(catalog.toggle_read(&id));
        assert!(catalog.books().get(&id).is_some_and(|b| !b.is_read));
    }

    #[test]
    fn toggle_read_unknown_id_is_noop() {
        let mut catalog = catalog();
        catalog.append(dune());
        let before = catalog.books().clone();

        assert!(!catalog.toggle_read(&BookId::from("missing")));
        assert!(catalog.books().same_as(&before));
    }
}
