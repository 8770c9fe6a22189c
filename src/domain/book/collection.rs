// SPDX-License-Identifier: MPL-2.0
//! Ordered, immutable collection of books.
//!
//! Every change produces a new [`BookCollection`] value instead of mutating
//! the existing one. Observers detect changes by identity with
//! [`BookCollection::same_as`]: an operation that changes nothing hands back
//! the very same value.

use super::{Book, BookId};
use std::sync::Arc;

/// Books in insertion order, identifiers unique.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookCollection {
    books: Arc<Vec<Book>>,
}

impl BookCollection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection from existing records, keeping the first record
    /// for any duplicated identifier.
    #[must_use]
    pub fn from_books(books: impl IntoIterator<Item = Book>) -> Self {
        let mut unique: Vec<Book> = Vec::new();
        for book in books {
            if !unique.iter().any(|existing| existing.id == book.id) {
                unique.push(book);
            }
        }
        Self {
            books: Arc::new(unique),
        }
    }

    /// Number of books.
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Returns `true` when there are no books.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Iterates over books in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.books.iter()
    }

    /// Returns the books as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Book] {
        &self.books
    }

    /// Looks up a book by identifier.
    #[must_use]
    pub fn get(&self, id: &BookId) -> Option<&Book> {
        self.books.iter().find(|book| &book.id == id)
    }

    /// Returns `true` if a book with this identifier exists.
    #[must_use]
    pub fn contains(&self, id: &BookId) -> bool {
        self.get(id).is_some()
    }

    /// Returns `true` if both values are the same collection instance.
    ///
    /// This is the change-detection primitive: two collections with equal
    /// contents built by separate operations are *not* the same.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.books, &other.books)
    }

    /// Returns a new collection with `book` appended at the end.
    ///
    /// The caller guarantees the identifier is not already present;
    /// [`Catalog`](crate::application::catalog::Catalog) enforces this.
    #[must_use]
    pub fn appended(&self, book: Book) -> Self {
        debug_assert!(
            !self.contains(&book.id),
            "appended a book with a duplicate id"
        );

        let mut books = Vec::with_capacity(self.books.len() + 1);
        books.extend(self.books.iter().cloned());
        books.push(book);
        Self {
            books: Arc::new(books),
        }
    }

    /// Returns a collection where the book matching `id` has its read flag
    /// flipped.
    ///
    /// Unknown identifiers return `self` unchanged (same instance).
    #[must_use]
    pub fn with_read_toggled(&self, id: &BookId) -> Self {
        if !self.contains(id) {
            return self.clone();
        }

        let books = self
            .books
            .iter()
            .map(|book| {
                if &book.id == id {
                    book.with_read_toggled()
                } else {
                    book.clone()
                }
            })
            .collect();
        Self {
            books: Arc::new(books),
        }
    }
}

impl<'a> IntoIterator for &'a BookCollection {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
