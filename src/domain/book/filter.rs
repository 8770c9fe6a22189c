// SPDX-License-Identifier: MPL-2.0
//! Text filter over the book list.
//!
//! A book matches when any of these hold (OR logic):
//! - its identifier contains the filter text verbatim (case-sensitive)
//! - its name contains the filter text, ignoring case
//! - its author contains the filter text, ignoring case
//!
//! An empty filter matches every book.

use super::{Book, BookCollection};

/// User-supplied search text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookFilter {
    text: String,
    lowered: String,
}

impl BookFilter {
    /// Creates a filter from raw input. The text is kept as typed.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let lowered = text.to_lowercase();
        Self { text, lowered }
    }

    /// The filter text exactly as typed.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns `true` if the filter narrows the list at all.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.text.is_empty()
    }

    /// Returns `true` if `book` passes the filter.
    #[must_use]
    pub fn matches(&self, book: &Book) -> bool {
        book.id.as_str().contains(&self.text)
            || book.name.to_lowercase().contains(&self.lowered)
            || book.author.to_lowercase().contains(&self.lowered)
    }

    /// Returns the matching books in collection order.
    #[must_use]
    pub fn apply<'a>(&self, books: &'a BookCollection) -> Vec<&'a Book> {
        if !self.is_active() {
            return books.iter().collect();
        }
        books.iter().filter(|book| self.matches(book)).collect()
    }
}
