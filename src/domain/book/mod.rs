// SPDX-License-Identifier: MPL-2.0
//! Book records and the values derived from them.
//!
//! # Modules
//!
//! - [`rating`]: [`Rating`] value object with lenient text coercion
//! - [`collection`]: [`BookCollection`], the ordered, replace-on-write list of books
//! - [`filter`]: [`BookFilter`], the id/name/author search over a collection
//! - [`selection`]: [`Selection`] and the [`ViewMode`] it resolves to

pub mod collection;
pub mod filter;
pub mod rating;
pub mod selection;

pub use collection::BookCollection;
pub use filter::BookFilter;
pub use rating::Rating;
pub use selection::{Selection, ViewMode};

use std::fmt;

/// Cover shown for books that carry no image reference of their own.
pub const DEFAULT_PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/120x160?text=Book";

// =============================================================================
// BookId
// =============================================================================

/// Opaque, globally unique identifier of a book.
///
/// Identifiers are produced by an
/// [`IdGenerator`](crate::application::port::IdGenerator); the domain only
/// compares and displays them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookId(String);

impl BookId {
    /// Wraps an already generated identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for BookId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for BookId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

// =============================================================================
// NewBook
// =============================================================================

/// Descriptive fields of a book that does not exist yet.
///
/// This is what the add form submits; the collection assigns the identifier,
/// the cover and the read flag.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewBook {
    pub name: String,
    pub author: String,
    pub genre: String,
    pub rating: Rating,
    pub description: String,
}

// =============================================================================
// Book
// =============================================================================

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: BookId,
    pub name: String,
    pub author: String,
    pub genre: String,
    pub rating: Rating,
    pub description: String,
    /// Cover image reference. `None` falls back to the placeholder at render time.
    pub image: Option<String>,
    pub is_read: bool,
}

impl Book {
    /// Builds an unread book from submitted fields.
    #[must_use]
    pub fn from_new(id: BookId, fields: NewBook, image: Option<String>) -> Self {
        let NewBook {
            name,
            author,
            genre,
            rating,
            description,
        } = fields;

        Self {
            id,
            name,
            author,
            genre,
            rating,
            description,
            image,
            is_read: false,
        }
    }

    /// Returns a copy of this record with the read flag flipped.
    #[must_use]
    pub fn with_read_toggled(&self) -> Self {
        Self {
            is_read: !self.is_read,
            ..self.clone()
        }
    }

    /// Returns the image to render, falling back to `placeholder` when the
    /// record has no (or an empty) image reference.
    #[must_use]
    pub fn cover_url<'a>(&'a self, placeholder: &'a str) -> &'a str {
        match self.image.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => placeholder,
        }
    }
}
