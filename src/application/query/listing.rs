// SPDX-License-Identifier: MPL-2.0
//! Filtered view of the book list.
//!
//! The listing is recomputed from scratch on every render; there is no index
//! and no caching.

use crate::domain::book::{Book, BookCollection, BookFilter};

/// Counters shown above the list.
///
/// This struct is a snapshot: it carries no reference to the collection so
/// views can pass it around freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListingInfo {
    /// Number of books in the collection.
    pub total_count: usize,
    /// Number of books passing the filter.
    /// Same as `total_count` when no filter is active.
    pub filtered_count: usize,
    /// Number of books marked as read (whole collection).
    pub read_count: usize,
    /// Whether a filter is currently active.
    pub filter_active: bool,
}

/// Books passing the current filter, in collection order.
#[derive(Debug, Clone)]
pub struct Listing<'a> {
    pub books: Vec<&'a Book>,
    pub info: ListingInfo,
}

impl<'a> Listing<'a> {
    /// Applies `filter` to `books`.
    #[must_use]
    pub fn build(books: &'a BookCollection, filter: &BookFilter) -> Self {
        let filtered = filter.apply(books);
        let info = ListingInfo {
            total_count: books.len(),
            filtered_count: filtered.len(),
            read_count: books.iter().filter(|book| book.is_read).count(),
            filter_active: filter.is_active(),
        };

        Self {
            books: filtered,
            info,
        }
    }

    /// Returns `true` when nothing is left to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::book::{BookId, NewBook};

    fn collection() -> BookCollection {
        let make = |id: &str, name: &str| {
            Book::from_new(
                BookId::from(id),
                NewBook {
                    name: name.into(),
                    ..NewBook::default()
                },
                None,
            )
        };
        BookCollection::from_books([make("1", "Dune"), make("2", "Emma"), make("3", "Dune II")])
            .with_read_toggled(&BookId::from("2"))
    }

    #[test]
    fn unfiltered_listing_counts_everything() {
        let books = collection();
        let listing = Listing::build(&books, &BookFilter::default());

        assert_eq!(
            listing.info,
            ListingInfo {
                total_count: 3,
                filtered_count: 3,
                read_count: 1,
                filter_active: false,
            }
        );
    }

    #[test]
    fn filtered_listing_counts_matches() {
        let books = collection();
        let listing = Listing::build(&books, &BookFilter::new("dune"));

        assert_eq!(listing.info.filtered_count, 2);
        assert_eq!(listing.info.total_count, 3);
        assert!(listing.info.filter_active);
        assert!(!listing.is_empty());
    }

    #[test]
    fn empty_collection_gives_empty_listing() {
        let books = BookCollection::new();
        let listing = Listing::build(&books, &BookFilter::new("x"));
        assert!(listing.is_empty());
        assert_eq!(listing.info.total_count, 0);
    }
}
