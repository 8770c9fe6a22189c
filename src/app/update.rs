// SPDX-License-Identifier: MPL-2.0
//! Message handlers and change tracking.
//!
//! Handlers receive an [`UpdateContext`] borrowing the parts of the
//! application state they may touch. After every message the application
//! compares a [`Snapshot`] taken beforehand with the new state and logs what
//! changed; the book list is compared by identity, not by content.

use super::Message;
use crate::application::catalog::Catalog;
use crate::domain::book::{BookCollection, Selection};
use crate::error::Error;
use crate::infrastructure::covers;
use crate::ui::book_details::{self, Event as BookDetailsEvent};
use crate::ui::book_list::{self, Event as BookListEvent};
use crate::ui::cover::Covers;
use crate::ui::notifications::{self, Notification};
use iced::widget::image;
use iced::Task;

/// i18n key of the toast confirming an added book.
pub const BOOK_ADDED_KEY: &str = "notification-book-added";

/// Mutable view of the application state handed to message handlers.
pub struct UpdateContext<'a> {
    pub catalog: &'a mut Catalog,
    pub selection: &'a mut Selection,
    pub book_list: &'a mut book_list::State,
    pub notifications: &'a mut notifications::Manager,
    pub covers: &'a mut Covers,
}

/// Handles list screen messages (filter, details button, add form).
pub fn handle_book_list_message(
    ctx: &mut UpdateContext<'_>,
    message: book_list::Message,
) -> Task<Message> {
    match book_list::update(ctx.book_list, message) {
        BookListEvent::None => {}
        BookListEvent::ShowDetails(id) => {
            // Unknown ids keep the list view.
            if ctx.catalog.books().contains(&id) {
                *ctx.selection = Selection::of(id);
            }
        }
        BookListEvent::AddBook(fields) => {
            let name = fields.name.clone();
            let id = ctx.catalog.append(fields);
            tracing::info!(%id, "book added");
            ctx.notifications
                .push(Notification::success(BOOK_ADDED_KEY).with_arg("name", name));

            let placeholder = ctx.catalog.placeholder_image_url();
            if let Some(book) = ctx.catalog.books().get(&id) {
                return request_cover(ctx.covers, book.cover_url(placeholder));
            }
        }
    }
    Task::none()
}

/// Starts fetching `url` unless it was already requested.
pub fn request_cover(covers: &mut Covers, url: &str) -> Task<Message> {
    if !covers.begin(url) {
        return Task::none();
    }

    tracing::debug!(url, "fetching cover");
    let url = url.to_string();
    Task::perform(covers::fetch(url.clone()), move |result| {
        Message::CoverLoaded {
            url: url.clone(),
            result: result.map(image::Handle::from_bytes),
        }
    })
}

/// Stores a finished cover fetch.
pub fn handle_cover_loaded(
    covers: &mut Covers,
    url: String,
    result: Result<image::Handle, Error>,
) -> Task<Message> {
    if result.is_ok() {
        tracing::debug!(%url, "cover loaded");
    }
    covers.finish(url, result);
    Task::none()
}

/// Handles detail screen messages (back button, read checkbox).
pub fn handle_book_details_message(
    ctx: &mut UpdateContext<'_>,
    message: book_details::Message,
) -> Task<Message> {
    match book_details::update(message) {
        BookDetailsEvent::BackToList => *ctx.selection = Selection::none(),
        BookDetailsEvent::ToggleRead(id) => {
            if !ctx.catalog.toggle_read(&id) {
                tracing::debug!(%id, "toggle ignored for unknown book");
            }
        }
    }
    Task::none()
}

/// Drops a selection whose book is no longer in the list.
///
/// Returns `true` if the selection was cleared.
pub fn clear_stale_selection(selection: &mut Selection, books: &BookCollection) -> bool {
    if selection.is_stale(books) {
        *selection = Selection::none();
        true
    } else {
        false
    }
}

/// State observed before a message is handled.
#[derive(Debug, Clone)]
pub struct Snapshot {
    books: BookCollection,
    filter: String,
    selection: Selection,
}

/// What a message changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Changes {
    pub books: bool,
    pub filter: bool,
    pub selection: bool,
}

impl Snapshot {
    /// Cloning the collection only bumps a reference count.
    #[must_use]
    pub fn capture(books: &BookCollection, filter: &str, selection: &Selection) -> Self {
        Self {
            books: books.clone(),
            filter: filter.to_string(),
            selection: selection.clone(),
        }
    }

    #[must_use]
    pub fn changes(&self, books: &BookCollection, filter: &str, selection: &Selection) -> Changes {
        Changes {
            books: !self.books.same_as(books),
            filter: self.filter != filter,
            selection: &self.selection != selection,
        }
    }

    /// Logs each changed part at `debug` level and returns what changed.
    pub fn log_changes(
        &self,
        books: &BookCollection,
        filter: &str,
        selection: &Selection,
    ) -> Changes {
        let changes = self.changes(books, filter, selection);
        if changes.books {
            tracing::debug!(count = books.len(), "book list changed");
        }
        if changes.filter {
            tracing::debug!(filter, "filter changed");
        }
        if changes.selection {
            tracing::debug!(selected = ?selection.id(), "selection changed");
        }
        changes
    }
}
