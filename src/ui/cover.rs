// SPDX-License-Identifier: MPL-2.0
//! Book cover frame.
//!
//! Covers are fetched once per URL and kept in [`Covers`]. Until an image is
//! available (or when it could not be loaded) the frame shows the book title
//! instead. The tooltip always shows the image reference.

use crate::domain::book::Book;
use crate::error::Result;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{image, text, tooltip, Container, Text},
    ContentFit, Element, Length,
};
use std::collections::HashMap;

/// Load state of one cover URL.
#[derive(Debug, Clone)]
pub enum CoverState {
    Loading,
    Loaded(image::Handle),
    Failed,
}

/// Cover images by URL.
#[derive(Debug, Default)]
pub struct Covers {
    entries: HashMap<String, CoverState>,
}

impl Covers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `url` as loading.
    ///
    /// Returns `false` if the URL was already requested, in which case no
    /// new fetch should start. Failed URLs are not retried.
    pub fn begin(&mut self, url: &str) -> bool {
        if self.entries.contains_key(url) {
            return false;
        }
        self.entries.insert(url.to_string(), CoverState::Loading);
        true
    }

    /// Records the outcome of a fetch started with [`Covers::begin`].
    pub fn finish(&mut self, url: String, result: Result<image::Handle>) {
        let state = match result {
            Ok(handle) => CoverState::Loaded(handle),
            Err(err) => {
                tracing::warn!(%url, error = %err, "cover could not be loaded");
                CoverState::Failed
            }
        };
        self.entries.insert(url, state);
    }

    #[must_use]
    pub fn state(&self, url: &str) -> Option<&CoverState> {
        self.entries.get(url)
    }

    /// The decoded-on-demand image for `url`, once loaded.
    #[must_use]
    pub fn handle(&self, url: &str) -> Option<&image::Handle> {
        match self.entries.get(url) {
            Some(CoverState::Loaded(handle)) => Some(handle),
            _ => None,
        }
    }
}

/// Label drawn inside the frame: the book name, or `fallback` when blank.
#[must_use]
pub fn caption(book: &Book, fallback: &str) -> String {
    let name = book.name.trim();
    if name.is_empty() {
        fallback.to_string()
    } else {
        name.to_string()
    }
}

/// Fixed-size cover for `book`.
///
/// `placeholder` is used when the book has no image reference.
pub fn view<'a, M: 'a>(
    book: &'a Book,
    placeholder: &'a str,
    fallback: &str,
    covers: &Covers,
) -> Element<'a, M> {
    let url = book.cover_url(placeholder);

    let frame = match covers.handle(url) {
        Some(handle) => Container::new(
            image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Cover),
        ),
        None => Container::new(
            Text::new(caption(book, fallback))
                .size(typography::CAPTION)
                .wrapping(text::Wrapping::WordOrGlyph),
        )
        .padding(spacing::XS),
    }
    .width(Length::Fixed(sizing::COVER_WIDTH))
    .height(Length::Fixed(sizing::COVER_HEIGHT))
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(styles::container::cover_frame);

    let url = Container::new(Text::new(url).size(typography::CAPTION))
        .padding(spacing::XS)
        .style(styles::container::panel);

    tooltip(frame, url, tooltip::Position::Bottom).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::book::{BookId, NewBook};
    use crate::error::Error;

    const URL: &str = "https://example.org/p.png";

    fn book(name: &str) -> Book {
        Book::from_new(
            BookId::from("b-1"),
            NewBook {
                name: name.into(),
                ..NewBook::default()
            },
            None,
        )
    }

    #[test]
    fn caption_uses_book_name() {
        assert_eq!(caption(&book("Dune"), "Untitled"), "Dune");
    }

    #[test]
    fn caption_falls_back_for_blank_names() {
        assert_eq!(caption(&book("   "), "Untitled"), "Untitled");
    }

    #[test]
    fn each_url_is_requested_once() {
        let mut covers = Covers::new();
        assert!(covers.begin(URL));
        assert!(matches!(covers.state(URL), Some(CoverState::Loading)));
        assert!(!covers.begin(URL));
    }

    #[test]
    fn finished_fetch_exposes_handle() {
        let mut covers = Covers::new();
        covers.begin(URL);
        covers.finish(
            URL.to_string(),
            Ok(image::Handle::from_bytes(b"\x89PNG fake".to_vec())),
        );

        assert!(covers.handle(URL).is_some());
    }

    #[test]
    fn failed_fetch_is_not_retried() {
        let mut covers = Covers::new();
        covers.begin(URL);
        covers.finish(URL.to_string(), Err(Error::Network("HTTP status: 404".into())));

        assert!(matches!(covers.state(URL), Some(CoverState::Failed)));
        assert!(covers.handle(URL).is_none());
        assert!(!covers.begin(URL));
    }

    #[test]
    fn cover_view_renders_with_and_without_image() {
        let book = book("Dune");
        let mut covers = Covers::new();
        drop(view::<()>(&book, URL, "Untitled", &covers));

        covers.begin(URL);
        covers.finish(
            URL.to_string(),
            Ok(image::Handle::from_bytes(b"\x89PNG fake".to_vec())),
        );
        drop(view::<()>(&book, URL, "Untitled", &covers));
    }
}
