// SPDX-License-Identifier: MPL-2.0
//! List screen: filter box, matching books and the add form.

use crate::application::query::{Listing, ListingInfo};
use crate::domain::book::{Book, BookCollection, BookFilter, BookId, NewBook};
use crate::i18n::fluent::I18n;
use crate::ui::add_form::{self, Draft};
use crate::ui::cover::{self, Covers};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    font::Weight,
    widget::{button, scrollable, text_input, Column, Container, Row, Text},
    Element, Font, Length,
};

/// State owned by the list screen.
#[derive(Debug, Default)]
pub struct State {
    pub filter: BookFilter,
    pub draft: Draft,
}

/// Contextual data needed to render the list screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub books: &'a BookCollection,
    pub placeholder_image_url: &'a str,
    pub covers: &'a Covers,
}

#[derive(Debug, Clone)]
pub enum Message {
    FilterChanged(String),
    ShowDetails(BookId),
    Form(add_form::Message),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    ShowDetails(BookId),
    AddBook(NewBook),
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::FilterChanged(text) => {
            state.filter = BookFilter::new(text);
            Event::None
        }
        Message::ShowDetails(id) => Event::ShowDetails(id),
        Message::Form(form_message) => match add_form::update(&mut state.draft, form_message) {
            add_form::Event::None => Event::None,
            add_form::Event::Submitted(book) => Event::AddBook(book),
        },
    }
}

/// Text of the counters line above the list.
#[must_use]
pub fn summary_text(i18n: &I18n, info: &ListingInfo) -> String {
    let total = info.total_count.to_string();
    let read = info.read_count.to_string();
    if info.filter_active {
        let shown = info.filtered_count.to_string();
        i18n.tr_with_args(
            "book-list-summary-filtered",
            &[
                ("shown", shown.as_str()),
                ("total", total.as_str()),
                ("read", read.as_str()),
            ],
        )
    } else {
        i18n.tr_with_args(
            "book-list-summary",
            &[("total", total.as_str()), ("read", read.as_str())],
        )
    }
}

#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let listing = Listing::build(ctx.books, &ctx.state.filter);

    let title = Text::new(i18n.tr("book-list-title")).size(typography::TITLE_LG);

    let filter_input = text_input(
        &i18n.tr("book-list-filter-placeholder"),
        ctx.state.filter.as_str(),
    )
    .on_input(Message::FilterChanged)
    .padding(spacing::XS);

    let summary = Text::new(summary_text(i18n, &listing.info)).size(typography::CAPTION);

    let books: Element<'_, Message> = if listing.is_empty() {
        let key = if listing.info.filter_active {
            "book-list-no-match"
        } else {
            "book-list-empty"
        };
        Container::new(Text::new(i18n.tr(key)).size(typography::BODY))
            .width(Length::Fill)
            .padding(spacing::LG)
            .align_x(Horizontal::Center)
            .into()
    } else {
        Column::with_children(
            listing
                .books
                .into_iter()
                .map(|book| book_card(i18n, book, ctx.placeholder_image_url, ctx.covers)),
        )
        .spacing(spacing::SM)
        .into()
    };

    let form = add_form::view(add_form::ViewContext {
        i18n,
        draft: &ctx.state.draft,
    })
    .map(Message::Form);

    let content = Column::new()
        .spacing(spacing::MD)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(title)
        .push(filter_input)
        .push(summary)
        .push(books)
        .push(form);

    scrollable(
        Container::new(content)
            .width(Length::Fill)
            .padding(spacing::LG)
            .align_x(Horizontal::Center),
    )
    .height(Length::Fill)
    .into()
}

fn book_card<'a>(
    i18n: &I18n,
    book: &'a Book,
    placeholder: &'a str,
    covers: &Covers,
) -> Element<'a, Message> {
    let untitled = i18n.tr("book-untitled");

    let name = Text::new(cover::caption(book, &untitled))
        .size(typography::TITLE_SM)
        .font(Font {
            weight: Weight::Bold,
            ..Font::default()
        });

    let mut details = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(name)
        .push(Text::new(book.author.as_str()).size(typography::BODY))
        .push(
            Text::new(format!("{} · {}", book.genre, rating_text(i18n, book)))
                .size(typography::BODY_SM),
        );

    if book.is_read {
        details = details.push(read_badge(i18n));
    }

    let open = button(Text::new(i18n.tr("book-list-details-button")).size(typography::BODY))
        .on_press(Message::ShowDetails(book.id.clone()))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    let row = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(cover::view(book, placeholder, &untitled, covers))
        .push(details)
        .push(open);

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::card)
        .into()
}

/// "Rating: 4.5" in the active locale.
#[must_use]
pub fn rating_text(i18n: &I18n, book: &Book) -> String {
    let rating = book.rating.to_string();
    i18n.tr_with_args("book-rating-value", &[("rating", rating.as_str())])
}

/// Small "Read" pill, shared with the detail view.
pub fn read_badge<'a, M: 'a>(i18n: &I18n) -> Element<'a, M> {
    Container::new(Text::new(i18n.tr("book-read-badge")).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::read_badge)
        .into()
}
