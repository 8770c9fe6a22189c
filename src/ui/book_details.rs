// SPDX-License-Identifier: MPL-2.0
//! Detail screen for the selected book.

use crate::domain::book::{Book, BookId};
use crate::i18n::fluent::I18n;
use crate::ui::book_list::{rating_text, read_badge};
use crate::ui::cover::{self, Covers};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    font::Weight,
    widget::{button, checkbox, scrollable, Column, Container, Row, Text},
    Element, Font, Length,
};

/// Contextual data needed to render the detail screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub book: &'a Book,
    pub placeholder_image_url: &'a str,
    pub covers: &'a Covers,
}

#[derive(Debug, Clone)]
pub enum Message {
    BackToList,
    ToggleRead(BookId),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    BackToList,
    ToggleRead(BookId),
}

#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::BackToList => Event::BackToList,
        Message::ToggleRead(id) => Event::ToggleRead(id),
    }
}

#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let book = ctx.book;
    let untitled = i18n.tr("book-untitled");

    let back_button = button(
        Text::new(format!("← {}", i18n.tr("book-details-back-button"))).size(typography::BODY),
    )
    .on_press(Message::BackToList)
    .style(styles::button::secondary);

    let mut heading = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            Text::new(cover::caption(book, &untitled))
                .size(typography::TITLE_MD)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::default()
                }),
        );
    if book.is_read {
        heading = heading.push(read_badge(i18n));
    }

    let fields = Column::new()
        .spacing(spacing::XS)
        .push(heading)
        .push(field(i18n.tr("field-author"), book.author.clone()))
        .push(field(i18n.tr("field-genre"), book.genre.clone()))
        .push(Text::new(rating_text(i18n, book)).size(typography::BODY))
        .push(field(i18n.tr("field-description"), book.description.clone()));

    let id = book.id.clone();
    let read_checkbox = checkbox(book.is_read)
        .label(i18n.tr("book-details-read-checkbox"))
        .on_toggle(move |_| Message::ToggleRead(id.clone()));

    let body = Row::new()
        .spacing(spacing::LG)
        .align_y(Vertical::Top)
        .push(cover::view(book, ctx.placeholder_image_url, &untitled, ctx.covers))
        .push(
            Column::new()
                .spacing(spacing::MD)
                .width(Length::Fill)
                .push(fields)
                .push(read_checkbox),
        );

    let content = Column::new()
        .spacing(spacing::MD)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(back_button)
        .push(
            Container::new(body)
                .width(Length::Fill)
                .padding(spacing::MD)
                .style(styles::container::panel),
        );

    scrollable(
        Container::new(content)
            .width(Length::Fill)
            .padding(spacing::LG)
            .align_x(Horizontal::Center),
    )
    .height(Length::Fill)
    .into()
}

fn field<'a>(label: String, value: String) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::BODY_SM))
        .push(Text::new(value).size(typography::BODY))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::domain::book::NewBook;

    #[test]
    fn messages_map_to_events() {
        assert_eq!(update(Message::BackToList), Event::BackToList);
        assert_eq!(
            update(Message::ToggleRead(BookId::from("x"))),
            Event::ToggleRead(BookId::from("x"))
        );
    }

    #[test]
    fn detail_view_renders_read_and_unread() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        let unread = Book::from_new(
            BookId::from("x"),
            NewBook {
                name: "Dune".into(),
                ..NewBook::default()
            },
            None,
        );
        let read = unread.with_read_toggled();
        let covers = Covers::new();

        for book in [&unread, &read] {
            drop(view(ViewContext {
                i18n: &i18n,
                book,
                placeholder_image_url: "https://example.org/p.png",
                covers: &covers,
            }));
        }
    }
}
