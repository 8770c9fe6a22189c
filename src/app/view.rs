// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The selection decides the screen; toasts are stacked on top of it.

use super::Message;
use crate::domain::book::{BookCollection, Selection, ViewMode};
use crate::i18n::fluent::I18n;
use crate::ui::book_details;
use crate::ui::book_list;
use crate::ui::cover::Covers;
use crate::ui::notifications::{self, Toast};
use iced::{
    widget::{Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub books: &'a BookCollection,
    pub placeholder_image_url: &'a str,
    pub selection: &'a Selection,
    pub book_list: &'a book_list::State,
    pub notifications: &'a notifications::Manager,
    pub covers: &'a Covers,
}

/// Renders the screen matching the current selection.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.selection.resolve(ctx.books) {
        ViewMode::List => book_list::view(book_list::ViewContext {
            i18n: ctx.i18n,
            state: ctx.book_list,
            books: ctx.books,
            placeholder_image_url: ctx.placeholder_image_url,
            covers: ctx.covers,
        })
        .map(Message::BookList),
        ViewMode::Detail(book) => book_details::view(book_details::ViewContext {
            i18n: ctx.i18n,
            book,
            placeholder_image_url: ctx.placeholder_image_url,
            covers: ctx.covers,
        })
        .map(Message::BookDetails),
    };

    let screen = Container::new(current_view)
        .width(Length::Fill)
        .height(Length::Fill);

    if ctx.notifications.visible_count() == 0 {
        return screen.into();
    }

    Stack::new()
        .push(screen)
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
