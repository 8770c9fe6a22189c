// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the list and detail views.
//!
//! The `App` struct wires together the book catalog, the selection, the list
//! screen state, localization and toasts. Every message goes through
//! [`App::update`], which delegates to the handlers in `update`, drops a
//! selection whose book disappeared and logs what changed.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::catalog::Catalog;
use crate::config::{
    self, DEFAULT_PLACEHOLDER_IMAGE_URL, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
    WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH,
};
use crate::domain::book::{Selection, ViewMode};
use crate::i18n::fluent::I18n;
use crate::infrastructure::UuidIdGenerator;
use crate::ui::book_list;
use crate::ui::cover::{self, Covers};
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    catalog: Catalog,
    /// Book shown in the detail view, if any.
    selection: Selection,
    /// Filter text and add-form draft.
    book_list: book_list::State,
    theme_mode: ThemeMode,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    /// Cover images by URL.
    covers: Covers,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("books", &self.catalog.books().len())
            .field("selection", &self.selection)
            .field("filter", &self.book_list.filter.as_str())
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 requires a `Fn` boot closure; the flags are cheap to clone.
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::from_parts(
            I18n::default(),
            Catalog::new(Box::new(UuidIdGenerator), DEFAULT_PLACEHOLDER_IMAGE_URL),
            ThemeMode::System,
        )
    }
}

impl App {
    fn from_parts(i18n: I18n, catalog: Catalog, theme_mode: ThemeMode) -> Self {
        Self {
            i18n,
            catalog,
            selection: Selection::none(),
            book_list: book_list::State::default(),
            theme_mode,
            notifications: notifications::Manager::new(),
            covers: Covers::new(),
        }
    }

    /// Loads the settings and starts with an empty list.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);
        let catalog = Catalog::new(
            Box::new(UuidIdGenerator),
            config.catalog.placeholder_image_url(),
        );

        let mut app = Self::from_parts(i18n, catalog, config.general.theme_mode);

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        tracing::info!(
            locale = %app.i18n.current_locale(),
            theme = ?app.theme_mode,
            "application started"
        );

        (app, Task::none())
    }

    /// "Books" on the list, "<name> - Books" on a detail page.
    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        match self.selection.resolve(self.catalog.books()) {
            ViewMode::List => app_name,
            ViewMode::Detail(book) => {
                let name = cover::caption(book, &self.i18n.tr("book-untitled"));
                format!("{name} - {app_name}")
            }
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let snapshot = update::Snapshot::capture(
            self.catalog.books(),
            self.book_list.filter.as_str(),
            &self.selection,
        );

        let mut ctx = update::UpdateContext {
            catalog: &mut self.catalog,
            selection: &mut self.selection,
            book_list: &mut self.book_list,
            notifications: &mut self.notifications,
            covers: &mut self.covers,
        };

        let task = match message {
            Message::BookList(list_message) => {
                update::handle_book_list_message(&mut ctx, list_message)
            }
            Message::BookDetails(details_message) => {
                update::handle_book_details_message(&mut ctx, details_message)
            }
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(now) => {
                ctx.notifications.tick(now);
                Task::none()
            }
            Message::CoverLoaded { url, result } => {
                update::handle_cover_loaded(ctx.covers, url, result)
            }
        };

        if update::clear_stale_selection(&mut self.selection, self.catalog.books()) {
            tracing::debug!("selected book no longer exists, back to list");
        }

        snapshot.log_changes(
            self.catalog.books(),
            self.book_list.filter.as_str(),
            &self.selection,
        );

        task
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            books: self.catalog.books(),
            placeholder_image_url: self.catalog.placeholder_image_url(),
            selection: &self.selection,
            book_list: &self.book_list,
            notifications: &self.notifications,
            covers: &self.covers,
        })
    }
}
