// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::ui::book_details;
use crate::ui::book_list;
use crate::ui::notifications;
use iced::widget::image;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    BookList(book_list::Message),
    BookDetails(book_details::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick for toast auto-dismiss.
    Tick(Instant),
    /// A cover fetch finished.
    CoverLoaded {
        url: String,
        result: Result<image::Handle, Error>,
    },
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_BOOKS_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
