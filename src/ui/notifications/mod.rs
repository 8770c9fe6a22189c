// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Short-lived messages confirming an action ("Added “Dune”") or reporting
//! a recoverable problem (unreadable `settings.toml`). Messages are stored as
//! i18n keys and resolved at render time, so a locale change also applies to
//! toasts already on screen.
//!
//! - [`notification`]: `Notification` and its `Severity`
//! - [`manager`]: visible set, overflow queue and auto-dismiss
//! - [`toast`]: rendering
//!
//! At most three toasts are visible; success toasts last 3s, warnings 5s.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, MAX_VISIBLE};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
