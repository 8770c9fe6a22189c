// SPDX-License-Identifier: MPL-2.0
//! Time-based subscriptions.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// How often toast lifetimes are checked.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Ticks only while toasts are visible or queued, so an idle window does
/// no periodic work.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
