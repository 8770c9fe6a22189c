// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Screens follow the Elm-style "state down, messages up" pattern: each one
//! exposes a `ViewContext`, a `Message`, an `Event` for the parent and
//! `update`/`view` functions.
//!
//! # Screens
//!
//! - [`book_list`] - Filter box, matching books and the add form
//! - [`book_details`] - One book with its read checkbox
//!
//! # Shared Infrastructure
//!
//! - [`add_form`] - Draft editing for new books
//! - [`cover`] - Fixed-size cover frame
//! - [`styles`] - Button and container styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode
//! - [`notifications`] - Toast notifications

pub mod add_form;
pub mod book_details;
pub mod book_list;
pub mod cover;
pub mod design_tokens;
pub mod notifications;
pub mod styles;
pub mod theming;
