// SPDX-License-Identifier: MPL-2.0
//! `iced_books` is a small book-tracking application built with the Iced GUI
//! framework.
//!
//! Books live in memory only. The list can be filtered by id, name or author,
//! a form adds new books and each book has a detail page with a "read"
//! checkbox.
//!
//! # Layers
//!
//! - [`domain`] - Book records, the immutable collection, filter and selection
//! - [`application`] - Catalog use cases, listing query, identifier port
//! - [`infrastructure`] - Identifier generators
//! - [`ui`] - Iced screens, styles and toasts
//! - [`app`] - Root state, message routing and the Iced entry point
//! - [`config`], [`i18n`], [`error`] - Settings file, Fluent translations,
//!   crate error type

#![doc(html_root_url = "https://docs.rs/iced_books/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
