// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! Translation files live in `assets/i18n/<locale>.ftl` and are embedded at build time.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Message arguments (`{ $name }`) via [`fluent::I18n::tr_with_args`]
//! - Runtime language switching
//! - `MISSING: <key>` marker when a translation is absent

pub mod fluent;
