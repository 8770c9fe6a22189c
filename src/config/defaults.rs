// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration and window constants.
//!
//! # Categories
//!
//! - **Catalog**: Cover placeholder for new books
//! - **Locale**: Fallback language
//! - **Window**: Initial and minimum window size

// ==========================================================================
// Catalog Defaults
// ==========================================================================

/// Cover image reference given to books that are added without one.
pub const DEFAULT_PLACEHOLDER_IMAGE_URL: &str =
    crate::domain::book::DEFAULT_PLACEHOLDER_IMAGE_URL;

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale used when neither CLI, config nor OS provide a supported one.
pub const DEFAULT_LOCALE: &str = "en-US";

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Initial window width in logical pixels.
pub const WINDOW_DEFAULT_WIDTH: f32 = 800.0;

/// Initial window height in logical pixels.
pub const WINDOW_DEFAULT_HEIGHT: f32 = 700.0;

/// Minimum window width in logical pixels.
pub const MIN_WINDOW_WIDTH: f32 = 480.0;

/// Minimum window height in logical pixels.
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;
