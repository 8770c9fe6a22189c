// SPDX-License-Identifier: MPL-2.0
//! Book rating value object.

use std::fmt;

/// Numeric rating attached to a book.
///
/// Ratings are unbounded (no 1–5 range is enforced) but always finite, so
/// every rating can be displayed and compared without special cases.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Rating(f64);

impl Rating {
    /// Zero rating, used for fresh drafts and for unparseable input.
    pub const ZERO: Rating = Rating(0.0);

    /// Creates a rating, mapping non-finite values (NaN, ±∞) to zero.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(value)
        } else {
            Self::ZERO
        }
    }

    /// Coerces raw text input into a rating.
    ///
    /// Surrounding whitespace is ignored and an empty string is zero.
    /// Anything that is not a finite number also becomes zero; this never
    /// fails.
    #[must_use]
    pub fn from_input(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::ZERO;
        }
        trimmed
            .parse::<f64>()
            .map(Self::new)
            .unwrap_or(Self::ZERO)
    }

    /// Returns the raw numeric value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Rating {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<u8> for Rating {
    fn from(value: u8) -> Self {
        Self(f64::from(value))
    }
}

impl fmt::Display for Rating {
    // `f64` Display already prints whole numbers without a fraction ("5").
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
