// SPDX-License-Identifier: MPL-2.0
//! Identifier generation port.

use crate::domain::book::BookId;

/// Source of identifiers for newly created books.
///
/// # Contract
///
/// Each call returns a value never returned before during the lifetime of
/// the application. Implementations backed by random values (UUID v4) meet
/// this with overwhelming probability; the catalog still re-draws if a
/// generated identifier is already taken.
pub trait IdGenerator {
    /// Produces a fresh identifier.
    fn generate(&mut self) -> BookId;
}
