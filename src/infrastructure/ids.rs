// SPDX-License-Identifier: MPL-2.0
//! Identifier generator adapters.

use crate::application::port::IdGenerator;
use crate::domain::book::BookId;
use uuid::Uuid;

/// Random UUID v4 identifiers, rendered in hyphenated lowercase form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate(&mut self) -> BookId {
        BookId::new(Uuid::new_v4().to_string())
    }
}

/// Deterministic identifiers (`<prefix>-1`, `<prefix>-2`, ...).
///
/// Used by benchmarks and tests where reproducible identifiers matter.
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: u64,
}

impl SequentialIdGenerator {
    /// Creates a generator whose first identifier is `<prefix>-1`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("book")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&mut self) -> BookId {
        let id = BookId::new(format!("{}-{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn uuid_ids_are_unique_and_hyphenated() {
        let mut generator = UuidIdGenerator;
        let ids: HashSet<BookId> = (0..1_000).map(|_| generator.generate()).collect();

        assert_eq!(ids.len(), 1_000);
        for id in &ids {
            assert_eq!(id.as_str().len(), 36);
            assert!(Uuid::parse_str(id.as_str()).is_ok());
        }
    }

    #[test]
    fn sequential_ids_count_up() {
        let mut generator = SequentialIdGenerator::new("t");
        assert_eq!(generator.generate().as_str(), "t-1");
        assert_eq!(generator.generate().as_str(), "t-2");
        assert_eq!(generator.generate().as_str(), "t-3");
    }
}
