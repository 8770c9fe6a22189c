// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`book`]: Book records ([`Book`](book::Book), [`BookId`](book::BookId)),
//!   the [`BookCollection`](book::BookCollection), the
//!   [`BookFilter`](book::BookFilter) search, ratings and selection

pub mod book;
