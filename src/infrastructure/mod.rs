// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`ids`]: Identifier generators (implement [`IdGenerator`])
//! - [`covers`]: Cover image download (`http`, `https` and `file` URLs)
//!
//! [`IdGenerator`]: crate::application::port::IdGenerator

pub mod covers;
pub mod ids;

// Re-export main types for convenience
pub use ids::{SequentialIdGenerator, UuidIdGenerator};
