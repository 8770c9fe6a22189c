// SPDX-License-Identifier: MPL-2.0
//! Query services (CQRS read-side).
//!
//! This module contains query services for reading domain data.
//! These services do not modify state; they provide read-only access.
//!
//! # Available Services
//!
//! - [`listing`]: Filtered book list with its counters (`Listing`)

pub mod listing;

// Re-export main types
pub use listing::{Listing, ListingInfo};
