// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! This module contains the application layer of the Clean Architecture:
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`catalog`]: The book catalog use cases (add a book, toggle its read flag)
//! - [`query`]: Query services (CQRS read-side)
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer uses application layer services
//!
//! # Example
//!
//! ```
//! use iced_books::application::catalog::Catalog;
//! use iced_books::domain::book::{NewBook, DEFAULT_PLACEHOLDER_IMAGE_URL};
//! use iced_books::infrastructure::UuidIdGenerator;
//!
//! let mut catalog = Catalog::new(Box::new(UuidIdGenerator), DEFAULT_PLACEHOLDER_IMAGE_URL);
//! catalog.append(NewBook {
//!     name: "Dune".into(),
//!     ..NewBook::default()
//! });
//! assert_eq!(catalog.books().len(), 1);
//! ```

pub mod catalog;
pub mod port;
pub mod query;
