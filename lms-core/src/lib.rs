//! LMS Core Library
//!
//! This crate provides the book catalog for the LMS library management system.
//! A [`Loader`] materializes the collection from a flat file or a stub database,
//! and the [`Catalog`] answers lookups, searches, lending and ranking over it.
//! Callers only ever see [`BookSnapshot`] copies of the stored records.

pub mod catalog;
pub mod error;
pub mod input;
pub mod loader;
pub mod shared;
pub mod types;

pub use catalog::Catalog;
pub use error::{InputError, LendingError, LmsError, LoadError, Result};
pub use input::{parse_rank_count, parse_search_term, SearchField};
pub use loader::{loader_for, FileLoader, Loader, LoaderKind, StubDatabaseLoader};
pub use shared::SharedCatalog;
pub use types::{Book, BookSnapshot};
