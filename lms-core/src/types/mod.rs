//! Core record types for the catalog

mod book;

pub use book::{Book, BookSnapshot};

pub(crate) use book::{contains_ignore_case, eq_ignore_case};
