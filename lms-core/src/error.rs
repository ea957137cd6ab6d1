//! Error types for LMS Core

use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using LmsError
pub type Result<T> = std::result::Result<T, LmsError>;

/// Top-level error type for all LMS operations
#[derive(Debug, Error)]
pub enum LmsError {
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error(transparent)]
    Lending(#[from] LendingError),

    #[error("Invalid input: {0}")]
    Input(#[from] InputError),
}

/// Errors that abort a catalog load
///
/// A failed load never leaves a partially applied collection behind.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Please specify a file path")]
    MissingPath,

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line}: invalid copy count '{value}'")]
    InvalidCopyCount {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Expected outcomes of a borrow or return that did not go through
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LendingError {
    #[error("No book with ISBN {0}")]
    NotFound(String),

    #[error("No copies available for {title}")]
    NoCopiesAvailable { isbn: String, title: String },

    #[error("All copies are already available for {title}")]
    NothingToReturn { isbn: String, title: String },
}

/// Errors in user-supplied values, caught before they reach the catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Unknown search field: {0} (expected Title, Author, Genre or ISBN)")]
    UnknownSearchField(String),

    #[error("Unknown data source: {0} (expected file or database)")]
    UnknownSource(String),

    #[error("Please enter a search term")]
    EmptySearchTerm,

    #[error("Please enter a valid number: {0}")]
    InvalidCount(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),
}
