//! Loaders that materialize the initial book collection

mod file;
mod stub;

pub use file::FileLoader;
pub use stub::StubDatabaseLoader;

use crate::error::{InputError, LoadError};
use crate::types::{eq_ignore_case, Book};
use std::fmt;
use std::str::FromStr;

/// Trait for producing a fresh set of books from some source
pub trait Loader: Send + Sync {
    /// Load every record, or fail without returning partial results
    fn load(&self) -> Result<Vec<Book>, LoadError>;

    /// Which kind of source this loader reads
    fn kind(&self) -> LoaderKind;

    /// The path or connection string the loader was built with
    fn locator(&self) -> &str;
}

/// The supported source kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoaderKind {
    /// Comma-delimited text file
    #[default]
    File,

    /// Placeholder database returning fixed sample records
    Database,
}

impl LoaderKind {
    /// Locator used when none is configured
    pub fn default_locator(self) -> &'static str {
        match self {
            LoaderKind::File => "books.txt",
            LoaderKind::Database => "mysql://localhost:3306/library",
        }
    }
}

impl fmt::Display for LoaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoaderKind::File => f.write_str("File"),
            LoaderKind::Database => f.write_str("Database"),
        }
    }
}

impl FromStr for LoaderKind {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if eq_ignore_case(s, "file") {
            Ok(LoaderKind::File)
        } else if eq_ignore_case(s, "database") || eq_ignore_case(s, "db") {
            Ok(LoaderKind::Database)
        } else {
            Err(InputError::UnknownSource(s.to_string()))
        }
    }
}

/// Build the loader for a source kind and locator
pub fn loader_for(kind: LoaderKind, locator: impl Into<String>) -> Box<dyn Loader> {
    match kind {
        LoaderKind::File => Box::new(FileLoader::new(locator.into())),
        LoaderKind::Database => Box::new(StubDatabaseLoader::new(locator)),
    }
}
