//! Placeholder database loader

use super::{Loader, LoaderKind};
use crate::error::LoadError;
use crate::types::Book;

/// Stands in for a real database source
///
/// The connection string is kept for display only; no connection is made
/// and the same two sample records come back every time.
pub struct StubDatabaseLoader {
    connection_string: String,
}

impl StubDatabaseLoader {
    pub fn new(connection_string: impl Into<String>) -> Self {
        Self {
            connection_string: connection_string.into(),
        }
    }
}

impl Loader for StubDatabaseLoader {
    fn load(&self) -> Result<Vec<Book>, LoadError> {
        tracing::debug!(
            "Database source {} is a stub, returning sample records",
            self.connection_string
        );

        Ok(vec![
            Book::new("100", "Database Book 1", "DB Author 1", "Technical", 3),
            Book::new("101", "Database Book 2", "DB Author 2", "Fiction", 5),
        ])
    }

    fn kind(&self) -> LoaderKind {
        LoaderKind::Database
    }

    fn locator(&self) -> &str {
        &self.connection_string
    }
}
