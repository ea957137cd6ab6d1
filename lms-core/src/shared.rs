//! Thread-safe handle around a [`Catalog`]

use crate::catalog::Catalog;
use crate::error::{LendingError, LoadError};
use crate::input::SearchField;
use crate::loader::Loader;
use crate::types::BookSnapshot;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Cloneable catalog handle for callers on more than one thread
///
/// Mutating operations hold the write lock for their whole
/// check-then-update, so two borrowers can never take the last copy twice.
#[derive(Clone, Default)]
pub struct SharedCatalog {
    inner: Arc<RwLock<Catalog>>,
}

impl SharedCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(catalog)),
        }
    }

    // No catalog operation panics between a check and its update, so a
    // poisoned lock still guards a consistent collection.
    fn read(&self) -> RwLockReadGuard<'_, Catalog> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Catalog> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn load_from(&self, loader: &dyn Loader) -> Result<usize, LoadError> {
        // The source is read before the write lock is taken
        let books = loader.load()?;
        Ok(self.write().install(books, loader))
    }

    pub fn books(&self) -> Vec<BookSnapshot> {
        self.read().books()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn find_by_isbn(&self, isbn: &str) -> Option<BookSnapshot> {
        self.read().find_by_isbn(isbn)
    }

    pub fn search(&self, field: SearchField, term: &str) -> Vec<BookSnapshot> {
        self.read().search(field, term)
    }

    pub fn search_by(&self, field: &str, term: &str) -> Vec<BookSnapshot> {
        self.read().search_by(field, term)
    }

    pub fn borrow_book(&self, isbn: &str) -> Result<BookSnapshot, LendingError> {
        self.write().borrow_book(isbn)
    }

    pub fn return_book(&self, isbn: &str) -> Result<BookSnapshot, LendingError> {
        self.write().return_book(isbn)
    }

    pub fn top_borrowed(&self, n: usize) -> Vec<BookSnapshot> {
        self.read().top_borrowed(n)
    }
}

impl From<Catalog> for SharedCatalog {
    fn from(catalog: Catalog) -> Self {
        Self::new(catalog)
    }
}
