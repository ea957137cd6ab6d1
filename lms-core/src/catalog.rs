//! The in-memory catalog of books

use crate::error::{LendingError, LoadError};
use crate::input::SearchField;
use crate::loader::Loader;
use crate::types::{contains_ignore_case, Book, BookSnapshot};
use std::collections::HashSet;

/// Owns the current book collection in load order
///
/// Callers only ever receive [`BookSnapshot`]s, so copy counts can only
/// change through [`Catalog::borrow_book`] and [`Catalog::return_book`].
///
/// ISBNs are not required to be unique. When a source contains duplicates,
/// every lookup, borrow and return acts on the first matching record.
#[derive(Debug, Default)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog from already constructed books
    pub fn with_books(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// Replace the whole collection with the loader's output
    ///
    /// Prior lending state is discarded. If the loader fails the current
    /// collection is left exactly as it was.
    pub fn load_from(&mut self, loader: &dyn Loader) -> Result<usize, LoadError> {
        let books = loader.load()?;
        Ok(self.install(books, loader))
    }

    /// Swap in a freshly loaded collection
    pub(crate) fn install(&mut self, books: Vec<Book>, loader: &dyn Loader) -> usize {
        warn_duplicates(&books);

        tracing::info!(
            "Loaded {} books from {} source {}",
            books.len(),
            loader.kind(),
            loader.locator()
        );

        self.books = books;
        self.books.len()
    }

    /// Snapshots of every book in stored order
    pub fn books(&self) -> Vec<BookSnapshot> {
        self.books.iter().map(BookSnapshot::from).collect()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn find_by_isbn(&self, isbn: &str) -> Option<BookSnapshot> {
        self.books
            .iter()
            .find(|b| b.has_isbn(isbn))
            .map(BookSnapshot::from)
    }

    /// Books matching `term` on `field`, in stored order
    ///
    /// Title, author and genre match on a case-insensitive substring; ISBN
    /// needs a case-insensitive exact match.
    pub fn search(&self, field: SearchField, term: &str) -> Vec<BookSnapshot> {
        let results: Vec<BookSnapshot> = self
            .books
            .iter()
            .filter(|b| match field {
                SearchField::Title => contains_ignore_case(b.title(), term),
                SearchField::Author => contains_ignore_case(b.author(), term),
                SearchField::Genre => contains_ignore_case(b.genre(), term),
                SearchField::Isbn => b.has_isbn(term),
            })
            .map(BookSnapshot::from)
            .collect();

        tracing::debug!("Search {}={:?}: {} results", field, term, results.len());
        results
    }

    /// Search with the field given by its exact name
    ///
    /// Names other than `Title`, `Author`, `Genre` and `ISBN` (including
    /// differently cased ones) match nothing.
    pub fn search_by(&self, field: &str, term: &str) -> Vec<BookSnapshot> {
        match SearchField::from_name(field) {
            Some(field) => self.search(field, term),
            None => {
                tracing::debug!("Unknown search field {:?}", field);
                Vec::new()
            }
        }
    }

    /// Lend one copy of the first book with this ISBN
    pub fn borrow_book(&mut self, isbn: &str) -> Result<BookSnapshot, LendingError> {
        let book = self.book_mut(isbn)?;
        if book.available_copies() == 0 {
            return Err(LendingError::NoCopiesAvailable {
                isbn: book.isbn().to_string(),
                title: book.title().to_string(),
            });
        }

        book.borrow_copy();
        tracing::debug!(
            "Borrowed {} ({}), {} of {} out",
            book.title(),
            book.isbn(),
            book.borrowed_copies(),
            book.total_copies()
        );
        Ok(book.snapshot())
    }

    /// Take back one copy of the first book with this ISBN
    pub fn return_book(&mut self, isbn: &str) -> Result<BookSnapshot, LendingError> {
        let book = self.book_mut(isbn)?;
        if book.borrowed_copies() == 0 {
            return Err(LendingError::NothingToReturn {
                isbn: book.isbn().to_string(),
                title: book.title().to_string(),
            });
        }

        book.return_copy();
        tracing::debug!(
            "Returned {} ({}), {} of {} out",
            book.title(),
            book.isbn(),
            book.borrowed_copies(),
            book.total_copies()
        );
        Ok(book.snapshot())
    }

    /// The `n` most borrowed books, most borrowed first
    ///
    /// Ties keep their stored order. The stored order itself is untouched.
    pub fn top_borrowed(&self, n: usize) -> Vec<BookSnapshot> {
        let mut ranked: Vec<&Book> = self.books.iter().collect();
        // sort_by is stable
        ranked.sort_by(|a, b| b.borrowed_copies().cmp(&a.borrowed_copies()));
        ranked.into_iter().take(n).map(BookSnapshot::from).collect()
    }

    fn book_mut(&mut self, isbn: &str) -> Result<&mut Book, LendingError> {
        self.books
            .iter_mut()
            .find(|b| b.has_isbn(isbn))
            .ok_or_else(|| LendingError::NotFound(isbn.to_string()))
    }
}

fn warn_duplicates(books: &[Book]) {
    for book in duplicate_isbns(books) {
        tracing::warn!(
            "Duplicate ISBN {} ({}); only the first record will be used",
            book.isbn(),
            book.title()
        );
    }
}

/// Records whose ISBN (ignoring case) already appeared earlier
fn duplicate_isbns(books: &[Book]) -> Vec<&Book> {
    let mut seen = HashSet::new();
    books
        .iter()
        .filter(|book| !seen.insert(book.isbn().to_lowercase()))
        .collect()
}
