//! The Book record and its read-only snapshot

use serde::{Deserialize, Serialize};

/// One title in the library with its copy accounting
///
/// Fields are private so that `borrowed_copies` can only move through
/// [`Book::borrow_copy`] and [`Book::return_copy`], which keep
/// `0 <= borrowed_copies <= total_copies`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    isbn: String,
    title: String,
    author: String,
    genre: String,
    total_copies: u32,
    borrowed_copies: u32,
}

impl Book {
    /// Create a book with no copies on loan
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        total_copies: u32,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            total_copies,
            borrowed_copies: 0,
        }
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn total_copies(&self) -> u32 {
        self.total_copies
    }

    pub fn borrowed_copies(&self) -> u32 {
        self.borrowed_copies
    }

    pub fn available_copies(&self) -> u32 {
        self.total_copies - self.borrowed_copies
    }

    /// Lend out one copy. Does nothing when every copy is already out.
    pub fn borrow_copy(&mut self) {
        if self.borrowed_copies < self.total_copies {
            self.borrowed_copies += 1;
        }
    }

    /// Take one copy back. Does nothing when no copy is out.
    pub fn return_copy(&mut self) {
        if self.borrowed_copies > 0 {
            self.borrowed_copies -= 1;
        }
    }

    /// Case-insensitive ISBN comparison
    pub fn has_isbn(&self, isbn: &str) -> bool {
        eq_ignore_case(&self.isbn, isbn)
    }

    /// Copy the current values out for display
    pub fn snapshot(&self) -> BookSnapshot {
        BookSnapshot::from(self)
    }
}

/// Read-only copy of a book's values at one point in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSnapshot {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub available: u32,
    pub total: u32,
    pub borrowed: u32,
}

impl From<&Book> for BookSnapshot {
    fn from(book: &Book) -> Self {
        Self {
            isbn: book.isbn.clone(),
            title: book.title.clone(),
            author: book.author.clone(),
            genre: book.genre.clone(),
            available: book.available_copies(),
            total: book.total_copies,
            borrowed: book.borrowed_copies,
        }
    }
}

pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
