//! Comma-delimited file loader
//!
//! One record per line, `isbn,title,author,genre,totalCopies`, no header
//! and no quoting. Lines with fewer than five fields are skipped; a copy
//! count that is not a non-negative integer aborts the whole load.

use super::{Loader, LoaderKind};
use crate::error::LoadError;
use crate::types::Book;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

const FIELD_COUNT: usize = 5;

/// Loader for the flat-file catalog format
pub struct FileLoader {
    path: String,
}

impl FileLoader {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Parse records from any buffered reader
    ///
    /// I/O errors are reported against this loader's path. Bytes that are
    /// not valid UTF-8 are replaced rather than failing the load.
    pub fn parse<R: BufRead>(&self, reader: R) -> Result<Vec<Book>, LoadError> {
        let mut books = Vec::new();

        for (index, raw) in reader.split(b'\n').enumerate() {
            let mut raw = raw.map_err(|source| LoadError::Io {
                path: self.path.clone().into(),
                source,
            })?;
            if raw.last() == Some(&b'\r') {
                raw.pop();
            }
            let line = String::from_utf8_lossy(&raw);

            if let Some(book) = parse_record(&line, index + 1)? {
                books.push(book);
            }
        }

        Ok(books)
    }
}

impl Loader for FileLoader {
    fn load(&self) -> Result<Vec<Book>, LoadError> {
        if self.path.trim().is_empty() {
            return Err(LoadError::MissingPath);
        }

        let path = Path::new(&self.path);
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let books = self.parse(BufReader::new(file))?;
        tracing::debug!("Parsed {} records from {}", books.len(), self.path);
        Ok(books)
    }

    fn kind(&self) -> LoaderKind {
        LoaderKind::File
    }

    fn locator(&self) -> &str {
        &self.path
    }
}

/// Parse one line; `Ok(None)` means the line is skipped
fn parse_record(line: &str, line_number: usize) -> Result<Option<Book>, LoadError> {
    let mut fields: Vec<&str> = line.split(',').collect();

    // Trailing empty fields do not count towards the five
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }

    if fields.len() < FIELD_COUNT {
        if !line.trim().is_empty() {
            tracing::debug!("Skipping line {}: too few fields", line_number);
        }
        return Ok(None);
    }

    let copies = fields[4].trim();
    let total_copies = copies
        .parse::<u32>()
        .map_err(|source| LoadError::InvalidCopyCount {
            line: line_number,
            value: copies.to_string(),
            source,
        })?;

    Ok(Some(Book::new(
        fields[0].trim(),
        fields[1].trim(),
        fields[2].trim(),
        fields[3].trim(),
        total_copies,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(content: &str) -> Result<Vec<Book>, LoadError> {
        FileLoader::new("test.csv").parse(Cursor::new(content))
    }

    #[test]
    fn test_parse_two_records() {
        let books =
            parse("B1,Title One,Author A,Fiction,3\nB2,Title Two,Author B,Tech,2\n").unwrap();
        assert_eq!(books.len(), 2);
        assert_eq!(books[0].isbn(), "B1");
        assert_eq!(books[0].title(), "Title One");
        assert_eq!(books[1].genre(), "Tech");
        assert_eq!(books[1].total_copies(), 2);
        assert!(books.iter().all(|b| b.borrowed_copies() == 0));
    }

    #[test]
    fn test_fields_are_trimmed() {
        let books = parse("  B1 , Title One ,Author A,  Fiction ,  3  ").unwrap();
        assert_eq!(books[0].isbn(), "B1");
        assert_eq!(books[0].title(), "Title One");
        assert_eq!(books[0].genre(), "Fiction");
        assert_eq!(books[0].total_copies(), 3);
    }

    #[test]
    fn test_short_and_blank_lines_are_skipped() {
        let books = parse("\nB1,Title One\n\nB2,Title Two,Author B,Tech,2\n   \n").unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].isbn(), "B2");
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let books = parse("B1,Title One,Author A,Fiction,3,shelf 4,extra").unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].total_copies(), 3);
    }

    #[test]
    fn test_trailing_empty_fields_do_not_count() {
        // Only four real fields, so the line is skipped rather than failing
        let books = parse("B1,Title One,Author A,Fiction,\nB1,Title One,Author A,,,\n").unwrap();
        assert!(books.is_empty());
    }

    #[test]
    fn test_crlf_line_endings() {
        let books =
            parse("B1,Title One,Author A,Fiction,3\r\nB2,Title Two,Author B,Tech,2\r\n").unwrap();
        assert_eq!(books.len(), 2);
        assert_eq!(books[0].total_copies(), 3);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let content = b"B1,Les Mis\xe9rables,Hugo,Fiction,3\nB2,Title Two,Author B,Tech,2\n";
        let books = FileLoader::new("latin1.txt")
            .parse(Cursor::new(&content[..]))
            .unwrap();
        assert_eq!(books.len(), 2);
        assert_eq!(books[0].title(), "Les Mis\u{FFFD}rables");
        assert_eq!(books[0].total_copies(), 3);
        assert_eq!(books[1].isbn(), "B2");
    }

    #[test]
    fn test_bad_copy_count_aborts() {
        let err = parse("B1,Title One,Author A,Fiction,3\nB3,Bad,AuthorC,Genre,notanumber\n")
            .unwrap_err();
        match err {
            LoadError::InvalidCopyCount { line, value, .. } => {
                assert_eq!(line, 2);
                assert_eq!(value, "notanumber");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_negative_copy_count_aborts() {
        let err = parse("B1,Title One,Author A,Fiction,-1").unwrap_err();
        assert!(matches!(err, LoadError::InvalidCopyCount { line: 1, .. }));
    }

    #[test]
    fn test_missing_path() {
        let err = FileLoader::new("  ").load().unwrap_err();
        assert!(matches!(err, LoadError::MissingPath));
    }

    #[test]
    fn test_missing_file() {
        let err = FileLoader::new("/nonexistent/books.txt").load().unwrap_err();
        match err {
            LoadError::Io { path, .. } => assert_eq!(path, Path::new("/nonexistent/books.txt")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
