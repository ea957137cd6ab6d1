//! Parsing of user-supplied values before they reach the catalog

use crate::error::InputError;
use crate::types::eq_ignore_case;
use std::fmt;
use std::str::FromStr;

/// Which book attribute a search looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Author,
    Genre,
    Isbn,
}

impl SearchField {
    pub const ALL: [SearchField; 4] = [
        SearchField::Title,
        SearchField::Author,
        SearchField::Genre,
        SearchField::Isbn,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SearchField::Title => "Title",
            SearchField::Author => "Author",
            SearchField::Genre => "Genre",
            SearchField::Isbn => "ISBN",
        }
    }

    /// Look up a field by its exact name (`Title`, `Author`, `Genre`, `ISBN`)
    ///
    /// Unlike [`FromStr`], which accepts any casing, this is case-sensitive.
    pub fn from_name(name: &str) -> Option<SearchField> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchField {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|field| eq_ignore_case(field.name(), s))
            .ok_or_else(|| InputError::UnknownSearchField(s.to_string()))
    }
}

/// Trim a search term, rejecting blank input
pub fn parse_search_term(s: &str) -> Result<String, InputError> {
    let term = s.trim();
    if term.is_empty() {
        Err(InputError::EmptySearchTerm)
    } else {
        Ok(term.to_string())
    }
}

/// Parse a ranking size; negative values clamp to zero
pub fn parse_rank_count(s: &str) -> Result<usize, InputError> {
    let s = s.trim();
    let n: i64 = s
        .parse()
        .map_err(|_| InputError::InvalidCount(s.to_string()))?;
    Ok(usize::try_from(n).unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_field_from_str() {
        assert_eq!("Title".parse::<SearchField>().unwrap(), SearchField::Title);
        assert_eq!("author".parse::<SearchField>().unwrap(), SearchField::Author);
        assert_eq!(" GENRE ".parse::<SearchField>().unwrap(), SearchField::Genre);
        assert_eq!("isbn".parse::<SearchField>().unwrap(), SearchField::Isbn);
        assert_eq!(
            "publisher".parse::<SearchField>(),
            Err(InputError::UnknownSearchField("publisher".to_string()))
        );
    }

    #[test]
    fn test_search_field_from_name_is_exact() {
        assert_eq!(SearchField::from_name("Genre"), Some(SearchField::Genre));
        assert_eq!(SearchField::from_name("ISBN"), Some(SearchField::Isbn));
        assert_eq!(SearchField::from_name("title"), None);
        assert_eq!(SearchField::from_name("Isbn"), None);
        assert_eq!(SearchField::from_name(" Title"), None);
    }

    #[test]
    fn test_search_field_display() {
        assert_eq!(SearchField::Isbn.to_string(), "ISBN");
        assert_eq!(SearchField::Title.to_string(), "Title");
    }

    #[test]
    fn test_parse_search_term() {
        assert_eq!(parse_search_term("  rust  ").unwrap(), "rust");
        assert_eq!(parse_search_term("   "), Err(InputError::EmptySearchTerm));
    }

    #[test]
    fn test_parse_rank_count() {
        assert_eq!(parse_rank_count("5").unwrap(), 5);
        assert_eq!(parse_rank_count(" 0 ").unwrap(), 0);
        assert_eq!(parse_rank_count("-3").unwrap(), 0);
        assert_eq!(
            parse_rank_count("five"),
            Err(InputError::InvalidCount("five".to_string()))
        );
    }
}
