//! List command implementation

use crate::config::SourceConfig;
use crate::output;
use anyhow::Result;

/// Display every book in the catalog
pub fn list(source: &SourceConfig, json: bool) -> Result<()> {
    let catalog = source.open()?;
    let books = catalog.books();

    output::print(&books, &books, json)?;
    if !json {
        println!("Displaying all books: {} books", books.len());
    }

    Ok(())
}
