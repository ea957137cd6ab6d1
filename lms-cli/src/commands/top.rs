//! Top borrowed command implementation

use crate::config::SourceConfig;
use crate::output;
use anyhow::Result;

/// Display the most borrowed books
pub fn top(source: &SourceConfig, count: usize, json: bool) -> Result<()> {
    let catalog = source.open()?;
    let books = catalog.top_borrowed(count);

    output::print(&books, &books, json)?;
    if !json {
        println!("Displaying top {} borrowed books", count);
    }

    Ok(())
}
