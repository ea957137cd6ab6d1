//! Search command implementation

use crate::config::SourceConfig;
use crate::output;
use anyhow::Result;
use lms_core::{BookSnapshot, SearchField};
use serde::Serialize;

/// Search output
#[derive(Serialize)]
struct SearchReport<'a> {
    field: String,
    term: &'a str,
    count: usize,
    results: &'a [BookSnapshot],
}

/// Search the catalog on one field
pub fn search(source: &SourceConfig, field: SearchField, term: &str, json: bool) -> Result<()> {
    let catalog = source.open()?;
    let results = catalog.search(field, term);

    let report = SearchReport {
        field: field.to_string(),
        term,
        count: results.len(),
        results: &results,
    };

    output::print(&results, &report, json)?;
    if !json {
        println!(
            "Search completed: {} results found for {}: {}",
            results.len(),
            field,
            term
        );
    }

    Ok(())
}
