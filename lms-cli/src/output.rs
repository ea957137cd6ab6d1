//! Rendering of book snapshots for the terminal

use anyhow::Result;
use lms_core::BookSnapshot;
use serde::Serialize;

const HEADERS: [&str; 7] = [
    "ISBN",
    "Title",
    "Author",
    "Genre",
    "Available",
    "Total",
    "Borrowed",
];

/// Render snapshots as an aligned text table
pub fn render_table(books: &[BookSnapshot]) -> String {
    let rows: Vec<[String; 7]> = books
        .iter()
        .map(|b| {
            [
                b.isbn.clone(),
                b.title.clone(),
                b.author.clone(),
                b.genre.clone(),
                b.available.to_string(),
                b.total.to_string(),
                b.borrowed.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("  "));
    out.push('\n');
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 7], widths: &[usize; 7]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, width))| {
            // Count columns are right aligned
            if i >= 4 {
                format!("{:>width$}", cell, width = *width)
            } else {
                format!("{:<width$}", cell, width = *width)
            }
        })
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

/// Print either a table or pretty JSON to stdout
pub fn print<T: Serialize>(books: &[BookSnapshot], report: &T, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{}", render_table(books));
    }
    Ok(())
}
