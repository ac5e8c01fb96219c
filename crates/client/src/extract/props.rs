//! Property table extraction.

use mantine_docs_core::PropEntry;
use scraper::{ElementRef, Html};

use super::selectors::{TABLE, TABLE_CELL, TABLE_HEADER_CELL, TABLE_ROW};
use super::text_of;

/// Glyph in the name column marking a required prop.
pub const REQUIRED_MARKER: char = '*';

/// Default-column values that mean "no default".
const NO_DEFAULT: &[&str] = &["", "-", "–", "—"];

/// Extract prop rows from the page's properties table, in row order.
///
/// Rows with fewer than four data cells are skipped.
pub fn extract_props(document: &Html) -> Vec<PropEntry> {
    let Some(table) = find_props_table(document) else {
        return Vec::new();
    };

    table
        .select(&TABLE_ROW)
        .filter_map(|row| {
            let cells: Vec<String> = row.select(&TABLE_CELL).map(text_of).collect();
            if cells.len() < 4 {
                return None;
            }
            Some(prop_from_cells(&cells))
        })
        .collect()
}

/// The first table with a `Name`/`Prop` header, else the first table.
fn find_props_table(document: &Html) -> Option<ElementRef<'_>> {
    document
        .select(&TABLE)
        .find(|table| {
            table.select(&TABLE_HEADER_CELL).any(|th| {
                let header = text_of(th).to_lowercase();
                header == "name" || header.starts_with("prop")
            })
        })
        .or_else(|| document.select(&TABLE).next())
}

fn prop_from_cells(cells: &[String]) -> PropEntry {
    let raw_name = &cells[0];
    let required = raw_name.contains(REQUIRED_MARKER);
    let name = raw_name.replace(REQUIRED_MARKER, "").trim().to_string();

    let default_value = cells[2].trim();
    let default_value = (!NO_DEFAULT.contains(&default_value)).then(|| default_value.to_string());

    PropEntry { name, prop_type: cells[1].clone(), default_value, description: cells[3].clone(), required }
}
