// src/specs/colors.rs
//! Scraping *spec* for the weekly colors table.
//!
//! Rows look like
//! ```text
//! <tr><td>MONDAY</td><td>GREEN, YELLOW, GREEN, BROWN</td></tr>
//! ```
//! Both cells match the list-cell pattern. The first cell of a row is the day,
//! whatever it says, so it is dropped by position before splitting. Cells outside
//! any `<tr>` and rows with a single cell carry colors only.
use std::{ fs, io, path::Path };

use crate::core::html::{ leading_cell_offsets, list_cells_at, split_list };
use crate::stats::{ Label, LabelSequence };

/// Read `path` and extract its labels. I/O failures are returned as-is.
pub fn extract_from_path(path: &Path) -> io::Result<LabelSequence> {
    let doc = fs::read_to_string(path)?;
    let labels = extract(&doc);
    logd!("{}: {} labels", path.display(), labels.len());
    Ok(labels)
}

/// Extract every label from every color cell, in document order.
pub fn extract(doc: &str) -> LabelSequence {
    let days = leading_cell_offsets(doc);

    list_cells_at(doc)
        .into_iter()
        .filter(|(at, _)| days.binary_search(at).is_err())
        .flat_map(|(_, cell)| split_list(cell))
        .map(Label::from)
        .collect()
}
