// src/core/html.rs
//! Pattern helpers for bare `<td>` cells.
//!
//! These are regex scans over the raw document, not a markup parse: color cells
//! must be written exactly as `<td>…</td>` with no attributes or nested tags.
use std::sync::LazyLock;
use regex::Regex;

/// `<tr …>…</tr>`, shortest match, spanning lines.
static ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<tr\b[^>]*>(.*?)</tr>").expect("row pattern must compile")
});

/// Opening tag of any cell, attributes allowed.
static CELL_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<td\b[^>]*>").expect("cell open pattern must compile")
});

/// `<td>WORD, WORD, …</td>`; a lone WORD also matches.
static LIST_CELL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<td>((?:[A-Z]+(?:, )?)+)</td>").expect("list cell pattern must compile")
});

/// Inner text of every comma-list cell, in document order.
pub fn list_cells(doc: &str) -> Vec<&str> {
    list_cells_at(doc).into_iter().map(|(_, text)| text).collect()
}

/// Like [`list_cells`], paired with the byte offset of each cell's `<td>`.
pub fn list_cells_at(doc: &str) -> Vec<(usize, &str)> {
    LIST_CELL
        .captures_iter(doc)
        .filter_map(|c| Some((c.get(0)?.start(), c.get(1)?.as_str())))
        .collect()
}

/// Byte offset of the first `<td>` in every row holding two or more cells.
///
/// That leading cell is the row's key (the day); a row with a single cell has no key.
pub fn leading_cell_offsets(doc: &str) -> Vec<usize> {
    ROW.captures_iter(doc)
        .filter_map(|c| c.get(1))
        .filter_map(|body| {
            let mut opens = CELL_OPEN.find_iter(body.as_str());
            let first = opens.next()?;
            opens.next()?;
            Some(body.start() + first.start())
        })
        .collect()
}

/// Split a list cell on ',' and trim each piece. Empty pieces are dropped.
pub fn split_list(cell: &str) -> impl Iterator<Item = &str> {
    cell.split(',').map(str::trim).filter(|p| !p.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_cell_is_found_per_row() {
        let doc = "<tr><td>MON</td><td>RED</td></tr>\n<tr>\n  <td>SAT</td>\n  <td>BLUE</td>\n</tr>";
        let offsets = leading_cell_offsets(doc);
        assert_eq!(offsets.len(), 2);
        assert!(doc[offsets[0]..].starts_with("<td>MON</td>"));
        assert!(doc[offsets[1]..].starts_with("<td>SAT</td>"));
    }

    #[test]
    fn single_cell_rows_and_loose_cells_have_no_key() {
        assert!(leading_cell_offsets("<tr><td>RED</td></tr>").is_empty());
        assert!(leading_cell_offsets("<td>MON</td><td>RED</td>").is_empty());
    }

    #[test]
    fn list_cell_offsets_point_at_the_tag() {
        let doc = "<tr><td>MON</td><td>RED, BLUE</td></tr>";
        let cells = list_cells_at(doc);
        assert_eq!(cells, vec![(4, "MON"), (16, "RED, BLUE")]);
        assert_eq!(leading_cell_offsets(doc), vec![4]);
    }

    #[test]
    fn list_cells_include_single_words() {
        let doc = "<tr><td>MONDAY</td><td>RED, BLUE, RED</td></tr>";
        assert_eq!(list_cells(doc), vec!["MONDAY", "RED, BLUE, RED"]);
    }

    #[test]
    fn list_cells_ignore_attributes_and_nesting() {
        let doc = r#"<td class="x">RED</td><td><b>BLUE</b></td><td>GREEN,BLUE</td>"#;
        assert!(list_cells(doc).is_empty());
    }

    #[test]
    fn split_list_trims_and_drops_empty() {
        let parts: Vec<&str> = split_list("RED, BLUE, ").collect();
        assert_eq!(parts, vec!["RED", "BLUE"]);
    }
}
