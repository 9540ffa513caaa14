//! Parsing of the lookup service's HTML result table
//!
//! The page lists one row per overlapping skycell. Each row starts with a
//! cell holding the tessellation marker, followed by the skycell name and the
//! X and Y pixel coordinates of the requested position.

use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::{SkycellError, SkycellResult};
use super::candidate::SkycellCandidate;

lazy_static! {
    static ref CELL_START: Regex = Regex::new(r"(?i)<td\b[^>]*>").unwrap();
    // A cell ends at its closing tag or wherever the next cell/row/table begins
    static ref CELL_END: Regex = Regex::new(r"(?i)</td\s*>|<td\b|</?tr\b|</table\b").unwrap();
    static ref TAG: Regex = Regex::new(r"(?s)<[^>]*>").unwrap();
}

/// Text content of every `<td>` cell in document order
pub fn table_cells(html: &str) -> Vec<String> {
    CELL_START
        .find_iter(html)
        .map(|start| {
            let end = CELL_END
                .find_at(html, start.end())
                .map(|m| m.start())
                .unwrap_or(html.len());
            cell_text(&html[start.end()..end])
        })
        .collect()
}

fn cell_text(raw: &str) -> String {
    let text = TAG.replace_all(raw, "");
    decode_entities(text.trim())
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
        .trim()
        .to_string()
}

/// Extract the skycell candidates from a lookup response page
///
/// # Arguments
/// * `html` - Raw response body
/// * `marker` - Text of the cell preceding each candidate row
/// * `name_prefix` - Prefix removed from every candidate name
///
/// # Returns
/// Candidates in page order, or a `ParseError` for truncated rows and
/// non-numeric pixel coordinates
pub fn parse_candidates(html: &str, marker: &str, name_prefix: &str) -> SkycellResult<Vec<SkycellCandidate>> {
    let cells = table_cells(html);
    let mut candidates = Vec::new();

    for (i, cell) in cells.iter().enumerate() {
        if cell != marker {
            continue;
        }

        let row = cells.get(i + 1..i + 4).ok_or_else(|| {
            SkycellError::ParseError(format!("row after '{}' cell {} has fewer than 3 cells", marker, i))
        })?;

        let name = if name_prefix.is_empty() {
            row[0].clone()
        } else {
            row[0].replace(name_prefix, "")
        };
        let x = parse_pixel(&row[1], &name, "X")?;
        let y = parse_pixel(&row[2], &name, "Y")?;

        candidates.push(SkycellCandidate::new(name, x, y));
    }

    Ok(candidates)
}

fn parse_pixel(value: &str, name: &str, axis: &str) -> SkycellResult<f64> {
    value.parse::<f64>().map_err(|_| {
        SkycellError::ParseError(format!("skycell {}: {} coordinate '{}' is not a number", name, axis, value))
    })
}
