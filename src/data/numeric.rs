//! Lenient leading-numeric parsing.
//!
//! Survey cells are free text ("7.5", "7.5hrs", "120/80"), so numbers are read
//! from the longest numeric prefix instead of the whole cell.

use regex::Regex;
use std::sync::OnceLock;

fn leading_number() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
            .expect("regex is valid")
    })
}

/// Parse the leading numeric part of `raw`.
///
/// Leading whitespace is skipped and trailing garbage ignored. Returns `None`
/// when no numeric prefix exists.
pub fn parse_leading(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_start();
    let m = leading_number().find(trimmed)?;
    let text = m.as_str();

    match text.trim_start_matches(['+', '-']) {
        "Infinity" => Some(if text.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        }),
        _ => text.parse::<f64>().ok(),
    }
}

/// Parse an optional cell; a null cell is not a number.
pub fn parse_cell(cell: Option<&str>) -> Option<f64> {
    cell.and_then(parse_leading)
}
