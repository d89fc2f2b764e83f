//! Comma-separated catalog rows to [`DishRecord`]s.
//!
//! Columns, in order: item code, category, name, description, dietary tags,
//! spice level, price. The first non-blank row is the header and is dropped.
//! Double quotes toggle an in-field mode in which commas are literal; the quote
//! characters themselves are not kept.

use crate::model::{DishId, DishRecord};
use tracing::debug;

const DELIMITER: char = ',';
const QUOTE: char = '"';

/// Parses catalog text into dish records.
///
/// Never fails. Blank rows, the header and rows without a display name are
/// skipped; a missing spice level reads as `"0"` and a missing or non-numeric
/// price as 0.
pub fn parse(raw: &str) -> Vec<DishRecord> {
    let dishes: Vec<DishRecord> = raw
        .split('\n')
        .filter(|row| !row.trim().is_empty())
        .skip(1)
        .map(|row| parse_row(row.trim_end_matches('\r')))
        .filter(|dish| !dish.name.is_empty())
        .collect();
    debug!(count = dishes.len(), "Parsed catalog");
    dishes
}

fn parse_row(row: &str) -> DishRecord {
    let fields = split_fields(row);
    let field = |idx: usize| fields.get(idx).cloned().unwrap_or_default();

    let spice_level = match field(5) {
        level if level.is_empty() => "0".to_string(),
        level => level,
    };

    DishRecord {
        id: DishId(field(0)),
        category: field(1),
        name: field(2),
        description: field(3),
        dietary_tags: field(4),
        spice_level,
        price: parse_price(&field(6)),
    }
}

/// Splits one row on unquoted commas, trimming every field.
pub(crate) fn split_fields(row: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in row.chars() {
        match ch {
            QUOTE => in_quotes = !in_quotes,
            DELIMITER if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

/// Leading decimal digits only, so `"180 NTD"` is 180 and `"n/a"` is 0.
fn parse_price(field: &str) -> u32 {
    let digits: String = field.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}
