//! Field cleaners for human-entered spreadsheet cells.
//!
//! Every cleaner is total: bad input degrades to a default instead of
//! failing, so one mistyped cell never stops a library build.

use crate::columns;
use crate::types::{GameRecord, RawRow};

/// Characters stripped from currency text before parsing.
const CURRENCY_NOISE: &[char] = &['$', '€', '£', '¥', ','];

/// Parse a currency amount such as `"$1,250.00"`.
///
/// Returns 0 for empty text, unparseable text, and non-finite values.
pub fn clean_currency(value: &str) -> f64 {
    let stripped: String = value.chars().filter(|c| !CURRENCY_NOISE.contains(c)).collect();
    let stripped = stripped.trim();
    if stripped.is_empty() {
        return 0.0;
    }
    match stripped.parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

/// Parse a count such as `"2,500"` or `" 1 200 "`.
///
/// Commas and all whitespace are removed first. Negative, fractional and
/// unparseable text all yield 0.
pub fn clean_integer(value: &str) -> u64 {
    let stripped: String = value
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    stripped.parse().unwrap_or(0)
}

/// Trim surrounding whitespace; absent input becomes empty text.
pub fn clean_text(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}

fn optional_text(row: &RawRow, column: &str) -> Option<String> {
    let text = clean_text(row.text(column).as_deref());
    if text.is_empty() { None } else { Some(text) }
}

/// Turn one raw row into a game record.
///
/// Returns `None` when the `Game` cell is blank; such rows are spacer or
/// total lines in the source sheet and are skipped entirely.
pub fn normalize_row(row: &RawRow) -> Option<GameRecord> {
    let name = clean_text(row.text(columns::GAME).as_deref());
    if name.is_empty() {
        return None;
    }

    let form = optional_text(row, columns::FORM);
    let count = row
        .text(columns::COUNT)
        .map_or(0, |text| clean_integer(&text));
    let price = row
        .text(columns::PRICE)
        .map_or(0.0, |text| clean_currency(&text));
    let ideal_profit = row
        .text(columns::IDEAL_PROFIT)
        .map_or(0.0, |text| clean_currency(&text));
    let url = optional_text(row, columns::URL);

    // Whole dollars, truncated toward zero. GameRecord::new floors price at 1.
    Some(GameRecord::new(
        name,
        form,
        count,
        price.max(0.0) as u64,
        ideal_profit as i64,
        url,
    ))
}

#[cfg(test)]
#[path = "tests/normalize_tests.rs"]
mod tests;
