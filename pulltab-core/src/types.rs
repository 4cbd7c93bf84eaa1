//! Raw source rows and the normalized game record.

use std::borrow::Cow;
use std::fmt;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::metrics::derive_metrics;

// ── Raw rows ────────────────────────────────────────────────────────────────

/// An untyped cell as read from a CSV file or spreadsheet row dump.
///
/// Variant order matters for deserialization: integers must be tried before
/// floats so that `2500` stays an integer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Empty,
}

impl CellValue {
    /// Wrap text read from a delimited file. Empty text becomes [`CellValue::Empty`].
    pub fn from_text(s: &str) -> Self {
        if s.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(s.to_string())
        }
    }

    /// Render the cell as text for the field cleaners.
    ///
    /// Whole-number floats are rendered without a fractional part, so a
    /// spreadsheet count stored as `2500.0` still cleans to `2500`.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            CellValue::Empty => Cow::Borrowed(""),
            CellValue::Text(s) => Cow::Borrowed(s.as_str()),
            CellValue::Integer(n) => Cow::Owned(n.to_string()),
            CellValue::Float(f) => {
                if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
                    Cow::Owned(format!("{}", *f as i64))
                } else {
                    Cow::Owned(f.to_string())
                }
            }
            CellValue::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        }
    }

    /// True for missing cells and whitespace-only text.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => write!(f, "None"),
            CellValue::Text(s) => write!(f, "'{s}'"),
            other => write!(f, "{}", other.as_text()),
        }
    }
}

/// One data row from a source file: header text paired with its cell.
///
/// Cells keep source column order. Duplicate headers are kept as-is;
/// [`RawRow::get`] returns the first match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    cells: Vec<(String, CellValue)>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, header: impl Into<String>, value: CellValue) {
        self.cells.push((header.into(), value));
    }

    pub fn with(mut self, header: impl Into<String>, value: CellValue) -> Self {
        self.push(header, value);
        self
    }

    /// Look up a cell by column name, ignoring whitespace around the header.
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        let column = column.trim();
        self.cells
            .iter()
            .find(|(header, _)| header.trim() == column)
            .map(|(_, value)| value)
    }

    /// Cell text for a column, or `None` when the column is absent.
    pub fn text(&self, column: &str) -> Option<Cow<'_, str>> {
        self.get(column).map(CellValue::as_text)
    }

    pub fn cells(&self) -> &[(String, CellValue)] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl FromIterator<(String, CellValue)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (String, CellValue)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Serialize for RawRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (header, value) in &self.cells {
            map.serialize_entry(header, value)?;
        }
        map.end()
    }
}

// ── Game record ─────────────────────────────────────────────────────────────

/// A normalized pull-tab game with its derived metrics.
///
/// Field names serialize in camelCase; the downstream web application
/// depends on the exact spelling and order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub name: String,
    pub form: Option<String>,
    /// Tickets in the deal.
    pub count: u64,
    /// Ticket price in whole dollars, never below 1.
    pub price: u64,
    pub ideal_profit: i64,
    pub url: Option<String>,
    /// `"{name}_{form}"`, with `None` standing in for a missing form.
    pub identifier: String,
    pub profit_margin: f64,
    pub cost_basis: f64,
    pub has_informational_flyer: bool,
}

impl GameRecord {
    /// Build a record from cleaned fields, computing the identifier and metrics.
    pub fn new(
        name: impl Into<String>,
        form: Option<String>,
        count: u64,
        price: u64,
        ideal_profit: i64,
        url: Option<String>,
    ) -> Self {
        let name = name.into();
        let price = price.max(1);
        let identifier = make_identifier(&name, form.as_deref());
        let metrics = derive_metrics(count, price, ideal_profit);
        let has_informational_flyer = url.is_some();

        Self {
            name,
            form,
            count,
            price,
            ideal_profit,
            url,
            identifier,
            profit_margin: metrics.profit_margin,
            cost_basis: metrics.cost_basis,
            has_informational_flyer,
        }
    }

    /// Gross revenue if the whole deal sells. Not serialized.
    pub fn revenue(&self) -> f64 {
        self.count as f64 * self.price as f64
    }
}

/// Combine a game name and form number into the cross-reference key.
pub fn make_identifier(name: &str, form: Option<&str>) -> String {
    format!("{}_{}", name, form.unwrap_or("None"))
}
