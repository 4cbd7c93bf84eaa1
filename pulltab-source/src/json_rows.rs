//! JSON row dump reader.
//!
//! A row dump is a JSON array with one object per spreadsheet row, keyed by
//! header text:
//!
//! ```json
//! [
//!   { "Game": "Crossword Cash", "Form": 500, " Count ": 2500, "Price": 1, "URL": null }
//! ]
//! ```
//!
//! `pulltab extract` writes one from any readable source, so a workbook can
//! be dumped once and rebuilt from the dump later.

use pulltab_core::{CellValue, RawRow};
use serde_json::Value;

use crate::{SourceError, SourceReader};

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRowsReader;

impl SourceReader for JsonRowsReader {
    fn name(&self) -> &'static str {
        "JSON rows"
    }

    fn parse(&self, content: &[u8]) -> Result<(Vec<String>, Vec<RawRow>), SourceError> {
        let doc: Value = serde_json::from_slice(content)
            .map_err(|e| SourceError::malformed(format!("unreadable row dump: {e}")))?;
        let Value::Array(items) = doc else {
            return Err(SourceError::malformed("row dump must be a JSON array"));
        };
        if items.is_empty() {
            return Err(SourceError::malformed("row dump is empty, no header row"));
        }

        let mut headers: Vec<String> = Vec::new();
        let mut rows = Vec::with_capacity(items.len());

        for (index, item) in items.into_iter().enumerate() {
            let Value::Object(object) = item else {
                return Err(SourceError::malformed(format!(
                    "row {} is not a JSON object",
                    index + 2
                )));
            };

            let mut row = RawRow::new();
            for (key, value) in object {
                if !headers.contains(&key) {
                    headers.push(key.clone());
                }
                row.push(key, cell_from_json(value));
            }
            rows.push(row);
        }

        Ok((headers, rows))
    }
}

fn cell_from_json(value: Value) -> CellValue {
    match value {
        Value::Null => CellValue::Empty,
        Value::Bool(b) => CellValue::Bool(b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => CellValue::Integer(i),
            None => n.as_f64().map_or(CellValue::Empty, CellValue::Float),
        },
        Value::String(s) => CellValue::from_text(&s),
        other => CellValue::Text(other.to_string()),
    }
}
