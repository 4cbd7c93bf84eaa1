//! Raw row dumps: every source row as a JSON object, keyed by header.

use std::path::Path;

use pulltab_core::RawRow;

use crate::{ExportError, write_atomic};

/// Render rows as a pretty-printed JSON array, keeping header order and
/// cell types.
pub fn render_row_dump(rows: &[RawRow]) -> Result<String, ExportError> {
    let mut text = serde_json::to_string_pretty(rows)?;
    text.push('\n');
    Ok(text)
}

/// Write a row dump that the `json-rows` source format can read back.
pub fn write_row_dump(rows: &[RawRow], path: &Path) -> Result<(), ExportError> {
    let text = render_row_dump(rows)?;
    write_atomic(path, text.as_bytes())?;
    Ok(())
}
