//! Excel workbook reader.
//!
//! Reads the first worksheet. Row 1 holds the headers; cells keep the type
//! the workbook stored, so counts arrive as numbers rather than text.

use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};
use pulltab_core::{CellValue, RawRow};

use crate::{SourceError, SourceReader};

#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxReader;

impl SourceReader for XlsxReader {
    fn name(&self) -> &'static str {
        "Excel workbook"
    }

    fn parse(&self, content: &[u8]) -> Result<(Vec<String>, Vec<RawRow>), SourceError> {
        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(content))
            .map_err(|e| SourceError::malformed(format!("unreadable workbook: {e}")))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| SourceError::malformed("workbook has no worksheets"))?
            .map_err(|e| SourceError::malformed(format!("unreadable worksheet: {e}")))?;

        let mut sheet_rows = range.rows();
        let headers: Vec<String> = match sheet_rows.next() {
            Some(cells) => cells.iter().map(|c| c.to_string()).collect(),
            None => Vec::new(),
        };
        if headers.iter().all(|h| h.trim().is_empty()) {
            return Err(SourceError::malformed("no header row"));
        }

        let rows = sheet_rows
            .map(|cells| {
                headers
                    .iter()
                    .enumerate()
                    .map(|(i, header)| {
                        let cell = cells.get(i).map_or(CellValue::Empty, cell_from_sheet);
                        (header.clone(), cell)
                    })
                    .collect::<RawRow>()
            })
            .collect();

        Ok((headers, rows))
    }
}

fn cell_from_sheet(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Int(n) => CellValue::Integer(*n),
        Data::Float(f) => CellValue::Float(*f),
        Data::String(s) => CellValue::from_text(s),
        // Dates, durations and error cells (`#N/A`) keep their display text
        other => CellValue::from_text(&other.to_string()),
    }
}
