//! Delimited text reader (CSV and TSV).

use std::borrow::Cow;

use pulltab_core::{CellValue, RawRow};

use crate::{SourceError, SourceReader};

/// Reads comma- or tab-delimited files with a header row.
#[derive(Debug, Clone, Copy)]
pub struct CsvReader {
    delimiter: u8,
}

impl CsvReader {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn tsv() -> Self {
        Self { delimiter: b'\t' }
    }
}

impl Default for CsvReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceReader for CsvReader {
    fn name(&self) -> &'static str {
        if self.delimiter == b'\t' { "TSV" } else { "CSV" }
    }

    fn parse(&self, content: &[u8]) -> Result<(Vec<String>, Vec<RawRow>), SourceError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .delimiter(self.delimiter)
            .from_reader(content);

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| SourceError::malformed(format!("unreadable header row: {e}")))?
            .iter()
            .enumerate()
            .map(|(i, h)| {
                if i == 0 {
                    h.trim_start_matches('\u{feff}').to_string()
                } else {
                    h.to_string()
                }
            })
            .collect();

        if headers.iter().all(|h| h.trim().is_empty()) {
            return Err(SourceError::malformed("no header row"));
        }

        let mut rows = Vec::new();
        for (index, result) in reader.byte_records().enumerate() {
            // Header is row 1, so the first record is row 2
            let line = index + 2;
            let record = match result {
                Ok(r) => r,
                Err(e) => {
                    log::warn!("Skipping unreadable CSV row {line}: {e}");
                    continue;
                }
            };

            // Short records are padded with empty cells; cells past the last
            // header have no column name and are dropped.
            let row: RawRow = headers
                .iter()
                .enumerate()
                .map(|(i, header)| {
                    let cell = record
                        .get(i)
                        .map_or(CellValue::Empty, |bytes| decode_cell(bytes, line, header));
                    (header.clone(), cell)
                })
                .collect();
            rows.push(row);
        }

        Ok((headers, rows))
    }
}

/// Decode one cell. Bytes that are not UTF-8 (an Excel export in a legacy
/// code page) become U+FFFD so the rest of the row survives.
fn decode_cell(bytes: &[u8], line: usize, header: &str) -> CellValue {
    let text = String::from_utf8_lossy(bytes);
    if let Cow::Owned(_) = text {
        log::warn!(
            "Row {line}, column '{}': invalid UTF-8 replaced",
            header.trim()
        );
    }
    CellValue::from_text(&text)
}

#[cfg(test)]
#[path = "tests/csv_source_tests.rs"]
mod tests;
