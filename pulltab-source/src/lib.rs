//! Source readers for pull-tab inventory files.
//!
//! A reader turns a file into a [`SourceTable`]: the ordered column headers
//! plus one [`RawRow`] per data row, in file order. Readers only fail for
//! problems with the file as a whole; cell contents are never judged here.

pub mod csv_source;
pub mod error;
pub mod json_rows;
pub mod xlsx;

pub use csv_source::CsvReader;
pub use error::SourceError;
pub use json_rows::JsonRowsReader;
pub use xlsx::XlsxReader;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use pulltab_core::RawRow;
use serde::{Deserialize, Serialize};

/// The rows and headers read from one source file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceTable {
    /// Label recorded as `metadata.source`, normally the file name.
    pub label: String,
    /// Header text from row 1, untrimmed.
    pub headers: Vec<String>,
    /// Data rows in file order, header row excluded.
    pub rows: Vec<RawRow>,
}

impl SourceTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }
}

/// Trait for tabular source formats.
pub trait SourceReader {
    fn name(&self) -> &'static str;

    /// Parse in-memory file contents.
    fn parse(&self, content: &[u8]) -> Result<(Vec<String>, Vec<RawRow>), SourceError>;

    /// Read a whole file.
    ///
    /// Fails with [`SourceError::SourceNotFound`] when the path does not
    /// exist and [`SourceError::MalformedSource`] when no header row can be
    /// read.
    fn read(&self, path: &Path) -> Result<SourceTable, SourceError> {
        if !path.exists() {
            return Err(SourceError::SourceNotFound(path.to_path_buf()));
        }
        let content = std::fs::read(path)?;
        let (headers, rows) = self.parse(&content)?;

        log::debug!(
            "Read {} rows, {} columns from {} ({})",
            rows.len(),
            headers.len(),
            path.display(),
            self.name(),
        );

        Ok(SourceTable {
            label: source_label(path),
            headers,
            rows,
        })
    }
}

/// File name of a source path, used as the default `metadata.source`.
pub fn source_label(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("")
        .to_string()
}

// ── Format selection ────────────────────────────────────────────────────────

/// Input format, either explicit or detected from the file extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceFormat {
    #[default]
    Auto,
    Csv,
    Tsv,
    JsonRows,
    Xlsx,
}

impl SourceFormat {
    /// Replace `Auto` with the format implied by the path's extension.
    pub fn resolve(self, path: &Path) -> Result<SourceFormat, SourceError> {
        if self != SourceFormat::Auto {
            return Ok(self);
        }
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "csv" | "txt" => Ok(SourceFormat::Csv),
            "tsv" => Ok(SourceFormat::Tsv),
            "json" => Ok(SourceFormat::JsonRows),
            "xlsx" | "xlsm" => Ok(SourceFormat::Xlsx),
            "" => Err(SourceError::unsupported(format!(
                "{} has no extension; pass --format",
                path.display()
            ))),
            other => Err(SourceError::unsupported(format!(
                ".{other} (expected .csv, .tsv, .json or .xlsx)"
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SourceFormat::Auto => "auto",
            SourceFormat::Csv => "csv",
            SourceFormat::Tsv => "tsv",
            SourceFormat::JsonRows => "json-rows",
            SourceFormat::Xlsx => "xlsx",
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceFormat {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(SourceFormat::Auto),
            "csv" => Ok(SourceFormat::Csv),
            "tsv" => Ok(SourceFormat::Tsv),
            "json-rows" | "json" => Ok(SourceFormat::JsonRows),
            "xlsx" => Ok(SourceFormat::Xlsx),
            other => Err(SourceError::unsupported(other.to_string())),
        }
    }
}

/// Read a source file with the reader for `format`.
pub fn open_source(path: &Path, format: SourceFormat) -> Result<SourceTable, SourceError> {
    if !path.exists() {
        return Err(SourceError::SourceNotFound(path.to_path_buf()));
    }
    match format.resolve(path)? {
        SourceFormat::Tsv => CsvReader::tsv().read(path),
        SourceFormat::JsonRows => JsonRowsReader.read(path),
        SourceFormat::Xlsx => XlsxReader.read(path),
        SourceFormat::Csv | SourceFormat::Auto => CsvReader::new().read(path),
    }
}
