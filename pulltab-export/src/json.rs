//! Structured-data output: the library document as pretty-printed JSON.

use pulltab_core::LibraryDocument;

use crate::{ExportError, LibraryWriter};

/// File name used when no output path is configured.
pub const DEFAULT_FILE_NAME: &str = "complete-pulltabs-library.json";

/// Writes [`DEFAULT_FILE_NAME`] unless told otherwise.
///
/// Key order follows the document's field order, so output is stable from
/// run to run.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonWriter;

impl JsonWriter {
    pub fn new() -> Self {
        Self
    }
}

impl LibraryWriter for JsonWriter {
    fn name(&self) -> &'static str {
        "JSON library"
    }

    fn render(&self, library: &LibraryDocument) -> Result<String, ExportError> {
        let mut text = serde_json::to_string_pretty(library)?;
        text.push('\n');
        Ok(text)
    }
}
