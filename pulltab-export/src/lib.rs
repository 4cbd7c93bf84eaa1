pub mod apps_script;
pub mod error;
pub mod json;
pub mod rows;

pub use apps_script::AppsScriptWriter;
pub use error::ExportError;
pub use json::JsonWriter;
pub use rows::{render_row_dump, write_row_dump};

use std::fs;
use std::path::Path;

use pulltab_core::LibraryDocument;

/// Trait for library artifact formats.
///
/// Every writer renders the same logical document; only the surface syntax
/// differs.
pub trait LibraryWriter {
    fn name(&self) -> &'static str;

    /// Render the complete artifact as text.
    fn render(&self, library: &LibraryDocument) -> Result<String, ExportError>;

    /// Render and write the artifact. The target is replaced atomically, so
    /// a failed run never leaves a half-written file behind.
    fn write(&self, library: &LibraryDocument, path: &Path) -> Result<(), ExportError> {
        let text = self.render(library)?;
        write_atomic(path, text.as_bytes())?;
        log::debug!("Wrote {} ({} bytes) to {}", self.name(), text.len(), path.display());
        Ok(())
    }
}

/// Write `contents` to a sibling temp file, then rename it over `path`.
pub fn write_atomic(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp = path.with_file_name(tmp_name);
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)
}
