use std::path::PathBuf;

/// Errors that stop a source from being read at all.
///
/// Individual bad cells never produce one of these; they are cleaned to
/// defaults further down the pipeline.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Source file not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Malformed source: {0}")]
    MalformedSource(String),

    #[error("Unsupported source format: {0}")]
    UnsupportedFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SourceError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedSource(msg.into())
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::UnsupportedFormat(msg.into())
    }
}
