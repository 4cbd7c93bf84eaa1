/// Errors that can occur while rendering or writing a library artifact.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid function name: {0:?}")]
    InvalidFunctionName(String),
}
