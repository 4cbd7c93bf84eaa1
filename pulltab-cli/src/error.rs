use thiserror::Error;

use pulltab_export::ExportError;
use pulltab_lib::{PipelineError, SettingsError};
use pulltab_source::SourceError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Library build failed
    #[error("{0}")]
    Pipeline(#[from] PipelineError),

    /// Source file could not be read
    #[error("{0}")]
    Source(#[from] SourceError),

    /// Artifact could not be rendered or written
    #[error("{0}")]
    Export(#[from] ExportError),

    /// Settings file problem
    #[error("Config error: {0}")]
    Settings(#[from] SettingsError),

    /// Logger could not be set up
    #[error("Logging error: {0}")]
    Logging(String),
}

impl CliError {
    pub(crate) fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }
}
