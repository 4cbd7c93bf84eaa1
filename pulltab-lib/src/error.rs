use thiserror::Error;

use pulltab_export::ExportError;
use pulltab_source::SourceError;

/// Errors that abort a library build. Nothing is written when one occurs.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    /// No input file was given on the command line or in settings
    #[error("No input file configured (pass --input or set `input` in settings)")]
    MissingInput,
}

/// Errors reading or writing the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },

    #[error("Could not serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Settings file not found: {0}")]
    NotFound(String),

    #[error("Settings file already exists: {0}")]
    AlreadyExists(String),
}
