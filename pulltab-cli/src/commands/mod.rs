pub(crate) mod build;
pub(crate) mod config;
pub(crate) mod extract;
pub(crate) mod inspect;

use std::path::PathBuf;

use pulltab_lib::{LibrarySettings, SourceFormat};

use crate::cli_types::SourceArgs;
use crate::error::CliError;
use pulltab_lib::PipelineError;

/// Resolve the source path and format for commands that only read.
pub(crate) fn resolve_source(
    settings: &LibrarySettings,
    args: &SourceArgs,
) -> Result<(PathBuf, SourceFormat), CliError> {
    let input = args
        .input
        .clone()
        .or_else(|| settings.input.clone())
        .ok_or(PipelineError::MissingInput)?;
    let format = match args.format {
        Some(f) if f != SourceFormat::Auto => f,
        _ => settings.format,
    };
    Ok((input, format))
}
