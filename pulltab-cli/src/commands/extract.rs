use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pulltab_export::write_row_dump;
use pulltab_lib::{LibrarySettings, open_source};

use crate::cli_types::SourceArgs;
use crate::error::CliError;

/// Export every row of the source, unmodified, as a JSON row dump.
pub(crate) fn run_extract(
    settings: &LibrarySettings,
    args: &SourceArgs,
    output: &Path,
) -> Result<(), CliError> {
    let (input, format) = super::resolve_source(settings, args)?;
    let table = open_source(&input, format)?;

    write_row_dump(&table.rows, output)?;

    log::info!(
        "{} Exported {} rows from {} to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        table.row_count(),
        table.label,
        output.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}
