use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pulltab_lib::display::format_row;
use pulltab_lib::{LibrarySettings, open_source};

use crate::cli_types::SourceArgs;
use crate::error::CliError;

/// Print the headers, dimensions, and leading rows of a source file.
pub(crate) fn run_inspect(
    settings: &LibrarySettings,
    args: &SourceArgs,
    rows: usize,
) -> Result<(), CliError> {
    let (input, format) = super::resolve_source(settings, args)?;
    let table = open_source(&input, format)?;

    log::info!(
        "{}",
        table.label.if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    log::info!("Column headers:");
    for (i, header) in table.headers.iter().enumerate() {
        log::info!("  {}: {}", i + 1, header);
    }
    crate::log_blank();

    // Row numbers follow the spreadsheet, where row 1 is the header
    log::info!("Total rows:    {}", table.row_count() + 1);
    log::info!("Total columns: {}", table.column_count());

    if table.rows.is_empty() {
        return Ok(());
    }

    crate::log_blank();
    log::info!("First {} data rows:", table.rows.len().min(rows));
    for (i, row) in table.rows.iter().take(rows).enumerate() {
        log::info!(
            "{} {}",
            format!("Row {}:", i + 2).if_supports_color(Stdout, |t| t.dimmed()),
            format_row(row),
        );
    }

    Ok(())
}
