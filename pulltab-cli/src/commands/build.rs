use chrono::Utc;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pulltab_lib::display::format_game_line;
use pulltab_lib::{LibrarySettings, OutputMode, RunOutcome, run};

use crate::cli_types::LibraryArgs;
use crate::error::CliError;

/// Number of games listed after a build.
const PREVIEW_GAMES: usize = 5;

/// Build the library and write it as JSON or as an Apps Script function.
pub(crate) fn run_build(
    settings: &LibrarySettings,
    args: &LibraryArgs,
    mode: OutputMode,
    function_name: Option<String>,
    fixed_timestamp: bool,
) -> Result<(), CliError> {
    let config = settings.resolve(&args.overrides(mode, function_name, fixed_timestamp))?;

    log::info!(
        "Reading {}",
        config
            .input
            .display()
            .if_supports_color(Stdout, |t| t.cyan()),
    );

    let outcome = run(&config, mode, Utc::now(), args.dry_run)?;

    print_summary(&outcome);
    crate::log_blank();

    match &outcome.written_to {
        Some(path) => log::info!(
            "{} Saved library to {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            path.display().if_supports_color(Stdout, |t| t.cyan()),
        ),
        None => log::info!(
            "{}",
            "Dry run: no files were written".if_supports_color(Stdout, |t| t.dimmed()),
        ),
    }

    Ok(())
}

fn print_summary(outcome: &RunOutcome) {
    let summary = &outcome.build.summary;
    let library = &outcome.build.library;

    log::info!(
        "Processed {} games from {}",
        summary
            .total_games
            .if_supports_color(Stdout, |t| t.bold()),
        library.metadata.source,
    );
    log::info!("  Rows read:          {}", summary.rows_read);
    if summary.blank_names > 0 {
        log::info!("  Skipped (no name):  {}", summary.blank_names);
    }
    if !summary.duplicates.is_empty() {
        log::warn!(
            "  Duplicates dropped: {}",
            summary
                .duplicates
                .len()
                .if_supports_color(Stdout, |t| t.yellow()),
        );
    }
    log::info!("  Games with URLs:    {}", summary.with_urls);
    log::info!("  Games without URLs: {}", summary.without_urls);
    for (bucket, count) in &summary.price_buckets {
        log::info!("  {:<3} games:         {}", bucket.key(), count);
    }
    if summary.unbucketed > 0 {
        log::info!("  Other prices:       {}", summary.unbucketed);
    }

    if library.games.is_empty() {
        return;
    }

    crate::log_blank();
    log::info!(
        "{}",
        format!("First {} games:", library.games.len().min(PREVIEW_GAMES))
            .if_supports_color(Stdout, |t| t.bold()),
    );
    for (i, game) in library.games.iter().take(PREVIEW_GAMES).enumerate() {
        log::info!("  {}. {}", i + 1, format_game_line(game));
    }
}
