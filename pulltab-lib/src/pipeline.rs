//! The library build pipeline.
//!
//! Read rows, normalize each into a game record, drop blank and duplicate
//! rows, assemble the library document, then hand it to a writer. Every
//! output mode runs the same steps; only the [`LibraryWriter`] differs.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use pulltab_core::{GameRecord, LibraryDocument, RawRow, normalize_row};
use pulltab_export::{AppsScriptWriter, JsonWriter, LibraryWriter};
use pulltab_source::{SourceTable, open_source};

use crate::error::PipelineError;
use crate::settings::RunConfig;
use crate::summary::BuildSummary;

/// Which artifact a run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Pretty-printed JSON document.
    Json,
    /// Apps Script function returning the document as a literal.
    Script,
}

/// Games kept from a source plus the rows that were dropped.
#[derive(Debug, Clone, Default)]
pub struct CollectedGames {
    pub games: Vec<GameRecord>,
    pub blank_names: usize,
    /// Identifiers of rows dropped because an earlier row had the same one.
    pub duplicates: Vec<String>,
}

/// Normalize rows into game records, preserving source order.
///
/// Rows with a blank `Game` cell are skipped. When two rows produce the same
/// identifier the first is kept.
pub fn collect_games(rows: &[RawRow]) -> CollectedGames {
    let mut collected = CollectedGames::default();
    let mut seen = HashSet::new();

    for (index, row) in rows.iter().enumerate() {
        let Some(game) = normalize_row(row) else {
            log::debug!("Skipping row {}: blank game name", index + 2);
            collected.blank_names += 1;
            continue;
        };

        if !seen.insert(game.identifier.clone()) {
            log::warn!(
                "Dropping row {}: duplicate identifier '{}'",
                index + 2,
                game.identifier,
            );
            collected.duplicates.push(game.identifier);
            continue;
        }

        collected.games.push(game);
    }

    collected
}

/// Format a build time the way the web application stores it:
/// `2024-09-24T18:00:00.000Z`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// A finished library and its statistics.
#[derive(Debug, Clone)]
pub struct LibraryBuild {
    pub library: LibraryDocument,
    pub summary: BuildSummary,
}

/// Build the library document for an already-read source.
pub fn build_library(
    table: &SourceTable,
    source_label: Option<&str>,
    description: &str,
    generated_at: DateTime<Utc>,
) -> LibraryBuild {
    let collected = collect_games(&table.rows);
    let label = source_label.unwrap_or(&table.label);

    let library = LibraryDocument::assemble(
        collected.games,
        label,
        description,
        format_timestamp(generated_at),
    );
    let summary = BuildSummary::new(
        &library,
        table.row_count(),
        collected.blank_names,
        collected.duplicates,
    );

    log::debug!(
        "Built library from {}: {} games, {} rows skipped",
        label,
        library.games.len(),
        summary.blank_names + summary.duplicates.len(),
    );

    LibraryBuild { library, summary }
}

/// Result of a pipeline run.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub build: LibraryBuild,
    /// Where the artifact was written; `None` for a dry run.
    pub written_to: Option<PathBuf>,
}

/// Read the configured source, build the library, and write it with `writer`.
///
/// The source is fully read and the document fully rendered before the
/// output file is touched.
pub fn run_with_writer(
    config: &RunConfig,
    writer: &dyn LibraryWriter,
    output: &Path,
    generated_at: DateTime<Utc>,
    dry_run: bool,
) -> Result<RunOutcome, PipelineError> {
    let table = open_source(&config.input, config.format)?;
    let build = build_library(
        &table,
        config.source_label.as_deref(),
        &config.description,
        generated_at,
    );

    if dry_run {
        // Render anyway so a dry run surfaces the same errors a real run would
        writer.render(&build.library)?;
        return Ok(RunOutcome {
            build,
            written_to: None,
        });
    }

    writer.write(&build.library, output)?;
    log::debug!("{} written to {}", writer.name(), output.display());

    Ok(RunOutcome {
        build,
        written_to: Some(output.to_path_buf()),
    })
}

/// Run the pipeline for an output mode using the configured paths.
pub fn run(
    config: &RunConfig,
    mode: OutputMode,
    generated_at: DateTime<Utc>,
    dry_run: bool,
) -> Result<RunOutcome, PipelineError> {
    match mode {
        OutputMode::Json => run_with_writer(
            config,
            &JsonWriter::new(),
            &config.json_output,
            generated_at,
            dry_run,
        ),
        OutputMode::Script => {
            let mut writer = AppsScriptWriter::new(config.function_name.clone())?;
            if config.fixed_timestamp {
                writer = writer.with_build_timestamp();
            }
            run_with_writer(config, &writer, &config.script_output, generated_at, dry_run)
        }
    }
}
