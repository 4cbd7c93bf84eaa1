//! Orchestration for pull-tab library builds: settings resolution, the
//! read-normalize-assemble-write pipeline, and run summaries.

pub mod display;
pub mod error;
pub mod pipeline;
pub mod settings;
pub mod summary;

pub use error::{PipelineError, SettingsError};
pub use pipeline::{
    CollectedGames, LibraryBuild, OutputMode, RunOutcome, build_library, collect_games,
    format_timestamp, run, run_with_writer,
};
pub use settings::{LibrarySettings, RunConfig, RunOverrides, settings_path};
pub use summary::BuildSummary;

pub use pulltab_core::{GameRecord, LibraryDocument, PriceBucket, RawRow};
pub use pulltab_source::{SourceError, SourceFormat, SourceTable, open_source};
