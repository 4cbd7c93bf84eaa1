//! pulltab CLI
//!
//! Converts a pull-tab game inventory into the default library consumed by
//! the web application, as JSON or as an Apps Script seed function.

mod cli_types;
mod commands;
mod error;
mod logger;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pulltab_lib::{LibrarySettings, OutputMode};

use cli_types::{Cli, Commands, ConfigAction};
use error::CliError;

/// Print an empty line through the logger so `--logfile` captures it too.
pub(crate) fn log_blank() {
    log::info!("");
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    if let Err(e) = dispatch(cli) {
        log::error!(
            "{} {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            e,
        );
        std::process::exit(1);
    }
}

fn dispatch(cli: Cli) -> Result<(), CliError> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Build { library } => {
            let settings = LibrarySettings::load(config_path)?;
            commands::build::run_build(&settings, &library, OutputMode::Json, None, false)
        }
        Commands::Script {
            library,
            function_name,
            fixed_timestamp,
        } => {
            let settings = LibrarySettings::load(config_path)?;
            commands::build::run_build(
                &settings,
                &library,
                OutputMode::Script,
                function_name,
                fixed_timestamp,
            )
        }
        Commands::Inspect { source, rows } => {
            let settings = LibrarySettings::load(config_path)?;
            commands::inspect::run_inspect(&settings, &source, rows)
        }
        Commands::Extract { source, output } => {
            let settings = LibrarySettings::load(config_path)?;
            commands::extract::run_extract(&settings, &source, &output)
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(config_path),
            ConfigAction::Path => {
                commands::config::run_config_path(config_path);
                Ok(())
            }
            ConfigAction::Init { force } => commands::config::run_config_init(config_path, force),
        },
    }
}
