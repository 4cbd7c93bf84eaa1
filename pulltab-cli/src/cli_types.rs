//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use pulltab_lib::{OutputMode, RunOverrides};
use pulltab_source::SourceFormat;

#[derive(Parser)]
#[command(name = "pulltab")]
#[command(
    about = "Convert a pull-tab game inventory into the web app's default library",
    long_about = None
)]
pub(crate) struct Cli {
    /// Settings file (defaults to ~/.config/pulltab-library/settings.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments that select the source file.
#[derive(Args, Clone, Default)]
pub(crate) struct SourceArgs {
    /// Inventory file: CSV, TSV, Excel workbook, or JSON row dump
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Source format (auto, csv, tsv, xlsx, json-rows)
    #[arg(short, long)]
    pub format: Option<SourceFormat>,
}

/// Arguments shared by the library-building commands.
#[derive(Args, Clone, Default)]
pub(crate) struct LibraryArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output file (defaults to the configured or built-in file name)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Label recorded as metadata.source (defaults to the input file name)
    #[arg(long)]
    pub source_label: Option<String>,

    /// Library description recorded in metadata
    #[arg(long)]
    pub description: Option<String>,

    /// Build and summarize without writing anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

impl LibraryArgs {
    /// Convert to pipeline overrides; `--output` applies to the artifact
    /// the command produces.
    pub fn overrides(
        &self,
        mode: OutputMode,
        function_name: Option<String>,
        fixed_timestamp: bool,
    ) -> RunOverrides {
        let (json_output, script_output) = match mode {
            OutputMode::Json => (self.output.clone(), None),
            OutputMode::Script => (None, self.output.clone()),
        };
        RunOverrides {
            input: self.source.input.clone(),
            format: self.source.format,
            json_output,
            script_output,
            function_name,
            source_label: self.source_label.clone(),
            description: self.description.clone(),
            fixed_timestamp,
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Build the JSON library (complete-pulltabs-library.json)
    Build {
        #[command(flatten)]
        library: LibraryArgs,
    },

    /// Generate the Apps Script seed function (gas_pulltabs_function.js)
    Script {
        #[command(flatten)]
        library: LibraryArgs,

        /// Name of the generated function
        #[arg(long)]
        function_name: Option<String>,

        /// Embed the build time instead of `new Date().toISOString()`
        #[arg(long)]
        fixed_timestamp: bool,
    },

    /// Print column headers and the first rows of a source file
    Inspect {
        #[command(flatten)]
        source: SourceArgs,

        /// Number of data rows to show
        #[arg(short = 'r', long, default_value_t = 5)]
        rows: usize,
    },

    /// Export every raw row of a source file to a JSON row dump
    Extract {
        #[command(flatten)]
        source: SourceArgs,

        /// Row dump to write
        #[arg(short, long, default_value = "pulltabs_data.json")]
        output: PathBuf,
    },

    /// Manage the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the settings file contents and effective values
    Show,

    /// Print the settings file path
    Path,

    /// Write a settings file with default values
    Init {
        /// Replace an existing settings file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_args_map_to_script_output() {
        let cli = Cli::try_parse_from([
            "pulltab",
            "script",
            "-i",
            "Base Library.csv",
            "-o",
            "out/seed.js",
            "--function-name",
            "seedLibrary",
            "--dry-run",
        ])
        .unwrap();

        let Commands::Script {
            library,
            function_name,
            fixed_timestamp,
        } = cli.command
        else {
            panic!("expected script command");
        };
        assert!(library.dry_run);
        assert!(!fixed_timestamp);

        let overrides = library.overrides(OutputMode::Script, function_name, fixed_timestamp);
        assert_eq!(overrides.script_output, Some(PathBuf::from("out/seed.js")));
        assert_eq!(overrides.json_output, None);
        assert_eq!(overrides.function_name.as_deref(), Some("seedLibrary"));
        assert!(!overrides.fixed_timestamp);
    }

    #[test]
    fn test_format_flag_parses() {
        let cli = Cli::try_parse_from(["pulltab", "inspect", "-f", "json-rows", "--rows", "2"])
            .unwrap();
        let Commands::Inspect { source, rows } = cli.command else {
            panic!("expected inspect command");
        };
        assert_eq!(source.format, Some(SourceFormat::JsonRows));
        assert_eq!(rows, 2);

        assert!(Cli::try_parse_from(["pulltab", "build", "-f", "ods"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["pulltab", "config", "init", "--force", "--quiet"]).unwrap();
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::Config {
                action: ConfigAction::Init { force: true }
            }
        ));
    }
}
