//! Settings file and per-run option resolution.
//!
//! The settings file lives at `~/.config/pulltab-library/settings.toml`
//! unless `--config` points elsewhere. Every value can be overridden on the
//! command line; resolution is CLI flag, then settings file, then built-in
//! default.

use std::path::{Path, PathBuf};

use pulltab_core::DEFAULT_DESCRIPTION;
use pulltab_export::apps_script::DEFAULT_FUNCTION_NAME;
use pulltab_source::SourceFormat;
use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, SettingsError};

pub const DEFAULT_JSON_OUTPUT: &str = pulltab_export::json::DEFAULT_FILE_NAME;
pub const DEFAULT_SCRIPT_OUTPUT: &str = pulltab_export::apps_script::DEFAULT_FILE_NAME;

/// Canonical path to the settings file.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("pulltab-library").join("settings.toml")
}

/// Contents of `settings.toml`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Source spreadsheet export (CSV or JSON row dump).
    pub input: Option<PathBuf>,
    pub format: SourceFormat,
    pub json_output: Option<PathBuf>,
    pub script_output: Option<PathBuf>,
    pub function_name: Option<String>,
    /// Overrides `metadata.source`; defaults to the input file name.
    pub source_label: Option<String>,
    pub description: Option<String>,
}

impl LibrarySettings {
    /// Settings with every defaultable field filled in, for `config init`.
    pub fn with_defaults() -> Self {
        Self {
            input: None,
            format: SourceFormat::Auto,
            json_output: Some(PathBuf::from(DEFAULT_JSON_OUTPUT)),
            script_output: Some(PathBuf::from(DEFAULT_SCRIPT_OUTPUT)),
            function_name: Some(DEFAULT_FUNCTION_NAME.to_string()),
            source_label: None,
            description: Some(DEFAULT_DESCRIPTION.to_string()),
        }
    }

    /// Load settings.
    ///
    /// An explicit path must exist. When no path is given the default
    /// location is tried, and a missing file there yields empty settings.
    pub fn load(explicit: Option<&Path>) -> Result<Self, SettingsError> {
        let path = match explicit {
            Some(p) => {
                if !p.exists() {
                    return Err(SettingsError::NotFound(p.display().to_string()));
                }
                p.to_path_buf()
            }
            None => {
                let p = settings_path();
                if !p.exists() {
                    return Ok(Self::default());
                }
                p
            }
        };

        let contents = std::fs::read_to_string(&path).map_err(|e| SettingsError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::parse(&contents, &path)
    }

    pub fn parse(contents: &str, path: &Path) -> Result<Self, SettingsError> {
        toml::from_str(contents).map_err(|e| SettingsError::Parse {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Write settings to `path`, refusing to replace an existing file
    /// unless `force` is set.
    pub fn save(&self, path: &Path, force: bool) -> Result<(), SettingsError> {
        if path.exists() && !force {
            return Err(SettingsError::AlreadyExists(path.display().to_string()));
        }
        let serialized = toml::to_string_pretty(self)?;
        pulltab_export::write_atomic(path, serialized.as_bytes()).map_err(|e| {
            SettingsError::Io {
                path: path.display().to_string(),
                source: e,
            }
        })
    }

    /// Apply command-line overrides and fill in defaults.
    pub fn resolve(&self, overrides: &RunOverrides) -> Result<RunConfig, PipelineError> {
        let input = overrides
            .input
            .clone()
            .or_else(|| self.input.clone())
            .ok_or(PipelineError::MissingInput)?;

        let format = match overrides.format {
            Some(f) if f != SourceFormat::Auto => f,
            _ => self.format,
        };

        Ok(RunConfig {
            input,
            format,
            json_output: overrides
                .json_output
                .clone()
                .or_else(|| self.json_output.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_JSON_OUTPUT)),
            script_output: overrides
                .script_output
                .clone()
                .or_else(|| self.script_output.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SCRIPT_OUTPUT)),
            function_name: overrides
                .function_name
                .clone()
                .or_else(|| self.function_name.clone())
                .unwrap_or_else(|| DEFAULT_FUNCTION_NAME.to_string()),
            source_label: overrides
                .source_label
                .clone()
                .or_else(|| self.source_label.clone()),
            description: overrides
                .description
                .clone()
                .or_else(|| self.description.clone())
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            fixed_timestamp: overrides.fixed_timestamp,
        })
    }
}

/// Values supplied on the command line for a single run.
#[derive(Debug, Clone, Default)]
pub struct RunOverrides {
    pub input: Option<PathBuf>,
    pub format: Option<SourceFormat>,
    pub json_output: Option<PathBuf>,
    pub script_output: Option<PathBuf>,
    pub function_name: Option<String>,
    pub source_label: Option<String>,
    pub description: Option<String>,
    pub fixed_timestamp: bool,
}

/// Fully resolved options for one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub format: SourceFormat,
    pub json_output: PathBuf,
    pub script_output: PathBuf,
    pub function_name: String,
    pub source_label: Option<String>,
    pub description: String,
    /// Embed the build time in the script's `lastUpdated` instead of a
    /// runtime `new Date()` call.
    pub fixed_timestamp: bool,
}

impl RunConfig {
    /// Config for `input` with every other value at its default.
    pub fn for_input(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            format: SourceFormat::Auto,
            json_output: PathBuf::from(DEFAULT_JSON_OUTPUT),
            script_output: PathBuf::from(DEFAULT_SCRIPT_OUTPUT),
            function_name: DEFAULT_FUNCTION_NAME.to_string(),
            source_label: None,
            description: DEFAULT_DESCRIPTION.to_string(),
            fixed_timestamp: false,
        }
    }
}
