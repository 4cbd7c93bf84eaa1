use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pulltab_lib::settings::{DEFAULT_JSON_OUTPUT, DEFAULT_SCRIPT_OUTPUT};
use pulltab_lib::{LibrarySettings, settings_path};

use crate::error::CliError;

fn target_path(explicit: Option<&Path>) -> PathBuf {
    explicit.map(Path::to_path_buf).unwrap_or_else(settings_path)
}

/// Show the settings file and the values a run would use.
pub(crate) fn run_config_show(explicit: Option<&Path>) -> Result<(), CliError> {
    let path = target_path(explicit);
    let settings = LibrarySettings::load(explicit)?;

    log::info!(
        "{}",
        "Library Settings".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    crate::log_blank();

    let defaults = LibrarySettings::with_defaults();
    let show_path = |value: &Option<PathBuf>, fallback: &str| -> String {
        value
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| format!("{fallback} (default)"))
    };
    let show_text = |value: &Option<String>, fallback: Option<&String>| -> String {
        match (value, fallback) {
            (Some(v), _) => v.clone(),
            (None, Some(f)) => format!("{f} (default)"),
            (None, None) => "(not set)".to_string(),
        }
    };

    let input = settings
        .input
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not set)".to_string());

    log::info!("  {:<14} {}", "input", input);
    log::info!("  {:<14} {}", "format", settings.format);
    log::info!(
        "  {:<14} {}",
        "json_output",
        show_path(&settings.json_output, DEFAULT_JSON_OUTPUT),
    );
    log::info!(
        "  {:<14} {}",
        "script_output",
        show_path(&settings.script_output, DEFAULT_SCRIPT_OUTPUT),
    );
    log::info!(
        "  {:<14} {}",
        "function_name",
        show_text(&settings.function_name, defaults.function_name.as_ref()),
    );
    log::info!(
        "  {:<14} {}",
        "source_label",
        settings
            .source_label
            .clone()
            .unwrap_or_else(|| "(input file name)".to_string()),
    );
    log::info!(
        "  {:<14} {}",
        "description",
        show_text(&settings.description, defaults.description.as_ref()),
    );

    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path(explicit: Option<&Path>) {
    log::info!("{}", target_path(explicit).display());
}

/// Write a settings file holding the default values.
pub(crate) fn run_config_init(explicit: Option<&Path>, force: bool) -> Result<(), CliError> {
    let path = target_path(explicit);
    LibrarySettings::with_defaults().save(&path, force)?;

    log::info!(
        "{} Wrote default settings to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}
