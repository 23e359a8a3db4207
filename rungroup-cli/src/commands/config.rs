use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use rungroup_lib::Settings;
use rungroup_lib::settings::{load_settings_string, settings_path};

use crate::{CliError, log_blank};

/// Show the settings file, the resolved database path and page size, and
/// where each came from.
pub(crate) fn run_config_show(db_override: Option<PathBuf>) -> Result<(), CliError> {
    let path = settings_path();

    log::info!(
        "{}",
        "rungroup Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log_blank();

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

    let settings = match Settings::load() {
        Ok(s) => s,
        Err(e) => {
            log::warn!("{}", e);
            Settings::default()
        }
    };
    let (db_path, db_source) = rungroup_lib::resolve_db_path(db_override, &settings);
    log::info!(
        "  Database:      {} {}",
        db_path.display(),
        format!("({db_source})").if_supports_color(Stdout, |t| t.dimmed()),
    );

    let page_source = if settings.catalog.page_size.is_some() {
        "config file"
    } else {
        "default"
    };
    log::info!(
        "  Page size:     {} {}",
        settings.page_size(),
        format!("({page_source})").if_supports_color(Stdout, |t| t.dimmed()),
    );

    if let Some(contents) = load_settings_string() {
        log_blank();
        for line in contents.lines() {
            log::info!("  {}", line.if_supports_color(Stdout, |t| t.dimmed()));
        }
    }
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    let path = settings_path();
    if path.parent().is_none() {
        return Err(CliError::config("Could not determine config directory"));
    }
    log::info!("{}", path.display());
    Ok(())
}
