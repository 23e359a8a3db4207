//! rungroup CLI
//!
//! Command-line interface for browsing and managing the running club and
//! race catalog.

mod cli_types;
mod commands;
mod error;

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use rungroup_lib::{PathSource, Settings};

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;

/// Resolved global options shared by every command.
pub(crate) struct Context {
    pub db_path: PathBuf,
    pub db_source: PathSource,
    pub settings: Settings,
    pub json: bool,
}

impl Context {
    pub(crate) fn open_db(&self) -> Result<rusqlite::Connection, CliError> {
        rungroup_db::open_database(&self.db_path).map_err(|e| {
            CliError::database(format!(
                "Failed to open database {}: {}",
                self.db_path.display(),
                e
            ))
        })
    }
}

/// Emit an empty line through the logger.
pub(crate) fn log_blank() {
    log::info!("");
}

fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    builder.target(env_logger::Target::Stdout);
    if verbose {
        builder.format(|buf, record| {
            let ts = buf.timestamp_millis();
            writeln!(buf, "[{} {:<5}] {}", ts, record.level(), record.args())
        });
    } else {
        builder.format(|buf, record| match record.level() {
            log::Level::Info | log::Level::Debug | log::Level::Trace => {
                writeln!(buf, "{}", record.args())
            }
            level => writeln!(buf, "{}: {}", level.as_str().to_lowercase(), record.args()),
        });
    }
    // RUST_LOG wins over the command-line level
    builder.parse_default_env();
    builder.init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    // `config` must work even when the settings file is broken
    if let Commands::Config { action } = &cli.command {
        return match action {
            ConfigAction::Path => commands::config::run_config_path(),
            ConfigAction::Show => commands::config::run_config_show(cli.db),
        };
    }

    let settings = Settings::load().map_err(|e| CliError::config(e.to_string()))?;
    let (db_path, db_source) = rungroup_lib::resolve_db_path(cli.db, &settings);
    log::debug!("Using database {} ({})", db_path.display(), db_source);
    let ctx = Context {
        db_path,
        db_source,
        settings,
        json: cli.json,
    };

    match cli.command {
        Commands::Init => commands::store::run_init(&ctx),
        Commands::Seed { dir } => commands::store::run_seed(&ctx, &dir),
        Commands::Stats => commands::store::run_stats(&ctx),
        Commands::Clubs { paging, category } => {
            commands::catalog::run_clubs(&ctx, &paging, category)
        }
        Commands::Races { paging, category } => {
            commands::catalog::run_races(&ctx, &paging, category)
        }
        Commands::ClubsByState { state } => commands::catalog::run_clubs_by_state(&ctx, &state),
        Commands::ClubsByCity { city } => commands::catalog::run_clubs_by_city(&ctx, &city),
        Commands::RacesByCity { city } => commands::catalog::run_races_by_city(&ctx, &city),
        Commands::Search { query } => commands::location::run_search(&ctx, &query),
        Commands::States => commands::location::run_states(&ctx),
        Commands::Cities { state_code } => commands::location::run_cities(&ctx, &state_code),
        Commands::Users => commands::users::run_users(&ctx),
        Commands::User { id } => commands::users::run_user(&ctx, &id),
        Commands::Dashboard { user_id } => commands::users::run_dashboard(&ctx, &user_id),
        Commands::Config { .. } => Ok(()),
    }
}
