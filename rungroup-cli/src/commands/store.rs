use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use serde::Serialize;

use rungroup_catalog::{State, UsState};

use crate::{CliError, Context, log_blank};

use super::print_json;

/// Create (or migrate) the database and load the US state list.
pub(crate) fn run_init(ctx: &Context) -> Result<(), CliError> {
    if let Some(parent) = ctx.db_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    let conn = ctx.open_db()?;

    for state in UsState::all() {
        rungroup_db::upsert_state(
            &conn,
            &State {
                id: 0,
                state_name: state.name().to_string(),
                state_code: state.code().to_string(),
            },
        )?;
    }

    log::info!(
        "{} {} ({} states)",
        "Initialized".if_supports_color(Stdout, |t| t.green()),
        ctx.db_path.display(),
        UsState::all().len(),
    );
    Ok(())
}

pub(crate) fn run_seed(ctx: &Context, dir: &Path) -> Result<(), CliError> {
    let seed = rungroup_catalog::load_seed(dir).map_err(|e| CliError::seed(e.to_string()))?;
    if seed.is_empty() {
        log::warn!("No seed data found in {}", dir.display());
        return Ok(());
    }

    if let Some(parent) = ctx.db_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    let conn = ctx.open_db()?;
    let stats = rungroup_db::seed_from_catalog(&conn, &seed)?;

    log::info!(
        "{} {}",
        "Seeded".if_supports_color(Stdout, |t| t.green()),
        ctx.db_path.display(),
    );
    log::info!("  States:  {:>6}", stats.states);
    log::info!("  Cities:  {:>6}", stats.cities);
    log::info!("  Users:   {:>6}", stats.users);
    log::info!("  Clubs:   {:>6}", stats.clubs);
    log::info!("  Races:   {:>6}", stats.races);
    Ok(())
}

#[derive(Serialize)]
struct StatsReport {
    database: String,
    states: i64,
    cities: i64,
    users: i64,
    clubs: i64,
    races: i64,
}

pub(crate) fn run_stats(ctx: &Context) -> Result<(), CliError> {
    if !ctx.db_path.exists() {
        log::warn!("No catalog database found at {}", ctx.db_path.display());
        log::info!("Run 'rungroup init' to create one.");
        return Ok(());
    }

    let conn = ctx.open_db()?;
    let stats = rungroup_db::catalog_stats(&conn)?;

    if ctx.json {
        return print_json(&StatsReport {
            database: ctx.db_path.display().to_string(),
            states: stats.states,
            cities: stats.cities,
            users: stats.users,
            clubs: stats.clubs,
            races: stats.races,
        });
    }

    log::info!(
        "{}",
        "Catalog Database Statistics".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!(
        "  Database: {} {}",
        ctx.db_path.display(),
        format!("({})", ctx.db_source).if_supports_color(Stdout, |t| t.dimmed()),
    );
    log_blank();
    log::info!("  States:   {:>8}", stats.states);
    log::info!("  Cities:   {:>8}", stats.cities);
    log::info!("  Users:    {:>8}", stats.users);
    log::info!("  Clubs:    {:>8}", stats.clubs);
    log::info!("  Races:    {:>8}", stats.races);
    Ok(())
}
