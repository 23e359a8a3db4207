use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use rungroup_catalog::City;
use rungroup_db::{LocationService, SearchKind, SqliteLocations};

use crate::{CliError, Context};

use super::print_json;

fn log_city(city: &City) {
    log::info!(
        "  {:05}  {:<24}  {}  {}",
        city.zip,
        city.city_name.if_supports_color(Stdout, |t| t.bold()),
        city.state_code.if_supports_color(Stdout, |t| t.cyan()),
        city.county.if_supports_color(Stdout, |t| t.dimmed()),
    );
}

pub(crate) fn run_search(ctx: &Context, query: &str) -> Result<(), CliError> {
    let conn = ctx.open_db()?;
    let cities = SqliteLocations::new(&conn).search(query)?;
    if ctx.json {
        return print_json(&cities);
    }

    let kind = match SearchKind::classify(query) {
        SearchKind::ZipPrefix => "zip prefix",
        SearchKind::StateCode | SearchKind::CityName => "city name",
    };
    if cities.is_empty() {
        log::info!(
            "{}",
            format!("No cities match {kind} {query:?}").if_supports_color(Stdout, |t| t.dimmed()),
        );
        return Ok(());
    }
    log::info!(
        "{}",
        format!("{} cities matching {kind} {query:?}", cities.len())
            .if_supports_color(Stdout, |t| t.bold()),
    );
    cities.iter().for_each(log_city);
    Ok(())
}

pub(crate) fn run_states(ctx: &Context) -> Result<(), CliError> {
    let conn = ctx.open_db()?;
    let states = SqliteLocations::new(&conn).all_states()?;
    if ctx.json {
        return print_json(&states);
    }

    if states.is_empty() {
        log::warn!("No states loaded. Run 'rungroup init' to add them.");
        return Ok(());
    }
    for state in &states {
        log::info!(
            "  {}  {}",
            state.state_code.if_supports_color(Stdout, |t| t.cyan()),
            state.state_name,
        );
    }
    Ok(())
}

pub(crate) fn run_cities(ctx: &Context, state_code: &str) -> Result<(), CliError> {
    let conn = ctx.open_db()?;
    let cities = SqliteLocations::new(&conn).cities_for_state(state_code)?;
    if ctx.json {
        return print_json(&cities);
    }

    if cities.is_empty() {
        log::info!(
            "{}",
            format!("No cities with state code {state_code:?}")
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
        return Ok(());
    }
    cities.iter().for_each(log_city);
    Ok(())
}
