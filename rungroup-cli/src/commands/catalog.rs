use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use rungroup_catalog::{Address, Category, Club, ClubCategory, NO_CATEGORY, Race, RaceCategory};
use rungroup_db::{ClubRepository, RaceRepository};
use rungroup_lib::{IndexPage, list_by_city, list_by_state_name, list_page, resolve_page_size};

use crate::cli_types::PageArgs;
use crate::{CliError, Context};

use super::{print_json, truncate_str};

const TITLE_WIDTH: usize = 32;

fn format_address(address: &Address) -> String {
    match address.zip_code {
        Some(zip) => format!("{}, {} {:05}", address.city, address.state, zip),
        None => format!("{}, {}", address.city, address.state),
    }
}

fn log_club(club: &Club) {
    log::info!(
        "  {:>5}  {:<width$}  {:<11}  {}",
        club.id,
        truncate_str(&club.title, TITLE_WIDTH).if_supports_color(Stdout, |t| t.bold()),
        club.category.as_str().if_supports_color(Stdout, |t| t.cyan()),
        format_address(&club.address),
        width = TITLE_WIDTH,
    );
}

fn log_race(race: &Race) {
    let when = race
        .start_time
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "TBA".to_string());
    log::info!(
        "  {:>5}  {:<width$}  {:<12}  {:<16}  {}",
        race.id,
        truncate_str(&race.title, TITLE_WIDTH).if_supports_color(Stdout, |t| t.bold()),
        race.category.as_str().if_supports_color(Stdout, |t| t.cyan()),
        when,
        format_address(&race.address),
        width = TITLE_WIDTH,
    );
}

fn log_page_header<T>(label: &str, page: &IndexPage<T>, category: Option<&str>) {
    let filter = category
        .map(|c| format!(" in {c}"))
        .unwrap_or_default();
    log::info!(
        "{}",
        format!(
            "{label}{filter}: page {} of {} ({} total)",
            page.page, page.total_pages, page.total
        )
        .if_supports_color(Stdout, |t| t.bold()),
    );
    if page.items.is_empty() {
        log::info!(
            "  {}",
            "Nothing on this page".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
}

fn category_index<C: Category>(category: Option<C>) -> i32 {
    category.map_or(NO_CATEGORY, |c| c.index())
}

pub(crate) fn run_clubs(
    ctx: &Context,
    paging: &PageArgs,
    category: Option<ClubCategory>,
) -> Result<(), CliError> {
    let conn = ctx.open_db()?;
    let repo = ClubRepository::new(&conn);
    let page_size = resolve_page_size(paging.page_size, &ctx.settings);

    let page = list_page(&repo, paging.page, page_size, category_index(category))?;
    if ctx.json {
        return print_json(&page);
    }

    log_page_header("Clubs", &page, category.map(|c| c.as_str()));
    page.items.iter().for_each(log_club);
    Ok(())
}

pub(crate) fn run_races(
    ctx: &Context,
    paging: &PageArgs,
    category: Option<RaceCategory>,
) -> Result<(), CliError> {
    let conn = ctx.open_db()?;
    let repo = RaceRepository::new(&conn);
    let page_size = resolve_page_size(paging.page_size, &ctx.settings);

    let page = list_page(&repo, paging.page, page_size, category_index(category))?;
    if ctx.json {
        return print_json(&page);
    }

    log_page_header("Races", &page, category.map(|c| c.as_str()));
    page.items.iter().for_each(log_race);
    Ok(())
}

pub(crate) fn run_clubs_by_state(ctx: &Context, state_name: &str) -> Result<(), CliError> {
    let conn = ctx.open_db()?;
    let listing = list_by_state_name(&ClubRepository::new(&conn), state_name)?;
    if ctx.json {
        return print_json(&listing);
    }

    match &listing.state {
        Some(state) => {
            log::info!(
                "{}",
                format!("Clubs in {} ({})", state, listing.items.len())
                    .if_supports_color(Stdout, |t| t.bold()),
            );
            listing.items.iter().for_each(log_club);
        }
        None => {
            log::warn!("No running clubs found in {:?}", state_name);
        }
    }
    Ok(())
}

pub(crate) fn run_clubs_by_city(ctx: &Context, city: &str) -> Result<(), CliError> {
    let conn = ctx.open_db()?;
    let listing = list_by_city(&ClubRepository::new(&conn), city)?;
    if ctx.json {
        return print_json(&listing);
    }

    if listing.no_club_warning {
        log::warn!("No running clubs found near {:?}", city);
        return Ok(());
    }
    log::info!(
        "{}",
        format!("Clubs near {} ({})", city, listing.items.len())
            .if_supports_color(Stdout, |t| t.bold()),
    );
    listing.items.iter().for_each(log_club);
    Ok(())
}

pub(crate) fn run_races_by_city(ctx: &Context, city: &str) -> Result<(), CliError> {
    let conn = ctx.open_db()?;
    let listing = list_by_city(&RaceRepository::new(&conn), city)?;
    if ctx.json {
        return print_json(&listing);
    }

    if listing.no_club_warning {
        log::warn!("No races found near {:?}", city);
        return Ok(());
    }
    log::info!(
        "{}",
        format!("Races near {} ({})", city, listing.items.len())
            .if_supports_color(Stdout, |t| t.bold()),
    );
    listing.items.iter().for_each(log_race);
    Ok(())
}
