use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use rungroup_db::{ClubRepository, RaceRepository};
use rungroup_lib::{UserSummary, list_users, user_dashboard, user_detail};

use crate::{CliError, Context, log_blank};

use super::print_json;

fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

fn log_user_line(user: &UserSummary) {
    log::info!(
        "  {:<12}  {:<20}  {}, {}",
        user.id,
        or_dash(user.user_name.as_deref()).if_supports_color(Stdout, |t| t.bold()),
        or_dash(user.city.as_deref()),
        or_dash(user.state.as_deref()),
    );
}

pub(crate) fn run_users(ctx: &Context) -> Result<(), CliError> {
    let conn = ctx.open_db()?;
    let users = list_users(&conn)?;
    if ctx.json {
        return print_json(&users);
    }

    log::info!(
        "{}",
        format!("Users ({})", users.len()).if_supports_color(Stdout, |t| t.bold()),
    );
    users.iter().for_each(log_user_line);
    Ok(())
}

pub(crate) fn run_user(ctx: &Context, id: &str) -> Result<(), CliError> {
    let conn = ctx.open_db()?;
    let user = user_detail(&conn, id)?.ok_or_else(|| CliError::not_found(format!("user '{id}'")))?;
    if ctx.json {
        return print_json(&user);
    }

    log::info!(
        "{}",
        or_dash(user.user_name.as_deref()).if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Id:       {}", user.id);
    log::info!(
        "  Location: {}, {}",
        or_dash(user.city.as_deref()),
        or_dash(user.state.as_deref())
    );
    log::info!(
        "  Pace:     {}",
        user.pace.map_or("-".to_string(), |p| format!("{p} min/mile"))
    );
    log::info!(
        "  Mileage:  {}",
        user.mileage.map_or("-".to_string(), |m| m.to_string())
    );
    log::info!(
        "  Avatar:   {}",
        user.profile_image_url.if_supports_color(Stdout, |t| t.dimmed())
    );
    Ok(())
}

pub(crate) fn run_dashboard(ctx: &Context, user_id: &str) -> Result<(), CliError> {
    let conn = ctx.open_db()?;
    let dashboard = user_dashboard(
        &ClubRepository::new(&conn),
        &RaceRepository::new(&conn),
        user_id,
    )?;
    if ctx.json {
        return print_json(&dashboard);
    }

    log::info!(
        "{}",
        format!("Clubs created by {} ({})", user_id, dashboard.clubs.len())
            .if_supports_color(Stdout, |t| t.bold()),
    );
    for club in &dashboard.clubs {
        log::info!("  {:>5}  {}", club.id, club.title);
    }
    log_blank();
    log::info!(
        "{}",
        format!("Races created by {} ({})", user_id, dashboard.races.len())
            .if_supports_color(Stdout, |t| t.bold()),
    );
    for race in &dashboard.races {
        log::info!("  {:>5}  {}", race.id, race.title);
    }
    Ok(())
}
