//! A user's own clubs and races, and profile edits.
//!
//! The user is always an explicit argument; nothing here reads an ambient
//! "current user".

use rungroup_catalog::types::{AppUser, Club, Race};
use rungroup_db::{CatalogRepository, OperationError, get_user, update_user};
use rusqlite::Connection;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct Dashboard {
    pub clubs: Vec<Club>,
    pub races: Vec<Race>,
}

/// Collect everything `user_id` created.
pub fn user_dashboard<C, R>(
    clubs: &C,
    races: &R,
    user_id: &str,
) -> Result<Dashboard, OperationError>
where
    C: CatalogRepository<Entity = Club>,
    R: CatalogRepository<Entity = Race>,
{
    Ok(Dashboard {
        clubs: clubs.owned_by(user_id)?,
        races: races.owned_by(user_id)?,
    })
}

/// Profile fields a user may change from the dashboard. `None` leaves the
/// stored value alone.
#[derive(Debug, Clone, Default)]
pub struct ProfileEdit {
    pub pace: Option<i32>,
    pub mileage: Option<i32>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub profile_image_url: Option<String>,
}

/// Apply `edit` to the stored user. Returns the updated user, or `None` when
/// there is no such user.
pub fn edit_profile(
    conn: &Connection,
    user_id: &str,
    edit: ProfileEdit,
) -> Result<Option<AppUser>, OperationError> {
    let Some(mut user) = get_user(conn, user_id)? else {
        return Ok(None);
    };

    if edit.pace.is_some() {
        user.pace = edit.pace;
    }
    if edit.mileage.is_some() {
        user.mileage = edit.mileage;
    }
    if edit.city.is_some() {
        user.city = edit.city;
    }
    if edit.state.is_some() {
        user.state = edit.state;
    }
    if edit.profile_image_url.is_some() {
        user.profile_image_url = edit.profile_image_url;
    }

    update_user(conn, &user)?;
    log::info!("Updated profile for user {}", user.id);
    Ok(Some(user))
}
