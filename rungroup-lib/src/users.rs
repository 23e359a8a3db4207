//! User directory views.

use rungroup_catalog::resolve_profile_image;
use rungroup_catalog::types::AppUser;
use rungroup_db::{OperationError, all_users, get_user};
use rusqlite::Connection;
use serde::Serialize;

/// A user as shown in the directory, with the avatar already resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    pub id: String,
    pub user_name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pace: Option<i32>,
    pub mileage: Option<i32>,
    pub profile_image_url: String,
}

impl From<AppUser> for UserSummary {
    fn from(user: AppUser) -> Self {
        Self {
            profile_image_url: resolve_profile_image(user.profile_image_url.as_deref()),
            id: user.id,
            user_name: user.user_name,
            city: user.city,
            state: user.state,
            pace: user.pace,
            mileage: user.mileage,
        }
    }
}

pub fn list_users(conn: &Connection) -> Result<Vec<UserSummary>, OperationError> {
    Ok(all_users(conn)?.into_iter().map(UserSummary::from).collect())
}

/// `None` when there is no user with this id.
pub fn user_detail(conn: &Connection, id: &str) -> Result<Option<UserSummary>, OperationError> {
    Ok(get_user(conn, id)?.map(UserSummary::from))
}
