//! Write operations for all catalog entity types.
//!
//! Each write is a single atomic unit: a club or race and its owned address
//! are inserted, updated or deleted inside one transaction.

use rungroup_catalog::types::*;
use rungroup_catalog::SeedData;
use rusqlite::{params, Connection};
use thiserror::Error;

use crate::queries::CatalogEntity;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Entity not found: {entity_type} with id '{id}'")]
    NotFound { entity_type: String, id: String },
}

impl OperationError {
    fn not_found(entity_type: &str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }
}

/// A catalog entity that can be added, updated and deleted together with its address.
pub trait WritableEntity: CatalogEntity {
    /// The not-yet-stored form of the entity.
    type New;

    fn insert(conn: &Connection, new: &Self::New) -> Result<i64, OperationError>;
    fn update(conn: &Connection, entity: &Self) -> Result<(), OperationError>;
    fn delete(conn: &Connection, id: i64) -> Result<(), OperationError>;
}

impl WritableEntity for Club {
    type New = NewClub;

    fn insert(conn: &Connection, new: &NewClub) -> Result<i64, OperationError> {
        insert_club(conn, new)
    }

    fn update(conn: &Connection, club: &Club) -> Result<(), OperationError> {
        update_club(conn, club)
    }

    fn delete(conn: &Connection, id: i64) -> Result<(), OperationError> {
        delete_club(conn, id)
    }
}

impl WritableEntity for Race {
    type New = NewRace;

    fn insert(conn: &Connection, new: &NewRace) -> Result<i64, OperationError> {
        insert_race(conn, new)
    }

    fn update(conn: &Connection, race: &Race) -> Result<(), OperationError> {
        update_race(conn, race)
    }

    fn delete(conn: &Connection, id: i64) -> Result<(), OperationError> {
        delete_race(conn, id)
    }
}

// ── Address Helpers ─────────────────────────────────────────────────────────

fn insert_address(conn: &Connection, address: &Address) -> Result<i64, OperationError> {
    conn.execute(
        "INSERT INTO addresses (street, city, state, zip_code) VALUES (?1, ?2, ?3, ?4)",
        params![address.street, address.city, address.state, address.zip_code],
    )?;
    Ok(conn.last_insert_rowid())
}

fn update_owned_address(
    conn: &Connection,
    table: &str,
    owner_id: i64,
    address: &Address,
) -> Result<(), OperationError> {
    conn.execute(
        &format!(
            "UPDATE addresses SET street = ?2, city = ?3, state = ?4, zip_code = ?5
             WHERE id = (SELECT address_id FROM {table} WHERE id = ?1)"
        ),
        params![
            owner_id,
            address.street,
            address.city,
            address.state,
            address.zip_code,
        ],
    )?;
    Ok(())
}

/// Delete an owner row, then the address it owned.
fn delete_with_address(
    conn: &Connection,
    entity_type: &str,
    table: &str,
    id: i64,
) -> Result<(), OperationError> {
    let tx = conn.unchecked_transaction()?;
    let result = tx.query_row(
        &format!("SELECT address_id FROM {table} WHERE id = ?1"),
        params![id],
        |row| row.get::<_, i64>(0),
    );
    let address_id = match result {
        Ok(address_id) => address_id,
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            return Err(OperationError::not_found(entity_type, id));
        }
        Err(e) => return Err(e.into()),
    };
    tx.execute(&format!("DELETE FROM {table} WHERE id = ?1"), params![id])?;
    tx.execute("DELETE FROM addresses WHERE id = ?1", params![address_id])?;
    tx.commit()?;
    Ok(())
}

// ── Club Operations ─────────────────────────────────────────────────────────

/// Insert a club and its address. Returns the new club id.
pub fn insert_club(conn: &Connection, club: &NewClub) -> Result<i64, OperationError> {
    let tx = conn.unchecked_transaction()?;
    let id = insert_club_rows(&tx, club)?;
    tx.commit()?;
    Ok(id)
}

/// Insert without opening a transaction; the caller owns atomicity.
fn insert_club_rows(conn: &Connection, club: &NewClub) -> Result<i64, OperationError> {
    let address_id = insert_address(conn, &club.address)?;
    conn.execute(
        "INSERT INTO clubs (title, description, image, category, app_user_id, address_id)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            club.title,
            club.description,
            club.image,
            club.category.index(),
            club.app_user_id,
            address_id,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Update a club and its address in place.
pub fn update_club(conn: &Connection, club: &Club) -> Result<(), OperationError> {
    let tx = conn.unchecked_transaction()?;
    let changed = tx.execute(
        "UPDATE clubs SET title = ?2, description = ?3, image = ?4, category = ?5,
             app_user_id = ?6, updated_at = datetime('now')
         WHERE id = ?1",
        params![
            club.id,
            club.title,
            club.description,
            club.image,
            club.category.index(),
            club.app_user_id,
        ],
    )?;
    if changed == 0 {
        return Err(OperationError::not_found(Club::ENTITY_TYPE, club.id));
    }
    update_owned_address(&tx, Club::TABLE, club.id, &club.address)?;
    tx.commit()?;
    Ok(())
}

/// Delete a club and the address it owns.
pub fn delete_club(conn: &Connection, id: i64) -> Result<(), OperationError> {
    delete_with_address(conn, Club::ENTITY_TYPE, Club::TABLE, id)
}

// ── Race Operations ─────────────────────────────────────────────────────────

/// Insert a race and its address. Returns the new race id.
pub fn insert_race(conn: &Connection, race: &NewRace) -> Result<i64, OperationError> {
    let tx = conn.unchecked_transaction()?;
    let id = insert_race_rows(&tx, race)?;
    tx.commit()?;
    Ok(id)
}

fn insert_race_rows(conn: &Connection, race: &NewRace) -> Result<i64, OperationError> {
    let address_id = insert_address(conn, &race.address)?;
    conn.execute(
        "INSERT INTO races (title, description, image, category, start_time, entry_fee,
             website, twitter, facebook, contact, app_user_id, address_id)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        params![
            race.title,
            race.description,
            race.image,
            race.category.index(),
            race.start_time,
            race.entry_fee,
            race.website,
            race.twitter,
            race.facebook,
            race.contact,
            race.app_user_id,
            address_id,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Update a race and its address in place.
pub fn update_race(conn: &Connection, race: &Race) -> Result<(), OperationError> {
    let tx = conn.unchecked_transaction()?;
    let changed = tx.execute(
        "UPDATE races SET title = ?2, description = ?3, image = ?4, category = ?5,
             start_time = ?6, entry_fee = ?7, website = ?8, twitter = ?9,
             facebook = ?10, contact = ?11, app_user_id = ?12,
             updated_at = datetime('now')
         WHERE id = ?1",
        params![
            race.id,
            race.title,
            race.description,
            race.image,
            race.category.index(),
            race.start_time,
            race.entry_fee,
            race.website,
            race.twitter,
            race.facebook,
            race.contact,
            race.app_user_id,
        ],
    )?;
    if changed == 0 {
        return Err(OperationError::not_found(Race::ENTITY_TYPE, race.id));
    }
    update_owned_address(&tx, Race::TABLE, race.id, &race.address)?;
    tx.commit()?;
    Ok(())
}

/// Delete a race and the address it owns.
pub fn delete_race(conn: &Connection, id: i64) -> Result<(), OperationError> {
    delete_with_address(conn, Race::ENTITY_TYPE, Race::TABLE, id)
}

// ── Reference Data Operations ───────────────────────────────────────────────

/// Insert or update a state, keyed by its code.
pub fn upsert_state(conn: &Connection, state: &State) -> Result<(), OperationError> {
    conn.execute(
        "INSERT INTO states (state_name, state_code) VALUES (?1, ?2)
         ON CONFLICT(state_code) DO UPDATE SET state_name = excluded.state_name",
        params![state.state_name, state.state_code],
    )?;
    Ok(())
}

/// Insert a city. Returns the generated ID.
pub fn insert_city(conn: &Connection, city: &City) -> Result<i64, OperationError> {
    conn.execute(
        "INSERT INTO cities (city_name, state_code, zip, latitude, longitude, county)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            city.city_name,
            city.state_code,
            city.zip,
            city.latitude,
            city.longitude,
            city.county,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

// ── User Operations ─────────────────────────────────────────────────────────

/// Insert or update a user's profile fields.
pub fn upsert_user(conn: &Connection, user: &AppUser) -> Result<(), OperationError> {
    conn.execute(
        "INSERT INTO users (id, user_name, email, pace, mileage, profile_image_url, city, state)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
         ON CONFLICT(id) DO UPDATE SET
             user_name = excluded.user_name,
             email = excluded.email,
             pace = excluded.pace,
             mileage = excluded.mileage,
             profile_image_url = excluded.profile_image_url,
             city = excluded.city,
             state = excluded.state",
        params![
            user.id,
            user.user_name,
            user.email,
            user.pace,
            user.mileage,
            user.profile_image_url,
            user.city,
            user.state,
        ],
    )?;
    Ok(())
}

/// Update an existing user's profile fields.
pub fn update_user(conn: &Connection, user: &AppUser) -> Result<(), OperationError> {
    let changed = conn.execute(
        "UPDATE users SET user_name = ?2, email = ?3, pace = ?4, mileage = ?5,
             profile_image_url = ?6, city = ?7, state = ?8
         WHERE id = ?1",
        params![
            user.id,
            user.user_name,
            user.email,
            user.pace,
            user.mileage,
            user.profile_image_url,
            user.city,
            user.state,
        ],
    )?;
    if changed == 0 {
        return Err(OperationError::not_found("user", &user.id));
    }
    Ok(())
}

// ── Seeding ─────────────────────────────────────────────────────────────────

/// Statistics from seeding the database.
#[derive(Debug, Default)]
pub struct SeedStats {
    pub states: usize,
    pub cities: usize,
    pub users: usize,
    pub clubs: usize,
    pub races: usize,
}

/// Populate the database from seed data in one transaction.
///
/// Users go in before clubs and races so creator references resolve.
pub fn seed_from_catalog(conn: &Connection, seed: &SeedData) -> Result<SeedStats, OperationError> {
    let tx = conn.unchecked_transaction()?;
    let mut stats = SeedStats::default();

    for state in &seed.states {
        upsert_state(&tx, state)?;
        stats.states += 1;
    }
    for city in &seed.cities {
        insert_city(&tx, city)?;
        stats.cities += 1;
    }
    for user in &seed.users {
        upsert_user(&tx, user)?;
        stats.users += 1;
    }
    for club in &seed.clubs {
        insert_club_rows(&tx, club)?;
        stats.clubs += 1;
    }
    for race in &seed.races {
        insert_race_rows(&tx, race)?;
        stats.races += 1;
    }

    tx.commit()?;
    log::info!(
        "Seeded {} states, {} cities, {} users, {} clubs, {} races",
        stats.states,
        stats.cities,
        stats.users,
        stats.clubs,
        stats.races,
    );
    Ok(stats)
}
