//! Read queries for the catalog database.
//!
//! Clubs and races share one set of query shapes (slice, count, category
//! filter, state and city filters) through [`CatalogEntity`]. All listings
//! are ordered by primary key so paging over unchanged data never repeats or
//! skips an entity.

use rungroup_catalog::types::*;
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::operations::OperationError;

// ── Entity Mapping ──────────────────────────────────────────────────────────

/// A catalog collection that can be listed, sliced and filtered.
///
/// Every implementor is stored in `TABLE` with an `address_id` column pointing
/// at its exclusively owned row in `addresses`; `SELECT_COLUMNS` selects the
/// owner as `e` and the address as `a`.
pub trait CatalogEntity: Sized {
    type Category: Category;

    /// Singular name used in error messages ("club", "race").
    const ENTITY_TYPE: &'static str;
    const TABLE: &'static str;
    const SELECT_COLUMNS: &'static str;

    fn id(&self) -> i64;
    fn category(&self) -> Self::Category;
    fn address(&self) -> &Address;
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;
}

impl CatalogEntity for Club {
    type Category = ClubCategory;

    const ENTITY_TYPE: &'static str = "club";
    const TABLE: &'static str = "clubs";
    const SELECT_COLUMNS: &'static str = "e.id, e.title, e.description, e.image, e.category,
        e.app_user_id, a.street, a.city, a.state, a.zip_code";

    fn id(&self) -> i64 {
        self.id
    }

    fn category(&self) -> ClubCategory {
        self.category
    }

    fn address(&self) -> &Address {
        &self.address
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Club {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            image: row.get(3)?,
            category: category_from_row(row, 4)?,
            app_user_id: row.get(5)?,
            address: address_from_row(row, 6)?,
        })
    }
}

impl CatalogEntity for Race {
    type Category = RaceCategory;

    const ENTITY_TYPE: &'static str = "race";
    const TABLE: &'static str = "races";
    const SELECT_COLUMNS: &'static str = "e.id, e.title, e.description, e.image, e.category,
        e.app_user_id, a.street, a.city, a.state, a.zip_code,
        e.start_time, e.entry_fee, e.website, e.twitter, e.facebook, e.contact";

    fn id(&self) -> i64 {
        self.id
    }

    fn category(&self) -> RaceCategory {
        self.category
    }

    fn address(&self) -> &Address {
        &self.address
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Race {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            image: row.get(3)?,
            category: category_from_row(row, 4)?,
            app_user_id: row.get(5)?,
            address: address_from_row(row, 6)?,
            start_time: row.get(10)?,
            entry_fee: row.get(11)?,
            website: row.get(12)?,
            twitter: row.get(13)?,
            facebook: row.get(14)?,
            contact: row.get(15)?,
        })
    }
}

fn select_sql<T: CatalogEntity>(filter: &str, suffix: &str) -> String {
    format!(
        "SELECT {} FROM {} e JOIN addresses a ON a.id = e.address_id {} ORDER BY e.id {}",
        T::SELECT_COLUMNS,
        T::TABLE,
        filter,
        suffix,
    )
}

/// Bind a `usize` as a SQLite integer, saturating at `i64::MAX`.
fn to_sql_int(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

fn count_from_sql(n: i64) -> usize {
    usize::try_from(n).unwrap_or(0)
}

// ── Slices and Counts ───────────────────────────────────────────────────────

/// Return at most `take` entities starting at the `skip`-th, by ascending id.
///
/// `skip` past the end or `take == 0` yields an empty list, never an error.
pub fn slice<T: CatalogEntity>(
    conn: &Connection,
    skip: usize,
    take: usize,
) -> Result<Vec<T>, OperationError> {
    if take == 0 {
        return Ok(Vec::new());
    }
    let mut stmt = conn.prepare(&select_sql::<T>("", "LIMIT ?1 OFFSET ?2"))?;
    let rows = stmt.query_map(params![to_sql_int(take), to_sql_int(skip)], T::from_row)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Total number of entities, independent of any slice.
pub fn count<T: CatalogEntity>(conn: &Connection) -> Result<usize, OperationError> {
    let n: i64 = conn.query_row(&format!("SELECT COUNT(*) FROM {}", T::TABLE), [], |r| {
        r.get(0)
    })?;
    Ok(count_from_sql(n))
}

/// Like [`slice`], restricted to entities whose category equals `category` exactly.
pub fn slice_by_category<T: CatalogEntity>(
    conn: &Connection,
    category: T::Category,
    skip: usize,
    take: usize,
) -> Result<Vec<T>, OperationError> {
    if take == 0 {
        return Ok(Vec::new());
    }
    let mut stmt = conn.prepare(&select_sql::<T>(
        "WHERE e.category = ?1",
        "LIMIT ?2 OFFSET ?3",
    ))?;
    let rows = stmt.query_map(
        params![category.index(), to_sql_int(take), to_sql_int(skip)],
        T::from_row,
    )?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Number of entities in `category`.
pub fn count_by_category<T: CatalogEntity>(
    conn: &Connection,
    category: T::Category,
) -> Result<usize, OperationError> {
    let n: i64 = conn.query_row(
        &format!("SELECT COUNT(*) FROM {} WHERE category = ?1", T::TABLE),
        params![category.index()],
        |r| r.get(0),
    )?;
    Ok(count_from_sql(n))
}

// ── Relationship Filters ────────────────────────────────────────────────────

/// Entities whose address state code equals `state_code` exactly (case-sensitive).
pub fn by_state<T: CatalogEntity>(
    conn: &Connection,
    state_code: &str,
) -> Result<Vec<T>, OperationError> {
    let mut stmt = conn.prepare(&select_sql::<T>("WHERE a.state = ?1", ""))?;
    let rows = stmt.query_map(params![state_code], T::from_row)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Entities whose address city contains `city` as a case-sensitive substring.
///
/// Uses `instr` rather than `LIKE` so `%` and `_` in the input match literally.
pub fn by_city<T: CatalogEntity>(conn: &Connection, city: &str) -> Result<Vec<T>, OperationError> {
    let mut stmt = conn.prepare(&select_sql::<T>("WHERE instr(a.city, ?1) > 0", ""))?;
    let rows = stmt.query_map(params![city], T::from_row)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Entities created by the given user.
pub fn owned_by<T: CatalogEntity>(
    conn: &Connection,
    user_id: &str,
) -> Result<Vec<T>, OperationError> {
    let mut stmt = conn.prepare(&select_sql::<T>("WHERE e.app_user_id = ?1", ""))?;
    let rows = stmt.query_map(params![user_id], T::from_row)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Every entity in the collection.
pub fn all<T: CatalogEntity>(conn: &Connection) -> Result<Vec<T>, OperationError> {
    let mut stmt = conn.prepare(&select_sql::<T>("", ""))?;
    let rows = stmt.query_map([], T::from_row)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Look up one entity by id. A missing id is `Ok(None)`.
pub fn get<T: CatalogEntity>(conn: &Connection, id: i64) -> Result<Option<T>, OperationError> {
    let mut stmt = conn.prepare(&select_sql::<T>("WHERE e.id = ?1", ""))?;
    stmt.query_row(params![id], T::from_row)
        .optional()
        .map_err(Into::into)
}

// ── States and Cities ───────────────────────────────────────────────────────

/// List all states.
pub fn all_states(conn: &Connection) -> Result<Vec<State>, OperationError> {
    let mut stmt =
        conn.prepare("SELECT id, state_name, state_code FROM states ORDER BY id")?;
    let rows = stmt.query_map([], |row| {
        Ok(State {
            id: row.get(0)?,
            state_name: row.get(1)?,
            state_code: row.get(2)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Cities whose state code equals `state_code` exactly.
pub fn cities_for_state(
    conn: &Connection,
    state_code: &str,
) -> Result<Vec<City>, OperationError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {CITY_COLUMNS} FROM cities WHERE state_code = ?1 ORDER BY id"
    ))?;
    let rows = stmt.query_map(params![state_code], row_to_city)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Find the first city with exactly this zip code.
pub fn city_by_zip(conn: &Connection, zip: i32) -> Result<Option<City>, OperationError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {CITY_COLUMNS} FROM cities WHERE zip = ?1 ORDER BY id LIMIT 1"
    ))?;
    stmt.query_row(params![zip], row_to_city)
        .optional()
        .map_err(Into::into)
}

// ── Users ───────────────────────────────────────────────────────────────────

/// List all users.
pub fn all_users(conn: &Connection) -> Result<Vec<AppUser>, OperationError> {
    let mut stmt = conn.prepare(&format!("SELECT {USER_COLUMNS} FROM users ORDER BY rowid"))?;
    let rows = stmt.query_map([], row_to_user)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Look up a user by id. A missing id is `Ok(None)`.
pub fn get_user(conn: &Connection, id: &str) -> Result<Option<AppUser>, OperationError> {
    let mut stmt = conn.prepare(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?1"))?;
    stmt.query_row(params![id], row_to_user)
        .optional()
        .map_err(Into::into)
}

// ── Statistics ──────────────────────────────────────────────────────────────

/// Get overall catalog statistics.
pub fn catalog_stats(conn: &Connection) -> Result<CatalogStats, OperationError> {
    let states: i64 = conn.query_row("SELECT COUNT(*) FROM states", [], |r| r.get(0))?;
    let cities: i64 = conn.query_row("SELECT COUNT(*) FROM cities", [], |r| r.get(0))?;
    let users: i64 = conn.query_row("SELECT COUNT(*) FROM users", [], |r| r.get(0))?;
    let clubs: i64 = conn.query_row("SELECT COUNT(*) FROM clubs", [], |r| r.get(0))?;
    let races: i64 = conn.query_row("SELECT COUNT(*) FROM races", [], |r| r.get(0))?;

    Ok(CatalogStats {
        states,
        cities,
        users,
        clubs,
        races,
    })
}

/// Summary statistics for the catalog.
#[derive(Debug)]
pub struct CatalogStats {
    pub states: i64,
    pub cities: i64,
    pub users: i64,
    pub clubs: i64,
    pub races: i64,
}

// ── Row Mapping Helpers ─────────────────────────────────────────────────────

pub(crate) const CITY_COLUMNS: &str =
    "id, city_name, state_code, zip, latitude, longitude, county";

const USER_COLUMNS: &str =
    "id, user_name, email, pace, mileage, profile_image_url, city, state";

pub(crate) fn row_to_city(row: &Row<'_>) -> rusqlite::Result<City> {
    Ok(City {
        id: row.get(0)?,
        city_name: row.get(1)?,
        state_code: row.get(2)?,
        zip: row.get(3)?,
        latitude: row.get(4)?,
        longitude: row.get(5)?,
        county: row.get(6)?,
    })
}

fn row_to_user(row: &Row<'_>) -> rusqlite::Result<AppUser> {
    Ok(AppUser {
        id: row.get(0)?,
        user_name: row.get(1)?,
        email: row.get(2)?,
        pace: row.get(3)?,
        mileage: row.get(4)?,
        profile_image_url: row.get(5)?,
        city: row.get(6)?,
        state: row.get(7)?,
    })
}

fn address_from_row(row: &Row<'_>, start: usize) -> rusqlite::Result<Address> {
    Ok(Address {
        street: row.get(start)?,
        city: row.get(start + 1)?,
        state: row.get(start + 2)?,
        zip_code: row.get(start + 3)?,
    })
}

fn category_from_row<C: Category>(row: &Row<'_>, idx: usize) -> rusqlite::Result<C> {
    let index: i32 = row.get(idx)?;
    C::from_index(index).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            Type::Integer,
            Box::new(CategoryParseError(index.to_string())),
        )
    })
}
