//! Repository traits over the catalog store, and their SQLite implementations.
//!
//! Callers (listing, dashboard, the CLI) are written against these traits and
//! receive a concrete repository at construction, so they never touch SQL.

use std::marker::PhantomData;

use rungroup_catalog::types::{City, Club, Race, State};
use rusqlite::Connection;

use crate::location::location_search;
use crate::operations::{OperationError, WritableEntity};
use crate::queries::{self, CatalogEntity};

/// The capability set shared by every catalog entity family.
///
/// `skip` and `take` are zero-based counts, not page numbers.
pub trait CatalogRepository {
    type Entity;
    type New;
    type Category;

    fn slice(&self, skip: usize, take: usize) -> Result<Vec<Self::Entity>, OperationError>;
    fn count(&self) -> Result<usize, OperationError>;
    fn slice_by_category(
        &self,
        category: Self::Category,
        skip: usize,
        take: usize,
    ) -> Result<Vec<Self::Entity>, OperationError>;
    fn count_by_category(&self, category: Self::Category) -> Result<usize, OperationError>;
    /// Exact, case-sensitive match on the two-letter state code.
    fn by_state(&self, state_code: &str) -> Result<Vec<Self::Entity>, OperationError>;
    /// Substring match on the address city.
    fn by_city(&self, city: &str) -> Result<Vec<Self::Entity>, OperationError>;
    fn owned_by(&self, user_id: &str) -> Result<Vec<Self::Entity>, OperationError>;
    fn get(&self, id: i64) -> Result<Option<Self::Entity>, OperationError>;
    fn add(&self, new: &Self::New) -> Result<i64, OperationError>;
    fn update(&self, entity: &Self::Entity) -> Result<(), OperationError>;
    fn delete(&self, id: i64) -> Result<(), OperationError>;
}

/// Reference-data lookups used by registration and location search.
pub trait LocationService {
    fn city_by_zip(&self, zip: i32) -> Result<Option<City>, OperationError>;
    fn search(&self, query: &str) -> Result<Vec<City>, OperationError>;
    fn all_states(&self) -> Result<Vec<State>, OperationError>;
    fn cities_for_state(&self, state_code: &str) -> Result<Vec<City>, OperationError>;
}

// ── SQLite Implementations ──────────────────────────────────────────────────

/// A [`CatalogRepository`] for entity type `T` backed by a borrowed connection.
pub struct SqliteCatalog<'c, T> {
    conn: &'c Connection,
    _entity: PhantomData<T>,
}

impl<'c, T> SqliteCatalog<'c, T> {
    pub fn new(conn: &'c Connection) -> Self {
        Self {
            conn,
            _entity: PhantomData,
        }
    }
}

pub type ClubRepository<'c> = SqliteCatalog<'c, Club>;
pub type RaceRepository<'c> = SqliteCatalog<'c, Race>;

impl<T: WritableEntity> CatalogRepository for SqliteCatalog<'_, T> {
    type Entity = T;
    type New = T::New;
    type Category = <T as CatalogEntity>::Category;

    fn slice(&self, skip: usize, take: usize) -> Result<Vec<T>, OperationError> {
        queries::slice::<T>(self.conn, skip, take)
    }

    fn count(&self) -> Result<usize, OperationError> {
        queries::count::<T>(self.conn)
    }

    fn slice_by_category(
        &self,
        category: Self::Category,
        skip: usize,
        take: usize,
    ) -> Result<Vec<T>, OperationError> {
        queries::slice_by_category::<T>(self.conn, category, skip, take)
    }

    fn count_by_category(&self, category: Self::Category) -> Result<usize, OperationError> {
        queries::count_by_category::<T>(self.conn, category)
    }

    fn by_state(&self, state_code: &str) -> Result<Vec<T>, OperationError> {
        queries::by_state::<T>(self.conn, state_code)
    }

    fn by_city(&self, city: &str) -> Result<Vec<T>, OperationError> {
        queries::by_city::<T>(self.conn, city)
    }

    fn owned_by(&self, user_id: &str) -> Result<Vec<T>, OperationError> {
        queries::owned_by::<T>(self.conn, user_id)
    }

    fn get(&self, id: i64) -> Result<Option<T>, OperationError> {
        queries::get::<T>(self.conn, id)
    }

    fn add(&self, new: &T::New) -> Result<i64, OperationError> {
        T::insert(self.conn, new)
    }

    fn update(&self, entity: &T) -> Result<(), OperationError> {
        T::update(self.conn, entity)
    }

    fn delete(&self, id: i64) -> Result<(), OperationError> {
        T::delete(self.conn, id)
    }
}

/// A [`LocationService`] backed by a borrowed connection.
pub struct SqliteLocations<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteLocations<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }
}

impl LocationService for SqliteLocations<'_> {
    fn city_by_zip(&self, zip: i32) -> Result<Option<City>, OperationError> {
        queries::city_by_zip(self.conn, zip)
    }

    fn search(&self, query: &str) -> Result<Vec<City>, OperationError> {
        location_search(self.conn, query)
    }

    fn all_states(&self) -> Result<Vec<State>, OperationError> {
        queries::all_states(self.conn)
    }

    fn cities_for_state(&self, state_code: &str) -> Result<Vec<City>, OperationError> {
        queries::cities_for_state(self.conn, state_code)
    }
}
