//! SQLite persistence layer for the club and race catalog.
//!
//! Provides schema creation, CRUD operations, the paginated catalog query
//! engine, location search, and repository traits backed by SQLite (via
//! rusqlite with bundled feature).

pub mod location;
pub mod operations;
pub mod queries;
pub mod repository;
pub mod schema;

pub use location::{location_search, SearchKind};
pub use operations::{
    delete_club, delete_race, insert_city, insert_club, insert_race, seed_from_catalog,
    update_club, update_race, update_user, upsert_state, upsert_user, OperationError, SeedStats,
    WritableEntity,
};
pub use queries::{
    all_states, all_users, catalog_stats, cities_for_state, city_by_zip, get_user, CatalogEntity,
    CatalogStats,
};
pub use repository::{
    CatalogRepository, ClubRepository, LocationService, RaceRepository, SqliteCatalog,
    SqliteLocations,
};
pub use schema::{open_database, open_memory, SchemaError};
