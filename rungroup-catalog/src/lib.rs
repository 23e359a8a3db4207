//! Club and race catalog data model, state resolution, and YAML seed loading.
//!
//! This crate defines the persistent data model without any database
//! dependencies. Consumers can use these types directly for serialization,
//! display, or passing to `rungroup-db` for persistence.

pub mod profile;
pub mod state;
pub mod types;
pub mod yaml;

pub use profile::{resolve_profile_image, DEFAULT_AVATAR};
pub use state::{code_for_state_name, StateParseError, UsState};
pub use types::*;
pub use yaml::{load_seed, SeedData, YamlError};
