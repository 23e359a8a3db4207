//! YAML loading for seed data.
//!
//! Loads states, cities, users, clubs and races from a seed directory so a
//! fresh database can be populated without going through the web front end.

use crate::types::{AppUser, City, NewClub, NewRace, State};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum YamlError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("YAML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_yml::Error,
    },
    #[error("Directory not found: {0}")]
    DirNotFound(String),
}

/// Everything found in a seed directory.
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub states: Vec<State>,
    pub cities: Vec<City>,
    pub users: Vec<AppUser>,
    pub clubs: Vec<NewClub>,
    pub races: Vec<NewRace>,
}

impl SeedData {
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
            && self.cities.is_empty()
            && self.users.is_empty()
            && self.clubs.is_empty()
            && self.races.is_empty()
    }
}

/// Load all seed data from the standard directory layout.
///
/// Expected structure (every file optional, each a YAML sequence):
/// ```text
/// seed_dir/
///   states.yaml
///   cities.yaml
///   users.yaml
///   clubs.yaml
///   races.yaml
/// ```
///
/// Entries keep their file order, which becomes insertion order in the store.
pub fn load_seed(seed_dir: &Path) -> Result<SeedData, YamlError> {
    if !seed_dir.is_dir() {
        return Err(YamlError::DirNotFound(seed_dir.display().to_string()));
    }
    Ok(SeedData {
        states: load_yaml_list(&seed_dir.join("states.yaml"))?,
        cities: load_yaml_list(&seed_dir.join("cities.yaml"))?,
        users: load_yaml_list(&seed_dir.join("users.yaml"))?,
        clubs: load_yaml_list(&seed_dir.join("clubs.yaml"))?,
        races: load_yaml_list(&seed_dir.join("races.yaml"))?,
    })
}

/// Generic helper: load a YAML sequence of `T` from a file, or nothing if it is absent.
fn load_yaml_list<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>, YamlError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let contents = std::fs::read_to_string(path).map_err(|e| YamlError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    // An empty file parses as null rather than an empty sequence
    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_yml::from_str(&contents).map_err(|e| YamlError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}
