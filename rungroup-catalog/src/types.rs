//! Data model types for the club and race catalog.
//!
//! These types represent the persistent catalog schema: clubs, races and
//! their owned addresses, plus the reference data (states, cities) and the
//! users that create catalog entries.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Category index meaning "no filter applied". Never persisted.
pub const NO_CATEGORY: i32 = -1;

// ── Categories ──────────────────────────────────────────────────────────────

/// An enumerated classification attached to a catalog entity.
///
/// The integer index is the declaration order of the variants and is what
/// the store persists and what listing requests carry.
pub trait Category: Copy + Eq + std::fmt::Debug + 'static {
    /// All variants in index order.
    fn all() -> &'static [Self];

    /// Canonical name (e.g., "RoadRunner", "FiveK").
    fn as_str(&self) -> &'static str;

    fn index(&self) -> i32 {
        Self::all()
            .iter()
            .position(|c| c == self)
            .map_or(NO_CATEGORY, |i| i as i32)
    }

    fn from_index(index: i32) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::all().get(i).copied())
    }
}

/// Error returned when a category index or name is not one of the enumerated values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError(pub String);

impl std::fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown category: '{}'", self.0)
    }
}

impl std::error::Error for CategoryParseError {}

/// Interpret a requested category index as a filter.
///
/// [`NO_CATEGORY`] yields `Ok(None)`; any other value must name a variant.
pub fn category_filter<C: Category>(index: i32) -> Result<Option<C>, CategoryParseError> {
    if index == NO_CATEGORY {
        return Ok(None);
    }
    C::from_index(index)
        .map(Some)
        .ok_or_else(|| CategoryParseError(index.to_string()))
}

fn parse_category<C: Category>(s: &str) -> Result<C, CategoryParseError> {
    let wanted = s.trim();
    C::all()
        .iter()
        .copied()
        .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
        .ok_or_else(|| CategoryParseError(s.to_string()))
}

/// Kind of running club.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClubCategory {
    RoadRunner,
    Womens,
    City,
    Trail,
    Endurance,
}

const ALL_CLUB_CATEGORIES: &[ClubCategory] = &[
    ClubCategory::RoadRunner,
    ClubCategory::Womens,
    ClubCategory::City,
    ClubCategory::Trail,
    ClubCategory::Endurance,
];

impl Category for ClubCategory {
    fn all() -> &'static [Self] {
        ALL_CLUB_CATEGORIES
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::RoadRunner => "RoadRunner",
            Self::Womens => "Womens",
            Self::City => "City",
            Self::Trail => "Trail",
            Self::Endurance => "Endurance",
        }
    }
}

impl std::fmt::Display for ClubCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ClubCategory {
    type Err = CategoryParseError;

    /// Parse a category from its canonical name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_category(s)
    }
}

/// Distance or format of a race.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RaceCategory {
    Marathon,
    Ultra,
    FiveK,
    TenK,
    HalfMarathon,
}

const ALL_RACE_CATEGORIES: &[RaceCategory] = &[
    RaceCategory::Marathon,
    RaceCategory::Ultra,
    RaceCategory::FiveK,
    RaceCategory::TenK,
    RaceCategory::HalfMarathon,
];

impl Category for RaceCategory {
    fn all() -> &'static [Self] {
        ALL_RACE_CATEGORIES
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Marathon => "Marathon",
            Self::Ultra => "Ultra",
            Self::FiveK => "FiveK",
            Self::TenK => "TenK",
            Self::HalfMarathon => "HalfMarathon",
        }
    }
}

impl std::fmt::Display for RaceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RaceCategory {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_category(s)
    }
}

// ── Address ─────────────────────────────────────────────────────────────────

/// A street address owned by exactly one club or race.
///
/// Has no identity of its own: it is created, updated and deleted together
/// with its owner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street: Option<String>,
    pub city: String,
    /// Two-letter state code (e.g., "NC"), not the full state name.
    pub state: String,
    #[serde(default)]
    pub zip_code: Option<i32>,
}

// ── Club ────────────────────────────────────────────────────────────────────

/// A running club as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Club {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub category: ClubCategory,
    /// Creating user, if any. Referenced, not owned.
    pub app_user_id: Option<String>,
    pub address: Address,
}

/// A club that has not been stored yet; the store assigns its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewClub {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    pub category: ClubCategory,
    #[serde(default)]
    pub app_user_id: Option<String>,
    pub address: Address,
}

impl Club {
    pub fn from_new(id: i64, new: NewClub) -> Self {
        Self {
            id,
            title: new.title,
            description: new.description,
            image: new.image,
            category: new.category,
            app_user_id: new.app_user_id,
            address: new.address,
        }
    }
}

// ── Race ────────────────────────────────────────────────────────────────────

/// A race event as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Race {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub category: RaceCategory,
    pub start_time: Option<NaiveDateTime>,
    pub entry_fee: Option<i32>,
    pub website: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub contact: Option<String>,
    pub app_user_id: Option<String>,
    pub address: Address,
}

/// A race that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRace {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    pub category: RaceCategory,
    #[serde(default)]
    pub start_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub entry_fee: Option<i32>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub app_user_id: Option<String>,
    pub address: Address,
}

impl Race {
    pub fn from_new(id: i64, new: NewRace) -> Self {
        Self {
            id,
            title: new.title,
            description: new.description,
            image: new.image,
            category: new.category,
            start_time: new.start_time,
            entry_fee: new.entry_fee,
            website: new.website,
            twitter: new.twitter,
            facebook: new.facebook,
            contact: new.contact,
            app_user_id: new.app_user_id,
            address: new.address,
        }
    }
}

// ── Reference Data ──────────────────────────────────────────────────────────

/// A city record used for location search. The state is referenced by code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    #[serde(default)]
    pub id: i64,
    pub city_name: String,
    pub state_code: String,
    pub zip: i32,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub county: String,
}

/// A state record. Referenced by value from cities and addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    #[serde(default)]
    pub id: i64,
    pub state_name: String,
    pub state_code: String,
}

// ── Users ───────────────────────────────────────────────────────────────────

/// A registered user. Identity and credentials live with the auth provider;
/// only profile fields are kept here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppUser {
    pub id: String,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Minutes per mile.
    #[serde(default)]
    pub pace: Option<i32>,
    #[serde(default)]
    pub mileage: Option<i32>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_follows_declaration_order() {
        assert_eq!(ClubCategory::RoadRunner.index(), 0);
        assert_eq!(ClubCategory::Trail.index(), 3);
        assert_eq!(RaceCategory::Marathon.index(), 0);
        assert_eq!(RaceCategory::HalfMarathon.index(), 4);
    }

    #[test]
    fn from_index_round_trip() {
        for &c in ClubCategory::all() {
            assert_eq!(ClubCategory::from_index(c.index()), Some(c));
        }
        for &c in RaceCategory::all() {
            assert_eq!(RaceCategory::from_index(c.index()), Some(c));
        }
    }

    #[test]
    fn from_index_out_of_range() {
        assert_eq!(ClubCategory::from_index(-1), None);
        assert_eq!(ClubCategory::from_index(5), None);
        assert_eq!(RaceCategory::from_index(i32::MIN), None);
    }

    #[test]
    fn sentinel_means_no_filter() {
        assert_eq!(category_filter::<ClubCategory>(NO_CATEGORY), Ok(None));
        assert_eq!(
            category_filter::<RaceCategory>(0),
            Ok(Some(RaceCategory::Marathon))
        );
        assert!(category_filter::<ClubCategory>(-2).is_err());
        assert!(category_filter::<ClubCategory>(42).is_err());
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("trail".parse::<ClubCategory>(), Ok(ClubCategory::Trail));
        assert_eq!("FIVEK".parse::<RaceCategory>(), Ok(RaceCategory::FiveK));
        assert!("Sprint".parse::<RaceCategory>().is_err());
    }
}
