//! U.S. state identifiers and full-name resolution.
//!
//! Addresses and cities carry two-letter state codes; people type full state
//! names. [`UsState`] maps between the two.

/// A U.S. state (plus the District of Columbia).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UsState {
    Alabama,
    Alaska,
    Arizona,
    Arkansas,
    California,
    Colorado,
    Connecticut,
    Delaware,
    DistrictOfColumbia,
    Florida,
    Georgia,
    Hawaii,
    Idaho,
    Illinois,
    Indiana,
    Iowa,
    Kansas,
    Kentucky,
    Louisiana,
    Maine,
    Maryland,
    Massachusetts,
    Michigan,
    Minnesota,
    Mississippi,
    Missouri,
    Montana,
    Nebraska,
    Nevada,
    NewHampshire,
    NewJersey,
    NewMexico,
    NewYork,
    NorthCarolina,
    NorthDakota,
    Ohio,
    Oklahoma,
    Oregon,
    Pennsylvania,
    RhodeIsland,
    SouthCarolina,
    SouthDakota,
    Tennessee,
    Texas,
    Utah,
    Vermont,
    Virginia,
    Washington,
    WestVirginia,
    Wisconsin,
    Wyoming,
}

/// All variants, alphabetical by name.
const ALL_STATES: &[UsState] = &[
    UsState::Alabama,
    UsState::Alaska,
    UsState::Arizona,
    UsState::Arkansas,
    UsState::California,
    UsState::Colorado,
    UsState::Connecticut,
    UsState::Delaware,
    UsState::DistrictOfColumbia,
    UsState::Florida,
    UsState::Georgia,
    UsState::Hawaii,
    UsState::Idaho,
    UsState::Illinois,
    UsState::Indiana,
    UsState::Iowa,
    UsState::Kansas,
    UsState::Kentucky,
    UsState::Louisiana,
    UsState::Maine,
    UsState::Maryland,
    UsState::Massachusetts,
    UsState::Michigan,
    UsState::Minnesota,
    UsState::Mississippi,
    UsState::Missouri,
    UsState::Montana,
    UsState::Nebraska,
    UsState::Nevada,
    UsState::NewHampshire,
    UsState::NewJersey,
    UsState::NewMexico,
    UsState::NewYork,
    UsState::NorthCarolina,
    UsState::NorthDakota,
    UsState::Ohio,
    UsState::Oklahoma,
    UsState::Oregon,
    UsState::Pennsylvania,
    UsState::RhodeIsland,
    UsState::SouthCarolina,
    UsState::SouthDakota,
    UsState::Tennessee,
    UsState::Texas,
    UsState::Utah,
    UsState::Vermont,
    UsState::Virginia,
    UsState::Washington,
    UsState::WestVirginia,
    UsState::Wisconsin,
    UsState::Wyoming,
];

impl UsState {
    /// Canonical two-letter postal code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Alabama => "AL",
            Self::Alaska => "AK",
            Self::Arizona => "AZ",
            Self::Arkansas => "AR",
            Self::California => "CA",
            Self::Colorado => "CO",
            Self::Connecticut => "CT",
            Self::Delaware => "DE",
            Self::DistrictOfColumbia => "DC",
            Self::Florida => "FL",
            Self::Georgia => "GA",
            Self::Hawaii => "HI",
            Self::Idaho => "ID",
            Self::Illinois => "IL",
            Self::Indiana => "IN",
            Self::Iowa => "IA",
            Self::Kansas => "KS",
            Self::Kentucky => "KY",
            Self::Louisiana => "LA",
            Self::Maine => "ME",
            Self::Maryland => "MD",
            Self::Massachusetts => "MA",
            Self::Michigan => "MI",
            Self::Minnesota => "MN",
            Self::Mississippi => "MS",
            Self::Missouri => "MO",
            Self::Montana => "MT",
            Self::Nebraska => "NE",
            Self::Nevada => "NV",
            Self::NewHampshire => "NH",
            Self::NewJersey => "NJ",
            Self::NewMexico => "NM",
            Self::NewYork => "NY",
            Self::NorthCarolina => "NC",
            Self::NorthDakota => "ND",
            Self::Ohio => "OH",
            Self::Oklahoma => "OK",
            Self::Oregon => "OR",
            Self::Pennsylvania => "PA",
            Self::RhodeIsland => "RI",
            Self::SouthCarolina => "SC",
            Self::SouthDakota => "SD",
            Self::Tennessee => "TN",
            Self::Texas => "TX",
            Self::Utah => "UT",
            Self::Vermont => "VT",
            Self::Virginia => "VA",
            Self::Washington => "WA",
            Self::WestVirginia => "WV",
            Self::Wisconsin => "WI",
            Self::Wyoming => "WY",
        }
    }

    /// Full display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Alabama => "Alabama",
            Self::Alaska => "Alaska",
            Self::Arizona => "Arizona",
            Self::Arkansas => "Arkansas",
            Self::California => "California",
            Self::Colorado => "Colorado",
            Self::Connecticut => "Connecticut",
            Self::Delaware => "Delaware",
            Self::DistrictOfColumbia => "District of Columbia",
            Self::Florida => "Florida",
            Self::Georgia => "Georgia",
            Self::Hawaii => "Hawaii",
            Self::Idaho => "Idaho",
            Self::Illinois => "Illinois",
            Self::Indiana => "Indiana",
            Self::Iowa => "Iowa",
            Self::Kansas => "Kansas",
            Self::Kentucky => "Kentucky",
            Self::Louisiana => "Louisiana",
            Self::Maine => "Maine",
            Self::Maryland => "Maryland",
            Self::Massachusetts => "Massachusetts",
            Self::Michigan => "Michigan",
            Self::Minnesota => "Minnesota",
            Self::Mississippi => "Mississippi",
            Self::Missouri => "Missouri",
            Self::Montana => "Montana",
            Self::Nebraska => "Nebraska",
            Self::Nevada => "Nevada",
            Self::NewHampshire => "New Hampshire",
            Self::NewJersey => "New Jersey",
            Self::NewMexico => "New Mexico",
            Self::NewYork => "New York",
            Self::NorthCarolina => "North Carolina",
            Self::NorthDakota => "North Dakota",
            Self::Ohio => "Ohio",
            Self::Oklahoma => "Oklahoma",
            Self::Oregon => "Oregon",
            Self::Pennsylvania => "Pennsylvania",
            Self::RhodeIsland => "Rhode Island",
            Self::SouthCarolina => "South Carolina",
            Self::SouthDakota => "South Dakota",
            Self::Tennessee => "Tennessee",
            Self::Texas => "Texas",
            Self::Utah => "Utah",
            Self::Vermont => "Vermont",
            Self::Virginia => "Virginia",
            Self::Washington => "Washington",
            Self::WestVirginia => "West Virginia",
            Self::Wisconsin => "Wisconsin",
            Self::Wyoming => "Wyoming",
        }
    }

    /// All 51 variants.
    pub fn all() -> &'static [UsState] {
        ALL_STATES
    }

    /// Resolve a full state name (case-insensitive, surrounding whitespace ignored).
    ///
    /// Returns `None` for anything that is not a state name, including codes.
    pub fn from_name(name: &str) -> Option<UsState> {
        let wanted = name.trim();
        ALL_STATES
            .iter()
            .copied()
            .find(|s| s.name().eq_ignore_ascii_case(wanted))
    }
}

impl std::fmt::Display for UsState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a string is not a known two-letter state code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateParseError(pub String);

impl std::fmt::Display for StateParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown state code: '{}'", self.0)
    }
}

impl std::error::Error for StateParseError {}

impl std::str::FromStr for UsState {
    type Err = StateParseError;

    /// Parse a two-letter state code (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ALL_STATES
            .iter()
            .copied()
            .find(|st| st.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| StateParseError(s.to_string()))
    }
}

/// Canonical two-letter code for a full state name, or `None` if the name is unknown.
pub fn code_for_state_name(name: &str) -> Option<&'static str> {
    UsState::from_name(name).map(|s| s.code())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_has_51_variants() {
        assert_eq!(UsState::all().len(), 51);
    }

    #[test]
    fn codes_are_unique_two_letter_uppercase() {
        let mut seen = std::collections::HashSet::new();
        for &state in UsState::all() {
            let code = state.code();
            assert_eq!(code.len(), 2, "{:?}", state);
            assert!(code.chars().all(|c| c.is_ascii_uppercase()), "{:?}", state);
            assert!(seen.insert(code), "duplicate code {}", code);
        }
    }

    #[test]
    fn uppercase_full_name_resolves() {
        assert_eq!(code_for_state_name("INDIANA"), Some("IN"));
        assert_eq!(code_for_state_name("north carolina"), Some("NC"));
        assert_eq!(code_for_state_name("  District of Columbia "), Some("DC"));
    }

    #[test]
    fn unknown_name_is_absent() {
        assert_eq!(code_for_state_name("NOWHERE"), None);
        assert_eq!(code_for_state_name(""), None);
        // Codes are not names
        assert_eq!(code_for_state_name("IN"), None);
    }

    #[test]
    fn names_round_trip() {
        for &state in UsState::all() {
            assert_eq!(UsState::from_name(state.name()), Some(state));
            assert_eq!(state.code().parse::<UsState>(), Ok(state));
        }
    }

    #[test]
    fn code_parse_is_case_insensitive() {
        assert_eq!("nc".parse::<UsState>(), Ok(UsState::NorthCarolina));
        assert!("XX".parse::<UsState>().is_err());
    }
}
