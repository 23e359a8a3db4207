use rungroup_catalog::types::City;
use rungroup_db::*;

fn city(name: &str, state_code: &str, zip: i32) -> City {
    City {
        id: 0,
        city_name: name.to_string(),
        state_code: state_code.to_string(),
        zip,
        latitude: 1.0,
        longitude: 2.0,
        county: "County".to_string(),
    }
}

fn seeded() -> rusqlite::Connection {
    let conn = open_memory().unwrap();
    insert_city(&conn, &city("Alpha", "TS", 12345)).unwrap();
    insert_city(&conn, &city("Beta", "TS", 12346)).unwrap();
    insert_city(&conn, &city("Gamma", "OT", 22345)).unwrap();
    conn
}

fn names(cities: &[City]) -> Vec<&str> {
    cities.iter().map(|c| c.city_name.as_str()).collect()
}

#[test]
fn zip_prefix_matches_leading_digits() {
    let conn = seeded();
    assert_eq!(names(&location_search(&conn, "12").unwrap()), vec!["Alpha", "Beta"]);
    assert_eq!(names(&location_search(&conn, "123").unwrap()), vec!["Alpha", "Beta"]);
    assert_eq!(names(&location_search(&conn, "22").unwrap()), vec!["Gamma"]);
    assert!(location_search(&conn, "9").unwrap().is_empty());
}

#[test]
fn full_zip_matches_one_city() {
    let conn = seeded();
    assert_eq!(names(&location_search(&conn, "12346").unwrap()), vec!["Beta"]);
}

#[test]
fn city_name_is_exact() {
    let conn = seeded();
    assert_eq!(names(&location_search(&conn, "Alpha").unwrap()), vec!["Alpha"]);
    assert!(location_search(&conn, "Alp").unwrap().is_empty());
    assert!(location_search(&conn, "alpha").unwrap().is_empty());
}

#[test]
fn state_code_query_compares_city_name() {
    let conn = seeded();
    assert!(location_search(&conn, "TS").unwrap().is_empty());

    // A city literally named like a state code is what matches
    insert_city(&conn, &city("TS", "OT", 33333)).unwrap();
    assert_eq!(names(&location_search(&conn, "TS").unwrap()), vec!["TS"]);
}

#[test]
fn no_match_is_empty() {
    let conn = seeded();
    assert!(location_search(&conn, "Nowhere").unwrap().is_empty());
    assert!(location_search(&conn, "").unwrap().is_empty());
}

#[test]
fn location_service_delegates() {
    let conn = seeded();
    let locations = SqliteLocations::new(&conn);
    assert_eq!(locations.search("12").unwrap().len(), 2);
    assert_eq!(
        locations.city_by_zip(22345).unwrap().map(|c| c.city_name),
        Some("Gamma".to_string())
    );
    assert!(locations.city_by_zip(99999).unwrap().is_none());
    assert_eq!(locations.cities_for_state("TS").unwrap().len(), 2);
    assert!(locations.all_states().unwrap().is_empty());
}
