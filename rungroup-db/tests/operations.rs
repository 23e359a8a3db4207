use chrono::NaiveDate;
use rungroup_catalog::types::*;
use rungroup_catalog::SeedData;
use rungroup_db::queries::get;
use rungroup_db::*;

fn test_address(city: &str, state: &str) -> Address {
    Address {
        street: Some("123 Main St".to_string()),
        city: city.to_string(),
        state: state.to_string(),
        zip_code: Some(12345),
    }
}

fn test_club(title: &str) -> NewClub {
    NewClub {
        title: title.to_string(),
        description: "Description".to_string(),
        image: Some("image.jpg".to_string()),
        category: ClubCategory::City,
        app_user_id: None,
        address: test_address("Charlotte", "NC"),
    }
}

fn test_race(title: &str) -> NewRace {
    NewRace {
        title: title.to_string(),
        description: "Test Description".to_string(),
        image: None,
        category: RaceCategory::Marathon,
        start_time: NaiveDate::from_ymd_opt(2023, 5, 1).and_then(|d| d.and_hms_opt(8, 0, 0)),
        entry_fee: Some(50),
        website: Some("https://raceone.com".to_string()),
        twitter: Some("@raceone".to_string()),
        facebook: None,
        contact: Some("contact@raceone.com".to_string()),
        app_user_id: None,
        address: test_address("NYC", "NY"),
    }
}

fn address_count(conn: &rusqlite::Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM addresses", [], |row| row.get(0))
        .unwrap()
}

#[test]
fn insert_and_get_club() {
    let conn = open_memory().unwrap();
    let id = insert_club(&conn, &test_club("Test Club")).unwrap();

    let club: Club = get(&conn, id).unwrap().unwrap();
    assert_eq!(club.id, id);
    assert_eq!(club.title, "Test Club");
    assert_eq!(club.category, ClubCategory::City);
    assert_eq!(club.address.city, "Charlotte");
    assert_eq!(club.address.zip_code, Some(12345));
}

#[test]
fn ids_ascend_with_insertion() {
    let conn = open_memory().unwrap();
    let a = insert_club(&conn, &test_club("A")).unwrap();
    let b = insert_club(&conn, &test_club("B")).unwrap();
    delete_club(&conn, b).unwrap();
    let c = insert_club(&conn, &test_club("C")).unwrap();
    assert!(a < b);
    assert!(b < c, "ids are never reused");
}

#[test]
fn get_missing_club_is_none() {
    let conn = open_memory().unwrap();
    let club: Option<Club> = get(&conn, 99).unwrap();
    assert!(club.is_none());
}

#[test]
fn update_club_and_address() {
    let conn = open_memory().unwrap();
    let id = insert_club(&conn, &test_club("Old")).unwrap();
    let mut club: Club = get(&conn, id).unwrap().unwrap();
    club.title = "Updated Title".to_string();
    club.category = ClubCategory::Trail;
    club.address.city = "Raleigh".to_string();

    update_club(&conn, &club).unwrap();

    let stored: Club = get(&conn, id).unwrap().unwrap();
    assert_eq!(stored.title, "Updated Title");
    assert_eq!(stored.category, ClubCategory::Trail);
    assert_eq!(stored.address.city, "Raleigh");
    assert_eq!(address_count(&conn), 1);
}

#[test]
fn update_missing_club_is_not_found() {
    let conn = open_memory().unwrap();
    let club = Club::from_new(42, test_club("Ghost"));
    let result = update_club(&conn, &club);
    assert!(matches!(result, Err(OperationError::NotFound { .. })));
}

#[test]
fn delete_club_removes_its_address() {
    let conn = open_memory().unwrap();
    let keep = insert_club(&conn, &test_club("Keep")).unwrap();
    let gone = insert_club(&conn, &test_club("Gone")).unwrap();
    assert_eq!(address_count(&conn), 2);

    delete_club(&conn, gone).unwrap();

    assert!(get::<Club>(&conn, gone).unwrap().is_none());
    assert!(get::<Club>(&conn, keep).unwrap().is_some());
    assert_eq!(address_count(&conn), 1);
}

#[test]
fn delete_missing_club_is_not_found() {
    let conn = open_memory().unwrap();
    let result = delete_club(&conn, 7);
    assert!(matches!(result, Err(OperationError::NotFound { .. })));
}

#[test]
fn insert_and_get_race() {
    let conn = open_memory().unwrap();
    let id = insert_race(&conn, &test_race("Race1")).unwrap();

    let race: Race = get(&conn, id).unwrap().unwrap();
    assert_eq!(race.title, "Race1");
    assert_eq!(race.category, RaceCategory::Marathon);
    assert_eq!(race.entry_fee, Some(50));
    assert_eq!(race.twitter.as_deref(), Some("@raceone"));
    assert_eq!(
        race.start_time.map(|t| t.to_string()),
        Some("2023-05-01 08:00:00".to_string())
    );
    assert_eq!(race.address.state, "NY");
}

#[test]
fn update_and_delete_race() {
    let conn = open_memory().unwrap();
    let id = insert_race(&conn, &test_race("Old")).unwrap();
    let mut race: Race = get(&conn, id).unwrap().unwrap();
    race.title = "New".to_string();
    race.category = RaceCategory::HalfMarathon;
    update_race(&conn, &race).unwrap();

    let stored: Race = get(&conn, id).unwrap().unwrap();
    assert_eq!(stored.title, "New");
    assert_eq!(stored.category, RaceCategory::HalfMarathon);

    delete_race(&conn, id).unwrap();
    assert!(get::<Race>(&conn, id).unwrap().is_none());
    assert_eq!(address_count(&conn), 0);
}

#[test]
fn unknown_creator_violates_foreign_key() {
    let conn = open_memory().unwrap();
    let mut club = test_club("Orphan");
    club.app_user_id = Some("nobody".to_string());

    let result = insert_club(&conn, &club);
    assert!(matches!(result, Err(OperationError::Sqlite(_))));
    // The address insert rolled back with the club
    assert_eq!(address_count(&conn), 0);
}

#[test]
fn upsert_and_update_user() {
    let conn = open_memory().unwrap();
    let mut user = AppUser {
        id: "user1".to_string(),
        pace: Some(10),
        ..Default::default()
    };
    upsert_user(&conn, &user).unwrap();

    user.pace = Some(8);
    update_user(&conn, &user).unwrap();

    let stored = get_user(&conn, "user1").unwrap().unwrap();
    assert_eq!(stored.pace, Some(8));
}

#[test]
fn update_missing_user_is_not_found() {
    let conn = open_memory().unwrap();
    let user = AppUser {
        id: "ghost".to_string(),
        ..Default::default()
    };
    assert!(matches!(
        update_user(&conn, &user),
        Err(OperationError::NotFound { .. })
    ));
}

#[test]
fn upsert_state_is_idempotent() {
    let conn = open_memory().unwrap();
    let state = State {
        id: 0,
        state_name: "North Carolina".to_string(),
        state_code: "NC".to_string(),
    };
    upsert_state(&conn, &state).unwrap();
    upsert_state(&conn, &state).unwrap();
    assert_eq!(all_states(&conn).unwrap().len(), 1);
}

#[test]
fn seed_inserts_everything() {
    let conn = open_memory().unwrap();
    let mut club = test_club("Seeded");
    club.app_user_id = Some("user1".to_string());
    let seed = SeedData {
        states: vec![State {
            id: 0,
            state_name: "North Carolina".to_string(),
            state_code: "NC".to_string(),
        }],
        cities: vec![City {
            id: 0,
            city_name: "Charlotte".to_string(),
            state_code: "NC".to_string(),
            zip: 28202,
            latitude: 35.22,
            longitude: -80.84,
            county: "Mecklenburg".to_string(),
        }],
        users: vec![AppUser {
            id: "user1".to_string(),
            ..Default::default()
        }],
        clubs: vec![club],
        races: vec![test_race("Seeded Race")],
    };

    let stats = seed_from_catalog(&conn, &seed).unwrap();
    assert_eq!(stats.states, 1);
    assert_eq!(stats.cities, 1);
    assert_eq!(stats.users, 1);
    assert_eq!(stats.clubs, 1);
    assert_eq!(stats.races, 1);

    let totals = catalog_stats(&conn).unwrap();
    assert_eq!(totals.clubs, 1);
    assert_eq!(totals.races, 1);
    assert_eq!(totals.cities, 1);
}

#[test]
fn failed_seed_leaves_store_untouched() {
    let conn = open_memory().unwrap();
    let mut club = test_club("Bad");
    club.app_user_id = Some("missing".to_string());
    let seed = SeedData {
        clubs: vec![test_club("Good"), club],
        ..Default::default()
    };

    assert!(seed_from_catalog(&conn, &seed).is_err());
    assert_eq!(catalog_stats(&conn).unwrap().clubs, 0);
}
