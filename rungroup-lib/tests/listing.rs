use rungroup_catalog::types::*;
use rungroup_db::*;
use rungroup_lib::*;

fn club_in(title: &str, city: &str, state: &str, category: ClubCategory) -> NewClub {
    NewClub {
        title: title.to_string(),
        description: "Description".to_string(),
        image: None,
        category,
        app_user_id: None,
        address: Address {
            street: None,
            city: city.to_string(),
            state: state.to_string(),
            zip_code: None,
        },
    }
}

fn race(title: &str, category: RaceCategory) -> NewRace {
    NewRace {
        title: title.to_string(),
        description: String::new(),
        image: None,
        category,
        start_time: None,
        entry_fee: None,
        website: None,
        twitter: None,
        facebook: None,
        contact: None,
        app_user_id: None,
        address: Address::default(),
    }
}

#[test]
fn empty_race_catalog_reports_one_page() {
    let conn = open_memory().unwrap();
    let repo = RaceRepository::new(&conn);

    let page = list_page(&repo, 1, 6, NO_CATEGORY).unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.total, 0);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.category, NO_CATEGORY);
}

#[test]
fn club_pages_follow_insertion_order() {
    let conn = open_memory().unwrap();
    for i in 0..10 {
        insert_club(
            &conn,
            &club_in(&format!("Club{i}"), "Charlotte", "NC", ClubCategory::City),
        )
        .unwrap();
    }
    let repo = ClubRepository::new(&conn);

    let second = list_page(&repo, 2, 3, NO_CATEGORY).unwrap();
    let titles: Vec<_> = second.items.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Club3", "Club4", "Club5"]);
    assert_eq!(second.total, 10);
    assert_eq!(second.total_pages, 4);

    let last = list_page(&repo, 4, 3, NO_CATEGORY).unwrap();
    assert_eq!(last.items.len(), 1);
    assert_eq!(last.items[0].title, "Club9");
}

#[test]
fn race_category_page() {
    let conn = open_memory().unwrap();
    for i in 1..=7 {
        insert_race(&conn, &race(&format!("Marathon{i}"), RaceCategory::Marathon)).unwrap();
        insert_race(&conn, &race(&format!("FiveK{i}"), RaceCategory::FiveK)).unwrap();
    }
    let repo = RaceRepository::new(&conn);

    let page = list_page(&repo, 2, 6, RaceCategory::Marathon.index()).unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].title, "Marathon7");
    assert_eq!(page.total, 7);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.category, RaceCategory::Marathon.index());
}

#[test]
fn invalid_page_is_rejected() {
    let conn = open_memory().unwrap();
    let repo = RaceRepository::new(&conn);
    assert!(matches!(
        list_page(&repo, 0, 6, NO_CATEGORY),
        Err(ListingError::InvalidPage { .. })
    ));
    assert!(matches!(
        list_page(&repo, 1, 0, NO_CATEGORY),
        Err(ListingError::InvalidPage { .. })
    ));
}

#[test]
fn clubs_by_state_name() {
    let conn = open_memory().unwrap();
    insert_club(
        &conn,
        &club_in("Hoosier Striders", "Indianapolis", "IN", ClubCategory::RoadRunner),
    )
    .unwrap();
    insert_club(&conn, &club_in("Tar Heels", "Charlotte", "NC", ClubCategory::City)).unwrap();
    let repo = ClubRepository::new(&conn);

    let found = list_by_state_name(&repo, "INDIANA").unwrap();
    assert_eq!(found.items.len(), 1);
    assert_eq!(found.items[0].title, "Hoosier Striders");
    assert_eq!(found.state.as_deref(), Some("INDIANA"));
    assert!(!found.no_club_warning);

    let unknown = list_by_state_name(&repo, "NOWHERE").unwrap();
    assert!(unknown.items.is_empty());
    assert!(unknown.state.is_none());
    assert!(unknown.no_club_warning);

    let empty = list_by_state_name(&repo, "Texas").unwrap();
    assert!(empty.items.is_empty());
    assert!(empty.state.is_none());
    assert!(empty.no_club_warning);
}

#[test]
fn clubs_by_city_substring() {
    let conn = open_memory().unwrap();
    insert_club(&conn, &club_in("A", "Charlotte", "NC", ClubCategory::City)).unwrap();
    insert_club(&conn, &club_in("B", "North Charlotte", "NC", ClubCategory::Trail)).unwrap();
    let repo = ClubRepository::new(&conn);

    let listing = list_by_city(&repo, "Charlotte").unwrap();
    assert_eq!(listing.items.len(), 2);
    assert!(!listing.no_club_warning);
}
