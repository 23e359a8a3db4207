use rungroup_catalog::DEFAULT_AVATAR;
use rungroup_catalog::types::*;
use rungroup_db::*;
use rungroup_lib::*;

fn user(id: &str, name: &str, image: Option<&str>) -> AppUser {
    AppUser {
        id: id.to_string(),
        user_name: Some(name.to_string()),
        city: Some("City1".to_string()),
        state: Some("ST".to_string()),
        pace: Some(5),
        mileage: Some(10),
        profile_image_url: image.map(str::to_string),
        ..Default::default()
    }
}

fn owned_club(title: &str, owner: &str) -> NewClub {
    NewClub {
        title: title.to_string(),
        description: String::new(),
        image: None,
        category: ClubCategory::City,
        app_user_id: Some(owner.to_string()),
        address: Address::default(),
    }
}

fn owned_race(title: &str, owner: &str) -> NewRace {
    NewRace {
        title: title.to_string(),
        description: String::new(),
        image: None,
        category: RaceCategory::TenK,
        start_time: None,
        entry_fee: None,
        website: None,
        twitter: None,
        facebook: None,
        contact: None,
        app_user_id: Some(owner.to_string()),
        address: Address::default(),
    }
}

#[test]
fn directory_resolves_default_avatar() {
    let conn = open_memory().unwrap();
    upsert_user(&conn, &user("1", "user1", None)).unwrap();
    upsert_user(&conn, &user("2", "user2", Some("img.jpg"))).unwrap();

    let users = list_users(&conn).unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].user_name.as_deref(), Some("user1"));
    assert_eq!(users[0].profile_image_url, DEFAULT_AVATAR);
    assert_eq!(users[1].profile_image_url, "img.jpg");
}

#[test]
fn user_detail_present_and_missing() {
    let conn = open_memory().unwrap();
    upsert_user(&conn, &user("1", "user1", None)).unwrap();

    let detail = user_detail(&conn, "1").unwrap().unwrap();
    assert_eq!(detail.user_name.as_deref(), Some("user1"));
    assert_eq!(detail.profile_image_url, "/img/avatar-male-4.jpg");
    assert!(user_detail(&conn, "missing").unwrap().is_none());
}

#[test]
fn dashboard_lists_only_own_entities() {
    let conn = open_memory().unwrap();
    upsert_user(&conn, &user("user1", "one", None)).unwrap();
    upsert_user(&conn, &user("user2", "two", None)).unwrap();
    insert_club(&conn, &owned_club("Mine", "user1")).unwrap();
    insert_club(&conn, &owned_club("Theirs", "user2")).unwrap();
    insert_race(&conn, &owned_race("My Race", "user1")).unwrap();

    let clubs = ClubRepository::new(&conn);
    let races = RaceRepository::new(&conn);

    let dashboard = user_dashboard(&clubs, &races, "user1").unwrap();
    assert_eq!(dashboard.clubs.len(), 1);
    assert_eq!(dashboard.clubs[0].title, "Mine");
    assert_eq!(dashboard.races.len(), 1);

    let empty = user_dashboard(&clubs, &races, "nobody").unwrap();
    assert!(empty.clubs.is_empty());
    assert!(empty.races.is_empty());
}

#[test]
fn edit_profile_updates_only_given_fields() {
    let conn = open_memory().unwrap();
    upsert_user(&conn, &user("user1", "one", Some("old.jpg"))).unwrap();

    let edit = ProfileEdit {
        pace: Some(8),
        city: Some("Raleigh".to_string()),
        ..Default::default()
    };
    let updated = edit_profile(&conn, "user1", edit).unwrap().unwrap();
    assert_eq!(updated.pace, Some(8));

    let stored = get_user(&conn, "user1").unwrap().unwrap();
    assert_eq!(stored.pace, Some(8));
    assert_eq!(stored.city.as_deref(), Some("Raleigh"));
    assert_eq!(stored.mileage, Some(10));
    assert_eq!(stored.profile_image_url.as_deref(), Some("old.jpg"));
}

#[test]
fn edit_profile_missing_user_is_none() {
    let conn = open_memory().unwrap();
    let result = edit_profile(&conn, "ghost", ProfileEdit::default()).unwrap();
    assert!(result.is_none());
}
