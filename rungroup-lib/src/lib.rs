//! Caller-side catalog logic shared by frontends: paged listings, state and
//! city listings, dashboards, the user directory, and settings.

pub mod dashboard;
pub mod listing;
pub mod settings;
pub mod users;

pub use dashboard::{Dashboard, ProfileEdit, edit_profile, user_dashboard};
pub use listing::{
    CityListing, DEFAULT_PAGE, DEFAULT_PAGE_SIZE, IndexPage, ListingError, PageRequest,
    StateListing, list_by_city, list_by_state_name, list_page, total_pages,
};
pub use settings::{PathSource, Settings, SettingsError, resolve_db_path, resolve_page_size};
pub use users::{UserSummary, list_users, user_detail};
