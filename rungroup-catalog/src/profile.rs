//! Profile image fallback.

/// Avatar shown for users who never uploaded a profile photo.
pub const DEFAULT_AVATAR: &str = "/img/avatar-male-4.jpg";

/// Return the stored profile image URL, or [`DEFAULT_AVATAR`] when there is none.
pub fn resolve_profile_image(url: Option<&str>) -> String {
    url.unwrap_or(DEFAULT_AVATAR).to_string()
}
