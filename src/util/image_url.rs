//! Image URL normalization for avatars and post covers.
//!
//! The API returns a mix of absolute URLs, origin-relative upload paths, and
//! the occasional mangled `https//` scheme. Everything funnels through here
//! before landing in an `src` attribute.

#[cfg(test)]
#[path = "image_url_test.rs"]
mod image_url_test;

use crate::config::API_BASE_URL;

/// Placeholder shown when a user has no avatar.
pub const DEFAULT_AVATAR: &str = "/default-avatar.svg";

/// Resolve an avatar URL, falling back to the default placeholder.
pub fn avatar_url(url: Option<&str>) -> String {
    match url {
        Some(url) if !url.is_empty() => normalize_image_url(url),
        _ => DEFAULT_AVATAR.to_owned(),
    }
}

/// Normalize an image URL from an API payload.
///
/// Repairs the backend's `https//` scheme typo, passes absolute URLs
/// through, and resolves relative upload paths against the API origin.
pub fn normalize_image_url(url: &str) -> String {
    if let Some(rest) = url.strip_prefix("https//") {
        return format!("https://{rest}");
    }
    if url.starts_with("http://") || url.starts_with("https://") {
        return url.to_owned();
    }
    format!("{API_BASE_URL}{url}")
}
