//! Wire DTOs for the blog REST API.
//!
//! DESIGN
//! ======
//! Field names serde-map to the API's camelCase JSON. Fields the backend
//! omits on some payload variants are `Option` with a default, so one type
//! covers both the list and detail shapes of a resource.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in account as returned by `GET /users/me` and profile updates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Account email address.
    pub email: String,
    /// URL-safe handle derived from the name at registration.
    pub username: String,
    /// Short self-description shown on the profile page.
    #[serde(default)]
    pub headline: Option<String>,
    /// Avatar image URL, if one has been uploaded.
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Post or comment author as embedded in post payloads.
///
/// The backend trims this object differently per endpoint; only `id` and
/// `name` are always present.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    /// Unique user identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Handle used for profile links.
    #[serde(default)]
    pub username: Option<String>,
    /// Email address, when the endpoint includes it.
    #[serde(default)]
    pub email: Option<String>,
    /// Short self-description.
    #[serde(default)]
    pub headline: Option<String>,
    /// Avatar image URL.
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// A blog post, in both list items and the detail payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Unique post identifier.
    pub id: i64,
    /// Post title.
    pub title: String,
    /// Markdown body.
    pub content: String,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Cover image URL.
    #[serde(default)]
    pub image_url: Option<String>,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
    /// Like count.
    #[serde(default)]
    pub likes: i64,
    /// Comment count.
    #[serde(default)]
    pub comments: i64,
    /// Post author.
    pub author: Author,
}

/// A comment on a post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Unique comment identifier.
    pub id: i64,
    /// Comment body.
    pub content: String,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
    /// Comment author.
    pub author: Author,
}

/// Public author lookup payload from `GET /users/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Unique user identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Short self-description.
    #[serde(default)]
    pub headline: Option<String>,
    /// Avatar image URL.
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// By-username profile payload carrying the author's own posts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicProfile {
    /// Unique user identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Short self-description.
    #[serde(default)]
    pub headline: Option<String>,
    /// Avatar image URL.
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// First page of the author's posts.
    pub posts: Paginated<Article>,
}

/// Envelope for paginated list endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    /// Records in this slice.
    pub data: Vec<T>,
    /// Total records matching the query.
    pub total: i64,
    /// 1-based page number of this slice.
    pub page: u32,
    /// Last available page for the query.
    pub last_page: u32,
}

/// Token payload from `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Opaque bearer credential for subsequent requests.
    pub token: String,
}

/// Account payload from `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponse {
    /// Unique user identifier.
    pub id: i64,
    /// Registered email address.
    pub email: String,
    /// Derived handle.
    pub username: String,
}
