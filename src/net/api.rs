//! REST endpoints for the blog backend.
//!
//! Client-side (hydrate): real HTTP calls through [`ApiClient`], which
//! attaches the bearer token at dispatch time. Server-side (SSR): stubs
//! returning [`ApiError::Unavailable`] since the API is only meaningful in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every endpoint returns `Result<_, ApiError>` so callers can branch on
//! status codes (401 redirects, 400 field messages) without string matching.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::client::ApiClient;
use super::client::ApiError;
#[cfg(feature = "hydrate")]
use super::client::{read_json, read_ok, send};
use super::types::{Article, Comment, LoginResponse, Paginated, PublicProfile, RegisterResponse, User, UserProfile};

#[cfg(any(test, feature = "hydrate"))]
fn user_path(id: i64) -> String {
    format!("/users/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn profile_by_username_path(username: &str) -> String {
    format!("/users/by-username/{username}")
}

#[cfg(any(test, feature = "hydrate"))]
fn post_path(id: i64) -> String {
    format!("/posts/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn comments_path(post_id: i64) -> String {
    format!("/comments/{post_id}")
}

#[cfg(feature = "hydrate")]
fn encode_path_component(raw: &str) -> String {
    String::from(js_sys::encode_uri_component(raw))
}

#[cfg(feature = "hydrate")]
fn build_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

impl ApiClient {
    /// Sign in via `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// A rejected login surfaces as [`ApiError::Status`] with status 401.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::json!({ "email": email, "password": password });
            let request = self.post("/auth/login").json(&payload).map_err(build_error)?;
            read_json(send(request).await?).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(ApiError::Unavailable)
        }
    }

    /// Create an account via `POST /auth/register`.
    ///
    /// # Errors
    ///
    /// A name or email that is already taken surfaces as status 400.
    pub async fn register(
        &self,
        name: &str,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<RegisterResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::json!({
                "name": name,
                "username": username,
                "email": email,
                "password": password,
            });
            let request = self.post("/auth/register").json(&payload).map_err(build_error)?;
            read_json(send(request).await?).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name, username, email, password);
            Err(ApiError::Unavailable)
        }
    }

    /// Fetch the signed-in account via `GET /users/me` (bearer).
    ///
    /// # Errors
    ///
    /// Status 401 when the token is missing or no longer valid.
    pub async fn fetch_me(&self) -> Result<User, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            read_json(send(self.get("/users/me").build().map_err(build_error)?).await?).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    /// Fetch a public author record via `GET /users/{id}`.
    ///
    /// # Errors
    ///
    /// Status 404 for an unknown user.
    pub async fn fetch_user(&self, id: i64) -> Result<UserProfile, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            read_json(send(self.get(&user_path(id)).build().map_err(build_error)?).await?).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(ApiError::Unavailable)
        }
    }

    /// Fetch a public profile with its posts via `GET /users/by-username/{username}`.
    ///
    /// # Errors
    ///
    /// Status 404 for an unknown handle.
    pub async fn fetch_profile(&self, username: &str, page: u32, limit: u32) -> Result<PublicProfile, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let path = profile_by_username_path(&encode_path_component(username));
            let page = page.to_string();
            let limit = limit.to_string();
            let request = self
                .get(&path)
                .query([("page", page.as_str()), ("limit", limit.as_str())])
                .build()
                .map_err(build_error)?;
            read_json(send(request).await?).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username, page, limit);
            Err(ApiError::Unavailable)
        }
    }

    /// Change the account password via `PATCH /users/password` (bearer).
    ///
    /// # Errors
    ///
    /// Status 400 on a rejected confirmation, 401 for a wrong current
    /// password or expired session, 404 for a missing account.
    pub async fn update_password(&self, current: &str, new: &str, confirm: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::json!({
                "currentPassword": current,
                "newPassword": new,
                "confirmPassword": confirm,
            });
            let request = self.patch("/users/password").json(&payload).map_err(build_error)?;
            read_ok(send(request).await?).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (current, new, confirm);
            Err(ApiError::Unavailable)
        }
    }

    /// Fetch the recommended feed via `GET /posts/recommended`.
    ///
    /// # Errors
    ///
    /// Transport and decoding failures only; the endpoint is public.
    pub async fn recommended_posts(&self, page: u32, limit: u32) -> Result<Paginated<Article>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let page = page.to_string();
            let limit = limit.to_string();
            let request = self
                .get("/posts/recommended")
                .query([("page", page.as_str()), ("limit", limit.as_str())])
                .build()
                .map_err(build_error)?;
            read_json(send(request).await?).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (page, limit);
            Err(ApiError::Unavailable)
        }
    }

    /// Fetch the most-liked sidebar list via `GET /posts/most-liked`.
    ///
    /// # Errors
    ///
    /// Transport and decoding failures only; the endpoint is public.
    pub async fn most_liked_posts(&self, limit: u32) -> Result<Paginated<Article>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let limit = limit.to_string();
            let request =
                self.get("/posts/most-liked").query([("limit", limit.as_str())]).build().map_err(build_error)?;
            read_json(send(request).await?).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = limit;
            Err(ApiError::Unavailable)
        }
    }

    /// Search posts by title via `GET /posts/search`.
    ///
    /// # Errors
    ///
    /// Transport and decoding failures only; the endpoint is public.
    pub async fn search_posts(&self, query: &str, page: u32, limit: u32) -> Result<Paginated<Article>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let page = page.to_string();
            let limit = limit.to_string();
            let request = self
                .get("/posts/search")
                .query([("query", query), ("page", page.as_str()), ("limit", limit.as_str())])
                .build()
                .map_err(build_error)?;
            read_json(send(request).await?).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (query, page, limit);
            Err(ApiError::Unavailable)
        }
    }

    /// Fetch the signed-in user's posts via `GET /posts/my-posts` (bearer).
    ///
    /// # Errors
    ///
    /// Status 401 when the session has expired.
    pub async fn my_posts(&self, page: u32, limit: u32) -> Result<Paginated<Article>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let page = page.to_string();
            let limit = limit.to_string();
            let request = self
                .get("/posts/my-posts")
                .query([("page", page.as_str()), ("limit", limit.as_str())])
                .build()
                .map_err(build_error)?;
            read_json(send(request).await?).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (page, limit);
            Err(ApiError::Unavailable)
        }
    }

    /// Fetch one post via `GET /posts/{id}`.
    ///
    /// # Errors
    ///
    /// Status 404 for an unknown post.
    pub async fn fetch_post(&self, id: i64) -> Result<Article, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            read_json(send(self.get(&post_path(id)).build().map_err(build_error)?).await?).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(ApiError::Unavailable)
        }
    }

    /// Delete a post via `DELETE /posts/{id}` (bearer).
    ///
    /// # Errors
    ///
    /// Status 401 when signed out, 403 for someone else's post.
    pub async fn delete_post(&self, id: i64) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            read_ok(send(self.delete(&post_path(id)).build().map_err(build_error)?).await?).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(ApiError::Unavailable)
        }
    }

    /// Fetch all comments on a post via `GET /comments/{postId}`.
    ///
    /// # Errors
    ///
    /// Transport and decoding failures only; the endpoint is public.
    pub async fn fetch_comments(&self, post_id: i64) -> Result<Vec<Comment>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            read_json(send(self.get(&comments_path(post_id)).build().map_err(build_error)?).await?).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = post_id;
            Err(ApiError::Unavailable)
        }
    }

    /// Add a comment via `POST /comments/{postId}` (bearer).
    ///
    /// # Errors
    ///
    /// Status 401 when signed out.
    pub async fn post_comment(&self, post_id: i64, content: &str) -> Result<Comment, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::json!({ "content": content });
            let request = self.post(&comments_path(post_id)).json(&payload).map_err(build_error)?;
            read_json(send(request).await?).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (post_id, content);
            Err(ApiError::Unavailable)
        }
    }

    /// Delete a comment via `DELETE /comments/{commentId}` (bearer).
    ///
    /// # Errors
    ///
    /// Status 401 when signed out, 403 for someone else's comment.
    pub async fn delete_comment(&self, id: i64) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            read_ok(send(self.delete(&comments_path(id)).build().map_err(build_error)?).await?).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(ApiError::Unavailable)
        }
    }
}

// Multipart endpoints take a prepared `FormData`, so they only exist in the
// browser build. The browser sets the multipart boundary itself; no
// Content-Type header here.
#[cfg(feature = "hydrate")]
impl ApiClient {
    /// Create a post via `POST /posts` (bearer, multipart).
    ///
    /// # Errors
    ///
    /// Status 400 carries per-field validation messages.
    pub async fn create_post(&self, form: web_sys::FormData) -> Result<Article, ApiError> {
        let request = self.post("/posts").body(form).map_err(build_error)?;
        read_json(send(request).await?).await
    }

    /// Update a post via `PATCH /posts/{id}` (bearer, multipart).
    ///
    /// # Errors
    ///
    /// Status 400 carries per-field validation messages; 403 for someone
    /// else's post.
    pub async fn update_post(&self, id: i64, form: web_sys::FormData) -> Result<Article, ApiError> {
        let request = self.patch(&post_path(id)).body(form).map_err(build_error)?;
        read_json(send(request).await?).await
    }

    /// Update name, headline, and avatar via `PATCH /users/profile`
    /// (bearer, multipart).
    ///
    /// # Errors
    ///
    /// Status 401 when the session has expired.
    pub async fn update_profile(&self, form: web_sys::FormData) -> Result<User, ApiError> {
        let request = self.patch("/users/profile").body(form).map_err(build_error)?;
        read_json(send(request).await?).await
    }
}
