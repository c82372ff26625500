//! HTTP client with session-aware request authorization.
//!
//! Client-side (hydrate): real HTTP via `gloo-net`. Server-side (SSR): every
//! call resolves to [`ApiError::Unavailable`] since the API is only reachable
//! from the browser.
//!
//! DESIGN
//! ======
//! One [`ApiClient`] is provided via context next to the [`Session`]. The
//! bearer token is read from the session at dispatch time, not captured when
//! a closure or client handle was created, so a login or logout is visible
//! to the very next request. A 401 comes back to the caller untouched; no
//! refresh or retry happens at this layer.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use thiserror::Error;

use crate::config::API_BASE_URL;
use crate::state::session::Session;

/// Error from an API request.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("request failed with status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Message from the error body, when one could be decoded.
        message: Option<String>,
    },
    /// The request never reached the server.
    #[error("network error: {0}")]
    Network(String),
    /// The response body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// API calls are unavailable outside the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// HTTP status code, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server rejected the request as unauthenticated.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Message suitable for an inline form error, preferring the server's
    /// error body over the generic description.
    pub fn message(&self) -> String {
        match self {
            Self::Status { message: Some(message), .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Shared REST client carrying the session for request authorization.
#[derive(Clone, Copy)]
pub struct ApiClient {
    session: Session,
}

impl ApiClient {
    /// Create a client over `session`.
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Resolve `path` against the configured API origin.
    pub fn url(&self, path: &str) -> String {
        format!("{API_BASE_URL}{path}")
    }

    /// `Authorization` header value for the current session, if signed in.
    ///
    /// Read untracked at dispatch time so the header reflects the token in
    /// effect when the request leaves.
    pub fn authorization(&self) -> Option<String> {
        self.session.token_untracked().map(|token| format!("Bearer {token}"))
    }

    /// The session this client authorizes against.
    pub fn session(&self) -> Session {
        self.session
    }
}

// Extract a display message from a JSON error body. The backend sends either
// `{"message": "..."}` or, for validation failures, `{"message": [...]}`.
#[cfg(any(test, feature = "hydrate"))]
fn error_message_from_body(raw: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(raw).ok()?;
    match value.get("message")? {
        serde_json::Value::String(message) => Some(message.clone()),
        serde_json::Value::Array(items) => {
            let parts: Vec<&str> = items.iter().filter_map(|item| item.as_str()).collect();
            if parts.is_empty() { None } else { Some(parts.join(", ")) }
        }
        _ => None,
    }
}

#[cfg(feature = "hydrate")]
impl ApiClient {
    pub(crate) fn get(&self, path: &str) -> gloo_net::http::RequestBuilder {
        self.authorize(gloo_net::http::Request::get(&self.url(path)))
    }

    pub(crate) fn post(&self, path: &str) -> gloo_net::http::RequestBuilder {
        self.authorize(gloo_net::http::Request::post(&self.url(path)))
    }

    pub(crate) fn patch(&self, path: &str) -> gloo_net::http::RequestBuilder {
        self.authorize(gloo_net::http::Request::patch(&self.url(path)))
    }

    pub(crate) fn delete(&self, path: &str) -> gloo_net::http::RequestBuilder {
        self.authorize(gloo_net::http::Request::delete(&self.url(path)))
    }

    fn authorize(&self, builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        match self.authorization() {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }
}

/// Send a prepared request, mapping transport failures to [`ApiError`].
#[cfg(feature = "hydrate")]
pub(crate) async fn send(request: gloo_net::http::Request) -> Result<gloo_net::http::Response, ApiError> {
    request.send().await.map_err(|err| ApiError::Network(err.to_string()))
}

/// Decode a JSON body from a successful response, or map the failure.
#[cfg(feature = "hydrate")]
pub(crate) async fn read_json<T>(resp: gloo_net::http::Response) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    if !resp.ok() {
        return Err(status_error(resp).await);
    }
    resp.json::<T>().await.map_err(|err| ApiError::Decode(err.to_string()))
}

/// Discard the body of a successful response, or map the failure.
#[cfg(feature = "hydrate")]
pub(crate) async fn read_ok(resp: gloo_net::http::Response) -> Result<(), ApiError> {
    if !resp.ok() {
        return Err(status_error(resp).await);
    }
    Ok(())
}

#[cfg(feature = "hydrate")]
async fn status_error(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let message = match resp.text().await {
        Ok(raw) => error_message_from_body(&raw),
        Err(_) => None,
    };
    ApiError::Status { status, message }
}
