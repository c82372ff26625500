//! Build-time client configuration.
//!
//! DESIGN
//! ======
//! The API origin is baked into the bundle at compile time so the client
//! needs no runtime config fetch before its first request. The default is a
//! same-origin `/api` prefix for deployments that reverse-proxy the backend;
//! `INKPOST_API_URL` overrides it when the API lives on another host.

/// Application display name for titles and the header wordmark.
pub const APP_NAME: &str = "Inkpost";

/// Base URL every REST request (and relative image path) resolves against.
pub const API_BASE_URL: &str = match option_env!("INKPOST_API_URL") {
    Some(url) => url,
    None => "/api",
};
