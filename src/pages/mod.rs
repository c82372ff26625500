//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (params, fetches, guards)
//! and delegates rendering details to `components`.

pub mod detail;
pub mod home;
pub mod my_profile;
pub mod profile;
pub mod search;
pub mod sign_in;
pub mod sign_up;
pub mod write_post;
