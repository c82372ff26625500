//! Networking modules for the blog REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` owns the authorized request plumbing, `api` maps every
//! endpoint onto it, and `types` defines the shared wire schema.

pub mod api;
pub mod client;
pub mod types;
