//! Client-side shared state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` is the single source of truth for authentication; pages and
//! components reach it through the Leptos context.

pub mod session;
