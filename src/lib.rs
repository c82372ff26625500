//! # inkpost
//!
//! Leptos + WASM frontend for a markdown blog. The browser talks to the
//! blog's REST API directly; this crate owns the session model, the
//! authorized request plumbing, and every page of the UI.
//!
//! The session survives reloads through browser storage and every
//! request picks up the freshest token at dispatch time, so a logout in
//! one component is immediately visible to in-flight feature code.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
