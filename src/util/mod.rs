//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic to improve reuse and testability.

pub mod date;
pub mod guard;
pub mod image_url;
pub mod markdown;
pub mod storage;
pub mod validate;
