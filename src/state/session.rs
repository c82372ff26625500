//! Authenticated-session state shared across the app.
//!
//! SYSTEM CONTEXT
//! ==============
//! Single source of truth for who is signed in: the bearer token and the
//! profile it belongs to. One [`Session`] is provided via context at the
//! root; pages and components read snapshots, and every mutation goes
//! through the methods here so the persisted copy in `localStorage` never
//! drifts from the reactive copy.
//!
//! DESIGN
//! ======
//! Login lands in two steps (token from `/auth/login`, then the profile from
//! `/users/me`), so a token briefly exists without a user. The reverse is
//! never observable: [`Session::restore`] drops a persisted user that has no
//! token, and [`Session::logout`] clears both in one signal write.
//!
//! `generation` increments on every token transition. A profile fetch
//! captures the generation it was dispatched under and lands through
//! [`Session::set_user_if_current`], which discards the response if a logout
//! or a newer login happened while it was in flight.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::net::types::User;
use crate::util::storage::StorageBackend;

/// localStorage key holding the persisted session record.
const STORAGE_KEY: &str = "inkpost_session";

/// Session snapshot observed by pages and components.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Bearer credential for API requests; absent means signed out.
    pub token: Option<String>,
    /// Profile of the signed-in user once `/users/me` has resolved.
    pub user: Option<User>,
    /// False until [`Session::restore`] has run once.
    pub resolved: bool,
    /// Incremented on every token transition; tags in-flight profile fetches.
    pub generation: u64,
}

/// Persisted subset of [`SessionState`].
#[derive(Debug, Serialize, Deserialize)]
struct PersistedSession {
    token: Option<String>,
    user: Option<User>,
}

/// Context handle for the session store.
///
/// Copyable so closures can capture it freely; all copies share one
/// underlying signal and storage backend.
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<SessionState>,
    storage: StoredValue<Arc<dyn StorageBackend>>,
}

impl Session {
    /// Create an empty, unresolved session persisting through `storage`.
    pub fn new(storage: Arc<dyn StorageBackend>) -> Self {
        Self { state: RwSignal::new(SessionState::default()), storage: StoredValue::new(storage) }
    }

    /// Rehydrate from the persisted record and mark the session resolved.
    ///
    /// A missing or unreadable record resolves to the signed-out state. A
    /// record carrying a user without a token drops the user.
    pub fn restore(&self) {
        let record = self
            .storage
            .with_value(|storage| storage.get(STORAGE_KEY))
            .and_then(|raw| serde_json::from_str::<PersistedSession>(&raw).ok());
        self.state.update(|state| {
            if let Some(record) = record {
                if record.token.is_some() {
                    state.token = record.token;
                    state.user = record.user;
                }
            }
            state.resolved = true;
        });
    }

    /// Install `token` and persist. Starts a new generation.
    pub fn set_token(&self, token: String) {
        self.state.update(|state| {
            state.token = Some(token);
            state.generation += 1;
        });
        self.persist();
    }

    /// Install the signed-in user's profile and persist.
    pub fn set_user(&self, user: User) {
        self.state.update(|state| state.user = Some(user));
        self.persist();
    }

    /// Install `user` only if `generation` is still the current one.
    ///
    /// Returns whether the profile was applied. Callers capture
    /// [`Session::generation`] when dispatching a profile fetch so a
    /// response that raced a logout or a newer login is dropped here.
    pub fn set_user_if_current(&self, generation: u64, user: User) -> bool {
        if self.generation() != generation {
            return false;
        }
        self.set_user(user);
        true
    }

    /// Clear token and user in one observable update and drop the persisted
    /// record. Starts a new generation.
    pub fn logout(&self) {
        self.state.update(|state| {
            state.token = None;
            state.user = None;
            state.generation += 1;
        });
        self.storage.with_value(|storage| storage.remove(STORAGE_KEY));
    }

    /// Reactive snapshot.
    pub fn get(&self) -> SessionState {
        self.state.get()
    }

    /// Snapshot without subscribing.
    pub fn get_untracked(&self) -> SessionState {
        self.state.get_untracked()
    }

    /// Current token without subscribing; read at request-dispatch time.
    pub fn token_untracked(&self) -> Option<String> {
        self.state.with_untracked(|state| state.token.clone())
    }

    /// Signed-in user without subscribing.
    pub fn user_untracked(&self) -> Option<User> {
        self.state.with_untracked(|state| state.user.clone())
    }

    /// Current generation without subscribing.
    pub fn generation(&self) -> u64 {
        self.state.with_untracked(|state| state.generation)
    }

    fn persist(&self) {
        let record = self
            .state
            .with_untracked(|state| PersistedSession { token: state.token.clone(), user: state.user.clone() });
        match serde_json::to_string(&record) {
            Ok(raw) => self.storage.with_value(|storage| storage.set(STORAGE_KEY, &raw)),
            Err(err) => leptos::logging::warn!("session persist failed: {err}"),
        }
    }
}
