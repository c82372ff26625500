//! Session-gated view guard for signed-in-only pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected pages install this guard on mount. Until the session has
//! resolved from storage the page renders nothing and no redirect fires;
//! once resolved it either renders or navigates to `/sign-in` exactly once.
//! A logout while the page stays mounted takes the same redirect path.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{Session, SessionState};

/// What a protected view should do for the current session snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionGate {
    /// Session not yet resolved from storage: render nothing, no redirect.
    Unknown,
    /// Signed in: render the protected content.
    Authenticated,
    /// Resolved and signed out: redirect to sign-in, render nothing.
    Unauthenticated,
}

/// Classify a session snapshot for gating decisions.
pub fn classify(state: &SessionState) -> SessionGate {
    if !state.resolved {
        SessionGate::Unknown
    } else if state.token.is_some() {
        SessionGate::Authenticated
    } else {
        SessionGate::Unauthenticated
    }
}

/// Redirect to `/sign-in` whenever the session resolves without a token.
///
/// Fires at most once per mounted view, covering both a signed-out arrival
/// and a logout while the view stays mounted.
pub fn install_session_guard<F>(session: Session, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let redirected = RwSignal::new(false);
    Effect::new(move || {
        if classify(&session.get()) == SessionGate::Unauthenticated && !redirected.get_untracked() {
            redirected.set(true);
            navigate("/sign-in", NavigateOptions::default());
        }
    });
}
