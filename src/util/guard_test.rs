use super::*;

use std::sync::Arc;

use crate::util::storage::MemoryStorage;

fn make_session() -> Session {
    Session::new(Arc::new(MemoryStorage::default()))
}

// =============================================================
// Classification
// =============================================================

#[test]
fn unresolved_session_is_unknown() {
    let state = SessionState::default();
    assert_eq!(classify(&state), SessionGate::Unknown);
}

#[test]
fn unresolved_session_with_stale_fields_is_still_unknown() {
    let state = SessionState { token: Some("tok".to_owned()), resolved: false, ..SessionState::default() };
    assert_eq!(classify(&state), SessionGate::Unknown);
}

#[test]
fn resolved_session_without_token_is_unauthenticated() {
    let state = SessionState { resolved: true, ..SessionState::default() };
    assert_eq!(classify(&state), SessionGate::Unauthenticated);
}

#[test]
fn resolved_session_with_token_is_authenticated() {
    let state = SessionState { token: Some("tok".to_owned()), resolved: true, ..SessionState::default() };
    assert_eq!(classify(&state), SessionGate::Authenticated);
}

// =============================================================
// Transitions through real session operations
// =============================================================

#[test]
fn restore_moves_unknown_to_exactly_one_resolved_state() {
    let session = make_session();
    assert_eq!(classify(&session.get_untracked()), SessionGate::Unknown);
    session.restore();
    assert_eq!(classify(&session.get_untracked()), SessionGate::Unauthenticated);
}

#[test]
fn login_then_logout_round_trips_the_gate() {
    let session = make_session();
    session.restore();
    session.set_token("tok".to_owned());
    assert_eq!(classify(&session.get_untracked()), SessionGate::Authenticated);

    session.logout();
    assert_eq!(classify(&session.get_untracked()), SessionGate::Unauthenticated);
}

#[test]
fn restored_persisted_token_authenticates_without_network() {
    let storage = Arc::new(MemoryStorage::default());
    let first = Session::new(storage.clone());
    first.set_token("tok".to_owned());

    let second = Session::new(storage);
    second.restore();
    assert_eq!(classify(&second.get_untracked()), SessionGate::Authenticated);
}
