use super::*;

use crate::util::storage::MemoryStorage;

// =============================================================
// Helpers
// =============================================================

fn make_user() -> User {
    User {
        id: 7,
        name: "Ada Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        username: "adalovelace".to_owned(),
        headline: None,
        avatar_url: None,
    }
}

fn make_session() -> (Session, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::default());
    let session = Session::new(storage.clone());
    (session, storage)
}

// =============================================================
// Construction + rehydration
// =============================================================

#[test]
fn new_session_is_empty_and_unresolved() {
    let (session, _storage) = make_session();
    let state = session.get_untracked();
    assert_eq!(state.token, None);
    assert_eq!(state.user, None);
    assert!(!state.resolved);
}

#[test]
fn restore_with_no_record_resolves_signed_out() {
    let (session, _storage) = make_session();
    session.restore();
    let state = session.get_untracked();
    assert_eq!(state.token, None);
    assert_eq!(state.user, None);
    assert!(state.resolved);
}

#[test]
fn restore_ignores_corrupt_record() {
    let (session, storage) = make_session();
    storage.set(STORAGE_KEY, "not json at all {");
    session.restore();
    let state = session.get_untracked();
    assert_eq!(state.token, None);
    assert_eq!(state.user, None);
    assert!(state.resolved);
}

#[test]
fn restore_round_trips_a_persisted_session() {
    let (session, storage) = make_session();
    session.set_token("tok-abc".to_owned());
    session.set_user(make_user());

    let reloaded = Session::new(storage);
    reloaded.restore();
    let state = reloaded.get_untracked();
    assert_eq!(state.token.as_deref(), Some("tok-abc"));
    assert_eq!(state.user, Some(make_user()));
    assert!(state.resolved);
}

#[test]
fn restore_drops_user_without_token() {
    let (session, storage) = make_session();
    let record = serde_json::json!({ "token": null, "user": make_user() });
    storage.set(STORAGE_KEY, &record.to_string());
    session.restore();
    let state = session.get_untracked();
    assert_eq!(state.token, None);
    assert_eq!(state.user, None);
    assert!(state.resolved);
}

// =============================================================
// Write-through persistence
// =============================================================

#[test]
fn set_token_writes_through_to_storage() {
    let (session, storage) = make_session();
    session.set_token("tok-1".to_owned());
    let raw = storage.get(STORAGE_KEY).unwrap();
    assert!(raw.contains("tok-1"));
}

#[test]
fn set_user_writes_through_to_storage() {
    let (session, storage) = make_session();
    session.set_token("tok-1".to_owned());
    session.set_user(make_user());
    let raw = storage.get(STORAGE_KEY).unwrap();
    assert!(raw.contains("adalovelace"));
    assert!(raw.contains("tok-1"));
}

#[test]
fn logout_clears_token_and_user_together_and_drops_record() {
    let (session, storage) = make_session();
    session.restore();
    session.set_token("tok-1".to_owned());
    session.set_user(make_user());

    session.logout();

    let state = session.get_untracked();
    assert_eq!(state.token, None);
    assert_eq!(state.user, None);
    assert_eq!(storage.get(STORAGE_KEY), None);
}

// =============================================================
// Token/user pairing invariant
// =============================================================

#[test]
fn user_is_never_present_without_token_through_login_and_logout() {
    let (session, _storage) = make_session();
    let check = |session: &Session| {
        let state = session.get_untracked();
        assert!(state.user.is_none() || state.token.is_some());
    };

    check(&session);
    session.restore();
    check(&session);
    session.set_token("tok-1".to_owned());
    check(&session);
    session.set_user(make_user());
    check(&session);
    session.logout();
    check(&session);
}

// =============================================================
// Generation tagging for in-flight profile fetches
// =============================================================

#[test]
fn generation_increments_on_token_transitions_only() {
    let (session, _storage) = make_session();
    let start = session.generation();

    session.set_token("tok-1".to_owned());
    assert_eq!(session.generation(), start + 1);

    session.set_user(make_user());
    assert_eq!(session.generation(), start + 1);

    session.logout();
    assert_eq!(session.generation(), start + 2);
}

#[test]
fn profile_response_for_current_generation_is_applied() {
    let (session, _storage) = make_session();
    session.set_token("tok-1".to_owned());
    let generation = session.generation();

    assert!(session.set_user_if_current(generation, make_user()));
    assert_eq!(session.user_untracked(), Some(make_user()));
}

#[test]
fn profile_response_after_logout_is_dropped() {
    let (session, _storage) = make_session();
    session.set_token("tok-1".to_owned());
    let generation = session.generation();

    session.logout();

    assert!(!session.set_user_if_current(generation, make_user()));
    assert_eq!(session.user_untracked(), None);
}

#[test]
fn profile_response_after_relogin_is_dropped() {
    let (session, _storage) = make_session();
    session.set_token("tok-1".to_owned());
    let stale = session.generation();

    session.logout();
    session.set_token("tok-2".to_owned());

    assert!(!session.set_user_if_current(stale, make_user()));
    assert_eq!(session.user_untracked(), None);
    assert_eq!(session.token_untracked().as_deref(), Some("tok-2"));
}

// =============================================================
// Dispatch-time reads
// =============================================================

#[test]
fn token_untracked_follows_mutations() {
    let (session, _storage) = make_session();
    assert_eq!(session.token_untracked(), None);
    session.set_token("tok-1".to_owned());
    assert_eq!(session.token_untracked().as_deref(), Some("tok-1"));
    session.set_token("tok-2".to_owned());
    assert_eq!(session.token_untracked().as_deref(), Some("tok-2"));
    session.logout();
    assert_eq!(session.token_untracked(), None);
}
