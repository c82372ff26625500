use super::*;

use std::sync::Arc;

use crate::util::storage::MemoryStorage;

fn make_client() -> ApiClient {
    ApiClient::new(Session::new(Arc::new(MemoryStorage::default())))
}

// =============================================================
// URL resolution
// =============================================================

#[test]
fn url_joins_path_to_api_origin() {
    let client = make_client();
    assert_eq!(client.url("/posts/7"), format!("{API_BASE_URL}/posts/7"));
}

// =============================================================
// Authorization header
// =============================================================

#[test]
fn authorization_is_absent_when_signed_out() {
    let client = make_client();
    assert_eq!(client.authorization(), None);
}

#[test]
fn authorization_reflects_token_at_dispatch_time() {
    let client = make_client();
    client.session().set_token("tok-1".to_owned());
    assert_eq!(client.authorization().as_deref(), Some("Bearer tok-1"));

    client.session().set_token("tok-2".to_owned());
    assert_eq!(client.authorization().as_deref(), Some("Bearer tok-2"));
}

#[test]
fn authorization_is_dropped_after_logout() {
    let client = make_client();
    client.session().set_token("tok-1".to_owned());
    client.session().logout();
    assert_eq!(client.authorization(), None);
}

// =============================================================
// Error body parsing
// =============================================================

#[test]
fn error_message_reads_plain_string_bodies() {
    let raw = r#"{"message": "Invalid credentials", "statusCode": 401}"#;
    assert_eq!(error_message_from_body(raw), Some("Invalid credentials".to_owned()));
}

#[test]
fn error_message_joins_validation_arrays() {
    let raw = r#"{"message": ["title should not be empty", "tags must be an array"]}"#;
    assert_eq!(
        error_message_from_body(raw),
        Some("title should not be empty, tags must be an array".to_owned())
    );
}

#[test]
fn error_message_is_none_for_unusable_bodies() {
    assert_eq!(error_message_from_body("<html>502</html>"), None);
    assert_eq!(error_message_from_body(r#"{"error": "nope"}"#), None);
    assert_eq!(error_message_from_body(r#"{"message": []}"#), None);
    assert_eq!(error_message_from_body(r#"{"message": 42}"#), None);
}

// =============================================================
// ApiError accessors
// =============================================================

#[test]
fn status_accessor_only_reports_server_answers() {
    let err = ApiError::Status { status: 404, message: None };
    assert_eq!(err.status(), Some(404));
    assert_eq!(ApiError::Network("offline".to_owned()).status(), None);
    assert_eq!(ApiError::Unavailable.status(), None);
}

#[test]
fn is_unauthorized_matches_401_only() {
    assert!(ApiError::Status { status: 401, message: None }.is_unauthorized());
    assert!(!ApiError::Status { status: 403, message: None }.is_unauthorized());
    assert!(!ApiError::Network("offline".to_owned()).is_unauthorized());
}

#[test]
fn message_prefers_server_error_body() {
    let err = ApiError::Status { status: 400, message: Some("Name has already used".to_owned()) };
    assert_eq!(err.message(), "Name has already used");

    let bare = ApiError::Status { status: 500, message: None };
    assert_eq!(bare.message(), "request failed with status 500");
}
