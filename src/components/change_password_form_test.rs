use super::*;

// ============================================================================
// Status code mapping
// ============================================================================

#[test]
fn mismatch_maps_to_the_confirmation_message() {
    assert_eq!(update_password_error(Some(400)), "New password and confirmation do not match.");
}

#[test]
fn unauthorized_maps_to_the_credential_message() {
    assert_eq!(
        update_password_error(Some(401)),
        "Current password is incorrect or session expired."
    );
}

#[test]
fn missing_user_maps_to_not_found() {
    assert_eq!(update_password_error(Some(404)), "User not found.");
}

#[test]
fn everything_else_falls_back_to_the_generic_message() {
    assert_eq!(update_password_error(Some(500)), "Failed to update password. Please try again.");
    assert_eq!(update_password_error(None), "Failed to update password. Please try again.");
}
