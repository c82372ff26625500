use super::*;

// =============================================================
// Email
// =============================================================

#[test]
fn email_requires_a_value() {
    assert_eq!(validate_email(""), Err("Email is required"));
}

#[test]
fn email_requires_at_sign_and_domain() {
    let msg = "Email must contain '@' sign and domain name (e.g. '.com')";
    assert_eq!(validate_email("plainaddress"), Err(msg));
    assert_eq!(validate_email("user@host"), Err(msg));
    assert_eq!(validate_email("user.host.com"), Err(msg));
    assert_eq!(validate_email("user@host.c"), Err(msg));
    assert_eq!(validate_email("user@host.c0m"), Err(msg));
}

#[test]
fn email_accepts_plain_addresses() {
    assert_eq!(validate_email("user@host.com"), Ok(()));
    assert_eq!(validate_email("first.last@sub.host.io"), Ok(()));
}

// =============================================================
// Password
// =============================================================

#[test]
fn password_requires_eight_characters() {
    assert_eq!(validate_password("short"), Err("Password must be at least 8 characters"));
    assert_eq!(validate_password("1234567"), Err("Password must be at least 8 characters"));
    assert_eq!(validate_password("12345678"), Ok(()));
}

// =============================================================
// Name + confirm password
// =============================================================

#[test]
fn name_must_not_be_empty() {
    assert_eq!(validate_name(""), Err("Name must not be empty"));
    assert_eq!(validate_name("Ada"), Ok(()));
}

#[test]
fn confirm_password_requires_a_value() {
    assert_eq!(validate_confirm_password("secret123", ""), Err("Confirm password is required"));
}

#[test]
fn confirm_password_must_match() {
    assert_eq!(
        validate_confirm_password("secret123", "secret124"),
        Err("password and confirm password not matched!")
    );
    assert_eq!(validate_confirm_password("secret123", "secret123"), Ok(()));
}

// =============================================================
// Username derivation
// =============================================================

#[test]
fn username_lowercases_and_strips_whitespace() {
    assert_eq!(derive_username("John Doe"), "johndoe");
    assert_eq!(derive_username("  Ada   Lovelace "), "adalovelace");
    assert_eq!(derive_username("solo"), "solo");
}
