//! Field validation shared by the sign-in and sign-up forms.
//!
//! Error strings are shown verbatim under the offending field, so they are
//! the user-facing copy, not internal codes.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Validate an email address.
pub fn validate_email(value: &str) -> Result<(), &'static str> {
    if value.is_empty() {
        return Err("Email is required");
    }
    if !value.contains('@') || !has_letter_domain_suffix(value) {
        return Err("Email must contain '@' sign and domain name (e.g. '.com')");
    }
    Ok(())
}

// Accepts values ending in a dot followed by two or more ASCII letters.
fn has_letter_domain_suffix(value: &str) -> bool {
    let Some(idx) = value.rfind('.') else {
        return false;
    };
    let suffix = &value[idx + 1..];
    suffix.len() >= 2 && suffix.chars().all(|c| c.is_ascii_alphabetic())
}

/// Validate a password for sign-in, sign-up, and password changes.
pub fn validate_password(value: &str) -> Result<(), &'static str> {
    if value.len() < 8 {
        return Err("Password must be at least 8 characters");
    }
    Ok(())
}

/// Validate the display name on sign-up.
pub fn validate_name(value: &str) -> Result<(), &'static str> {
    if value.is_empty() {
        return Err("Name must not be empty");
    }
    Ok(())
}

/// Validate the confirm-password field against the chosen password.
pub fn validate_confirm_password(password: &str, confirm: &str) -> Result<(), &'static str> {
    if confirm.is_empty() {
        return Err("Confirm password is required");
    }
    if password != confirm {
        return Err("password and confirm password not matched!");
    }
    Ok(())
}

/// Derive the account username from the display name: lowercased with all
/// whitespace removed, matching how the backend expects handles.
pub fn derive_username(name: &str) -> String {
    name.to_lowercase().chars().filter(|c| !c.is_whitespace()).collect()
}
