use super::*;

// ============================================================================
// Normalization
// ============================================================================

#[test]
fn tags_are_trimmed() {
    assert_eq!(normalize_tag("  rust  "), Some("rust".to_owned()));
}

#[test]
fn blank_tags_normalize_to_none() {
    assert_eq!(normalize_tag(""), None);
    assert_eq!(normalize_tag("   "), None);
}

// ============================================================================
// Add / remove
// ============================================================================

#[test]
fn add_appends_normalized_tags() {
    let mut tags = Vec::new();
    assert!(add_tag(&mut tags, " rust "));
    assert!(add_tag(&mut tags, "wasm"));
    assert_eq!(tags, vec!["rust".to_owned(), "wasm".to_owned()]);
}

#[test]
fn add_rejects_duplicates_and_blanks() {
    let mut tags = vec!["rust".to_owned()];
    assert!(!add_tag(&mut tags, "rust"));
    assert!(!add_tag(&mut tags, "  "));
    assert_eq!(tags, vec!["rust".to_owned()]);
}

#[test]
fn duplicate_check_is_exact() {
    let mut tags = vec!["Rust".to_owned()];
    assert!(add_tag(&mut tags, "rust"));
    assert_eq!(tags.len(), 2);
}

#[test]
fn remove_deletes_only_the_named_tag() {
    let mut tags = vec!["rust".to_owned(), "wasm".to_owned()];
    remove_tag(&mut tags, "rust");
    assert_eq!(tags, vec!["wasm".to_owned()]);
    remove_tag(&mut tags, "absent");
    assert_eq!(tags, vec!["wasm".to_owned()]);
}
