use super::*;

// ============================================================================
// Field validation
// ============================================================================

#[test]
fn title_and_content_must_not_be_blank() {
    assert_eq!(validate_title(""), Err("Title is required"));
    assert_eq!(validate_title("   "), Err("Title is required"));
    assert_eq!(validate_title("Hello"), Ok(()));
    assert_eq!(validate_content("\n"), Err("Content is required"));
    assert_eq!(validate_content("body"), Ok(()));
}

#[test]
fn at_least_one_tag_is_required() {
    assert_eq!(validate_tags(&[]), Err("At least one tag is required"));
    assert_eq!(validate_tags(&["rust".to_owned()]), Ok(()));
}

// ============================================================================
// Cover rules
// ============================================================================

#[test]
fn creating_requires_a_cover_file() {
    assert_eq!(validate_cover(false, false), Err("Cover image is required"));
    assert_eq!(validate_cover(true, false), Ok(()));
}

#[test]
fn editing_may_keep_the_stored_cover() {
    assert_eq!(validate_cover(false, true), Ok(()));
    assert_eq!(validate_cover(true, true), Ok(()));
}

// ============================================================================
// Tags form field
// ============================================================================

#[test]
fn tags_join_with_commas() {
    let tags = vec!["rust".to_owned(), "wasm".to_owned(), "leptos".to_owned()];
    assert_eq!(joined_tags(&tags), "rust,wasm,leptos");
}

#[test]
fn a_single_tag_joins_to_itself() {
    assert_eq!(joined_tags(&["rust".to_owned()]), "rust");
}
