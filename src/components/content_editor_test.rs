use super::*;

// ============================================================================
// UTF-16 offset mapping
// ============================================================================

#[test]
fn ascii_offsets_map_one_to_one() {
    assert_eq!(utf16_to_byte_index("hello", 0), 0);
    assert_eq!(utf16_to_byte_index("hello", 3), 3);
    assert_eq!(utf16_to_byte_index("hello", 5), 5);
}

#[test]
fn two_byte_chars_shift_byte_offsets() {
    // 'é' is one UTF-16 unit but two bytes.
    assert_eq!(utf16_to_byte_index("héllo", 2), 3);
}

#[test]
fn surrogate_pairs_count_as_two_units() {
    // '😀' is two UTF-16 units and four bytes.
    let text = "a😀b";
    assert_eq!(utf16_to_byte_index(text, 1), 1);
    assert_eq!(utf16_to_byte_index(text, 3), 5);
}

#[test]
fn offsets_past_the_end_clamp_to_len() {
    assert_eq!(utf16_to_byte_index("ab", 10), 2);
}

// ============================================================================
// Inline markers
// ============================================================================

#[test]
fn bold_wraps_the_selection() {
    assert_eq!(apply_style("hello world", 0, 5, StyleCommand::Bold), "**hello** world");
}

#[test]
fn italic_wraps_the_selection() {
    assert_eq!(apply_style("hello world", 6, 11, StyleCommand::Italic), "hello _world_");
}

#[test]
fn collapsed_selection_inserts_an_empty_marker_pair() {
    assert_eq!(apply_style("abc", 1, 1, StyleCommand::Bold), "a****bc");
}

#[test]
fn reversed_ranges_are_normalized() {
    assert_eq!(apply_style("hello", 5, 0, StyleCommand::Bold), "**hello**");
}

// ============================================================================
// Heading toggle
// ============================================================================

#[test]
fn heading_prefixes_the_current_line() {
    assert_eq!(apply_style("one\ntwo", 5, 5, StyleCommand::Heading), "one\n# two");
}

#[test]
fn heading_toggles_off_again() {
    assert_eq!(apply_style("one\n# two", 7, 7, StyleCommand::Heading), "one\ntwo");
}

#[test]
fn heading_works_on_empty_text() {
    assert_eq!(apply_style("", 0, 0, StyleCommand::Heading), "# ");
}

// ============================================================================
// Bullet toggle
// ============================================================================

#[test]
fn bullets_cover_every_selected_line() {
    let text = "one\ntwo\nthree";
    assert_eq!(
        apply_style(text, 0, text.len(), StyleCommand::BulletList),
        "- one\n- two\n- three"
    );
}

#[test]
fn fully_bulleted_selections_toggle_back() {
    let text = "- one\n- two";
    assert_eq!(apply_style(text, 0, text.len(), StyleCommand::BulletList), "one\ntwo");
}

#[test]
fn mixed_selections_fill_in_missing_bullets() {
    let text = "- one\ntwo";
    assert_eq!(apply_style(text, 0, text.len(), StyleCommand::BulletList), "- one\n- two");
}

#[test]
fn bullet_on_an_empty_line_starts_a_list() {
    assert_eq!(apply_style("", 0, 0, StyleCommand::BulletList), "- ");
}
