use super::*;

// ============================================================================
// Search query normalization
// ============================================================================

#[test]
fn query_is_trimmed() {
    assert_eq!(normalized_search_query("  rust wasm  "), Some("rust wasm".to_owned()));
}

#[test]
fn blank_queries_normalize_to_none() {
    assert_eq!(normalized_search_query(""), None);
    assert_eq!(normalized_search_query("   "), None);
    assert_eq!(normalized_search_query("\t\n"), None);
}

#[test]
fn inner_whitespace_is_preserved() {
    assert_eq!(normalized_search_query("two  spaces"), Some("two  spaces".to_owned()));
}
