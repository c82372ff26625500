use super::*;

// ============================================================================
// Page number range
// ============================================================================

#[test]
fn page_numbers_cover_one_through_last() {
    assert_eq!(page_numbers(5), vec![1, 2, 3, 4, 5]);
}

#[test]
fn page_numbers_always_offer_at_least_one_page() {
    assert_eq!(page_numbers(0), vec![1]);
    assert_eq!(page_numbers(1), vec![1]);
}

// ============================================================================
// Last-page latch
// ============================================================================

#[test]
fn latch_grows_with_fetched_last_page() {
    assert_eq!(latched_last_page(1, 4), 4);
    assert_eq!(latched_last_page(4, 7), 7);
}

#[test]
fn latch_never_shrinks() {
    assert_eq!(latched_last_page(7, 3), 7);
}

#[test]
fn latch_floors_at_one() {
    assert_eq!(latched_last_page(0, 0), 1);
}
