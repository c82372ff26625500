use super::*;

#[test]
fn formats_full_timestamps() {
    assert_eq!(format_date("2025-08-05T09:30:00.000Z"), "05 August 2025");
}

#[test]
fn formats_bare_dates() {
    assert_eq!(format_date("2024-12-31"), "31 December 2024");
}

#[test]
fn pads_single_digit_days() {
    assert_eq!(format_date("2025-01-02T00:00:00Z"), "02 January 2025");
}

#[test]
fn passes_malformed_input_through() {
    assert_eq!(format_date("yesterday"), "yesterday");
    assert_eq!(format_date("2025-13-01"), "2025-13-01");
    assert_eq!(format_date("2025-00-10"), "2025-00-10");
    assert_eq!(format_date(""), "");
}
