//! Human-readable date formatting for API timestamps.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Format an ISO 8601 timestamp as `05 August 2025`.
///
/// Anything that does not parse comes back unchanged so a malformed
/// timestamp degrades to raw text instead of an empty card.
pub fn format_date(iso: &str) -> String {
    let date = iso.split('T').next().unwrap_or(iso);
    let mut parts = date.splitn(3, '-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return iso.to_owned();
    };
    let Ok(month_num) = month.parse::<usize>() else {
        return iso.to_owned();
    };
    let Ok(day_num) = day.parse::<u32>() else {
        return iso.to_owned();
    };
    if !(1..=12).contains(&month_num) || !(1..=31).contains(&day_num) || year.len() != 4 {
        return iso.to_owned();
    }
    format!("{day_num:02} {} {year}", MONTHS[month_num - 1])
}
