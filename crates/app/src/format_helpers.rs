/// Shared formatting utilities for the UI layer.
///
/// All functions accept "YYYY-MM-DD" date strings and produce
/// human-readable output without external crate dependencies.

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Parse month number (1-12) from a two-digit string.
fn parse_month(s: &str) -> Option<usize> {
    s.parse::<usize>().ok().filter(|m| (1..=12).contains(m))
}

/// Format a "YYYY-MM-DD" date string as "May 10, 2023".
///
/// Falls back to the original string if parsing fails. The input comes
/// straight off the wire, so slicing must tolerate arbitrary bytes.
pub fn format_date_long(date_str: &str) -> String {
    let (Some(year), Some(month), Some(day)) =
        (date_str.get(..4), date_str.get(5..7), date_str.get(8..10))
    else {
        return date_str.to_string();
    };

    let parsed_day = day.parse::<u32>().ok().filter(|d| (1..=31).contains(d));
    match (parse_month(month), parsed_day) {
        (Some(m), Some(d)) => format!("{} {}, {}", MONTH_NAMES[m - 1], d, year),
        _ => date_str.to_string(),
    }
}
