/// Jurisdiction options offered by the search form, in display order.
///
/// "All" disables jurisdiction filtering entirely; "US" selects federal
/// opinions; the remaining entries are the two-letter state codes.
pub const JURISDICTIONS: &[&str] = &[
    "All", "US", "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA",
    "HI", "ID", "IL", "IN", "IA", "KS", "KY", "LA", "ME", "MD", "MA", "MI",
    "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND",
    "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT", "VA",
    "WA", "WV", "WI", "WY",
];

/// Check whether a jurisdiction string is one of the offered options.
pub fn is_valid_jurisdiction(s: &str) -> bool {
    JURISDICTIONS.contains(&s)
}

/// The wire value for a selected jurisdiction.
///
/// "All" means no filter and the parameter is omitted entirely; every other
/// selection is sent lower-cased.
pub fn jurisdiction_param(selected: &str) -> Option<String> {
    if selected == "All" {
        None
    } else {
        Some(selected.to_lowercase())
    }
}
