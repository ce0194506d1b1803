use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::{Validate, ValidationError};

// ── Search request constants ───────────────────────────────────────

/// Result-count options offered by the search form.
pub const RESULT_LIMITS: &[u32] = &[4, 8, 12];

/// Earliest date the form's date pickers accept.
pub const MIN_SEARCH_DATE: &str = "1700-01-01";

/// Source tag for records indexed from CourtListener. Only these records
/// carry HTML excerpts and a relative `absolute_url` for the full text.
pub const COURTLISTENER_SOURCE: &str = "courtlistener";

/// Envelope message indicating a successful search.
pub const SUCCESS_MESSAGE: &str = "Success";

/// Case names longer than this are truncated with an ellipsis.
pub const CASE_NAME_MAX_CHARS: usize = 200;

/// Check whether a result-count value is one of the offered options.
pub fn is_valid_result_limit(k: u32) -> bool {
    RESULT_LIMITS.contains(&k)
}

// ── Request ────────────────────────────────────────────────────────

/// A single search submission, created fresh on every form submit.
///
/// Dates are carried as "YYYY-MM-DD" strings — the same format the form
/// produces and the wire expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
#[cfg_attr(feature = "validation", validate(schema(function = validate_date_window)))]
pub struct OpinionSearchRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Search query is required"))
    )]
    pub query: String,
    /// Lower-cased two-letter code, or `None` when "All" was selected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = validate_iso_date))
    )]
    pub after_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = validate_iso_date))
    )]
    pub before_date: Option<String>,
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = validate_result_limit))
    )]
    pub k: u32,
}

#[cfg(feature = "validation")]
fn validate_iso_date(value: &str) -> Result<(), ValidationError> {
    match chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(_) => Ok(()),
        Err(_) => {
            let mut err = ValidationError::new("iso_date");
            err.message = Some("Dates must use the YYYY-MM-DD format".into());
            Err(err)
        }
    }
}

#[cfg(feature = "validation")]
fn validate_result_limit(value: &u32) -> Result<(), ValidationError> {
    if is_valid_result_limit(*value) {
        Ok(())
    } else {
        let mut err = ValidationError::new("result_limit");
        err.message = Some("Result count must be 4, 8, or 12".into());
        Err(err)
    }
}

/// The original UI let users pick an after-date later than the before-date
/// and silently returned nothing useful; rejecting the window up front is a
/// deliberate behavior change.
#[cfg(feature = "validation")]
fn validate_date_window(request: &OpinionSearchRequest) -> Result<(), ValidationError> {
    if let (Some(after), Some(before)) = (&request.after_date, &request.before_date) {
        let after = chrono::NaiveDate::parse_from_str(after, "%Y-%m-%d");
        let before = chrono::NaiveDate::parse_from_str(before, "%Y-%m-%d");
        if let (Ok(after), Ok(before)) = (after, before) {
            if after > before {
                let mut err = ValidationError::new("date_window");
                err.message = Some("After date must not be later than before date".into());
                return Err(err);
            }
        }
    }
    Ok(())
}

// ── Response envelope ──────────────────────────────────────────────

/// The JSON envelope returned by the `search_opinions` endpoint.
///
/// Any `message` other than "Success" is an application-level failure,
/// regardless of HTTP status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpinionSearchResponse {
    pub message: String,
    #[serde(default)]
    pub results: Vec<OpinionResult>,
}

impl OpinionSearchResponse {
    pub fn is_success(&self) -> bool {
        self.message == SUCCESS_MESSAGE
    }
}

/// One ranked search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpinionResult {
    /// Index source, e.g. "courtlistener" or "cap".
    pub source: String,
    /// Raw similarity-search distance from the backend; lower is closer.
    pub distance: f64,
    pub entity: OpinionEntity,
}

impl OpinionResult {
    pub fn is_courtlistener(&self) -> bool {
        self.source == COURTLISTENER_SOURCE
    }

    /// Link to the full opinion text, if this record has one.
    ///
    /// Only courtlistener records carry a usable `absolute_url`; every
    /// other source renders a placeholder instead of a link, even when
    /// its metadata happens to contain an absolute URL.
    pub fn full_text_link(&self) -> Option<&str> {
        if !self.is_courtlistener() {
            return None;
        }
        self.entity
            .metadata
            .absolute_url
            .as_deref()
            .filter(|url| url.starts_with("http"))
    }
}

/// The stored document behind a hit: the matched excerpt plus metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpinionEntity {
    /// Matched excerpt. HTML for courtlistener records, plain text otherwise.
    pub text: String,
    #[serde(default)]
    pub metadata: OpinionMetadata,
}

/// Opinion metadata. Every field is optional on the wire; display
/// fallbacks live here so client and tests agree on them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpinionMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub court_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    /// Legacy author field still present on older records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_str: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_summary: Option<String>,
    /// Filing date in "YYYY-MM-DD" form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_filed: Option<String>,
    /// Site-relative URL of the full opinion text (courtlistener only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absolute_url: Option<String>,
}

impl OpinionMetadata {
    /// Case name, truncated to [`CASE_NAME_MAX_CHARS`] characters with an
    /// ellipsis marker when longer.
    pub fn display_case_name(&self) -> String {
        let name = self.case_name.as_deref().unwrap_or("Unknown Case");
        if name.chars().count() > CASE_NAME_MAX_CHARS {
            let truncated: String = name.chars().take(CASE_NAME_MAX_CHARS).collect();
            format!("{}...", truncated)
        } else {
            name.to_string()
        }
    }

    pub fn display_court_name(&self) -> &str {
        self.court_name.as_deref().unwrap_or("Unknown Court")
    }

    /// Author display name. `author_name` wins; `author_str` is the
    /// legacy fallback.
    pub fn display_author(&self) -> &str {
        self.author_name
            .as_deref()
            .or(self.author_str.as_deref())
            .unwrap_or("Unknown Author")
    }

    pub fn display_summary(&self) -> &str {
        self.ai_summary.as_deref().unwrap_or("AI summary unavailable")
    }

    /// Absolute full-text URL. Site-relative paths get `base` prefixed;
    /// already-absolute URLs pass through unchanged.
    pub fn full_text_url(&self, base: &str) -> Option<String> {
        self.absolute_url.as_deref().map(|path| {
            if path.starts_with('/') {
                format!("{}{}", base, path)
            } else {
                path.to_string()
            }
        })
    }
}

/// Map a backend distance to the displayed match score:
/// `max(0, (2 - distance) / 2)`, rounded to 5 decimal places.
pub fn match_score(distance: f64) -> f64 {
    let score = ((2.0 - distance) / 2.0).max(0.0);
    (score * 100_000.0).round() / 100_000.0
}
