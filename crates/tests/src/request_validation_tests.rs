use pretty_assertions::assert_eq;
use server::error_convert::{AppErrorExt, ValidateRequest};
use shared_types::{AppError, AppErrorKind, OpinionSearchRequest};

fn request() -> OpinionSearchRequest {
    OpinionSearchRequest {
        query: "easement by prescription".to_string(),
        jurisdiction: None,
        after_date: None,
        before_date: None,
        k: 4,
    }
}

#[test]
fn valid_request_passes_validation() {
    assert!(request().validate_request().is_ok());
}

#[test]
fn empty_query_yields_field_error() {
    let mut req = request();
    req.query = String::new();
    let err = req.validate_request().unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(
        err.field_errors.get("query").map(String::as_str),
        Some("Search query is required")
    );
}

#[test]
fn unsupported_result_count_yields_field_error() {
    let mut req = request();
    req.k = 5;
    let err = req.validate_request().unwrap_err();
    assert!(err.field_errors.contains_key("k"));
}

#[test]
fn inverted_date_window_is_rejected() {
    let mut req = request();
    req.after_date = Some("2024-06-01".to_string());
    req.before_date = Some("2021-06-01".to_string());
    let err = req.validate_request().unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
}

#[test]
fn malformed_date_is_rejected() {
    let mut req = request();
    req.before_date = Some("June 1, 2021".to_string());
    let err = req.validate_request().unwrap_err();
    assert!(err.field_errors.contains_key("before_date"));
}

#[test]
fn validation_error_survives_server_fn_boundary() {
    let mut req = request();
    req.query = String::new();
    let err = req.validate_request().unwrap_err();

    // Serialize the way server functions do, then re-parse the way the
    // client does.
    let server_err = err.into_server_fn_error();
    let parsed = AppError::from_server_error(&server_err.to_string()).unwrap();
    assert_eq!(parsed.kind, AppErrorKind::ValidationError);
    assert!(parsed.field_errors.contains_key("query"));
}
