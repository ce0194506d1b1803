use crate::common::{spawn_mock_api, success_body};
use pretty_assertions::assert_eq;
use serde_json::json;
use server::client::SearchClient;
use shared_types::{AppErrorKind, OpinionSearchRequest};

fn request() -> OpinionSearchRequest {
    OpinionSearchRequest {
        query: "adverse possession".to_string(),
        jurisdiction: Some("ca".to_string()),
        after_date: Some("2020-01-01".to_string()),
        before_date: Some("2023-12-31".to_string()),
        k: 8,
    }
}

#[tokio::test]
async fn sends_api_key_header_and_query_pairs() {
    let mock = spawn_mock_api(200, success_body(json!([]))).await;
    let client = SearchClient::new(mock.endpoint(), "test-key");

    let response = client.search(&request()).await.unwrap();
    assert!(response.results.is_empty());

    assert_eq!(
        mock.recorded.api_key.lock().unwrap().as_deref(),
        Some("test-key")
    );
    let pairs = mock.recorded.query_pairs.lock().unwrap().clone();
    assert_eq!(
        pairs,
        vec![
            ("query".to_string(), "adverse possession".to_string()),
            ("jurisdiction".to_string(), "ca".to_string()),
            ("after_date".to_string(), "2020-01-01".to_string()),
            ("before_date".to_string(), "2023-12-31".to_string()),
            ("k".to_string(), "8".to_string()),
        ]
    );
}

#[tokio::test]
async fn unset_filters_never_reach_the_wire() {
    let mock = spawn_mock_api(200, success_body(json!([]))).await;
    let client = SearchClient::new(mock.endpoint(), "test-key");

    let mut req = request();
    req.jurisdiction = None;
    req.after_date = None;
    req.before_date = None;
    client.search(&req).await.unwrap();

    let pairs = mock.recorded.query_pairs.lock().unwrap().clone();
    let keys: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["query", "k"]);
}

#[tokio::test]
async fn parses_results_with_full_metadata() {
    let body = success_body(json!([{
        "source": "courtlistener",
        "distance": 0.5,
        "entity": {
            "text": "<p>excerpt</p>",
            "metadata": {
                "case_name": "Pierson v. Post",
                "court_name": "Supreme Court of New York",
                "author_name": "Tompkins",
                "ai_summary": "A fox hunt dispute.",
                "date_filed": "1805-08-01",
                "absolute_url": "/opinion/1/pierson-v-post/"
            }
        }
    }]));
    let mock = spawn_mock_api(200, body).await;
    let client = SearchClient::new(mock.endpoint(), "test-key");

    let response = client.search(&request()).await.unwrap();
    assert_eq!(response.results.len(), 1);
    let result = &response.results[0];
    assert!(result.is_courtlistener());
    assert_eq!(result.distance, 0.5);
    let metadata = &result.entity.metadata;
    assert_eq!(metadata.display_case_name(), "Pierson v. Post");
    assert_eq!(metadata.display_author(), "Tompkins");
    assert_eq!(metadata.absolute_url.as_deref(), Some("/opinion/1/pierson-v-post/"));
}

#[tokio::test]
async fn http_error_status_maps_to_upstream() {
    let mock = spawn_mock_api(502, json!({"detail": "bad gateway"})).await;
    let client = SearchClient::new(mock.endpoint(), "test-key");

    let err = client.search(&request()).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Upstream);
    assert!(err.message.contains("502"));
}

#[tokio::test]
async fn error_envelope_on_ok_status_maps_to_upstream() {
    let mock = spawn_mock_api(200, json!({"message": "Error", "results": []})).await;
    let client = SearchClient::new(mock.endpoint(), "test-key");

    let err = client.search(&request()).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Upstream);
    assert!(err.message.contains("Error"));
}

#[tokio::test]
async fn malformed_envelope_maps_to_upstream() {
    let mock = spawn_mock_api(200, json!("not an envelope")).await;
    let client = SearchClient::new(mock.endpoint(), "test-key");

    let err = client.search(&request()).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Upstream);
}

#[tokio::test]
async fn unreachable_endpoint_maps_to_upstream() {
    // Port 1 is never listening
    let client = SearchClient::new("http://127.0.0.1:1", "test-key");

    let err = client.search(&request()).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Upstream);
}
