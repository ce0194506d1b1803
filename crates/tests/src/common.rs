use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

/// What the mock upstream observed about the last request it served.
#[derive(Clone, Default)]
pub struct Recorded {
    pub query_pairs: Arc<Mutex<Vec<(String, String)>>>,
    pub api_key: Arc<Mutex<Option<String>>>,
}

#[derive(Clone)]
struct MockState {
    recorded: Recorded,
    status: u16,
    body: Value,
}

/// A stand-in for the opinion search API, bound to an ephemeral local port.
pub struct MockSearchApi {
    pub addr: SocketAddr,
    pub recorded: Recorded,
}

impl MockSearchApi {
    pub fn endpoint(&self) -> String {
        format!("http://{}", self.addr)
    }
}

async fn mock_search_opinions(
    State(state): State<MockState>,
    Query(pairs): Query<Vec<(String, String)>>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    *state.recorded.query_pairs.lock().unwrap() = pairs;
    *state.recorded.api_key.lock().unwrap() = headers
        .get("x-api-key")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    (
        StatusCode::from_u16(state.status).unwrap(),
        Json(state.body.clone()),
    )
}

/// Spawn a mock search API that answers `GET /search_opinions` with a fixed
/// status and JSON body, recording the query string and API key it received.
pub async fn spawn_mock_api(status: u16, body: Value) -> MockSearchApi {
    let recorded = Recorded::default();
    let state = MockState {
        recorded: recorded.clone(),
        status,
        body,
    };
    let app = Router::new()
        .route("/search_opinions", get(mock_search_opinions))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockSearchApi { addr, recorded }
}

/// A successful envelope containing the given results.
pub fn success_body(results: Value) -> Value {
    serde_json::json!({ "message": "Success", "results": results })
}
