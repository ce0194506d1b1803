use shared_types::{AppError, OpinionSearchRequest, OpinionSearchResponse};

use crate::config::ServerConfig;
use crate::error_convert::ReqwestErrorExt;

/// HTTP client for the opinion search API.
///
/// Authenticates with the `X-API-KEY` header, which keeps the key out of
/// URLs and therefore out of access logs.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl SearchClient {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(config.search.endpoint.clone(), config.api_key.clone())
    }

    /// Build the query string pairs for a search request.
    ///
    /// Unset filters are omitted entirely rather than sent empty.
    pub fn query_pairs(request: &OpinionSearchRequest) -> Vec<(String, String)> {
        let mut pairs = vec![("query".to_string(), request.query.clone())];
        if let Some(jurisdiction) = &request.jurisdiction {
            pairs.push(("jurisdiction".to_string(), jurisdiction.clone()));
        }
        if let Some(after_date) = &request.after_date {
            pairs.push(("after_date".to_string(), after_date.clone()));
        }
        if let Some(before_date) = &request.before_date {
            pairs.push(("before_date".to_string(), before_date.clone()));
        }
        pairs.push(("k".to_string(), request.k.to_string()));
        pairs
    }

    /// Execute a search against the upstream API.
    ///
    /// An envelope whose message is not "Success" is an error even on
    /// HTTP 200, so it maps to the upstream kind like any other failure.
    #[tracing::instrument(skip(self), fields(query = %request.query, k = request.k))]
    pub async fn search(
        &self,
        request: &OpinionSearchRequest,
    ) -> Result<OpinionSearchResponse, AppError> {
        let url = format!("{}/search_opinions", self.endpoint);
        let response = self
            .http
            .get(&url)
            .header("X-API-KEY", &self.api_key)
            .query(&Self::query_pairs(request))
            .send()
            .await
            .map_err(|e| e.into_app_error())?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, "Search API returned an error status");
            return Err(AppError::upstream(format!(
                "Search API returned status {status}"
            )));
        }

        let envelope: OpinionSearchResponse = response
            .json()
            .await
            .map_err(|e| AppError::upstream(format!("Search API returned invalid JSON: {e}")))?;

        if !envelope.is_success() {
            tracing::warn!(message = %envelope.message, "Search API reported failure");
            return Err(AppError::upstream(format!(
                "Search API error: {}",
                envelope.message
            )));
        }

        tracing::info!(results = envelope.results.len(), "Search completed");
        Ok(envelope)
    }
}
