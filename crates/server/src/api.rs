use dioxus::prelude::*;
use shared_types::{OpinionSearchRequest, OpinionSearchResponse};

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, ValidateRequest};

/// Search legal opinions through the upstream semantic search API.
///
/// Validates the request, forwards it with the server-held API key, and
/// rewrites site-relative links in courtlistener excerpts so they resolve
/// in the browser. Only envelopes whose message is "Success" make it back
/// to the client; everything else surfaces as a ServerFnError carrying a
/// JSON-encoded AppError.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn search_opinions(
    request: OpinionSearchRequest,
) -> Result<OpinionSearchResponse, ServerFnError> {
    request
        .validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let config = crate::config::server_config().map_err(|e| e.into_server_fn_error())?;
    let client = crate::client::SearchClient::from_config(config);

    let mut envelope = client
        .search(&request)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    for result in &mut envelope.results {
        if result.is_courtlistener() {
            result.entity.text = crate::excerpt::rewrite_relative_links(
                &result.entity.text,
                &config.search.courtlistener_base,
            );
            result.entity.metadata.absolute_url = result
                .entity
                .metadata
                .full_text_url(&config.search.courtlistener_base);
        }
    }

    Ok(envelope)
}
