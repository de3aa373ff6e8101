//! API utilities for frontend-backend communication
//!
//! Helpers for building request URLs and turning responses into
//! `Result<_, ApiError>`.

use super::config::config;
use contracts::shared::api_error::success_message_from_body;
use contracts::shared::ApiError;
use gloo_net::http::Response;
use serde::de::DeserializeOwned;

/// Base URL of the records service, without a trailing slash
///
/// # Returns
/// - "" when the service is served from the same origin (default)
/// - the localStorage override otherwise, e.g. "http://localhost:8080"
pub fn api_base() -> String {
    config().api.base.clone()
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url("/submission/7");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

pub fn transport_error(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// Read the body once; non-2xx statuses become `ApiError`
pub async fn read_text(resp: Response) -> Result<String, ApiError> {
    let status = resp.status();
    let ok = resp.ok();
    let text = resp.text().await.map_err(transport_error)?;
    if !ok {
        return Err(ApiError::from_response(status, &text));
    }
    Ok(text)
}

/// Decode a 2xx JSON body
pub async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let text = read_text(resp).await?;
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Accept a 2xx body and pull out an optional `message`
pub async fn read_message(resp: Response) -> Result<Option<String>, ApiError> {
    let text = read_text(resp).await?;
    Ok(success_message_from_body(&text))
}
