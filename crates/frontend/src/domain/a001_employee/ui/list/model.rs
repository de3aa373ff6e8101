use crate::shared::api_utils::{api_url, read_json, read_message, transport_error};
use contracts::domain::a001_employee::{DeleteRequest, Employee};
use contracts::shared::ApiError;
use gloo_net::http::Request;

/// `GET /submission`, in the order the service returns them
pub async fn fetch_all() -> Result<Vec<Employee>, ApiError> {
    let resp = Request::get(&api_url("/submission"))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(transport_error)?;
    read_json(resp).await
}

/// `DELETE /submission` with `{"ids": [...]}` in one request
pub async fn delete_many(request: &DeleteRequest) -> Result<Option<String>, ApiError> {
    let resp = Request::delete(&api_url("/submission"))
        .json(request)
        .map_err(|e| ApiError::Transport(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(transport_error)?;
    read_message(resp).await
}
