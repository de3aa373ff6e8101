use super::state::SubmitPlan;
use crate::shared::api_utils::{api_url, read_json, read_message, transport_error};
use contracts::domain::a001_employee::{Employee, EmployeeId};
use contracts::domain::common::AggregateId;
use contracts::shared::ApiError;
use gloo_net::http::Request;

/// `GET /submission/{id}`
pub async fn fetch_by_id(id: EmployeeId) -> Result<Employee, ApiError> {
    let url = api_url(&format!("/submission/{}", id.as_string()));
    let resp = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(transport_error)?;
    read_json(resp).await
}

/// `POST /submit` or `PUT /submission/{id}` depending on the plan.
///
/// Returns the service's success message, if it sent one.
pub async fn save(plan: &SubmitPlan) -> Result<Option<String>, ApiError> {
    let builder = match plan {
        SubmitPlan::Create(_) => Request::post(&api_url("/submit")),
        SubmitPlan::Update(id, _) => {
            Request::put(&api_url(&format!("/submission/{}", id.as_string())))
        }
    };
    let resp = builder
        .json(plan.payload())
        .map_err(|e| ApiError::Transport(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(transport_error)?;
    read_message(resp).await
}
