use crate::shared::api_utils::{api_url, read_json, transport_error};
use contracts::shared::ApiError;
use contracts::usecases::u501_import_from_excel::{ImportSummary, UPLOAD_FIELD_NAME};
use gloo_net::http::Request;
use web_sys::{File, FormData};

/// `POST /upload/excel` as multipart form data.
///
/// The browser sets the multipart boundary, so no Content-Type header here.
pub async fn upload_excel(file: &File) -> Result<ImportSummary, ApiError> {
    let form_data =
        FormData::new().map_err(|e| ApiError::Transport(format!("FormData: {:?}", e)))?;
    form_data
        .append_with_blob_and_filename(UPLOAD_FIELD_NAME, file, &file.name())
        .map_err(|e| ApiError::Transport(format!("FormData: {:?}", e)))?;

    let resp = Request::post(&api_url("/upload/excel"))
        .header("Accept", "application/json")
        .body(form_data)
        .map_err(transport_error)?
        .send()
        .await
        .map_err(transport_error)?;
    read_json(resp).await
}
