//! HTTP submission of an image to the prediction endpoint.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::types::{ClassifyError, ClassifyResult, PredictResponse};
use crate::API_BASE_URL;

/// Submit an image to the prediction endpoint and parse the result.
///
/// Exactly one request per call: a multipart body with a single
/// `image` field. A transport failure, a non-2xx status, and a
/// malformed body are all classification failures, distinguished only
/// by the error variant.
pub async fn classify_image(file: &File) -> ClassifyResult<PredictResponse> {
    let form_data = FormData::new()
        .map_err(|e| ClassifyError::Transport(format!("failed to create form data: {:?}", e)))?;

    form_data
        .append_with_blob("image", file)
        .map_err(|e| ClassifyError::Transport(format!("failed to append file: {:?}", e)))?;

    let url = format!("{}/predict", API_BASE_URL);
    let request = Request::post(&url)
        .body(form_data)
        .map_err(|e| ClassifyError::Transport(format!("failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| ClassifyError::Transport(e.to_string()))?;

    if !response.ok() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ClassifyError::Server(format!(
            "server returned {}: {}",
            response.status(),
            error_text
        )));
    }

    response
        .json::<PredictResponse>()
        .await
        .map_err(|e| ClassifyError::Server(format!("unexpected response body: {}", e)))
}
