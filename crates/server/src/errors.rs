use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

/// Error surfaced to HTTP clients as a status code plus a JSON body of the
/// shape `{"error": <title>, "detail": <detail>}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: String,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &str, detail: Option<String>) -> Self {
        Self { status, title: title.to_string(), detail }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, error = %self.title, detail = ?self.detail, "request failed");
        }
        let body = serde_json::json!({"error": self.title, "detail": self.detail});
        (self.status, Json(body)).into_response()
    }
}
