use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

/// Envelope shared by every API response.
#[derive(Debug, Serialize)]
pub(crate) struct ApiResponse<T> {
    pub(crate) success: bool,
    pub(crate) data: Option<T>,
    pub(crate) error: Option<String>,
    pub(crate) request_id: Option<String>,
    pub(crate) status_code: Option<u16>,
}

impl<T> ApiResponse<T> {
    pub(crate) fn success_with_status(data: T, status: StatusCode) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            request_id: None,
            status_code: Some(status.as_u16()),
        }
    }

    pub(crate) fn error_with_status(error: String, status: StatusCode) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            request_id: None,
            status_code: Some(status.as_u16()),
        }
    }

    pub(crate) fn with_request_id(mut self, request_id: Option<String>) -> Self {
        self.request_id = request_id;
        self
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        let default_status = if self.success {
            StatusCode::OK
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        let status = self
            .status_code
            .and_then(|code| StatusCode::from_u16(code).ok())
            .unwrap_or(default_status);

        (status, Json(self)).into_response()
    }
}
