use crate::handler::response::ApiResponse;
use crate::service::error::{ServiceError, ServiceErrorKind};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;

fn status_code_for(kind: ServiceErrorKind) -> StatusCode {
    match kind {
        ServiceErrorKind::BadRequest | ServiceErrorKind::Deserialization => StatusCode::BAD_REQUEST,
        ServiceErrorKind::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        ServiceErrorKind::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        ServiceErrorKind::NotFound => StatusCode::NOT_FOUND,
        ServiceErrorKind::UnmatchedProperty => StatusCode::UNPROCESSABLE_ENTITY,
        ServiceErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = status_code_for(self.kind());
        ApiResponse::<Value>::error_with_status(self.message().to_string(), status)
            .with_request_id(self.request_id().map(str::to_owned))
            .into_response()
    }
}
