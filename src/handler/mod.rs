pub(crate) mod content_handler;
mod error_mapper;
pub(crate) mod health_handler;
pub(crate) mod response;

use crate::binder::ContentItemBinder;
use crate::handler::response::ApiResponse;
use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

pub(crate) fn api_v1_router(binder: ContentItemBinder) -> Router {
    Router::new().merge(content_handler::router(binder))
}

pub(super) fn success_response<T: Serialize>(
    status: StatusCode,
    data: T,
    request_id: Option<String>,
) -> Response {
    ApiResponse::success_with_status(data, status)
        .with_request_id(request_id)
        .into_response()
}
