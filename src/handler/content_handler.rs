use crate::binder::ContentItemBinder;
use crate::handler::success_response;
use crate::logging::CurrentRequestId;
use crate::model::{ContentItemSave, PropertyChange};
use crate::service::error::ServiceError;
use axum::{
    Router,
    extract::{Path, Request},
    http::StatusCode,
    response::Response,
    routing::{get, post},
};
use serde::Serialize;
use tracing::info;

/// The bound save model plus its field-level differences.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct SavePreview {
    #[serde(flatten)]
    model: ContentItemSave,
    changes: Vec<PropertyChange>,
}

pub(crate) fn router(binder: ContentItemBinder) -> Router {
    let save_binder = binder.clone();
    let get_binder = binder;

    Router::new()
        .route(
            "/content/save",
            post(move |request_id: CurrentRequestId, request: Request| {
                save_content(save_binder.clone(), request_id, request)
            }),
        )
        .route(
            "/content/{id}",
            get(move |request_id: CurrentRequestId, Path(id): Path<i32>| {
                get_content(get_binder.clone(), request_id, id)
            }),
        )
}

async fn save_content(
    binder: ContentItemBinder,
    CurrentRequestId(request_id): CurrentRequestId,
    request: Request,
) -> Result<Response, ServiceError> {
    let model = binder
        .bind(request)
        .await
        .map_err(|error| error.with_request_id(request_id.clone()))?;
    let changes = model.changed_properties();

    info!(
        request_id = request_id.as_deref().unwrap_or_default(),
        content_id = model.id,
        edits = model.properties.len(),
        uploads = model.uploaded_files.len(),
        changes = changes.len(),
        "content item bound"
    );

    Ok(success_response(
        StatusCode::OK,
        SavePreview { model, changes },
        request_id,
    ))
}

async fn get_content(
    binder: ContentItemBinder,
    CurrentRequestId(request_id): CurrentRequestId,
    id: i32,
) -> Result<Response, ServiceError> {
    let dto = binder
        .editable_content(id)
        .await
        .map_err(|error| error.with_request_id(request_id.clone()))?;
    Ok(success_response(StatusCode::OK, dto, request_id))
}
