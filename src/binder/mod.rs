//! Binds a multipart `contentItem` post into a merged [`ContentItemSave`].
//!
//! The pipeline runs as one async call chain: media type check, temp
//! directory setup, multipart decode, save model assembly, then the merge
//! against the persisted content. Any failure aborts the whole bind.

pub(crate) mod assemble;
pub(crate) mod file_name;
pub(crate) mod merge;
pub(crate) mod multipart;
pub(crate) mod temp_store;

use crate::binder::assemble::assemble_save_model;
use crate::binder::merge::ContentMerger;
use crate::binder::multipart::{ensure_multipart, read_multipart};
use crate::binder::temp_store::TempUploadStore;
use crate::model::{ContentItemDto, ContentItemSave};
use crate::service::error::ServiceError;
use axum::extract::{FromRequest, Multipart, Request};
use tracing::debug;

#[derive(Clone)]
pub(crate) struct ContentItemBinder {
    temp_store: TempUploadStore,
    merger: ContentMerger,
}

impl ContentItemBinder {
    pub(crate) fn new(temp_store: TempUploadStore, merger: ContentMerger) -> Self {
        Self { temp_store, merger }
    }

    pub(crate) async fn bind(&self, request: Request) -> Result<ContentItemSave, ServiceError> {
        ensure_multipart(request.headers())?;
        self.temp_store.ensure_dir().await?;

        let multipart = Multipart::from_request(request, &())
            .await
            .map_err(|rejection| {
                ServiceError::bad_request(format!("invalid multipart payload: {rejection}"))
            })?;

        let decoded = read_multipart(multipart, &self.temp_store).await?;
        debug!(
            fields = decoded.form_data.len(),
            files = decoded.file_data.len(),
            upload_root = %self.temp_store.root().display(),
            "multipart body decoded"
        );

        let model = assemble_save_model(decoded)?;
        self.merger.merge(model).await
    }

    pub(crate) async fn editable_content(&self, id: i32) -> Result<ContentItemDto, ServiceError> {
        self.merger.editable_content(id).await
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::binder::merge::UnmatchedPropertyPolicy;
    use crate::service::content_mapper::DefaultContentMapper;
    use crate::service::content_store::test_support::{InMemoryContentStore, sample_content};
    use axum::body::Body;
    use axum::http::{Method, header::CONTENT_TYPE};
    use std::path::Path;
    use std::sync::Arc;

    pub(crate) const BOUNDARY: &str = "content-binder-test-boundary";

    pub(crate) enum MultipartPart<'a> {
        Text(&'a str, &'a str),
        File(&'a str, &'a [u8]),
    }

    pub(crate) fn multipart_body(parts: &[MultipartPart<'_>]) -> Vec<u8> {
        let mut body = Vec::new();
        for part in parts {
            match part {
                MultipartPart::Text(name, value) => {
                    body.extend_from_slice(
                        format!(
                            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n"
                        )
                        .as_bytes(),
                    );
                    body.extend_from_slice(value.as_bytes());
                }
                MultipartPart::File(name, bytes) => {
                    body.extend_from_slice(
                        format!(
                            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{name}.bin\"\r\nContent-Type: application/octet-stream\r\n\r\n"
                        )
                        .as_bytes(),
                    );
                    body.extend_from_slice(bytes);
                }
            }
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    pub(crate) fn multipart_request(parts: &[MultipartPart<'_>]) -> Request {
        axum::http::Request::builder()
            .method(Method::POST)
            .uri("/content/save")
            .header(
                CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(multipart_body(parts)))
            .expect("valid request")
    }

    pub(crate) fn sample_binder(
        upload_root: &Path,
        policy: UnmatchedPropertyPolicy,
    ) -> ContentItemBinder {
        ContentItemBinder::new(
            TempUploadStore::new(upload_root),
            ContentMerger::new(
                Arc::new(InMemoryContentStore::default().with(sample_content(5))),
                Arc::new(DefaultContentMapper),
                policy,
            ),
        )
    }
}
