use crate::binder::temp_store::TempUploadStore;
use crate::service::error::ServiceError;
use axum::extract::Multipart;
use axum::extract::multipart::MultipartError;
use axum::http::{HeaderMap, StatusCode, header::CONTENT_TYPE};
use std::collections::HashMap;
use std::path::PathBuf;

/// A file part that has been fully written to the temp upload directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DecodedFilePart {
    pub(crate) disposition_name: String,
    pub(crate) local_path: PathBuf,
}

#[derive(Debug, Default)]
pub(crate) struct DecodedMultipart {
    pub(crate) form_data: HashMap<String, String>,
    pub(crate) file_data: Vec<DecodedFilePart>,
}

pub(crate) fn is_mime_multipart_content(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| {
            mime.trim()
                .get(..10)
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case("multipart/"))
        })
}

pub(crate) fn ensure_multipart(headers: &HeaderMap) -> Result<(), ServiceError> {
    if is_mime_multipart_content(headers) {
        Ok(())
    } else {
        Err(ServiceError::unsupported_media_type(
            "request content must be multipart/form-data",
        ))
    }
}

/// Maps a decode failure by the status axum assigns it, so a body cut off by
/// `DefaultBodyLimit` surfaces as 413 rather than a framing error.
pub(crate) fn invalid_multipart(error: MultipartError) -> ServiceError {
    let reason = error.body_text();
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ServiceError::payload_too_large(format!("multipart payload too large: {reason}"))
    } else {
        ServiceError::bad_request(format!("invalid multipart payload: {reason}"))
    }
}

/// Reads every part of the body.
///
/// Parts carrying a file name are streamed to `store` in arrival order; all
/// other parts are collected as text form fields, later duplicates winning.
pub(crate) async fn read_multipart(
    mut multipart: Multipart,
    store: &TempUploadStore,
) -> Result<DecodedMultipart, ServiceError> {
    let mut decoded = DecodedMultipart::default();

    while let Some(field) = multipart.next_field().await.map_err(invalid_multipart)? {
        let name = field.name().map(str::to_owned).unwrap_or_default();

        if field.file_name().is_some() {
            let local_path = store.write_part(field).await?;
            decoded.file_data.push(DecodedFilePart {
                disposition_name: name,
                local_path,
            });
        } else {
            let value = field.text().await.map_err(invalid_multipart)?;
            decoded.form_data.insert(name, value);
        }
    }

    Ok(decoded)
}
