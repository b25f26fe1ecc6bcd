use crate::binder::multipart::invalid_multipart;
use crate::service::error::ServiceError;
use axum::extract::multipart::Field;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

const BODY_PART_PREFIX: &str = "BodyPart_";

/// Scoped directory that receives uploaded file parts.
///
/// Files written here outlive the request; removing them is the caller's job.
#[derive(Debug, Clone)]
pub(crate) struct TempUploadStore {
    root: Arc<PathBuf>,
}

impl TempUploadStore {
    pub(crate) fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Arc::new(root.into()),
        }
    }

    pub(crate) fn root(&self) -> &Path {
        self.root.as_path()
    }

    pub(crate) async fn ensure_dir(&self) -> Result<(), ServiceError> {
        tokio::fs::create_dir_all(self.root.as_path())
            .await
            .map_err(|error| {
                ServiceError::internal(format!(
                    "failed to create upload directory {}: {error}",
                    self.root.display()
                ))
            })
    }

    /// Streams one file part to a fresh `BodyPart_<uuid>` file and returns its path.
    pub(crate) async fn write_part(&self, mut field: Field<'_>) -> Result<PathBuf, ServiceError> {
        let target_path = self
            .root
            .join(format!("{BODY_PART_PREFIX}{}", Uuid::new_v4().simple()));

        let mut file = tokio::fs::File::create(&target_path)
            .await
            .map_err(|error| persist_error(&target_path, error))?;

        while let Some(chunk) = field.chunk().await.map_err(invalid_multipart)? {
            file.write_all(&chunk)
                .await
                .map_err(|error| persist_error(&target_path, error))?;
        }

        file.sync_all()
            .await
            .map_err(|error| persist_error(&target_path, error))?;

        Ok(target_path)
    }
}

fn persist_error(path: &Path, error: std::io::Error) -> ServiceError {
    ServiceError::internal(format!(
        "failed to persist uploaded file {}: {error}",
        path.display()
    ))
}
