use sea_orm::DbErr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ServiceErrorKind {
    BadRequest,
    UnsupportedMediaType,
    PayloadTooLarge,
    Deserialization,
    NotFound,
    UnmatchedProperty,
    Internal,
}

#[derive(Debug, Clone)]
pub(crate) struct ServiceError {
    kind: ServiceErrorKind,
    message: String,
    request_id: Option<String>,
}

impl ServiceError {
    pub(crate) fn new(kind: ServiceErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            request_id: None,
        }
    }

    /// Tags the error with the id of the request that produced it.
    pub(crate) fn with_request_id(mut self, request_id: Option<String>) -> Self {
        self.request_id = request_id;
        self
    }

    pub(crate) fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ServiceErrorKind::BadRequest, message)
    }

    pub(crate) fn unsupported_media_type(message: impl Into<String>) -> Self {
        Self::new(ServiceErrorKind::UnsupportedMediaType, message)
    }

    pub(crate) fn payload_too_large(message: impl Into<String>) -> Self {
        Self::new(ServiceErrorKind::PayloadTooLarge, message)
    }

    pub(crate) fn deserialization(message: impl Into<String>) -> Self {
        Self::new(ServiceErrorKind::Deserialization, message)
    }

    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Self::new(ServiceErrorKind::NotFound, message)
    }

    pub(crate) fn unmatched_property(message: impl Into<String>) -> Self {
        Self::new(ServiceErrorKind::UnmatchedProperty, message)
    }

    pub(crate) fn internal(message: impl Into<String>) -> Self {
        Self::new(ServiceErrorKind::Internal, message)
    }

    pub(crate) fn kind(&self) -> ServiceErrorKind {
        self.kind
    }

    pub(crate) fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ServiceError {}

pub(crate) fn map_db_error(error: DbErr) -> ServiceError {
    match error {
        DbErr::RecordNotFound(message) => ServiceError::not_found(message),
        DbErr::Json(message) | DbErr::Type(message) => ServiceError::bad_request(message),
        other => ServiceError::internal(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_record_not_found_to_not_found() {
        let error = map_db_error(DbErr::RecordNotFound("content 9".to_string()));
        assert_eq!(error.kind(), ServiceErrorKind::NotFound);
        assert_eq!(error.message(), "content 9");
    }

    #[test]
    fn maps_other_db_errors_to_internal() {
        let error = map_db_error(DbErr::Custom("boom".to_string()));
        assert_eq!(error.kind(), ServiceErrorKind::Internal);
    }

    #[test]
    fn request_id_is_attached_on_demand() {
        let error = ServiceError::not_found("missing");
        assert_eq!(error.request_id(), None);

        let error = error.with_request_id(Some("edit-7".to_string()));
        assert_eq!(error.request_id(), Some("edit-7"));
        assert_eq!(error.kind(), ServiceErrorKind::NotFound);
    }
}
