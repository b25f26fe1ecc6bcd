//! Logging initialization and request logging middleware.

use axum::{
    extract::{FromRequestParts, Request},
    http::{HeaderName, HeaderValue, request::Parts},
    middleware::Next,
    response::Response,
};
use std::convert::Infallible;
use std::str::FromStr;
use std::time::Instant;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{EnvFilter, prelude::*};

pub(crate) const REQUEST_ID_HEADER: &str = "x-request-id";
const MAX_REQUEST_ID_LEN: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum LogFormat {
    Json,
    #[default]
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            other => Err(format!(
                "unknown log format `{other}`, expected `json` or `pretty`"
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct RequestId(pub(crate) String);

/// Extracts the id assigned by [`request_logging_middleware`], or `None` when
/// the middleware is not installed.
#[derive(Debug, Clone, Default)]
pub(crate) struct CurrentRequestId(pub(crate) Option<String>);

impl<S: Send + Sync> FromRequestParts<S> for CurrentRequestId {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(
            parts
                .extensions
                .get::<RequestId>()
                .map(|RequestId(id)| id.clone()),
        ))
    }
}

fn is_valid_request_id(raw: &str) -> bool {
    !raw.is_empty()
        && raw.len() <= MAX_REQUEST_ID_LEN
        && raw
            .bytes()
            .all(|byte| byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b':'))
}

fn normalized_request_id(candidate: Option<&str>) -> String {
    if let Some(raw) = candidate {
        let trimmed = raw.trim();
        if is_valid_request_id(trimmed) {
            return trimmed.to_string();
        }
    }

    uuid::Uuid::new_v4().to_string()
}

pub(crate) fn init_logging(format: LogFormat) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    let layer = tracing_subscriber::fmt::layer().with_target(false);

    let init_result = match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(layer.json())
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(env_filter)
            .with(layer.pretty())
            .try_init(),
    };

    if let Err(err) = init_result {
        // Tests and embedding binaries may have installed a subscriber already.
        if err.to_string().contains("already been set") {
            return Ok(());
        }
        return Err(Box::new(err));
    }

    info!(?format, "Logging system initialized");
    Ok(())
}

pub(crate) async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let start_time = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let request_id = normalized_request_id(
        request
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|h| h.to_str().ok()),
    );
    let mut request = request;
    request
        .extensions_mut()
        .insert(RequestId(request_id.clone()));

    info!(
        request_id = %request_id,
        method = %method,
        path = %path,
        "Request started"
    );

    let mut response = next.run(request).await;
    let duration_ms = start_time.elapsed().as_millis();
    let status = response.status();

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }

    match status.as_u16() {
        200..=299 => info!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = %status,
            duration_ms,
            "Request completed successfully"
        ),
        400..=499 => warn!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = %status,
            duration_ms,
            "Client error"
        ),
        500..=599 => error!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = %status,
            duration_ms,
            "Server error"
        ),
        _ => debug!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = %status,
            duration_ms,
            "Request completed"
        ),
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        middleware,
        routing::get,
    };
    use tower::ServiceExt;

    async fn ok_handler() -> &'static str {
        "ok"
    }

    fn app() -> Router {
        Router::new()
            .route("/", get(ok_handler))
            .layer(middleware::from_fn(request_logging_middleware))
    }

    fn response_request_id(response: &Response) -> String {
        response
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|h| h.to_str().ok())
            .unwrap_or("")
            .to_string()
    }

    #[test]
    fn parses_log_formats() {
        assert_eq!("JSON".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!("pretty".parse::<LogFormat>(), Ok(LogFormat::Pretty));
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[tokio::test]
    async fn generated_request_id_is_added_to_response_header() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(!response_request_id(&response).is_empty());
    }

    #[tokio::test]
    async fn provided_request_id_is_preserved() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(REQUEST_ID_HEADER, "edit-42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response_request_id(&response), "edit-42");
    }

    #[tokio::test]
    async fn invalid_request_id_is_replaced() {
        let invalid = "bad id with spaces";
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(REQUEST_ID_HEADER, invalid)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let request_id = response_request_id(&response);
        assert_ne!(request_id, invalid);
        assert!(is_valid_request_id(&request_id));
    }

    #[tokio::test]
    async fn handlers_see_the_assigned_request_id() {
        async fn echo(CurrentRequestId(request_id): CurrentRequestId) -> String {
            request_id.unwrap_or_else(|| "none".to_string())
        }

        let request = || {
            Request::builder()
                .uri("/")
                .header(REQUEST_ID_HEADER, "edit-42")
                .body(Body::empty())
                .unwrap()
        };

        let with_middleware = Router::new()
            .route("/", get(echo))
            .layer(middleware::from_fn(request_logging_middleware));
        let response = with_middleware.oneshot(request()).await.unwrap();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"edit-42");

        let bare = Router::new().route("/", get(echo));
        let response = bare.oneshot(request()).await.unwrap();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"none");
    }
}
