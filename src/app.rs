use crate::binder::ContentItemBinder;
use crate::binder::merge::ContentMerger;
use crate::binder::temp_store::TempUploadStore;
use crate::config::{AppSettings, init_upload_temp_dir};
use crate::handler::{api_v1_router, health_handler::ping};
use crate::logging::{init_logging, request_logging_middleware};
use crate::service::content_mapper::DefaultContentMapper;
use crate::service::content_store::DbContentStore;
use axum::{Router, extract::DefaultBodyLimit, middleware, routing::get};
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use std::{path::PathBuf, sync::Arc};
use tracing::{error, info};

fn build_router(
    db: Arc<DatabaseConnection>,
    upload_temp_dir: PathBuf,
    settings: &AppSettings,
) -> Router {
    let merger = ContentMerger::new(
        Arc::new(DbContentStore::new(db)),
        Arc::new(DefaultContentMapper),
        settings.unmatched_property_policy,
    );
    let binder = ContentItemBinder::new(TempUploadStore::new(upload_temp_dir), merger);

    Router::new()
        .route("/ping", get(ping))
        .nest("/api/v1", api_v1_router(binder))
        .layer(DefaultBodyLimit::max(settings.max_upload_bytes))
        .layer(middleware::from_fn(request_logging_middleware))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "Failed to install Ctrl+C signal handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                error!(error = %err, "Failed to install SIGTERM signal handler");
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let signal = tokio::select! {
        _ = ctrl_c => "Ctrl+C",
        _ = terminate => "SIGTERM",
    };

    info!(signal, "Shutdown signal received, starting graceful shutdown");
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = AppSettings::from_env()?;
    init_logging(settings.log_format)?;

    let upload_temp_dir = init_upload_temp_dir(&settings.upload_temp_dir)?;

    let db = Database::connect(settings.database_url.as_str()).await?;
    Migrator::up(&db, None).await?;

    let router = build_router(Arc::new(db), upload_temp_dir.clone(), &settings);

    let listener = tokio::net::TcpListener::bind((settings.host.as_str(), settings.port)).await?;
    info!(
        host = %settings.host,
        port = settings.port,
        upload_temp_dir = %upload_temp_dir.display(),
        policy = ?settings.unmatched_property_policy,
        "Content binder listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binder::test_support::{BOUNDARY, MultipartPart, multipart_body};
    use crate::logging::REQUEST_ID_HEADER;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode, header::CONTENT_TYPE},
        response::Response,
    };
    use tempfile::TempDir;
    use tower::ServiceExt;

    async fn test_router(max_upload_bytes: usize) -> (Router, TempDir) {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("in-memory sqlite should open");
        Migrator::up(&db, None)
            .await
            .expect("migrations should apply");

        let mut settings = AppSettings::from_lookup(|_| None).expect("default settings");
        settings.max_upload_bytes = max_upload_bytes;

        let upload_root = tempfile::tempdir().expect("tempdir");
        let router = build_router(Arc::new(db), upload_root.path().to_path_buf(), &settings);
        (router, upload_root)
    }

    async fn json_body(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn ping_answers_pong() {
        let (router, _upload_root) = test_router(1024).await;
        let response = router
            .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["message"], "pong");
    }

    #[tokio::test]
    async fn missing_content_is_not_found_through_the_database() {
        let (router, _upload_root) = test_router(1024).await;
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/v1/content/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
    }

    #[tokio::test]
    async fn error_envelope_echoes_the_request_id() {
        let (router, _upload_root) = test_router(1024).await;
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/v1/content/9")
                    .header(REQUEST_ID_HEADER, "abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = json_body(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["request_id"], "abc");
        assert_eq!(body["status_code"], 404);
    }

    #[tokio::test]
    async fn upload_over_the_body_limit_is_payload_too_large() {
        let (router, _upload_root) = test_router(1024).await;
        let oversized = vec![b'x'; 4096];
        let body = multipart_body(&[
            MultipartPart::Text("contentItem", r#"{"Id":1,"Properties":[]}"#),
            MultipartPart::File("upload_1", &oversized),
        ]);

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/content/save")
                    .header(
                        CONTENT_TYPE,
                        format!("multipart/form-data; boundary={BOUNDARY}"),
                    )
                    .header(REQUEST_ID_HEADER, "big-upload")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let body = json_body(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["request_id"], "big-upload");
        assert!(
            body["error"]
                .as_str()
                .is_some_and(|reason| reason.contains("too large"))
        );
    }
}
