//! HTTP server mode for order uploads

use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::{Error, Result};
use crate::pipeline::Pipeline;
use crate::types::OrderDocument;
use crate::upload::{self, RawUpload};

/// Default maximum upload size (10 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Server configuration
#[derive(Clone)]
pub struct ServerConfig {
    /// Pipeline shared by all requests
    pub pipeline: Pipeline,
    /// Request body limit in bytes
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    /// Config with the default upload limit
    pub fn new(pipeline: Pipeline) -> Self {
        Self {
            pipeline,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

/// App state shared across handlers
struct AppState {
    pipeline: Pipeline,
}

/// Build the application router
pub fn router(config: ServerConfig) -> Router {
    let state = AppState {
        pipeline: config.pipeline,
    };

    // Build CORS layer - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/languages", get(list_languages))
        .route("/process", post(process_file))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Start the HTTP server
pub async fn serve(config: ServerConfig, port: u16) -> Result<()> {
    let app = router(config);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::config(format!("Failed to bind to port {port}: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::config(format!("Server error: {e}")))?;

    Ok(())
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// List known languages
async fn list_languages(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let catalog = state.pipeline.catalog();
    Json(json!({
        "default": catalog.default_language(),
        "languages": catalog.languages(),
    }))
}

/// Process an uploaded CSV file
///
/// Multipart fields: `file` (the CSV) and `language` (optional code).
async fn process_file(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut language: Option<String> = None;
    let mut upload: Option<RawUpload> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "Malformed multipart request");
                return (e.status(), Json(OrderDocument::failure(e.body_text())))
                    .into_response();
            }
        };

        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("language") => match field.text().await {
                Ok(text) => language = Some(text),
                Err(e) => {
                    return (e.status(), Json(OrderDocument::failure(e.body_text())))
                        .into_response()
                }
            },
            Some("file") => {
                let filename = field.file_name().map(str::to_string);
                match field.bytes().await {
                    Ok(bytes) => {
                        upload = Some(RawUpload {
                            filename,
                            bytes: bytes.to_vec(),
                        });
                    }
                    Err(e) => {
                        return (e.status(), Json(OrderDocument::failure(e.body_text())))
                            .into_response()
                    }
                }
            }
            _ => {}
        }
    }

    let language = language
        .unwrap_or_else(|| state.pipeline.catalog().default_language().to_string());
    let document = upload::process(&state.pipeline, upload.as_ref(), &language);

    (StatusCode::OK, Json(document)).into_response()
}
