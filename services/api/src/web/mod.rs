pub mod extractions;
pub mod previews;
pub mod protocol;
pub mod state;

use crate::config::Config;
use axum::{
    extract::DefaultBodyLimit,
    http::Method,
    routing::{get, post},
    Router,
};
use state::{ExtractionState, PreviewState};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

// Re-export the OpenAPI documents so binaries can mount Swagger UI.
pub use extractions::ExtractionApiDoc;
pub use previews::PreviewApiDoc;

/// Both surfaces are open to every origin.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
}

fn body_limit(config: &Config) -> DefaultBodyLimit {
    match config.max_body_bytes {
        Some(max) => DefaultBodyLimit::max(max),
        None => DefaultBodyLimit::disable(),
    }
}

/// Builds the extraction store router.
pub fn extraction_router(state: Arc<ExtractionState>) -> Router {
    let limit = body_limit(&state.config);

    Router::new()
        .route("/health", get(extractions::health_handler))
        .route("/api/analyze", post(extractions::analyze_handler))
        .route("/api/extractions", get(extractions::list_extractions_handler))
        .route(
            "/api/extractions/{id}",
            get(extractions::get_extraction_handler)
                .delete(extractions::delete_extraction_handler),
        )
        .route(
            "/api/extractions/{id}/report",
            get(extractions::extraction_report_handler),
        )
        .layer(limit)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Builds the preview render router, including static serving of the preview directory.
pub fn preview_router(state: Arc<PreviewState>) -> Router {
    let limit = body_limit(&state.config);
    let static_files = ServeDir::new(&state.config.preview_dir);

    Router::new()
        .route("/health", get(previews::health_handler))
        .route("/api/code/preview", post(previews::create_preview_handler))
        .route("/api/code/{id}", get(previews::get_preview_handler))
        .nest_service("/previews", static_files)
        .layer(limit)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
