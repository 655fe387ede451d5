//! services/api/src/web/previews.rs
//!
//! Contains the Axum handlers for the code preview endpoints and the OpenAPI
//! definition of that surface. Static files under `/previews` are mounted by
//! the router, not here.

use crate::web::protocol::{HealthResponse, PreviewRequest, PreviewResponse};
use crate::web::state::PreviewState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};
use site_analyzer_core::domain::PreviewSource;
use site_analyzer_core::ports::PortError;
use std::sync::Arc;
use tracing::error;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(health_handler, create_preview_handler, get_preview_handler),
    components(schemas(PreviewRequest, PreviewResponse, HealthResponse)),
    tags(
        (name = "Preview Render API", description = "Renders HTML/CSS/JS into standalone preview pages.")
    )
)]
pub struct PreviewApiDoc;

/// Liveness check.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health_handler(State(state): State<Arc<PreviewState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: state.config.service.name().to_string(),
    })
}

/// Render submitted code into a standalone page and store it.
///
/// The body is decoded as JSON regardless of its content type.
#[utoipa::path(
    post,
    path = "/api/code/preview",
    request_body = PreviewRequest,
    responses(
        (status = 200, description = "Preview stored", body = PreviewResponse),
        (status = 400, description = "Invalid JSON"),
        (status = 500, description = "Failed to create preview")
    )
)]
pub async fn create_preview_handler(
    State(state): State<Arc<PreviewState>>,
    body: Bytes,
) -> Result<Json<PreviewResponse>, (StatusCode, String)> {
    let request: PreviewRequest = serde_json::from_slice(&body)
        .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid JSON".to_string()))?;

    let source = PreviewSource::from(request);

    match state.store.render_and_store(&source).await {
        Ok(handle) => Ok(Json(handle.into())),
        Err(e) => {
            error!("Failed to create preview: {:?}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create preview".to_string(),
            ))
        }
    }
}

/// Fetch a stored preview document as HTML.
#[utoipa::path(
    get,
    path = "/api/code/{id}",
    params(("id" = String, Path, description = "Preview id")),
    responses(
        (status = 200, description = "The preview document", content_type = "text/html", body = String),
        (status = 404, description = "Preview not found")
    )
)]
pub async fn get_preview_handler(
    State(state): State<Arc<PreviewState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    match state.store.fetch(&id).await {
        Ok(document) => Ok(([(header::CONTENT_TYPE, "text/html")], document)),
        Err(PortError::NotFound(_)) => {
            Err((StatusCode::NOT_FOUND, "Preview not found".to_string()))
        }
        Err(e) => {
            error!("Failed to read preview {}: {:?}", id, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to read preview".to_string(),
            ))
        }
    }
}
