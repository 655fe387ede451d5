//! services/api/src/web/extractions.rs
//!
//! Contains the Axum handlers for the extraction store endpoints and the
//! OpenAPI definition of that surface. Every JSON response is wrapped in an
//! [`Envelope`].

use crate::web::protocol::{
    AnalyzeRequest, AssetView, Envelope, ExtractionView, FrameworkView, HealthResponse,
    ListParams, ReportSummary, ReportView,
};
use crate::web::state::ExtractionState;
use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use site_analyzer_core::domain::resolve_list_limit;
use site_analyzer_core::ports::PortError;
use std::sync::Arc;
use tracing::error;
use utoipa::OpenApi;

//=========================================================================================
// OpenAPI Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        health_handler,
        analyze_handler,
        list_extractions_handler,
        get_extraction_handler,
        extraction_report_handler,
        delete_extraction_handler,
    ),
    components(
        schemas(
            AnalyzeRequest,
            ExtractionView,
            AssetView,
            FrameworkView,
            ReportView,
            ReportSummary,
            HealthResponse
        )
    ),
    tags(
        (name = "Extraction Store API", description = "Synthetic website analysis records kept in memory.")
    )
)]
pub struct ExtractionApiDoc;

//=========================================================================================
// Error Mapping
//=========================================================================================

type Failure = (StatusCode, Json<Envelope<()>>);

fn failure(status: StatusCode, message: &str) -> Failure {
    (status, Json(Envelope::failure(message)))
}

/// Maps a port error onto the envelope; `internal` is the message shown for 500s.
fn port_failure(err: PortError, internal: &str) -> Failure {
    match err {
        PortError::InvalidInput(message) => failure(StatusCode::BAD_REQUEST, &message),
        PortError::NotFound(_) => failure(StatusCode::NOT_FOUND, "Extraction not found"),
        other => {
            error!("Extraction store failure: {:?}", other);
            failure(StatusCode::INTERNAL_SERVER_ERROR, internal)
        }
    }
}

//=========================================================================================
// Handlers
//=========================================================================================

/// Liveness check.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health_handler(State(state): State<Arc<ExtractionState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: state.config.service.name().to_string(),
    })
}

/// Analyze a URL and store the synthetic report.
///
/// The body is decoded as JSON regardless of its content type.
#[utoipa::path(
    post,
    path = "/api/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Extraction created, wrapped in the success envelope", body = ExtractionView),
        (status = 400, description = "Missing body, missing URL or unparseable URL"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn analyze_handler(
    State(state): State<Arc<ExtractionState>>,
    body: Bytes,
) -> Result<Json<Envelope<ExtractionView>>, Failure> {
    let request: AnalyzeRequest = serde_json::from_slice(&body).map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(Envelope::failure("Invalid request body").with_errors(vec![e.to_string()])),
        )
    })?;

    let url = request.url.unwrap_or_default();
    let extraction = state
        .store
        .create(&url)
        .await
        .map_err(|e| port_failure(e, "Failed to analyze website"))?;

    Ok(Json(Envelope::data(extraction.into())))
}

/// List the most recent extractions, newest first.
#[utoipa::path(
    get,
    path = "/api/extractions",
    params(
        ("limit" = Option<String>, Query, description = "Maximum number of records. Defaults to 10; non-positive or non-numeric values also mean 10.")
    ),
    responses(
        (status = 200, description = "Extractions, wrapped in the success envelope", body = [ExtractionView])
    )
)]
pub async fn list_extractions_handler(
    State(state): State<Arc<ExtractionState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Envelope<Vec<ExtractionView>>>, Failure> {
    let limit = resolve_list_limit(params.limit.as_deref());
    let extractions = state
        .store
        .list(limit)
        .await
        .map_err(|e| port_failure(e, "Failed to list extractions"))?;

    Ok(Json(Envelope::data(
        extractions.into_iter().map(ExtractionView::from).collect(),
    )))
}

/// Fetch one extraction by id.
#[utoipa::path(
    get,
    path = "/api/extractions/{id}",
    params(("id" = String, Path, description = "Extraction id")),
    responses(
        (status = 200, description = "Extraction, wrapped in the success envelope", body = ExtractionView),
        (status = 404, description = "Extraction not found")
    )
)]
pub async fn get_extraction_handler(
    State(state): State<Arc<ExtractionState>>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<ExtractionView>>, Failure> {
    let extraction = state
        .store
        .get(&id)
        .await
        .map_err(|e| port_failure(e, "Failed to load extraction"))?;

    Ok(Json(Envelope::data(extraction.into())))
}

/// Summarize one extraction as a report.
#[utoipa::path(
    get,
    path = "/api/extractions/{id}/report",
    params(("id" = String, Path, description = "Extraction id")),
    responses(
        (status = 200, description = "Report, wrapped in the success envelope", body = ReportView),
        (status = 404, description = "Extraction not found")
    )
)]
pub async fn extraction_report_handler(
    State(state): State<Arc<ExtractionState>>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<ReportView>>, Failure> {
    let extraction = state
        .store
        .get(&id)
        .await
        .map_err(|e| port_failure(e, "Failed to build report"))?;

    Ok(Json(Envelope::data(extraction.report().into())))
}

/// Delete one extraction by id. Deleting twice yields 404.
#[utoipa::path(
    delete,
    path = "/api/extractions/{id}",
    params(("id" = String, Path, description = "Extraction id")),
    responses(
        (status = 200, description = "Extraction deleted"),
        (status = 404, description = "Extraction not found")
    )
)]
pub async fn delete_extraction_handler(
    State(state): State<Arc<ExtractionState>>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<()>>, Failure> {
    state
        .store
        .delete(&id)
        .await
        .map_err(|e| port_failure(e, "Failed to delete extraction"))?;

    Ok(Json(Envelope::message("Extraction deleted")))
}
