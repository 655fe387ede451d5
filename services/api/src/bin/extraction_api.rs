//! services/api/src/bin/extraction_api.rs

use api_lib::{
    adapters::MemoryExtractionStore,
    config::{Config, ServiceKind},
    error::ApiError,
    web::{extraction_router, state::ExtractionState, ExtractionApiDoc},
};
use axum::Router;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env(ServiceKind::Extraction)?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting {}...", config.service.name());

    // --- 2. Build the Store & Shared State ---
    // Extractions live only in this process; they are gone after a restart.
    let store = Arc::new(MemoryExtractionStore::with_capacity_limit(
        config.max_extractions,
    ));
    match config.max_extractions {
        Some(max) => info!("Keeping at most {} extractions", max),
        None => warn!("Extraction store is uncapped; memory grows with every analysis"),
    }
    let app_state = Arc::new(ExtractionState {
        store,
        config: config.clone(),
    });

    // --- 3. Create the Web Router ---
    let app = Router::new()
        .merge(extraction_router(app_state))
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", ExtractionApiDoc::openapi()),
        );

    // --- 4. Start the Server ---
    info!("Starting server on {}", config.bind_address);
    info!(
        "Swagger UI available at http://{}/swagger-ui",
        config.bind_address
    );
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
