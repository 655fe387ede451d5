//! services/api/src/bin/preview_api.rs

use api_lib::{
    adapters::FsPreviewStore,
    config::{Config, ServiceKind},
    error::ApiError,
    web::{preview_router, state::PreviewState, PreviewApiDoc},
};
use axum::Router;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env(ServiceKind::Preview)?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting {}...", config.service.name());

    // --- 2. Prepare the Preview Directory ---
    info!("Using preview directory {}", config.preview_dir.display());
    tokio::fs::create_dir_all(&config.preview_dir).await?;

    // --- 3. Build the Store & Shared State ---
    let app_state = Arc::new(PreviewState {
        store: Arc::new(FsPreviewStore::new(config.preview_dir.clone())),
        config: config.clone(),
    });

    // --- 4. Create the Web Router ---
    let app = Router::new()
        .merge(preview_router(app_state))
        .merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", PreviewApiDoc::openapi()),
        );

    // --- 5. Start the Server ---
    info!("Starting server on {}", config.bind_address);
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
