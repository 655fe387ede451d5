//! services/api/src/web/state.rs
//!
//! Defines the shared states of the two services.

use crate::config::Config;
use site_analyzer_core::ports::{ExtractionStore, PreviewStore};
use std::sync::Arc;

/// Shared state of the extraction service, created once at startup and passed to all handlers.
#[derive(Clone)]
pub struct ExtractionState {
    pub store: Arc<dyn ExtractionStore>,
    pub config: Arc<Config>,
}

/// Shared state of the preview service. Static files under `/previews` are served
/// from `config.preview_dir`, which must be the directory the store writes to.
#[derive(Clone)]
pub struct PreviewState {
    pub store: Arc<dyn PreviewStore>,
    pub config: Arc<Config>,
}
