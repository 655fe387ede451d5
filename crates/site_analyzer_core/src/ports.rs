//! crates/site_analyzer_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the core
//! to be independent of where extractions and previews actually live.

use async_trait::async_trait;

use crate::domain::{Extraction, PreviewHandle, PreviewSource};

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Write failed: {0}")]
    WriteError(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// Owns the collection of extractions. Implementations serialize access so
/// that concurrent callers observe a single consistent history.
#[async_trait]
pub trait ExtractionStore: Send + Sync {
    /// Analyzes `url` and appends the resulting record.
    async fn create(&self, url: &str) -> PortResult<Extraction>;

    /// Returns at most `limit` records, newest first.
    async fn list(&self, limit: usize) -> PortResult<Vec<Extraction>>;

    async fn get(&self, id: &str) -> PortResult<Extraction>;

    /// Removes the record. A second delete of the same id is `NotFound`.
    async fn delete(&self, id: &str) -> PortResult<()>;
}

/// Renders submitted code into standalone documents and keeps them addressable by id.
#[async_trait]
pub trait PreviewStore: Send + Sync {
    async fn render_and_store(&self, source: &PreviewSource) -> PortResult<PreviewHandle>;

    /// Returns the stored document bytes exactly as written.
    async fn fetch(&self, id: &str) -> PortResult<Vec<u8>>;
}
