//! services/api/src/adapters/memory_store.rs
//!
//! This module contains the in-memory extraction store, the concrete implementation
//! of the `ExtractionStore` port from the `core` crate. Records live in an ordered
//! `Vec` behind a single lock; nothing survives a process restart.

use async_trait::async_trait;
use site_analyzer_core::analyzer;
use site_analyzer_core::domain::Extraction;
use site_analyzer_core::ports::{ExtractionStore, PortError, PortResult};
use tokio::sync::RwLock;
use tracing::{debug, info};

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An extraction store that keeps records in creation order.
#[derive(Default)]
pub struct MemoryExtractionStore {
    extractions: RwLock<Vec<Extraction>>,
    max_extractions: Option<usize>,
}

impl MemoryExtractionStore {
    /// Creates an empty, uncapped store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store that evicts the oldest records beyond `max`.
    pub fn with_capacity_limit(max: Option<usize>) -> Self {
        Self {
            extractions: RwLock::new(Vec::new()),
            max_extractions: max,
        }
    }

    /// Number of records currently held.
    pub async fn len(&self) -> usize {
        self.extractions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

fn not_found(id: &str) -> PortError {
    PortError::NotFound(format!("Extraction {} not found", id))
}

//=========================================================================================
// `ExtractionStore` Trait Implementation
//=========================================================================================

#[async_trait]
impl ExtractionStore for MemoryExtractionStore {
    async fn create(&self, url: &str) -> PortResult<Extraction> {
        let extraction = analyzer::analyze(url)?;

        let mut extractions = self.extractions.write().await;
        extractions.push(extraction.clone());
        if let Some(max) = self.max_extractions {
            if extractions.len() > max {
                let overflow = extractions.len() - max;
                extractions.drain(..overflow);
                debug!(evicted = overflow, "Extraction cap reached, dropped oldest records");
            }
        }

        info!(id = %extraction.id, url = %extraction.url, "Stored extraction");
        Ok(extraction)
    }

    async fn list(&self, limit: usize) -> PortResult<Vec<Extraction>> {
        let extractions = self.extractions.read().await;
        Ok(extractions.iter().rev().take(limit).cloned().collect())
    }

    async fn get(&self, id: &str) -> PortResult<Extraction> {
        let extractions = self.extractions.read().await;
        extractions
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn delete(&self, id: &str) -> PortResult<()> {
        let mut extractions = self.extractions.write().await;
        let position = extractions
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| not_found(id))?;
        extractions.remove(position);
        info!(id = %id, "Deleted extraction");
        Ok(())
    }
}
