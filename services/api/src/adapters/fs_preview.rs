//! services/api/src/adapters/fs_preview.rs
//!
//! This module contains the filesystem preview store, the concrete implementation
//! of the `PreviewStore` port. Each rendered document is one `<id>.html` file in
//! the preview directory; the directory itself is the only record kept.

use async_trait::async_trait;
use site_analyzer_core::domain::{is_safe_id, new_preview_id, PreviewHandle, PreviewSource};
use site_analyzer_core::ports::{PortError, PortResult, PreviewStore};
use site_analyzer_core::render::render_document;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::info;

/// A preview store backed by a directory of HTML files.
#[derive(Clone, Debug)]
pub struct FsPreviewStore {
    dir: PathBuf,
}

impl FsPreviewStore {
    /// Creates a store rooted at `dir`. The directory is created lazily on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Resolves the file backing `id`, refusing anything outside the safe id alphabet
    /// so the result always stays inside the preview directory.
    fn path_for(&self, id: &str) -> Option<PathBuf> {
        is_safe_id(id).then(|| self.dir.join(format!("{}.html", id)))
    }
}

fn not_found(id: &str) -> PortError {
    PortError::NotFound(format!("Preview {} not found", id))
}

#[async_trait]
impl PreviewStore for FsPreviewStore {
    async fn render_and_store(&self, source: &PreviewSource) -> PortResult<PreviewHandle> {
        let id = new_preview_id();
        let path = self
            .path_for(&id)
            .ok_or_else(|| PortError::Unexpected(format!("generated unsafe preview id {}", id)))?;
        let document = render_document(source);

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| PortError::WriteError(e.to_string()))?;
        tokio::fs::write(&path, document)
            .await
            .map_err(|e| PortError::WriteError(e.to_string()))?;

        info!(id = %id, path = %path.display(), "Stored preview");
        Ok(PreviewHandle::new(id))
    }

    async fn fetch(&self, id: &str) -> PortResult<Vec<u8>> {
        let path = self.path_for(id).ok_or_else(|| not_found(id))?;
        tokio::fs::read(&path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => not_found(id),
            _ => PortError::Unexpected(e.to_string()),
        })
    }
}
