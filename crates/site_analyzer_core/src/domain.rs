//! crates/site_analyzer_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any storage or serialization format.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Number of extractions returned by a listing when no usable limit is given.
pub const DEFAULT_LIST_LIMIT: usize = 10;

/// Longest identifier accepted when resolving a preview on disk.
pub const MAX_ID_LEN: usize = 128;

/// A single file discovered on the analyzed site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub name: String,
    pub url: String,
    pub size: u64,
    pub content_type: Option<String>,
}

/// A frontend framework reported for the analyzed site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framework {
    pub name: String,
    pub version: String,
    /// 0 to 100.
    pub confidence: u8,
    pub icon: String,
}

/// One synthetic analysis result for a submitted URL.
///
/// Records are never mutated after creation, so `updated_at` always equals
/// `created_at`.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub id: String,
    pub url: String,
    pub title: String,
    pub description: String,
    pub favicon: String,
    pub html_assets: Vec<Asset>,
    pub css_assets: Vec<Asset>,
    pub js_assets: Vec<Asset>,
    pub image_assets: Vec<Asset>,
    pub font_assets: Vec<Asset>,
    pub frameworks: Vec<Framework>,
    pub performance_score: u32,
    pub load_time_ms: u32,
    pub total_size_bytes: u64,
    pub is_mobile_responsive: bool,
    pub has_viewport_meta: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Extraction {
    /// Total number of assets across the five collections.
    pub fn total_assets(&self) -> usize {
        self.html_assets.len()
            + self.css_assets.len()
            + self.js_assets.len()
            + self.image_assets.len()
            + self.font_assets.len()
    }

    /// Builds the condensed report view of this extraction.
    pub fn report(&self) -> ExtractionReport {
        ExtractionReport {
            title: self.title.clone(),
            url: self.url.clone(),
            extracted_at: self.created_at,
            total_assets: self.total_assets(),
            framework_count: self.frameworks.len(),
            performance_score: self.performance_score,
            mobile_responsive: self.is_mobile_responsive,
            frameworks: self.frameworks.clone(),
        }
    }
}

/// A summary of one extraction, suitable for a downloadable report.
#[derive(Debug, Clone)]
pub struct ExtractionReport {
    pub title: String,
    pub url: String,
    pub extracted_at: DateTime<Utc>,
    pub total_assets: usize,
    pub framework_count: usize,
    pub performance_score: u32,
    pub mobile_responsive: bool,
    pub frameworks: Vec<Framework>,
}

/// The code submitted for rendering as a standalone page.
#[derive(Debug, Clone, Default)]
pub struct PreviewSource {
    pub html: String,
    pub css: String,
    pub js: String,
}

/// The handle returned once a preview document has been stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewHandle {
    pub id: String,
    pub url: String,
}

impl PreviewHandle {
    pub fn new(id: String) -> Self {
        let url = format!("/previews/{}.html", id);
        Self { id, url }
    }
}

/// Generates a fresh extraction identifier.
pub fn new_extraction_id() -> String {
    Uuid::new_v4().to_string()
}

/// Generates a fresh preview identifier. Only contains characters accepted
/// by [`is_safe_id`].
pub fn new_preview_id() -> String {
    format!("code_{}", Uuid::new_v4().simple())
}

/// Returns true when `id` may be used as a file stem inside the preview
/// directory: 1 to [`MAX_ID_LEN`] characters from `[A-Za-z0-9_-]`.
pub fn is_safe_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_ID_LEN
        && id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

/// Resolves the raw `limit` query value of a listing. Missing, non-numeric
/// and non-positive values all fall back to [`DEFAULT_LIST_LIMIT`].
pub fn resolve_list_limit(raw: Option<&str>) -> usize {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|n| *n > 0)
        .map(|n| usize::try_from(n).unwrap_or(usize::MAX))
        .unwrap_or(DEFAULT_LIST_LIMIT)
}
