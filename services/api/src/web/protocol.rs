//! services/api/src/web/protocol.rs
//!
//! Wire formats shared by the HTTP handlers: the response envelope of the
//! extraction surface and the JSON views of core domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use site_analyzer_core::domain::{
    Asset, Extraction, ExtractionReport, Framework, PreviewHandle, PreviewSource,
};
use utoipa::ToSchema;

//=========================================================================================
// Envelope
//=========================================================================================

/// The uniform `{success, data, message, errors}` wrapper. Absent fields are omitted.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl<T> Envelope<T> {
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            errors: None,
        }
    }
}

impl Envelope<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
            errors: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            errors: None,
        }
    }

    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.errors = Some(errors);
        self
    }
}

//=========================================================================================
// Extraction Payloads
//=========================================================================================

#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Kept raw so that non-numeric values fall back to the default instead of failing.
    pub limit: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AssetView {
    pub name: String,
    pub url: String,
    pub size: u64,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

impl From<Asset> for AssetView {
    fn from(asset: Asset) -> Self {
        Self {
            name: asset.name,
            url: asset.url,
            size: asset.size,
            content_type: asset.content_type,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FrameworkView {
    pub name: String,
    pub version: String,
    pub confidence: u8,
    pub icon: String,
}

impl From<Framework> for FrameworkView {
    fn from(framework: Framework) -> Self {
        Self {
            name: framework.name,
            version: framework.version,
            confidence: framework.confidence,
            icon: framework.icon,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionView {
    pub id: String,
    pub url: String,
    pub title: String,
    pub description: String,
    pub favicon: String,
    pub html_assets: Vec<AssetView>,
    pub css_assets: Vec<AssetView>,
    pub js_assets: Vec<AssetView>,
    pub image_assets: Vec<AssetView>,
    pub font_assets: Vec<AssetView>,
    pub frameworks: Vec<FrameworkView>,
    pub performance_score: u32,
    /// Milliseconds.
    pub load_time: u32,
    /// Bytes.
    pub total_size: u64,
    pub is_mobile_responsive: bool,
    pub has_viewport_meta: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn views<T, V: From<T>>(items: Vec<T>) -> Vec<V> {
    items.into_iter().map(V::from).collect()
}

impl From<Extraction> for ExtractionView {
    fn from(e: Extraction) -> Self {
        Self {
            id: e.id,
            url: e.url,
            title: e.title,
            description: e.description,
            favicon: e.favicon,
            html_assets: views(e.html_assets),
            css_assets: views(e.css_assets),
            js_assets: views(e.js_assets),
            image_assets: views(e.image_assets),
            font_assets: views(e.font_assets),
            frameworks: views(e.frameworks),
            performance_score: e.performance_score,
            load_time: e.load_time_ms,
            total_size: e.total_size_bytes,
            is_mobile_responsive: e.is_mobile_responsive,
            has_viewport_meta: e.has_viewport_meta,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_assets: usize,
    pub frameworks: usize,
    pub performance_score: u32,
    pub mobile_responsive: bool,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportView {
    pub title: String,
    pub url: String,
    pub extracted_at: DateTime<Utc>,
    pub summary: ReportSummary,
    pub frameworks: Vec<FrameworkView>,
}

impl From<ExtractionReport> for ReportView {
    fn from(report: ExtractionReport) -> Self {
        Self {
            title: report.title,
            url: report.url,
            extracted_at: report.extracted_at,
            summary: ReportSummary {
                total_assets: report.total_assets,
                frameworks: report.framework_count,
                performance_score: report.performance_score,
                mobile_responsive: report.mobile_responsive,
            },
            frameworks: views(report.frameworks),
        }
    }
}

//=========================================================================================
// Preview Payloads
//=========================================================================================

/// Code submitted for preview. Missing and `null` fields are treated as empty.
#[derive(Debug, Deserialize, ToSchema)]
pub struct PreviewRequest {
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default)]
    pub css: Option<String>,
    #[serde(default)]
    pub js: Option<String>,
}

impl From<PreviewRequest> for PreviewSource {
    fn from(request: PreviewRequest) -> Self {
        Self {
            html: request.html.unwrap_or_default(),
            css: request.css.unwrap_or_default(),
            js: request.js.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PreviewResponse {
    pub id: String,
    pub url: String,
}

impl From<PreviewHandle> for PreviewResponse {
    fn from(handle: PreviewHandle) -> Self {
        Self {
            id: handle.id,
            url: handle.url,
        }
    }
}

//=========================================================================================
// Health
//=========================================================================================

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}
