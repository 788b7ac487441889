//! Data Transfer Objects for the HTTP API.
//!
//! Tab payloads are re-exported from the routes module since they already
//! derive Serialize/Deserialize.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

pub use crate::api::{
    EfficiencyData, OverviewData, PerformanceData, PredictiveData, ResourcesData,
    SustainabilityData, Tab, TrendsData, UsersData,
};

use crate::store::LoadedDocument;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Where the current document came from
    pub origin: String,
    /// The configured source chain, e.g. `file a.json (fallback: bundled example)`
    pub source: String,
    pub checksum: String,
    pub loaded_at: DateTime<Utc>,
}

/// Provenance of the document currently served.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentInfo {
    pub origin: String,
    pub checksum: String,
    pub loaded_at: DateTime<Utc>,
    pub total_jobs: u64,
    /// Start of the observation window, when the document carries a
    /// parseable timestamp.
    pub period_start: Option<DateTime<FixedOffset>>,
    pub period_end: Option<DateTime<FixedOffset>>,
}

impl From<&LoadedDocument> for DocumentInfo {
    fn from(loaded: &LoadedDocument) -> Self {
        Self {
            origin: loaded.origin.to_string(),
            checksum: loaded.checksum.clone(),
            loaded_at: loaded.loaded_at,
            total_jobs: loaded.document.metadata.total_jobs,
            period_start: loaded.document.metadata.date_range.start_time(),
            period_end: loaded.document.metadata.date_range.end_time(),
        }
    }
}

/// Response for POST /v1/refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    /// Whether the reload produced a different document
    pub changed: bool,
    pub document: DocumentInfo,
}

/// One entry of GET /v1/tabs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabInfo {
    pub tab: Tab,
    pub route_name: String,
    pub path: String,
}

impl From<Tab> for TabInfo {
    fn from(tab: Tab) -> Self {
        Self {
            tab,
            route_name: tab.route_name().to_string(),
            path: format!("/v1/{}", tab.slug()),
        }
    }
}

/// Query parameters for the trends endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TrendsQuery {
    /// Stride of the sampled daily series (default: 7)
    #[serde(default)]
    pub sample_every: Option<usize>,
}
