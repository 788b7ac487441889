//! HTTP handlers for the REST API.
//!
//! Each handler takes a snapshot of the current document and delegates to
//! the derivation layer.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::Uri,
    Json,
};

use super::dto::{DocumentInfo, HealthResponse, RefreshResponse, TabInfo, TrendsQuery};
use super::error::AppError;
use super::state::AppState;
use crate::api::{
    EfficiencyData, OverviewData, PerformanceData, PredictiveData, ResourcesData,
    SustainabilityData, Tab, TrendsData, UsersData,
};
use crate::models::AnalyticsDocument;
use crate::services;
use crate::services::timeseries::DEFAULT_SAMPLE_EVERY;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Service status and the provenance of the document being served.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let snapshot = state.store.snapshot();
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        origin: snapshot.origin.to_string(),
        source: state.store.source_description(),
        checksum: snapshot.checksum.clone(),
        loaded_at: snapshot.loaded_at,
    }))
}

// =============================================================================
// Document
// =============================================================================

/// GET /v1/document
///
/// The raw analytics document.
pub async fn get_document(State(state): State<AppState>) -> HandlerResult<AnalyticsDocument> {
    Ok(Json(state.store.document().as_ref().clone()))
}

/// GET /v1/document/info
pub async fn get_document_info(State(state): State<AppState>) -> HandlerResult<DocumentInfo> {
    Ok(Json(DocumentInfo::from(state.store.snapshot().as_ref())))
}

/// POST /v1/refresh
///
/// Reload the document from its source. The previous document keeps being
/// served if the reload fails.
pub async fn refresh_document(State(state): State<AppState>) -> HandlerResult<RefreshResponse> {
    let outcome = state.store.refresh().await?;
    Ok(Json(RefreshResponse {
        changed: outcome.changed,
        document: DocumentInfo::from(outcome.current.as_ref()),
    }))
}

// =============================================================================
// Dashboard Tabs
// =============================================================================

/// GET /v1/tabs
pub async fn list_tabs() -> HandlerResult<Vec<TabInfo>> {
    Ok(Json(Tab::ALL.into_iter().map(TabInfo::from).collect()))
}

/// GET /v1/overview
pub async fn get_overview(State(state): State<AppState>) -> HandlerResult<OverviewData> {
    let doc = state.store.document();
    Ok(Json(services::compute_overview_data(&doc)))
}

/// GET /v1/performance
pub async fn get_performance(State(state): State<AppState>) -> HandlerResult<PerformanceData> {
    let doc = state.store.document();
    Ok(Json(services::compute_performance_data(&doc)))
}

/// GET /v1/resources
pub async fn get_resources(State(state): State<AppState>) -> HandlerResult<ResourcesData> {
    let doc = state.store.document();
    Ok(Json(services::compute_resources_data(&doc)))
}

/// GET /v1/users
pub async fn get_users(State(state): State<AppState>) -> HandlerResult<UsersData> {
    let doc = state.store.document();
    Ok(Json(services::compute_users_data(&doc)))
}

/// GET /v1/trends
///
/// Query parameters:
/// - `sample_every`: stride of the sampled daily series (default: 7, must be positive)
pub async fn get_trends(
    State(state): State<AppState>,
    query: Result<Query<TrendsQuery>, QueryRejection>,
) -> HandlerResult<TrendsData> {
    let Query(query) = query.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let sample_every = query.sample_every.unwrap_or(DEFAULT_SAMPLE_EVERY);
    if sample_every == 0 {
        return Err(AppError::BadRequest(
            "sample_every must be a positive integer".to_string(),
        ));
    }
    let doc = state.store.document();
    Ok(Json(services::compute_trends_data(&doc, sample_every)))
}

/// GET /v1/efficiency
pub async fn get_efficiency(State(state): State<AppState>) -> HandlerResult<EfficiencyData> {
    let doc = state.store.document();
    Ok(Json(services::compute_efficiency_data(&doc)))
}

/// GET /v1/predictive
pub async fn get_predictive(State(state): State<AppState>) -> HandlerResult<PredictiveData> {
    let doc = state.store.document();
    Ok(Json(services::compute_predictive_data(&doc)))
}

/// GET /v1/sustainability
pub async fn get_sustainability(
    State(state): State<AppState>,
) -> HandlerResult<SustainabilityData> {
    let doc = state.store.document();
    Ok(Json(services::compute_sustainability_data(&doc)))
}

/// Fallback for unknown paths.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
