//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Read-only dashboard API; any origin may fetch it.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Document
        .route("/document", get(handlers::get_document))
        .route("/document/info", get(handlers::get_document_info))
        .route("/refresh", post(handlers::refresh_document))
        // Dashboard tabs
        .route("/tabs", get(handlers::list_tabs))
        .route("/overview", get(handlers::get_overview))
        .route("/performance", get(handlers::get_performance))
        .route("/resources", get(handlers::get_resources))
        .route("/users", get(handlers::get_users))
        .route("/trends", get(handlers::get_trends))
        .route("/efficiency", get(handlers::get_efficiency))
        .route("/predictive", get(handlers::get_predictive))
        .route("/sustainability", get(handlers::get_sustainability));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .fallback(handlers::not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
