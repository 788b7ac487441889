//! HTTP server module.
//!
//! Exposes the derivation layer as a small REST API. Handlers take an `Arc`
//! snapshot of the current document from the store and call the pure
//! `compute_*_data` services.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Query parsing and validation                           │
//! │  - JSON serialization                                     │
//! │  - CORS, compression, error handling                      │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Derivation Layer (services/)                             │
//! │  - Pure functions of the document                         │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Document Store (store/)                                  │
//! │  - File source with bundled fallback                      │
//! │  - Atomic replace on refresh                              │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
