//! # SLURM Analytics Backend
//!
//! Derivation engine behind the cluster-usage dashboard.
//!
//! The batch accounting job writes one precomputed analytics document (job
//! states, runtime and resource statistics, user rankings, GPU usage, daily
//! volumes). This crate turns that document into display values and
//! chart-ready series for each dashboard tab and serves them over HTTP.
//!
//! ## Architecture
//!
//! - [`models`]: Typed, optional-field schema of the analytics document
//! - [`services`]: Pure derivation functions, one family per dashboard tab
//! - [`routes`]: Per-tab payload types and route-name constants
//! - [`api`]: Consolidated re-export of the payload types
//! - [`store`]: Document sources, bundled fallback and the refreshable store
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! Data flows one way: document → derivation → payload. The store hands out
//! immutable `Arc` snapshots, so every derivation is a plain function of its
//! input.

// LoadError carries rich context for debugging
#![allow(clippy::result_large_err)]

pub mod api;

pub mod models;

pub mod routes;

pub mod services;

pub mod store;

#[cfg(feature = "http-server")]
pub mod http;
