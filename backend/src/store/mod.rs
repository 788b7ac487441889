//! Document loading and storage.
//!
//! ```text
//! FileSource ──┐
//!              ├─ FallbackSource ── DocumentStore ── Arc snapshots ── services
//! BundledSource┘
//! ```
//!
//! Loading is the only fallible, asynchronous step. Once loaded, a document
//! is immutable and shared by `Arc`; a refresh swaps in a complete new
//! document.

pub mod checksum;
pub mod config;
pub mod document_store;
pub mod error;
pub mod source;

pub use checksum::calculate_checksum;
pub use config::AnalyticsConfig;
pub use document_store::{DocumentStore, RefreshOutcome};
pub use error::{ErrorContext, LoadError, LoadResult};
pub use source::{
    BundledSource, DocumentOrigin, DocumentSource, FallbackSource, FileSource, InlineSource,
    LoadedDocument, BUNDLED_DOCUMENT,
};
