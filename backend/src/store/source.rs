//! Where the analytics document comes from.
//!
//! A [`DocumentSource`] reads and parses one document. [`FileSource`] reads
//! the producer's JSON file, [`BundledSource`] serves the example document
//! compiled into the binary and [`FallbackSource`] chains the two.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::checksum::calculate_checksum;
use super::error::{ErrorContext, LoadError, LoadResult};
use crate::models::AnalyticsDocument;

/// Example document shipped with the crate.
pub const BUNDLED_DOCUMENT: &str = include_str!("../../data/sample_analytics.json");

/// Provenance of a loaded document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DocumentOrigin {
    File { path: PathBuf },
    Bundled,
    Inline { name: String },
}

impl fmt::Display for DocumentOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentOrigin::File { path } => write!(f, "file:{}", path.display()),
            DocumentOrigin::Bundled => f.write_str("bundled"),
            DocumentOrigin::Inline { name } => write!(f, "inline:{}", name),
        }
    }
}

/// A parsed document with its provenance.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub document: Arc<AnalyticsDocument>,
    pub origin: DocumentOrigin,
    /// SHA-256 of the raw text.
    pub checksum: String,
    pub loaded_at: DateTime<Utc>,
}

impl LoadedDocument {
    /// Parse raw JSON text.
    pub fn parse(text: &str, origin: DocumentOrigin) -> LoadResult<Self> {
        let document = AnalyticsDocument::from_json_str(text).map_err(|e| {
            LoadError::malformed(
                e.to_string(),
                ErrorContext::new("parse")
                    .with_source(&origin)
                    .with_details(format!("line {}, column {}", e.line(), e.column())),
            )
        })?;

        Ok(Self {
            document: Arc::new(document),
            checksum: calculate_checksum(text),
            origin,
            loaded_at: Utc::now(),
        })
    }
}

/// Loads one analytics document.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to be shared by the HTTP state.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    async fn load(&self) -> LoadResult<LoadedDocument>;

    /// Human-readable description for logs.
    fn describe(&self) -> String;
}

/// Reads the document from a JSON file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DocumentSource for FileSource {
    async fn load(&self) -> LoadResult<LoadedDocument> {
        let context = || ErrorContext::new("load").with_source(self.path.display());
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| LoadError::from_io(e, context()))?;

        log::debug!("Read {} bytes from {}", text.len(), self.path.display());
        LoadedDocument::parse(
            &text,
            DocumentOrigin::File {
                path: self.path.clone(),
            },
        )
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// Serves the example document compiled into the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledSource;

#[async_trait]
impl DocumentSource for BundledSource {
    async fn load(&self) -> LoadResult<LoadedDocument> {
        LoadedDocument::parse(BUNDLED_DOCUMENT, DocumentOrigin::Bundled)
    }

    fn describe(&self) -> String {
        "bundled example document".to_string()
    }
}

/// Serves fixed JSON text. Each `load` re-parses it.
#[derive(Debug, Clone)]
pub struct InlineSource {
    name: String,
    text: Arc<parking_lot::RwLock<String>>,
}

impl InlineSource {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: Arc::new(parking_lot::RwLock::new(text.into())),
        }
    }

    /// Replace the text returned by subsequent loads.
    pub fn set_text(&self, text: impl Into<String>) {
        *self.text.write() = text.into();
    }
}

#[async_trait]
impl DocumentSource for InlineSource {
    async fn load(&self) -> LoadResult<LoadedDocument> {
        let text = self.text.read().clone();
        LoadedDocument::parse(
            &text,
            DocumentOrigin::Inline {
                name: self.name.clone(),
            },
        )
    }

    fn describe(&self) -> String {
        format!("inline document {}", self.name)
    }
}

/// Tries `primary` and serves `fallback` on any load error.
pub struct FallbackSource {
    primary: Arc<dyn DocumentSource>,
    fallback: Arc<dyn DocumentSource>,
}

impl FallbackSource {
    pub fn new(primary: Arc<dyn DocumentSource>, fallback: Arc<dyn DocumentSource>) -> Self {
        Self { primary, fallback }
    }

    /// `primary` backed by the bundled example document.
    pub fn with_bundled(primary: Arc<dyn DocumentSource>) -> Self {
        Self::new(primary, Arc::new(BundledSource))
    }
}

#[async_trait]
impl DocumentSource for FallbackSource {
    async fn load(&self) -> LoadResult<LoadedDocument> {
        match self.primary.load().await {
            Ok(loaded) => Ok(loaded),
            Err(e) => {
                log::warn!(
                    "Failed to load {} ({}); falling back to {}",
                    self.primary.describe(),
                    e,
                    self.fallback.describe()
                );
                self.fallback.load().await
            }
        }
    }

    fn describe(&self) -> String {
        format!(
            "{} (fallback: {})",
            self.primary.describe(),
            self.fallback.describe()
        )
    }
}
