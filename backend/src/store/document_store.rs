//! The current document and its refresh cycle.

use std::sync::Arc;

use parking_lot::RwLock;

use super::error::LoadResult;
use super::source::{DocumentSource, LoadedDocument};
use crate::models::AnalyticsDocument;

/// Result of a refresh.
#[derive(Debug, Clone)]
pub struct RefreshOutcome {
    /// Whether the new document differs from the previous one.
    pub changed: bool,
    pub current: Arc<LoadedDocument>,
}

/// Holds the current document and replaces it wholesale on refresh.
///
/// Readers take an `Arc` snapshot and derive without holding the lock, so
/// they see either the previous or the next document, never a mix.
pub struct DocumentStore {
    source: Arc<dyn DocumentSource>,
    current: RwLock<Arc<LoadedDocument>>,
}

impl DocumentStore {
    /// Load the initial document from `source`.
    pub async fn open(source: Arc<dyn DocumentSource>) -> LoadResult<Self> {
        let loaded = source.load().await?;
        log::info!(
            "Loaded analytics document from {} ({} jobs, checksum {})",
            loaded.origin,
            loaded.document.metadata.total_jobs,
            short_checksum(&loaded.checksum)
        );
        Ok(Self::with_document(source, loaded))
    }

    /// Build a store around an already loaded document.
    pub fn with_document(source: Arc<dyn DocumentSource>, loaded: LoadedDocument) -> Self {
        Self {
            source,
            current: RwLock::new(Arc::new(loaded)),
        }
    }

    /// Snapshot of the current document and its provenance.
    pub fn snapshot(&self) -> Arc<LoadedDocument> {
        self.current.read().clone()
    }

    /// The current document.
    pub fn document(&self) -> Arc<AnalyticsDocument> {
        self.current.read().document.clone()
    }

    /// Reload from the source.
    ///
    /// The stored document is only replaced when the checksum changed. On
    /// error the previous document stays in place and the error is returned.
    pub async fn refresh(&self) -> LoadResult<RefreshOutcome> {
        let loaded = match self.source.load().await {
            Ok(loaded) => loaded,
            Err(e) => {
                log::warn!(
                    "Refresh from {} failed ({}): {}",
                    self.source.describe(),
                    if e.is_retryable() { "retryable" } else { "not retryable" },
                    e
                );
                return Err(e);
            }
        };

        let mut current = self.current.write();
        if current.checksum == loaded.checksum && current.origin == loaded.origin {
            log::debug!("Refresh found no changes ({})", short_checksum(&loaded.checksum));
            return Ok(RefreshOutcome {
                changed: false,
                current: current.clone(),
            });
        }

        log::info!(
            "Document replaced from {} (checksum {} -> {})",
            loaded.origin,
            short_checksum(&current.checksum),
            short_checksum(&loaded.checksum)
        );
        let next = Arc::new(loaded);
        *current = next.clone();
        Ok(RefreshOutcome {
            changed: true,
            current: next,
        })
    }

    pub fn source_description(&self) -> String {
        self.source.describe()
    }
}

fn short_checksum(checksum: &str) -> &str {
    checksum.get(..12).unwrap_or(checksum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::source::InlineSource;

    const DOC_A: &str = r#"{"metadata": {"total_jobs": 1}}"#;
    const DOC_B: &str = r#"{"metadata": {"total_jobs": 2}}"#;

    #[tokio::test]
    async fn test_refresh_replaces_document() {
        let source = Arc::new(InlineSource::new("test", DOC_A));
        let store = DocumentStore::open(source.clone()).await.unwrap();
        let before = store.document();
        assert_eq!(before.metadata.total_jobs, 1);

        source.set_text(DOC_B);
        let outcome = store.refresh().await.unwrap();
        assert!(outcome.changed);
        assert_eq!(store.document().metadata.total_jobs, 2);
        // Snapshots taken earlier are unaffected.
        assert_eq!(before.metadata.total_jobs, 1);
    }

    #[tokio::test]
    async fn test_refresh_unchanged() {
        let source = Arc::new(InlineSource::new("test", DOC_A));
        let store = DocumentStore::open(source).await.unwrap();
        let first = store.snapshot();

        let outcome = store.refresh().await.unwrap();
        assert!(!outcome.changed);
        assert!(Arc::ptr_eq(&first, &store.snapshot()));
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_previous() {
        let source = Arc::new(InlineSource::new("test", DOC_A));
        let store = DocumentStore::open(source.clone()).await.unwrap();

        source.set_text("{oops");
        assert!(store.refresh().await.is_err());
        assert_eq!(store.document().metadata.total_jobs, 1);
    }

    #[test]
    fn test_short_checksum() {
        assert_eq!(short_checksum("abc"), "abc");
        assert_eq!(short_checksum("0123456789abcdef"), "0123456789ab");
    }
}
