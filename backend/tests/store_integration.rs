//! Tests for loading and refreshing documents from disk.

mod support;

use std::sync::Arc;

use slurm_analytics::store::{
    DocumentOrigin, DocumentSource, DocumentStore, FallbackSource, FileSource, LoadError,
    BUNDLED_DOCUMENT,
};
use tempfile::TempDir;

use support::{minimal_json, write_document};

#[tokio::test]
async fn test_file_source_loads_bundled_copy() {
    let dir = TempDir::new().unwrap();
    let path = write_document(dir.path(), "slurm_analysis.json", BUNDLED_DOCUMENT);

    let loaded = FileSource::new(&path).load().await.unwrap();
    assert_eq!(loaded.origin, DocumentOrigin::File { path });
    assert_eq!(loaded.checksum.len(), 64);
    assert_eq!(loaded.document.metadata.total_jobs, 860196);
}

#[tokio::test]
async fn test_refresh_picks_up_rewritten_file() {
    let dir = TempDir::new().unwrap();
    let path = write_document(dir.path(), "doc.json", &minimal_json(10));

    let store = DocumentStore::open(Arc::new(FileSource::new(&path)))
        .await
        .unwrap();
    assert_eq!(store.document().metadata.total_jobs, 10);

    let unchanged = store.refresh().await.unwrap();
    assert!(!unchanged.changed);

    write_document(dir.path(), "doc.json", &minimal_json(25));
    let outcome = store.refresh().await.unwrap();
    assert!(outcome.changed);
    assert_eq!(store.document().metadata.total_jobs, 25);
}

#[tokio::test]
async fn test_snapshot_survives_refresh() {
    let dir = TempDir::new().unwrap();
    let path = write_document(dir.path(), "doc.json", &minimal_json(1));
    let store = DocumentStore::open(Arc::new(FileSource::new(&path)))
        .await
        .unwrap();

    let before = store.snapshot();
    write_document(dir.path(), "doc.json", &minimal_json(2));
    store.refresh().await.unwrap();

    assert_eq!(before.document.metadata.total_jobs, 1);
    assert_eq!(store.snapshot().document.metadata.total_jobs, 2);
}

#[tokio::test]
async fn test_failed_refresh_keeps_previous_document() {
    let dir = TempDir::new().unwrap();
    let path = write_document(dir.path(), "doc.json", &minimal_json(7));
    let store = DocumentStore::open(Arc::new(FileSource::new(&path)))
        .await
        .unwrap();

    write_document(dir.path(), "doc.json", "{ not json");
    let err = store.refresh().await.unwrap_err();
    assert!(matches!(err, LoadError::Malformed { .. }));
    assert!(!err.is_retryable());
    assert_eq!(store.document().metadata.total_jobs, 7);

    std::fs::remove_file(&path).unwrap();
    let err = store.refresh().await.unwrap_err();
    assert!(matches!(err, LoadError::NotFound { .. }));
    assert_eq!(store.document().metadata.total_jobs, 7);
}

#[tokio::test]
async fn test_missing_file_without_fallback_fails() {
    let dir = TempDir::new().unwrap();
    let source = Arc::new(FileSource::new(dir.path().join("absent.json")));

    let err = match DocumentStore::open(source).await {
        Ok(_) => panic!("opening a missing file should fail"),
        Err(e) => e,
    };
    assert!(matches!(err, LoadError::NotFound { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[tokio::test]
async fn test_missing_file_falls_back_to_bundled() {
    let dir = TempDir::new().unwrap();
    let file = Arc::new(FileSource::new(dir.path().join("absent.json")));
    let store = DocumentStore::open(Arc::new(FallbackSource::with_bundled(file)))
        .await
        .unwrap();

    assert_eq!(store.snapshot().origin, DocumentOrigin::Bundled);
    assert!(store.source_description().contains("fallback"));

    // Once the file appears, a refresh switches over to it.
    write_document(dir.path(), "absent.json", &minimal_json(3));
    let outcome = store.refresh().await.unwrap();
    assert!(outcome.changed);
    assert!(matches!(outcome.current.origin, DocumentOrigin::File { .. }));
}
