#![allow(dead_code)]

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use slurm_analytics::models::{AnalyticsDocument, JobStateEntry, UserEntry};
use slurm_analytics::store::BUNDLED_DOCUMENT;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// Restores the previous values on unwind and serializes access to the
/// process-global environment across parallel tests.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

/// The example document bundled with the crate.
pub fn sample_document() -> AnalyticsDocument {
    AnalyticsDocument::from_json_str(BUNDLED_DOCUMENT).expect("bundled document parses")
}

/// Write `text` to `name` inside `dir` and return the full path.
pub fn write_document(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, text).expect("write test document");
    path
}

/// Minimal valid document with the given job total.
pub fn minimal_json(total_jobs: u64) -> String {
    format!(r#"{{"metadata": {{"total_jobs": {}}}}}"#, total_jobs)
}

pub fn state(label: &str, count: u64, percentage: f64) -> JobStateEntry {
    JobStateEntry {
        state: label.to_string(),
        count,
        percentage,
    }
}

pub fn user(id: &str, job_count: u64, percentage: f64) -> UserEntry {
    UserEntry {
        user_id: id.to_string(),
        job_count,
        percentage,
    }
}
