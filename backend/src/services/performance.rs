use crate::api::PerformanceData;
use crate::models::AnalyticsDocument;
use crate::services::distributions::{estimate_runtime_classes, summarize_runtime};
use crate::services::histogram::runtime_histogram;
use crate::services::ratios::runtime_mean_to_max;

/// Runtime summary, estimated histogram and class split.
pub fn compute_performance_data(doc: &AnalyticsDocument) -> PerformanceData {
    let stats = doc.runtime_stats();
    let method = doc
        .runtime_analysis
        .as_ref()
        .and_then(|r| r.method.as_deref());

    PerformanceData {
        runtime: summarize_runtime(method, stats),
        runtime_histogram: runtime_histogram(stats),
        runtime_classes: estimate_runtime_classes(stats.and_then(|s| s.count)),
        mean_to_max_percent: runtime_mean_to_max(
            stats.and_then(|s| s.mean),
            stats.and_then(|s| s.max),
        ),
    }
}
