//! Distribution summaries for runtime, CPU-core and GPU statistics.

use qtty::{Days, Hour};

use crate::api::{DistributionSummary, RuntimeClassEstimate, RuntimeSummary};
use crate::models::DistributionStats;
use crate::services::formatting::{format_hours, format_or_na};

/// Standard-normal z-score of the 95th percentile.
pub const P95_Z_SCORE: f64 = 1.645;

/// Fractions of the job population assigned to short, medium and long
/// runtime classes.
pub const RUNTIME_CLASS_SPLIT: [f64; 3] = [0.60, 0.35, 0.05];

/// Runtime statistics are stored in days.
pub fn days_to_hours(days: f64) -> f64 {
    Days::new(days).to::<Hour>().value()
}

/// Normal-approximation 95th percentile: `mean + std * 1.645`.
///
/// Unavailable when either moment is missing or `std` is negative or
/// non-finite. This is a heuristic; the distribution's `max` is the real
/// worst case.
pub fn estimate_p95(mean: Option<f64>, std: Option<f64>) -> Option<f64> {
    let mean = mean.filter(|m| m.is_finite())?;
    let std = std.filter(|s| s.is_finite() && *s >= 0.0)?;
    let estimate = mean + std * P95_Z_SCORE;
    estimate.is_finite().then_some(estimate)
}

/// Summarize the runtime distribution in hours.
pub fn summarize_runtime(method: Option<&str>, stats: Option<&DistributionStats>) -> RuntimeSummary {
    let hours = |pick: fn(&DistributionStats) -> Option<f64>| {
        stats
            .and_then(pick)
            .filter(|d| d.is_finite())
            .map(days_to_hours)
    };

    let mean_hours = hours(|s| s.mean);
    let median_hours = hours(|s| s.p50);
    let max_hours = hours(|s| s.max);
    let p95_estimate_hours = stats
        .and_then(|s| estimate_p95(s.mean, s.std))
        .map(days_to_hours);

    RuntimeSummary {
        method: method.map(str::to_string),
        count: stats.and_then(|s| s.count),
        mean_hours,
        median_hours,
        p25_hours: hours(|s| s.p25),
        p75_hours: hours(|s| s.p75),
        min_hours: hours(|s| s.min),
        max_hours,
        p95_estimate_hours,
        mean_display: hours_display(mean_hours, 2),
        median_display: hours_display(median_hours, 2),
        max_display: hours_display(max_hours, 0),
        p95_estimate_display: hours_display(p95_estimate_hours, 2),
    }
}

fn hours_display(hours: Option<f64>, decimals: usize) -> String {
    format_or_na(hours.map(|h| format_hours(h, decimals)))
}

/// Summarize a distribution in its own unit (cores, GPUs).
pub fn summarize_distribution(stats: Option<&DistributionStats>) -> DistributionSummary {
    let Some(stats) = stats else {
        return DistributionSummary::default();
    };

    DistributionSummary {
        count: stats.count,
        mean: stats.mean,
        std: stats.std,
        min: stats.min,
        p25: stats.p25,
        median: stats.p50,
        p75: stats.p75,
        max: stats.max,
        p95_estimate: estimate_p95(stats.mean, stats.std),
    }
}

/// Rough short/medium/long job counts from the total runtime sample size.
pub fn estimate_runtime_classes(count: Option<u64>) -> RuntimeClassEstimate {
    let Some(count) = count else {
        return RuntimeClassEstimate::default();
    };
    let [short, medium, long] = RUNTIME_CLASS_SPLIT.map(|f| (count as f64 * f).round() as u64);
    RuntimeClassEstimate {
        short_jobs: Some(short),
        medium_jobs: Some(medium),
        long_jobs: Some(long),
    }
}
