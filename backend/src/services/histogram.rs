//! Estimated histograms built from quartiles.
//!
//! The document carries only summary statistics, so bucket heights are
//! estimated: each bucket is placed in a weight band by comparing its upper
//! bound with the median and third quartile, then decayed by rank. The result
//! is deterministic for a given document.

use crate::api::{HistogramBucket, WeightBand};
use crate::models::DistributionStats;
use crate::services::distributions::days_to_hours;

/// Multiplicative weight decay applied per bucket rank.
pub const RANK_DECAY: f64 = 0.85;

/// A fixed bucket definition. `upper: None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BucketSpec {
    pub label: &'static str,
    pub lower: f64,
    pub upper: Option<f64>,
}

/// Base weight of each band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandWeights {
    pub high: f64,
    pub mid: f64,
    pub low: f64,
}

impl BandWeights {
    pub fn for_band(&self, band: WeightBand) -> f64 {
        match band {
            WeightBand::High => self.high,
            WeightBand::Mid => self.mid,
            WeightBand::Low => self.low,
        }
    }
}

/// Runtime buckets, in hours.
pub const RUNTIME_BUCKETS: [BucketSpec; 5] = [
    BucketSpec { label: "0-6 min", lower: 0.0, upper: Some(0.1) },
    BucketSpec { label: "6-60 min", lower: 0.1, upper: Some(1.0) },
    BucketSpec { label: "1-6 hours", lower: 1.0, upper: Some(6.0) },
    BucketSpec { label: "6-24 hours", lower: 6.0, upper: Some(24.0) },
    BucketSpec { label: "1-7 days", lower: 24.0, upper: Some(168.0) },
];

pub const RUNTIME_WEIGHTS: BandWeights = BandWeights {
    high: 20.0,
    mid: 12.5,
    low: 5.0,
};

/// CPU-core buckets.
pub const CPU_CORE_BUCKETS: [BucketSpec; 4] = [
    BucketSpec { label: "1-4 cores", lower: 1.0, upper: Some(4.0) },
    BucketSpec { label: "5-16 cores", lower: 5.0, upper: Some(16.0) },
    BucketSpec { label: "17-64 cores", lower: 17.0, upper: Some(64.0) },
    BucketSpec { label: "65+ cores", lower: 65.0, upper: None },
];

pub const CPU_CORE_WEIGHTS: BandWeights = BandWeights {
    high: 35.0,
    mid: 20.0,
    low: 12.5,
};

/// Band of a bucket given the distribution's median and third quartile.
pub fn assign_band(upper: Option<f64>, p50: f64, p75: f64) -> WeightBand {
    match upper {
        Some(u) if u <= p50 => WeightBand::High,
        Some(u) if u <= p75 => WeightBand::Mid,
        _ => WeightBand::Low,
    }
}

/// Estimate bucket weights, shares and (optionally) counts.
///
/// Returns an empty histogram when either quartile is unavailable.
pub fn estimate_histogram(
    buckets: &[BucketSpec],
    p50: Option<f64>,
    p75: Option<f64>,
    weights: BandWeights,
    reference_total: Option<u64>,
) -> Vec<HistogramBucket> {
    let (Some(p50), Some(p75)) = (p50, p75) else {
        return Vec::new();
    };
    if !p50.is_finite() || !p75.is_finite() {
        return Vec::new();
    }

    let raw: Vec<(BucketSpec, WeightBand, f64)> = buckets
        .iter()
        .enumerate()
        .map(|(rank, spec)| {
            let band = assign_band(spec.upper, p50, p75);
            let weight = weights.for_band(band) * RANK_DECAY.powi(rank as i32);
            (*spec, band, weight)
        })
        .collect();

    let total_weight: f64 = raw.iter().map(|(_, _, w)| w).sum();
    if total_weight <= 0.0 {
        return Vec::new();
    }

    raw.into_iter()
        .map(|(spec, band, weight)| {
            let share = weight / total_weight;
            HistogramBucket {
                label: spec.label.to_string(),
                lower: spec.lower,
                upper: spec.upper,
                band,
                weight,
                share_percent: share * 100.0,
                estimated_count: reference_total.map(|t| (t as f64 * share).round() as u64),
            }
        })
        .collect()
}

/// Runtime histogram; quartiles are converted from days to hours.
pub fn runtime_histogram(stats: Option<&DistributionStats>) -> Vec<HistogramBucket> {
    let Some(stats) = stats else {
        return Vec::new();
    };
    estimate_histogram(
        &RUNTIME_BUCKETS,
        stats.p50.map(days_to_hours),
        stats.p75.map(days_to_hours),
        RUNTIME_WEIGHTS,
        stats.count,
    )
}

/// CPU-core histogram. Counts are scaled to `total_jobs` when the
/// statistics carry no sample size.
pub fn core_histogram(stats: Option<&DistributionStats>, total_jobs: Option<u64>) -> Vec<HistogramBucket> {
    let Some(stats) = stats else {
        return Vec::new();
    };
    estimate_histogram(
        &CPU_CORE_BUCKETS,
        stats.p50,
        stats.p75,
        CPU_CORE_WEIGHTS,
        stats.count.or(total_jobs),
    )
}
