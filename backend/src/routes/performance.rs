use serde::{Deserialize, Serialize};

// =========================================================
// Performance types + route
// =========================================================

/// Runtime statistics converted to hours.
///
/// `p95_estimate_hours` is a normal approximation (`mean + 1.645 * std`);
/// `max_hours` remains the authoritative worst case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeSummary {
    pub method: Option<String>,
    pub count: Option<u64>,
    pub mean_hours: Option<f64>,
    pub median_hours: Option<f64>,
    pub p25_hours: Option<f64>,
    pub p75_hours: Option<f64>,
    pub min_hours: Option<f64>,
    pub max_hours: Option<f64>,
    pub p95_estimate_hours: Option<f64>,
    /// `62.16 hrs`, or `N/A`.
    pub mean_display: String,
    pub median_display: String,
    /// Whole hours.
    pub max_display: String,
    pub p95_estimate_display: String,
}

/// Rough short/medium/long split of the job population (estimates).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeClassEstimate {
    pub short_jobs: Option<u64>,
    pub medium_jobs: Option<u64>,
    pub long_jobs: Option<u64>,
}

/// Weight band a histogram bucket falls into relative to the quartiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightBand {
    /// Upper bound at or below the median.
    High,
    /// Upper bound at or below the third quartile.
    Mid,
    /// Beyond the third quartile, or unbounded.
    Low,
}

/// One bucket of an estimated histogram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBucket {
    pub label: String,
    pub lower: f64,
    pub upper: Option<f64>,
    pub band: WeightBand,
    pub weight: f64,
    pub share_percent: f64,
    pub estimated_count: Option<u64>,
}

/// Complete performance dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceData {
    pub runtime: RuntimeSummary,
    pub runtime_histogram: Vec<HistogramBucket>,
    pub runtime_classes: RuntimeClassEstimate,
    pub mean_to_max_percent: Option<f64>,
}

/// Route function name constant for the performance tab
pub const GET_PERFORMANCE_DATA: &str = "get_performance_data";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_band_serializes_lowercase() {
        assert_eq!(serde_json::to_value(WeightBand::High).unwrap(), "high");
        assert_eq!(serde_json::to_value(WeightBand::Low).unwrap(), "low");
    }

    #[test]
    fn test_histogram_bucket_debug() {
        let bucket = HistogramBucket {
            label: "1-6 hours".to_string(),
            lower: 1.0,
            upper: Some(6.0),
            band: WeightBand::Mid,
            weight: 10.0,
            share_percent: 25.0,
            estimated_count: None,
        };
        let debug_str = format!("{:?}", bucket);
        assert!(debug_str.contains("HistogramBucket"));
    }

    #[test]
    fn test_const_value() {
        assert_eq!(GET_PERFORMANCE_DATA, "get_performance_data");
    }
}
