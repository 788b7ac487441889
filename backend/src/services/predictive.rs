//! Load and runtime forecasts.
//!
//! All figures are simple multiples of the document's averages. They are
//! planning hints, not model output.

use crate::api::{PredictiveData, RuntimeForecast};
use crate::models::AnalyticsDocument;
use crate::services::job_states::{state_share, COMPLETED};
use crate::services::ratios::{self, finite, GROWTH_FACTOR};

/// How one job-size class scales the cluster-wide runtime forecast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastProfile {
    pub label: &'static str,
    pub runtime_factor: f64,
    pub error_factor: f64,
    /// Replaces the computed accuracy when set.
    pub fixed_accuracy: Option<f64>,
    pub accuracy_factor: f64,
}

pub const FORECAST_PROFILES: [ForecastProfile; 3] = [
    ForecastProfile {
        label: "Small Jobs (1-4 cores)",
        runtime_factor: 0.3,
        error_factor: 0.5,
        fixed_accuracy: Some(95.0),
        accuracy_factor: 1.0,
    },
    ForecastProfile {
        label: "Medium Jobs (5-16 cores)",
        runtime_factor: 0.8,
        error_factor: 1.0,
        fixed_accuracy: None,
        accuracy_factor: 1.0,
    },
    ForecastProfile {
        label: "Large Jobs (17+ cores)",
        runtime_factor: 1.5,
        error_factor: 1.3,
        fixed_accuracy: None,
        accuracy_factor: 0.9,
    },
];

impl ForecastProfile {
    pub fn apply(
        &self,
        avg_runtime_minutes: Option<f64>,
        error_minutes: Option<f64>,
        accuracy: Option<f64>,
    ) -> RuntimeForecast {
        RuntimeForecast {
            class_label: self.label.to_string(),
            avg_runtime_minutes: avg_runtime_minutes.and_then(|m| finite(m * self.runtime_factor)),
            error_minutes: error_minutes.and_then(|e| finite(e * self.error_factor)),
            accuracy_percent: self
                .fixed_accuracy
                .or_else(|| accuracy.and_then(|a| finite(a * self.accuracy_factor))),
        }
    }
}

pub fn compute_predictive_data(doc: &AnalyticsDocument) -> PredictiveData {
    let total_days = doc.total_days();
    let avg = ratios::avg_jobs_per_day(doc.metadata.total_jobs, total_days);
    let predicted = ratios::forecast(avg);
    let avg_cores = doc.cpu_core_stats().and_then(|s| s.mean);

    // CPU hours per job stand in for wall-clock runtime.
    let avg_runtime_minutes = doc
        .cpu_hours()
        .and_then(|c| c.average_per_job)
        .and_then(|h| finite(h * 60.0));
    let error = ratios::runtime_prediction_error(avg_runtime_minutes);
    let accuracy = ratios::runtime_prediction_accuracy(state_share(doc.states(), COMPLETED));

    PredictiveData {
        avg_jobs_per_day: avg,
        growth_factor: GROWTH_FACTOR,
        predicted_daily_load: predicted,
        load_progress_percent: ratios::load_progress(predicted, avg),
        peak_capacity: ratios::peak_capacity(avg),
        peak_load: ratios::peak_load(avg),
        predicted_core_demand: ratios::predicted_cores(avg_cores, predicted),
        avg_runtime_minutes,
        avg_prediction_error_minutes: error,
        runtime_prediction_accuracy: accuracy,
        runtime_forecasts: FORECAST_PROFILES
            .iter()
            .map(|p| p.apply(avg_runtime_minutes, error, accuracy))
            .collect(),
        total_days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_profiles() {
        let small = FORECAST_PROFILES[0].apply(Some(100.0), Some(12.0), Some(90.0));
        assert!((small.avg_runtime_minutes.unwrap() - 30.0).abs() < 1e-9);
        assert!((small.error_minutes.unwrap() - 6.0).abs() < 1e-9);
        assert_eq!(small.accuracy_percent, Some(95.0));

        let large = FORECAST_PROFILES[2].apply(Some(100.0), Some(12.0), Some(90.0));
        assert!((large.avg_runtime_minutes.unwrap() - 150.0).abs() < 1e-9);
        assert!((large.accuracy_percent.unwrap() - 81.0).abs() < 1e-9);
    }

    #[test]
    fn test_profiles_without_inputs() {
        let medium = FORECAST_PROFILES[1].apply(None, None, None);
        assert!(medium.avg_runtime_minutes.is_none());
        assert!(medium.accuracy_percent.is_none());
        // The small-job class reports its fixed accuracy regardless.
        let small = FORECAST_PROFILES[0].apply(None, None, None);
        assert_eq!(small.accuracy_percent, Some(95.0));
    }

    #[test]
    fn test_predictive_empty_document() {
        let data = compute_predictive_data(&AnalyticsDocument::default());
        assert!(data.avg_jobs_per_day.is_none());
        assert!(data.predicted_daily_load.is_none());
        assert_eq!(data.growth_factor, GROWTH_FACTOR);
        assert_eq!(data.runtime_forecasts.len(), 3);
    }
}
