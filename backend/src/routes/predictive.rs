use serde::{Deserialize, Serialize};

// =========================================================
// Predictive types + route
// =========================================================

/// Runtime forecast for one job-size class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeForecast {
    pub class_label: String,
    pub avg_runtime_minutes: Option<f64>,
    pub error_minutes: Option<f64>,
    pub accuracy_percent: Option<f64>,
}

/// Complete predictive dataset. Every value is a heuristic estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictiveData {
    pub avg_jobs_per_day: Option<f64>,
    pub growth_factor: f64,
    pub predicted_daily_load: Option<f64>,
    pub load_progress_percent: Option<f64>,
    pub peak_capacity: Option<f64>,
    pub peak_load: Option<f64>,
    pub predicted_core_demand: Option<f64>,
    pub avg_runtime_minutes: Option<f64>,
    pub avg_prediction_error_minutes: Option<f64>,
    pub runtime_prediction_accuracy: Option<f64>,
    pub runtime_forecasts: Vec<RuntimeForecast>,
    pub total_days: Option<u64>,
}

/// Route function name constant for the predictive tab
pub const GET_PREDICTIVE_DATA: &str = "get_predictive_data";
