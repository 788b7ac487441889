use serde::{Deserialize, Serialize};

// =========================================================
// Sustainability types + route
// =========================================================

/// A sustainability indicator measured against its target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetMetric {
    pub metric: String,
    pub value: Option<f64>,
    pub target: f64,
    pub unit: String,
    pub progress_percent: Option<f64>,
}

/// Complete sustainability dataset. Energy figures are estimates derived
/// from a fixed per-core power draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SustainabilityData {
    pub total_cpu_hours: Option<f64>,
    pub power_per_core_kw: f64,
    pub estimated_power_kw: Option<f64>,
    pub estimated_energy_kwh: Option<f64>,
    pub energy_per_job_kwh: Option<f64>,
    pub resource_efficiency: Option<f64>,
    pub metrics: Vec<TargetMetric>,
}

/// Route function name constant for the sustainability tab
pub const GET_SUSTAINABILITY_DATA: &str = "get_sustainability_data";
