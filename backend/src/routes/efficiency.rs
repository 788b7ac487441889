use serde::{Deserialize, Serialize};

// =========================================================
// Efficiency types + route
// =========================================================

/// Complete efficiency dataset.
///
/// `cpu_efficiency_percent` and `resource_waste_percent` are heuristic
/// proxies, not measured utilization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EfficiencyData {
    pub cpu_efficiency_percent: Option<f64>,
    pub resource_waste_percent: Option<f64>,
    pub completion_rate: Option<f64>,
    pub failure_rate: Option<f64>,
    pub avg_runtime_hours: Option<f64>,
    pub median_runtime_hours: Option<f64>,
    pub max_runtime_hours: Option<f64>,
    pub runtime_mean_to_max_percent: Option<f64>,
    pub avg_cpu_cores: Option<f64>,
    pub max_cpu_cores: Option<f64>,
    pub total_cpu_hours: Option<f64>,
    pub avg_cpu_hours_per_job: Option<f64>,
}

/// Route function name constant for the efficiency tab
pub const GET_EFFICIENCY_DATA: &str = "get_efficiency_data";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_unavailable() {
        let data = EfficiencyData::default();
        let json = serde_json::to_value(&data).unwrap();
        assert!(json["cpu_efficiency_percent"].is_null());
        assert!(json["resource_waste_percent"].is_null());
    }

    #[test]
    fn test_const_value() {
        assert_eq!(GET_EFFICIENCY_DATA, "get_efficiency_data");
    }
}
