use serde::{Deserialize, Serialize};

use crate::models::{JobStateEntry, PartitionEntry};
use crate::routes::series::LabeledSeries;

// =========================================================
// Overview types + route
// =========================================================

/// One member state of a [`StateGroup`], as shown when the group is
/// expanded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateDetail {
    /// Raw state label from the document.
    pub state: String,
    /// Display label, e.g. `User 336822` for `CANCELLED_by_336822`.
    pub label: String,
    pub count: u64,
    pub percentage: f64,
    pub percentage_display: String,
}

/// Several job states summed into one display bucket.
///
/// Member entries are retained so the bucket can be expanded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateGroup {
    pub count: u64,
    pub percentage: f64,
    pub percentage_display: String,
    pub details: Vec<StateDetail>,
}

impl StateGroup {
    /// Number of distinct states (reasons) merged into the group.
    pub fn variants(&self) -> usize {
        self.details.len()
    }
}

/// Display taxonomy of the job-state list.
///
/// `completed`, `failed`, `cancelled_group` and `other` partition the input.
/// `out_of_memory`, `timeout` and `node_fail` are alert views onto entries
/// that also sit inside `other`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobStateBreakdown {
    pub completed: Option<JobStateEntry>,
    pub failed: Option<JobStateEntry>,
    pub cancelled_group: Option<StateGroup>,
    pub other: Option<StateGroup>,
    pub out_of_memory: Option<JobStateEntry>,
    pub timeout: Option<JobStateEntry>,
    pub node_fail: Option<JobStateEntry>,
}

/// Failure-type rates shown as alerts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertRates {
    pub failure_rate: Option<f64>,
    pub timeout_rate: Option<f64>,
    pub memory_issue_rate: Option<f64>,
    pub node_failure_rate: Option<f64>,
}

/// CPU and GPU headline usage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceSnapshot {
    pub total_cpu_hours: Option<f64>,
    pub avg_cpu_hours_per_job: Option<f64>,
    pub gpu_job_count: Option<u64>,
    pub gpu_job_percentage: Option<f64>,
}

/// Observation window and its per-day averages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisPeriod {
    pub start: Option<String>,
    pub end: Option<String>,
    pub total_days: Option<u64>,
    pub avg_jobs_per_day: Option<f64>,
    pub avg_cpu_cores: Option<f64>,
}

/// Complete overview dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewData {
    pub total_jobs: u64,
    pub total_jobs_display: String,
    pub total_users: Option<u64>,
    pub success_rate: Option<f64>,
    pub completed_count: Option<u64>,
    pub failed_count: Option<u64>,
    pub job_states: JobStateBreakdown,
    pub top_states: LabeledSeries,
    pub alerts: AlertRates,
    pub resources: ResourceSnapshot,
    pub period: AnalysisPeriod,
    pub primary_partition: Option<PartitionEntry>,
}

/// Route function name constant for the overview tab
pub const GET_OVERVIEW_DATA: &str = "get_overview_data";

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(state: &str, count: u64, percentage: f64) -> StateDetail {
        StateDetail {
            state: state.to_string(),
            label: state.to_string(),
            count,
            percentage,
            percentage_display: format!("{:.1}%", percentage),
        }
    }

    #[test]
    fn test_state_group_variants() {
        let group = StateGroup {
            count: 15,
            percentage: 1.5,
            percentage_display: "1.5%".to_string(),
            details: vec![detail("CANCELLED_by_1", 10, 1.0), detail("CANCELLED_by_2", 5, 0.5)],
        };
        assert_eq!(group.variants(), 2);
    }

    #[test]
    fn test_breakdown_default_is_empty() {
        let breakdown = JobStateBreakdown::default();
        assert!(breakdown.completed.is_none());
        assert!(breakdown.cancelled_group.is_none());
        assert!(breakdown.other.is_none());
    }

    #[test]
    fn test_alerts_serialize_missing_as_null() {
        let alerts = AlertRates {
            failure_rate: Some(19.3),
            ..Default::default()
        };
        let json = serde_json::to_value(&alerts).unwrap();
        assert_eq!(json["failure_rate"], 19.3);
        assert!(json["timeout_rate"].is_null());
    }

    #[test]
    fn test_const_value() {
        assert_eq!(GET_OVERVIEW_DATA, "get_overview_data");
    }
}
