use serde::{Deserialize, Serialize};

use crate::models::PartitionEntry;
use crate::routes::performance::HistogramBucket;

// =========================================================
// Resources types + route
// =========================================================

/// Summary statistics in the measure's own unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DistributionSummary {
    pub count: Option<u64>,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub p25: Option<f64>,
    pub median: Option<f64>,
    pub p75: Option<f64>,
    pub max: Option<f64>,
    pub p95_estimate: Option<f64>,
}

/// GPU usage across the job population.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GpuSummary {
    pub job_count: Option<u64>,
    pub job_percentage: Option<f64>,
    pub cpu_only_percentage: Option<f64>,
    pub max_allocation: Option<f64>,
    pub per_job: DistributionSummary,
}

/// Complete resources dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourcesData {
    pub total_cpu_hours: Option<f64>,
    pub total_cpu_hours_display: String,
    pub avg_cpu_hours_per_job: Option<f64>,
    pub cpu_cores: DistributionSummary,
    pub core_histogram: Vec<HistogramBucket>,
    pub gpu: GpuSummary,
    pub total_partitions: Option<u64>,
    pub partitions: Vec<PartitionEntry>,
}

/// Route function name constant for the resources tab
pub const GET_RESOURCES_DATA: &str = "get_resources_data";
