use crate::api::{GpuSummary, ResourcesData};
use crate::models::AnalyticsDocument;
use crate::services::distributions::summarize_distribution;
use crate::services::formatting::{format_compact, format_or_na};
use crate::services::histogram::core_histogram;
use crate::services::ratios::finite;

/// CPU-hour totals, core distribution, GPU usage and partitions.
pub fn compute_resources_data(doc: &AnalyticsDocument) -> ResourcesData {
    let cpu_hours = doc.cpu_hours();
    let total_cpu_hours = cpu_hours.and_then(|c| c.total);
    let core_stats = doc.cpu_core_stats();

    let gpu_jobs = doc.gpu_jobs();
    let gpu_stats = doc.gpu_stats();
    let job_percentage = gpu_jobs.and_then(|g| g.percentage);
    let gpu = GpuSummary {
        job_count: gpu_jobs.and_then(|g| g.count),
        job_percentage,
        cpu_only_percentage: job_percentage.and_then(|p| finite(100.0 - p)),
        max_allocation: gpu_stats.and_then(|s| s.max),
        per_job: summarize_distribution(gpu_stats),
    };

    let partitions = doc.partition_analysis.as_ref();

    ResourcesData {
        total_cpu_hours,
        total_cpu_hours_display: format_or_na(total_cpu_hours.map(format_compact)),
        avg_cpu_hours_per_job: cpu_hours.and_then(|c| c.average_per_job),
        cpu_cores: summarize_distribution(core_stats),
        core_histogram: core_histogram(core_stats, Some(doc.metadata.total_jobs)),
        gpu,
        total_partitions: partitions.and_then(|p| p.total_partitions),
        partitions: partitions.map(|p| p.partitions.clone()).unwrap_or_default(),
    }
}
