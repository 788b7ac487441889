use crate::api::EfficiencyData;
use crate::models::AnalyticsDocument;
use crate::services::distributions::days_to_hours;
use crate::services::job_states::{state_share, COMPLETED, FAILED};
use crate::services::ratios;

/// Heuristic efficiency indicators.
pub fn compute_efficiency_data(doc: &AnalyticsDocument) -> EfficiencyData {
    let states = doc.states();
    let runtime = doc.runtime_stats();
    let cores = doc.cpu_core_stats();
    let cpu_hours = doc.cpu_hours();

    let avg_cores = cores.and_then(|s| s.mean);
    let max_cores = cores.and_then(|s| s.max);
    let failure_rate = state_share(states, FAILED);
    let cpu_efficiency = ratios::cpu_efficiency(avg_cores, max_cores);

    let runtime_mean = runtime.and_then(|s| s.mean);
    let runtime_max = runtime.and_then(|s| s.max);

    EfficiencyData {
        cpu_efficiency_percent: cpu_efficiency,
        resource_waste_percent: ratios::resource_waste(failure_rate, cpu_efficiency),
        completion_rate: state_share(states, COMPLETED),
        failure_rate,
        avg_runtime_hours: runtime_mean.map(days_to_hours),
        median_runtime_hours: runtime.and_then(|s| s.p50).map(days_to_hours),
        max_runtime_hours: runtime_max.map(days_to_hours),
        runtime_mean_to_max_percent: ratios::runtime_mean_to_max(runtime_mean, runtime_max),
        avg_cpu_cores: avg_cores,
        max_cpu_cores: max_cores,
        total_cpu_hours: cpu_hours.and_then(|c| c.total),
        avg_cpu_hours_per_job: cpu_hours.and_then(|c| c.average_per_job),
    }
}
