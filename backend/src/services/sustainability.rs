use crate::api::{SustainabilityData, TargetMetric};
use crate::models::AnalyticsDocument;
use crate::services::job_states::{state_share, COMPLETED};
use crate::services::ratios::{self, POWER_PER_CORE_KW};

pub const SUCCESS_RATE_TARGET: f64 = 90.0;
pub const RESOURCE_EFFICIENCY_TARGET: f64 = 85.0;
pub const CPU_UTILIZATION_TARGET: f64 = 80.0;
pub const ENERGY_PER_JOB_TARGET_KWH: f64 = 0.5;

fn target_metric(metric: &str, value: Option<f64>, target: f64, unit: &str) -> TargetMetric {
    TargetMetric {
        metric: metric.to_string(),
        value,
        target,
        unit: unit.to_string(),
        progress_percent: ratios::target_progress(value, target),
    }
}

/// Energy estimates and progress toward the sustainability targets.
pub fn compute_sustainability_data(doc: &AnalyticsDocument) -> SustainabilityData {
    let total_cpu_hours = doc.cpu_hours().and_then(|c| c.total);
    let avg_cores = doc.cpu_core_stats().and_then(|s| s.mean);
    let success_rate = state_share(doc.states(), COMPLETED);
    let resource_efficiency = ratios::resource_efficiency(success_rate);
    let energy_per_job = ratios::energy_per_job(
        avg_cores,
        POWER_PER_CORE_KW,
        total_cpu_hours,
        doc.metadata.total_jobs,
    );

    let metrics = vec![
        target_metric("Job Success Rate", success_rate, SUCCESS_RATE_TARGET, "%"),
        target_metric(
            "Resource Efficiency",
            resource_efficiency,
            RESOURCE_EFFICIENCY_TARGET,
            "%",
        ),
        target_metric(
            "CPU Utilization",
            ratios::core_utilization(avg_cores),
            CPU_UTILIZATION_TARGET,
            "%",
        ),
        target_metric("Energy per Job", energy_per_job, ENERGY_PER_JOB_TARGET_KWH, "kWh"),
    ];

    SustainabilityData {
        total_cpu_hours,
        power_per_core_kw: POWER_PER_CORE_KW,
        estimated_power_kw: ratios::average_power_kw(avg_cores, POWER_PER_CORE_KW),
        estimated_energy_kwh: ratios::total_energy_kwh(avg_cores, POWER_PER_CORE_KW, total_cpu_hours),
        energy_per_job_kwh: energy_per_job,
        resource_efficiency,
        metrics,
    }
}
