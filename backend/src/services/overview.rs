use crate::api::{AlertRates, AnalysisPeriod, OverviewData, ResourceSnapshot};
use crate::models::AnalyticsDocument;
use crate::services::formatting::format_thousands;
use crate::services::job_states::{
    aggregate_job_states, state_share, top_states_series, COMPLETED, FAILED, NODE_FAIL,
    OUT_OF_MEMORY, TIMEOUT, TOP_STATES_LIMIT,
};
use crate::services::ratios;

/// Headline figures, state breakdown and alert rates.
pub fn compute_overview_data(doc: &AnalyticsDocument) -> OverviewData {
    let states = doc.states();
    let job_states = aggregate_job_states(states);
    let total_jobs = doc.metadata.total_jobs;

    let alerts = AlertRates {
        failure_rate: state_share(states, FAILED),
        timeout_rate: state_share(states, TIMEOUT),
        memory_issue_rate: state_share(states, OUT_OF_MEMORY),
        node_failure_rate: state_share(states, NODE_FAIL),
    };

    let cpu_hours = doc.cpu_hours();
    let gpu_jobs = doc.gpu_jobs();
    let resources = ResourceSnapshot {
        total_cpu_hours: cpu_hours.and_then(|c| c.total),
        avg_cpu_hours_per_job: cpu_hours.and_then(|c| c.average_per_job),
        gpu_job_count: gpu_jobs.and_then(|g| g.count),
        gpu_job_percentage: gpu_jobs.and_then(|g| g.percentage),
    };

    let range = &doc.metadata.date_range;
    let period = AnalysisPeriod {
        start: range.start.clone(),
        end: range.end.clone(),
        total_days: range.total_days,
        avg_jobs_per_day: ratios::avg_jobs_per_day(total_jobs, range.total_days),
        avg_cpu_cores: doc.cpu_core_stats().and_then(|s| s.mean),
    };

    OverviewData {
        total_jobs,
        total_jobs_display: format_thousands(total_jobs),
        total_users: doc.total_users(),
        success_rate: state_share(states, COMPLETED),
        completed_count: job_states.completed.as_ref().map(|s| s.count),
        failed_count: job_states.failed.as_ref().map(|s| s.count),
        top_states: top_states_series(states, TOP_STATES_LIMIT),
        job_states,
        alerts,
        resources,
        period,
        primary_partition: doc
            .partition_analysis
            .as_ref()
            .and_then(|p| p.partitions.first().cloned()),
    }
}
