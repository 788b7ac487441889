//! Derived ratio calculators.
//!
//! Every function is a heuristic estimate over summary statistics. Divisors
//! are guarded and any non-finite result is reported as unavailable.

/// Day-over-day growth assumed by the load forecast.
pub const GROWTH_FACTOR: f64 = 1.15;
/// Assumed power draw of one allocated core, in kilowatts.
pub const POWER_PER_CORE_KW: f64 = 0.1;
/// Peak capacity multiple of the average daily load.
pub const PEAK_CAPACITY_FACTOR: f64 = 1.8;
/// Expected peak multiple of the average daily load.
pub const PEAK_LOAD_FACTOR: f64 = 1.4;
/// Relative error of runtime predictions.
pub const RUNTIME_ERROR_FACTOR: f64 = 0.12;
/// Reference core count treated as full utilization.
pub const REFERENCE_CORES: f64 = 10.0;

/// `Some(value)` when finite.
pub fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Guarded division; `None` on a zero or non-finite result.
pub fn safe_div(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        return None;
    }
    finite(numerator / denominator)
}

pub fn percent_of(part: f64, whole: f64) -> Option<f64> {
    safe_div(part, whole).and_then(|r| finite(r * 100.0))
}

/// Mean cores as a share of the maximum allocation.
pub fn cpu_efficiency(avg_cores: Option<f64>, max_cores: Option<f64>) -> Option<f64> {
    percent_of(avg_cores?, max_cores?)
}

/// Failed share plus half the idle share.
pub fn resource_waste(failed_pct: Option<f64>, cpu_eff: Option<f64>) -> Option<f64> {
    finite(failed_pct? + (100.0 - cpu_eff?) / 2.0)
}

pub fn jobs_per_user(total_jobs: u64, total_users: Option<u64>) -> Option<f64> {
    safe_div(total_jobs as f64, total_users? as f64)
}

pub fn avg_jobs_per_day(total_jobs: u64, total_days: Option<u64>) -> Option<f64> {
    safe_div(total_jobs as f64, total_days? as f64)
}

/// `total_jobs / total_days / total_users`.
pub fn jobs_per_user_per_day(
    total_jobs: u64,
    total_days: Option<u64>,
    total_users: Option<u64>,
) -> Option<f64> {
    safe_div(avg_jobs_per_day(total_jobs, total_days)?, total_users? as f64)
}

/// Energy attributed to an average job, in kWh.
pub fn energy_per_job(
    avg_cores: Option<f64>,
    power_per_core_kw: f64,
    total_cpu_hours: Option<f64>,
    total_jobs: u64,
) -> Option<f64> {
    safe_div(
        total_energy_kwh(avg_cores, power_per_core_kw, total_cpu_hours)?,
        total_jobs as f64,
    )
}

/// Estimated energy over the whole period, in kWh.
pub fn total_energy_kwh(
    avg_cores: Option<f64>,
    power_per_core_kw: f64,
    total_cpu_hours: Option<f64>,
) -> Option<f64> {
    finite(avg_cores? * power_per_core_kw * total_cpu_hours?)
}

/// Estimated instantaneous draw of an average job, in kW.
pub fn average_power_kw(avg_cores: Option<f64>, power_per_core_kw: f64) -> Option<f64> {
    finite(avg_cores? * power_per_core_kw)
}

/// Next-period daily load.
pub fn forecast(avg_jobs_per_day: Option<f64>) -> Option<f64> {
    finite(avg_jobs_per_day? * GROWTH_FACTOR)
}

pub fn peak_capacity(avg_jobs_per_day: Option<f64>) -> Option<f64> {
    finite(avg_jobs_per_day? * PEAK_CAPACITY_FACTOR)
}

pub fn peak_load(avg_jobs_per_day: Option<f64>) -> Option<f64> {
    finite(avg_jobs_per_day? * PEAK_LOAD_FACTOR)
}

/// Predicted load as a share of twice the current average, capped at 100.
pub fn load_progress(predicted: Option<f64>, avg_jobs_per_day: Option<f64>) -> Option<f64> {
    percent_of(predicted?, avg_jobs_per_day? * 2.0).map(|p| p.min(100.0))
}

/// Concurrent cores implied by the predicted daily load.
pub fn predicted_cores(avg_cores: Option<f64>, predicted_load: Option<f64>) -> Option<f64> {
    finite(avg_cores? * predicted_load?)
}

/// Runtime prediction accuracy scales from 85% to 95% with completion rate.
pub fn runtime_prediction_accuracy(completion_pct: Option<f64>) -> Option<f64> {
    finite(85.0 + completion_pct? / 100.0 * 10.0)
}

pub fn runtime_prediction_error(avg_runtime_minutes: Option<f64>) -> Option<f64> {
    finite(avg_runtime_minutes? * RUNTIME_ERROR_FACTOR)
}

/// Success rate plus a fixed 20 point allowance, clamped to a percentage.
pub fn resource_efficiency(success_pct: Option<f64>) -> Option<f64> {
    finite((success_pct? + 20.0).clamp(0.0, 100.0))
}

/// Mean cores against the reference allocation.
pub fn core_utilization(avg_cores: Option<f64>) -> Option<f64> {
    percent_of(avg_cores?, REFERENCE_CORES)
}

/// Progress toward a target, capped at 100.
pub fn target_progress(value: Option<f64>, target: f64) -> Option<f64> {
    percent_of(value?, target).map(|p| p.min(100.0))
}

/// Mean runtime relative to the longest job, capped at 100.
pub fn runtime_mean_to_max(mean: Option<f64>, max: Option<f64>) -> Option<f64> {
    percent_of(mean?, max?).map(|p| p.min(100.0))
}
