use crate::api::TrendsData;
use crate::models::AnalyticsDocument;
use crate::services::job_states::{state_share, COMPLETED};
use crate::services::ratios;
use crate::services::timeseries::{find_peak_and_trough, sample_every_nth, weekly_averages};

/// Daily series, weekly averages and extremes.
///
/// `sample_every` is the stride of the sampled daily chart; zero is treated
/// as one.
pub fn compute_trends_data(doc: &AnalyticsDocument, sample_every: usize) -> TrendsData {
    let (dates, counts, reported) = match doc.daily_patterns.as_ref() {
        Some(p) => (p.dates.as_slice(), p.job_counts.as_slice(), p.average_jobs_per_day),
        None => (&[][..], &[][..], None),
    };
    let (peak, trough) = find_peak_and_trough(dates, counts);
    let total_days = doc.total_days();

    TrendsData {
        total_days,
        avg_jobs_per_day: ratios::avg_jobs_per_day(doc.metadata.total_jobs, total_days),
        reported_avg_jobs_per_day: reported,
        success_rate: state_share(doc.states(), COMPLETED),
        sample_every: sample_every.max(1),
        sampled: sample_every_nth(dates, counts, sample_every),
        weekly: weekly_averages(dates, counts),
        peak,
        trough,
    }
}
