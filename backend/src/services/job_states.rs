//! Job-state aggregation.
//!
//! Turns the flat state list into the display taxonomy used by the overview
//! and alert cards. The partition is canonical: every entry lands in exactly
//! one of `completed`, `failed`, `cancelled_group` or `other`. The named
//! alert states (`OUT_OF_MEMORY`, `TIMEOUT`, `NODE_FAIL`) are extracted as
//! views and stay inside `other`, so the four buckets always sum to the input.

use crate::api::{JobStateBreakdown, LabeledSeries, StateDetail, StateGroup};
use crate::models::JobStateEntry;
use crate::services::formatting::format_percent;

pub const COMPLETED: &str = "COMPLETED";
pub const FAILED: &str = "FAILED";
pub const CANCELLED_PREFIX: &str = "CANCELLED";
pub const OUT_OF_MEMORY: &str = "OUT_OF_MEMORY";
pub const TIMEOUT: &str = "TIMEOUT";
pub const NODE_FAIL: &str = "NODE_FAIL";

/// Number of states shown in the state-distribution chart.
pub const TOP_STATES_LIMIT: usize = 8;

/// Partition bucket of a state label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateBucket {
    Completed,
    Failed,
    Cancelled,
    Other,
}

/// Classify a state label into its partition bucket.
pub fn classify_state(label: &str) -> StateBucket {
    if label == COMPLETED {
        StateBucket::Completed
    } else if label == FAILED {
        StateBucket::Failed
    } else if label.starts_with(CANCELLED_PREFIX) {
        StateBucket::Cancelled
    } else {
        StateBucket::Other
    }
}

/// Fold an entry into a single-state slot. Repeated labels are summed so the
/// partition stays conservative even for a malformed list.
fn merge_single(slot: &mut Option<JobStateEntry>, entry: &JobStateEntry) {
    match slot {
        Some(existing) => {
            existing.count += entry.count;
            existing.percentage += entry.percentage;
        }
        None => *slot = Some(entry.clone()),
    }
}

/// Sum a list of entries into one group; `None` when the list is empty.
pub fn group_states(entries: Vec<JobStateEntry>) -> Option<StateGroup> {
    if entries.is_empty() {
        return None;
    }
    let count = entries.iter().map(|s| s.count).sum();
    let percentage = entries.iter().map(|s| s.percentage).sum();
    Some(StateGroup {
        count,
        percentage,
        percentage_display: format_percent(percentage),
        details: entries.into_iter().map(state_detail).collect(),
    })
}

fn state_detail(entry: JobStateEntry) -> StateDetail {
    StateDetail {
        label: cancellation_label(&entry.state),
        percentage_display: format_percent(entry.percentage),
        state: entry.state,
        count: entry.count,
        percentage: entry.percentage,
    }
}

/// First entry whose label matches `name` exactly.
pub fn find_state<'a>(states: &'a [JobStateEntry], name: &str) -> Option<&'a JobStateEntry> {
    states.iter().find(|s| s.state == name)
}

/// Percentage share of one exact state, if present.
pub fn state_share(states: &[JobStateEntry], name: &str) -> Option<f64> {
    find_state(states, name).map(|s| s.percentage)
}

/// Build the display taxonomy for a state list.
pub fn aggregate_job_states(states: &[JobStateEntry]) -> JobStateBreakdown {
    let mut completed = None;
    let mut failed = None;
    let mut cancelled = Vec::new();
    let mut other = Vec::new();

    for entry in states {
        match classify_state(&entry.state) {
            StateBucket::Completed => merge_single(&mut completed, entry),
            StateBucket::Failed => merge_single(&mut failed, entry),
            StateBucket::Cancelled => cancelled.push(entry.clone()),
            StateBucket::Other => other.push(entry.clone()),
        }
    }

    JobStateBreakdown {
        completed,
        failed,
        cancelled_group: group_states(cancelled),
        other: group_states(other),
        out_of_memory: find_state(states, OUT_OF_MEMORY).cloned(),
        timeout: find_state(states, TIMEOUT).cloned(),
        node_fail: find_state(states, NODE_FAIL).cloned(),
    }
}

/// Count and percentage totals over the four partition buckets.
pub fn partition_totals(breakdown: &JobStateBreakdown) -> (u64, f64) {
    let singles = [&breakdown.completed, &breakdown.failed];
    let groups = [&breakdown.cancelled_group, &breakdown.other];

    let count = singles.iter().filter_map(|s| s.as_ref()).map(|s| s.count).sum::<u64>()
        + groups.iter().filter_map(|g| g.as_ref()).map(|g| g.count).sum::<u64>();
    let percentage = singles
        .iter()
        .filter_map(|s| s.as_ref())
        .map(|s| s.percentage)
        .sum::<f64>()
        + groups
            .iter()
            .filter_map(|g| g.as_ref())
            .map(|g| g.percentage)
            .sum::<f64>();
    (count, percentage)
}

/// Display label for a cancellation variant.
///
/// `CANCELLED_by_336822` becomes `User 336822`; labels without a submitter
/// suffix are returned unchanged.
pub fn cancellation_label(state: &str) -> String {
    let Some(rest) = state.strip_prefix(CANCELLED_PREFIX) else {
        return state.to_string();
    };
    let rest = rest.trim_start_matches(['_', ' ']);
    let Some(submitter) = rest.strip_prefix("by") else {
        return state.to_string();
    };
    let submitter = submitter.trim_start_matches(['_', ' ']);
    if submitter.is_empty() {
        state.to_string()
    } else {
        format!("User {}", submitter)
    }
}

/// The first `limit` states as a count series.
pub fn top_states_series(states: &[JobStateEntry], limit: usize) -> LabeledSeries {
    states
        .iter()
        .take(limit)
        .map(|s| (s.state.clone(), s.count as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(state: &str, count: u64, percentage: f64) -> JobStateEntry {
        JobStateEntry {
            state: state.to_string(),
            count,
            percentage,
        }
    }

    fn sample_states() -> Vec<JobStateEntry> {
        vec![
            entry("COMPLETED", 573_856, 66.71),
            entry("FAILED", 166_253, 19.33),
            entry("TIMEOUT", 31_360, 3.65),
            entry("CANCELLED_by_336822", 20_517, 2.39),
            entry("OUT_OF_MEMORY", 4_259, 0.5),
            entry("CANCELLED_by_12", 100, 0.01),
            entry("NODE_FAIL", 77, 0.01),
        ]
    }

    #[test]
    fn test_classify_state() {
        assert_eq!(classify_state("COMPLETED"), StateBucket::Completed);
        assert_eq!(classify_state("FAILED"), StateBucket::Failed);
        assert_eq!(classify_state("CANCELLED"), StateBucket::Cancelled);
        assert_eq!(classify_state("CANCELLED_by_1"), StateBucket::Cancelled);
        assert_eq!(classify_state("TIMEOUT"), StateBucket::Other);
        // Exact match only: prefixed variants are not "completed".
        assert_eq!(classify_state("COMPLETED+"), StateBucket::Other);
    }

    #[test]
    fn test_aggregate_empty() {
        let breakdown = aggregate_job_states(&[]);
        assert_eq!(breakdown, JobStateBreakdown::default());
        assert_eq!(partition_totals(&breakdown), (0, 0.0));
    }

    #[test]
    fn test_aggregate_sample_partition() {
        let states = sample_states();
        let breakdown = aggregate_job_states(&states);

        assert_eq!(breakdown.completed.as_ref().unwrap().count, 573_856);
        assert_eq!(breakdown.failed.as_ref().unwrap().count, 166_253);

        let cancelled = breakdown.cancelled_group.as_ref().unwrap();
        assert_eq!(cancelled.count, 20_617);
        assert_eq!(cancelled.variants(), 2);

        let other = breakdown.other.as_ref().unwrap();
        assert_eq!(other.count, 31_360 + 4_259 + 77);
        assert_eq!(other.variants(), 3);

        let (count, pct) = partition_totals(&breakdown);
        assert_eq!(count, states.iter().map(|s| s.count).sum::<u64>());
        let input_pct: f64 = states.iter().map(|s| s.percentage).sum();
        assert!((pct - input_pct).abs() < 1e-9);
    }

    #[test]
    fn test_group_details_carry_display_fields() {
        let breakdown = aggregate_job_states(&sample_states());
        let cancelled = breakdown.cancelled_group.unwrap();
        assert_eq!(cancelled.percentage_display, "2.4%");

        let first = &cancelled.details[0];
        assert_eq!(first.state, "CANCELLED_by_336822");
        assert_eq!(first.label, "User 336822");
        assert_eq!(first.count, 20_517);
        assert_eq!(first.percentage_display, "2.4%");

        // Non-cancellation states keep their raw label.
        let other = breakdown.other.unwrap();
        assert_eq!(other.details[1].label, "OUT_OF_MEMORY");
        assert_eq!(other.details[1].percentage_display, "0.5%");
    }

    #[test]
    fn test_alert_views_also_stay_in_other() {
        let breakdown = aggregate_job_states(&sample_states());
        assert_eq!(breakdown.out_of_memory.as_ref().unwrap().count, 4_259);
        assert_eq!(breakdown.timeout.as_ref().unwrap().count, 31_360);
        assert_eq!(breakdown.node_fail.as_ref().unwrap().count, 77);

        let other = breakdown.other.unwrap();
        assert!(other.details.iter().any(|s| s.state == OUT_OF_MEMORY));
    }

    #[test]
    fn test_duplicate_completed_entries_are_summed() {
        let states = vec![entry("COMPLETED", 10, 10.0), entry("COMPLETED", 5, 5.0)];
        let breakdown = aggregate_job_states(&states);
        let completed = breakdown.completed.unwrap();
        assert_eq!(completed.count, 15);
        assert_eq!(completed.percentage, 15.0);
    }

    #[test]
    fn test_missing_states_are_none() {
        let states = vec![entry("COMPLETED", 10, 100.0)];
        let breakdown = aggregate_job_states(&states);
        assert!(breakdown.failed.is_none());
        assert!(breakdown.cancelled_group.is_none());
        assert!(breakdown.other.is_none());
        assert!(breakdown.out_of_memory.is_none());
    }

    #[test]
    fn test_state_share() {
        let states = sample_states();
        assert_eq!(state_share(&states, COMPLETED), Some(66.71));
        assert_eq!(state_share(&states, "PREEMPTED"), None);
    }

    #[test]
    fn test_cancellation_label() {
        assert_eq!(cancellation_label("CANCELLED_by_336822"), "User 336822");
        assert_eq!(cancellation_label("CANCELLED by 42"), "User 42");
        assert_eq!(cancellation_label("CANCELLED_byA"), "User A");
        assert_eq!(cancellation_label("CANCELLED"), "CANCELLED");
        assert_eq!(cancellation_label("CANCELLED_by_"), "CANCELLED_by_");
        assert_eq!(cancellation_label("FAILED"), "FAILED");
    }

    #[test]
    fn test_top_states_series_limit() {
        let states = sample_states();
        let series = top_states_series(&states, 3);
        assert_eq!(series.labels, vec!["COMPLETED", "FAILED", "TIMEOUT"]);
        assert_eq!(series.values[0], 573_856.0);

        let all = top_states_series(&states, TOP_STATES_LIMIT);
        assert_eq!(all.len(), states.len());
    }
}
