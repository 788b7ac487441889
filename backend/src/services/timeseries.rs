//! Daily job series resampling.
//!
//! `dates` and `job_counts` are parallel arrays; when their lengths differ the
//! shorter one bounds every operation.

use crate::api::{Extremum, SeriesPoint, WeeklyAverage};

/// Default stride for the sampled daily chart.
pub const DEFAULT_SAMPLE_EVERY: usize = 7;
/// Window length of the weekly averages.
pub const WEEK_DAYS: usize = 7;

fn paired<'a>(dates: &'a [String], counts: &'a [u64]) -> impl Iterator<Item = (usize, &'a String, u64)> + 'a {
    dates
        .iter()
        .zip(counts.iter().copied())
        .enumerate()
        .map(|(i, (d, c))| (i, d, c))
}

/// Points at indexes `0, n, 2n, ...`. A stride of zero is treated as one.
pub fn sample_every_nth(dates: &[String], counts: &[u64], n: usize) -> Vec<SeriesPoint> {
    paired(dates, counts)
        .step_by(n.max(1))
        .map(|(_, date, value)| SeriesPoint {
            date: date.clone(),
            value,
        })
        .collect()
}

/// Mean of each non-overlapping 7-day window, in chronological order.
///
/// A trailing partial window is averaged over the days it actually has.
pub fn weekly_averages(dates: &[String], counts: &[u64]) -> Vec<WeeklyAverage> {
    let len = dates.len().min(counts.len());
    dates[..len]
        .chunks(WEEK_DAYS)
        .zip(counts[..len].chunks(WEEK_DAYS))
        .enumerate()
        .filter_map(|(week, (window_dates, window_counts))| {
            let first = window_dates.first()?;
            let last = window_dates.last()?;
            let sum: u64 = window_counts.iter().sum();
            Some(WeeklyAverage {
                bin_label: format!("Week {}", week + 1),
                start_date: first.clone(),
                end_date: last.clone(),
                days: window_counts.len(),
                average: sum as f64 / window_counts.len() as f64,
            })
        })
        .collect()
}

/// Busiest and quietest days. Ties resolve to the earliest index.
pub fn find_peak_and_trough(dates: &[String], counts: &[u64]) -> (Option<Extremum>, Option<Extremum>) {
    let mut peak: Option<(usize, &String, u64)> = None;
    let mut trough: Option<(usize, &String, u64)> = None;

    for point in paired(dates, counts) {
        if peak.map_or(true, |(_, _, v)| point.2 > v) {
            peak = Some(point);
        }
        if trough.map_or(true, |(_, _, v)| point.2 < v) {
            trough = Some(point);
        }
    }

    let to_extremum = |(index, date, value): (usize, &String, u64)| Extremum {
        index,
        date: date.clone(),
        value,
    };
    (peak.map(to_extremum), trough.map(to_extremum))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn days(n: usize) -> Vec<String> {
        (1..=n).map(|d| format!("2024-06-{:02}", d)).collect()
    }

    #[test]
    fn test_weekly_averages_two_full_weeks() {
        let counts: Vec<u64> = (1..=14).collect();
        let weekly = weekly_averages(&days(14), &counts);
        assert_eq!(weekly.len(), 2);
        assert_eq!(weekly[0].average, 4.0);
        assert_eq!(weekly[1].average, 11.0);
        assert_eq!(weekly[0].bin_label, "Week 1");
        assert_eq!(weekly[1].start_date, "2024-06-08");
        assert_eq!(weekly[1].end_date, "2024-06-14");
    }

    #[test]
    fn test_weekly_averages_partial_window() {
        let counts: Vec<u64> = (1..=9).collect();
        let weekly = weekly_averages(&days(9), &counts);
        assert_eq!(weekly.len(), 2);
        assert_eq!(weekly[1].days, 2);
        assert_eq!(weekly[1].average, 8.5);
    }

    #[test]
    fn test_weekly_averages_empty() {
        assert!(weekly_averages(&[], &[]).is_empty());
    }

    #[test]
    fn test_unequal_lengths_use_shorter() {
        let counts: Vec<u64> = (1..=5).collect();
        let weekly = weekly_averages(&days(10), &counts);
        assert_eq!(weekly.len(), 1);
        assert_eq!(weekly[0].days, 5);
        assert_eq!(weekly[0].end_date, "2024-06-05");

        let sampled = sample_every_nth(&days(3), &counts, 1);
        assert_eq!(sampled.len(), 3);
    }

    #[test]
    fn test_sample_every_nth() {
        let counts: Vec<u64> = (0..30).collect();
        let sampled = sample_every_nth(&days(30), &counts, 7);
        let values: Vec<u64> = sampled.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![0, 7, 14, 21, 28]);

        let all = sample_every_nth(&days(3), &counts[..3], 0);
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_peak_and_trough_first_occurrence() {
        let (peak, trough) = find_peak_and_trough(&days(5), &[5, 9, 2, 9, 1]);
        let peak = peak.unwrap();
        let trough = trough.unwrap();
        assert_eq!(peak.index, 1);
        assert_eq!(peak.value, 9);
        assert_eq!(peak.date, "2024-06-02");
        assert_eq!(trough.index, 4);
        assert_eq!(trough.value, 1);
    }

    #[test]
    fn test_peak_and_trough_empty() {
        assert_eq!(find_peak_and_trough(&[], &[]), (None, None));
    }
}
