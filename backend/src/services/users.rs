//! User ranking with an "Others" remainder.
//!
//! Labels are positional (`User 1`, `User 2`, ...); the hashed user ids in the
//! document are never exposed.

use crate::api::{RankedEntry, UsersData};
use crate::models::{AnalyticsDocument, UserEntry};
use crate::services::ratios;

/// Entries in the share pie chart.
pub const PIE_TOP_N: usize = 5;
/// Entries in the ranking bar chart.
pub const BAR_TOP_N: usize = 10;
/// Users above this job count are considered active.
pub const ACTIVE_USER_THRESHOLD: u64 = 100;

pub const OTHERS_LABEL: &str = "Others";

/// First `k` users plus one `Others` entry summing the rest.
///
/// `Others` is omitted when nothing remains, so the output length is
/// `min(k, n) + (n > k) as usize` and the job total is conserved.
pub fn collapse_top_n(users: &[UserEntry], k: usize) -> Vec<RankedEntry> {
    let split = k.min(users.len());
    let (head, tail) = users.split_at(split);

    let mut ranked: Vec<RankedEntry> = head
        .iter()
        .enumerate()
        .map(|(i, u)| RankedEntry {
            label: format!("User {}", i + 1),
            value: u.job_count,
        })
        .collect();

    if !tail.is_empty() {
        ranked.push(RankedEntry {
            label: OTHERS_LABEL.to_string(),
            value: tail.iter().map(|u| u.job_count).sum(),
        });
    }
    ranked
}

/// Users with strictly more than `threshold` jobs.
pub fn count_active_users(users: &[UserEntry], threshold: u64) -> usize {
    users.iter().filter(|u| u.job_count > threshold).count()
}

/// Combined percentage of the first `k` users.
pub fn top_share(users: &[UserEntry], k: usize) -> f64 {
    users.iter().take(k).map(|u| u.percentage).sum()
}

/// Users-tab payload.
pub fn compute_users_data(doc: &AnalyticsDocument) -> UsersData {
    let users = doc.top_users();
    let total_users = doc.total_users();
    let total_jobs = doc.metadata.total_jobs;
    let share = top_share(users, PIE_TOP_N);

    let users_in_top_share = total_users
        .and_then(|total| ratios::finite(share / 100.0 * total as f64))
        .map(|n| n.round() as u64);
    // Both figures share one base so they add up to `total_users`.
    let remaining_users = total_users
        .zip(users_in_top_share)
        .map(|(total, top)| total.saturating_sub(top));

    UsersData {
        total_users,
        jobs_per_user: ratios::jobs_per_user(total_jobs, total_users),
        jobs_per_user_per_day: ratios::jobs_per_user_per_day(total_jobs, doc.total_days(), total_users),
        active_users: count_active_users(users, ACTIVE_USER_THRESHOLD),
        top_user_jobs: users.first().map(|u| u.job_count),
        top_five: collapse_top_n(users, PIE_TOP_N),
        top_ten: collapse_top_n(users, BAR_TOP_N),
        top_share_percent: share,
        users_in_top_share,
        remaining_users,
    }
}
