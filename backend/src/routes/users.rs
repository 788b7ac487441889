use serde::{Deserialize, Serialize};

// =========================================================
// Users types + route
// =========================================================

/// A positional, anonymized ranking entry ("User 1", ..., "Others").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub label: String,
    pub value: u64,
}

/// Complete users dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsersData {
    pub total_users: Option<u64>,
    pub jobs_per_user: Option<f64>,
    pub jobs_per_user_per_day: Option<f64>,
    pub active_users: usize,
    pub top_user_jobs: Option<u64>,
    /// Top five plus "Others" (pie chart).
    pub top_five: Vec<RankedEntry>,
    /// Top ten plus "Others" (bar chart).
    pub top_ten: Vec<RankedEntry>,
    /// Sum of the top five users' job percentages.
    pub top_share_percent: f64,
    pub users_in_top_share: Option<u64>,
    pub remaining_users: Option<u64>,
}

/// Route function name constant for the users tab
pub const GET_USERS_DATA: &str = "get_users_data";
