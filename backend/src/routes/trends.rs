use serde::{Deserialize, Serialize};

// =========================================================
// Trends types + route
// =========================================================

/// One day of the (possibly sampled) daily job series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub date: String,
    pub value: u64,
}

/// Mean job volume over one non-overlapping 7-day window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyAverage {
    pub bin_label: String,
    pub start_date: String,
    pub end_date: String,
    pub days: usize,
    pub average: f64,
}

/// Busiest or quietest day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extremum {
    pub index: usize,
    pub date: String,
    pub value: u64,
}

/// Complete trends dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendsData {
    pub total_days: Option<u64>,
    /// `total_jobs / total_days` from the metadata.
    pub avg_jobs_per_day: Option<f64>,
    /// Average reported by the producer alongside the daily series.
    pub reported_avg_jobs_per_day: Option<f64>,
    pub success_rate: Option<f64>,
    pub sample_every: usize,
    pub sampled: Vec<SeriesPoint>,
    pub weekly: Vec<WeeklyAverage>,
    pub peak: Option<Extremum>,
    pub trough: Option<Extremum>,
}

/// Route function name constant for trends
pub const GET_TRENDS_DATA: &str = "get_trends_data";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekly_average_clone() {
        let week = WeeklyAverage {
            bin_label: "Week 1".to_string(),
            start_date: "2024-05-23".to_string(),
            end_date: "2024-05-29".to_string(),
            days: 7,
            average: 1200.5,
        };
        let cloned = week.clone();
        assert_eq!(cloned.average, 1200.5);
    }

    #[test]
    fn test_extremum_debug() {
        let peak = Extremum {
            index: 3,
            date: "2024-05-26".to_string(),
            value: 950,
        };
        let debug_str = format!("{:?}", peak);
        assert!(debug_str.contains("Extremum"));
    }

    #[test]
    fn test_trends_data_debug() {
        let data = TrendsData {
            total_days: None,
            avg_jobs_per_day: None,
            reported_avg_jobs_per_day: None,
            success_rate: None,
            sample_every: 7,
            sampled: vec![],
            weekly: vec![],
            peak: None,
            trough: None,
        };
        let debug_str = format!("{:?}", data);
        assert!(debug_str.contains("TrendsData"));
    }

    #[test]
    fn test_const_value() {
        assert_eq!(GET_TRENDS_DATA, "get_trends_data");
    }
}
