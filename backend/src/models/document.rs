//! Typed schema of the analytics document.
//!
//! The document is produced offline by the accounting batch job and consumed
//! read-only. Every nested object is its own record and every field a
//! consumer might find missing is an `Option`, so absence is handled by the
//! type system instead of by scattered runtime guards. Unknown keys are
//! ignored.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// The complete analytics document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsDocument {
    pub metadata: Metadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_states: Option<JobStates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime_analysis: Option<RuntimeAnalysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_usage: Option<ResourceUsage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_analysis: Option<UserAnalysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_analysis: Option<PartitionAnalysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpu_analysis: Option<GpuAnalysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_patterns: Option<DailyPatterns>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub total_jobs: u64,
    #[serde(default)]
    pub date_range: DateRange,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns_available: Option<ColumnsAvailable>,
}

/// Observation window. The producer writes an empty object when the source
/// export had no usable date column, so every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub total_days: Option<u64>,
}

impl DateRange {
    /// Parsed start timestamp, if present and well formed.
    pub fn start_time(&self) -> Option<DateTime<FixedOffset>> {
        self.start.as_deref().and_then(parse_timestamp)
    }

    /// Parsed end timestamp, if present and well formed.
    pub fn end_time(&self) -> Option<DateTime<FixedOffset>> {
        self.end.as_deref().and_then(parse_timestamp)
    }
}

/// Accepts RFC 3339 timestamps, offset-less ISO timestamps (interpreted as
/// UTC) and bare `YYYY-MM-DD` dates.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts);
    }
    let utc = FixedOffset::east_opt(0)?;
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(utc.from_utc_datetime(&naive));
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive).fixed_offset())
}

/// Which accounting columns the producer found in its input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnsAvailable {
    #[serde(rename = "START", default)]
    pub start: bool,
    #[serde(rename = "End", default)]
    pub end: bool,
    #[serde(rename = "Elapsed", default)]
    pub elapsed: bool,
    #[serde(rename = "NCPUS", default)]
    pub ncpus: bool,
    #[serde(rename = "State", default)]
    pub state: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobStates {
    #[serde(default)]
    pub total_states: Option<u64>,
    #[serde(default)]
    pub states: Vec<JobStateEntry>,
}

/// One terminal job state and its share of all jobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobStateEntry {
    pub state: String,
    pub count: u64,
    pub percentage: f64,
}

/// Five-number summary plus moments of a numeric measure.
///
/// Quartile keys follow the producer's `describe()` output (`"25%"` etc.).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DistributionStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    #[serde(default)]
    pub mean: Option<f64>,
    #[serde(default)]
    pub std: Option<f64>,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(rename = "25%", default)]
    pub p25: Option<f64>,
    #[serde(rename = "50%", default)]
    pub p50: Option<f64>,
    #[serde(rename = "75%", default)]
    pub p75: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeAnalysis {
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub statistics: Option<DistributionStats>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceUsage {
    #[serde(default)]
    pub cpu_hours: Option<CpuHours>,
    #[serde(default)]
    pub cpu_cores: Option<CpuCores>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CpuHours {
    #[serde(default)]
    pub total: Option<f64>,
    #[serde(default)]
    pub average_per_job: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CpuCores {
    #[serde(default)]
    pub statistics: Option<DistributionStats>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserAnalysis {
    #[serde(default)]
    pub total_users: Option<u64>,
    #[serde(default)]
    pub top_users: Vec<UserEntry>,
}

/// A (hashed) submitting user and their job volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserEntry {
    pub user_id: String,
    pub job_count: u64,
    #[serde(default)]
    pub percentage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartitionAnalysis {
    #[serde(default)]
    pub total_partitions: Option<u64>,
    #[serde(default)]
    pub partitions: Vec<PartitionEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartitionEntry {
    pub partition: String,
    pub count: u64,
    #[serde(default)]
    pub percentage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GpuAnalysis {
    #[serde(default)]
    pub statistics: Option<DistributionStats>,
    #[serde(default)]
    pub gpu_jobs: Option<GpuJobs>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GpuJobs {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub percentage: Option<f64>,
}

/// Jobs submitted per calendar day, ascending by date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyPatterns {
    #[serde(default)]
    pub dates: Vec<String>,
    #[serde(default)]
    pub job_counts: Vec<u64>,
    #[serde(default)]
    pub average_jobs_per_day: Option<f64>,
}

impl AnalyticsDocument {
    /// Deserialize a document from its JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The job-state list, empty when the section is absent.
    pub fn states(&self) -> &[JobStateEntry] {
        self.job_states
            .as_ref()
            .map(|s| s.states.as_slice())
            .unwrap_or(&[])
    }

    /// The ranked user list, empty when the section is absent.
    pub fn top_users(&self) -> &[UserEntry] {
        self.user_analysis
            .as_ref()
            .map(|u| u.top_users.as_slice())
            .unwrap_or(&[])
    }

    pub fn total_users(&self) -> Option<u64> {
        self.user_analysis.as_ref().and_then(|u| u.total_users)
    }

    pub fn total_days(&self) -> Option<u64> {
        self.metadata.date_range.total_days
    }

    pub fn runtime_stats(&self) -> Option<&DistributionStats> {
        self.runtime_analysis
            .as_ref()
            .and_then(|r| r.statistics.as_ref())
    }

    pub fn cpu_core_stats(&self) -> Option<&DistributionStats> {
        self.resource_usage
            .as_ref()
            .and_then(|r| r.cpu_cores.as_ref())
            .and_then(|c| c.statistics.as_ref())
    }

    pub fn cpu_hours(&self) -> Option<&CpuHours> {
        self.resource_usage
            .as_ref()
            .and_then(|r| r.cpu_hours.as_ref())
    }

    pub fn gpu_stats(&self) -> Option<&DistributionStats> {
        self.gpu_analysis
            .as_ref()
            .and_then(|g| g.statistics.as_ref())
    }

    pub fn gpu_jobs(&self) -> Option<&GpuJobs> {
        self.gpu_analysis.as_ref().and_then(|g| g.gpu_jobs.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_document_parses() {
        let doc = AnalyticsDocument::from_json_str(r#"{"metadata": {"total_jobs": 0}}"#).unwrap();
        assert_eq!(doc.metadata.total_jobs, 0);
        assert!(doc.job_states.is_none());
        assert!(doc.states().is_empty());
        assert!(doc.top_users().is_empty());
        assert_eq!(doc.total_days(), None);
    }

    #[test]
    fn test_missing_metadata_is_rejected() {
        assert!(AnalyticsDocument::from_json_str(r#"{"job_states": {"states": []}}"#).is_err());
    }

    #[test]
    fn test_quartile_keys_use_percent_names() {
        let json = r#"{"count": 10, "mean": 1.0, "std": 0.5, "min": 0.0,
                       "25%": 0.25, "50%": 0.5, "75%": 0.75, "max": 2.0}"#;
        let stats: DistributionStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.count, Some(10));
        assert_eq!(stats.p25, Some(0.25));
        assert_eq!(stats.p50, Some(0.5));
        assert_eq!(stats.p75, Some(0.75));

        let back = serde_json::to_value(&stats).unwrap();
        assert_eq!(back["50%"], 0.5);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let json = r#"{"metadata": {"total_jobs": 5, "extra": true}, "something_else": [1, 2]}"#;
        let doc = AnalyticsDocument::from_json_str(json).unwrap();
        assert_eq!(doc.metadata.total_jobs, 5);
    }

    #[test]
    fn test_empty_date_range_object() {
        let json = r#"{"metadata": {"total_jobs": 5, "date_range": {}}}"#;
        let doc = AnalyticsDocument::from_json_str(json).unwrap();
        assert_eq!(doc.metadata.date_range, DateRange::default());
        assert!(doc.metadata.date_range.start_time().is_none());
    }

    #[test]
    fn test_parse_timestamp_variants() {
        assert!(parse_timestamp("2024-05-23T15:42:44+00:00").is_some());
        assert!(parse_timestamp("2024-05-23T15:42:44").is_some());
        assert!(parse_timestamp("2024-05-23T15:42:44.123456").is_some());
        assert!(parse_timestamp("2024-05-23").is_some());
        assert!(parse_timestamp("not a date").is_none());
    }

    #[test]
    fn test_accessors_follow_nested_options() {
        let json = r#"{
            "metadata": {"total_jobs": 3},
            "resource_usage": {"cpu_hours": {"total": 12.0}},
            "gpu_analysis": {"gpu_jobs": {"count": 1, "percentage": 33.3}}
        }"#;
        let doc = AnalyticsDocument::from_json_str(json).unwrap();
        assert_eq!(doc.cpu_hours().and_then(|c| c.total), Some(12.0));
        assert!(doc.cpu_core_stats().is_none());
        assert!(doc.gpu_stats().is_none());
        assert_eq!(doc.gpu_jobs().and_then(|g| g.count), Some(1));
    }
}
