//! Public API surface.
//!
//! Consolidates the per-tab payload types. All types derive
//! Serialize/Deserialize for JSON serialization.

pub use crate::routes::efficiency::EfficiencyData;
pub use crate::routes::overview::AlertRates;
pub use crate::routes::overview::AnalysisPeriod;
pub use crate::routes::overview::JobStateBreakdown;
pub use crate::routes::overview::OverviewData;
pub use crate::routes::overview::ResourceSnapshot;
pub use crate::routes::overview::StateDetail;
pub use crate::routes::overview::StateGroup;
pub use crate::routes::performance::HistogramBucket;
pub use crate::routes::performance::PerformanceData;
pub use crate::routes::performance::RuntimeClassEstimate;
pub use crate::routes::performance::RuntimeSummary;
pub use crate::routes::performance::WeightBand;
pub use crate::routes::predictive::PredictiveData;
pub use crate::routes::predictive::RuntimeForecast;
pub use crate::routes::resources::DistributionSummary;
pub use crate::routes::resources::GpuSummary;
pub use crate::routes::resources::ResourcesData;
pub use crate::routes::series::LabeledSeries;
pub use crate::routes::sustainability::SustainabilityData;
pub use crate::routes::sustainability::TargetMetric;
pub use crate::routes::trends::Extremum;
pub use crate::routes::trends::SeriesPoint;
pub use crate::routes::trends::TrendsData;
pub use crate::routes::trends::WeeklyAverage;
pub use crate::routes::users::RankedEntry;
pub use crate::routes::users::UsersData;

use serde::{Deserialize, Serialize};

/// Dashboard tabs served by the derivation layer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    Overview,
    Performance,
    Resources,
    Users,
    Trends,
    Efficiency,
    Predictive,
    Sustainability,
}

impl Tab {
    pub const ALL: [Tab; 8] = [
        Tab::Overview,
        Tab::Performance,
        Tab::Resources,
        Tab::Users,
        Tab::Trends,
        Tab::Efficiency,
        Tab::Predictive,
        Tab::Sustainability,
    ];

    /// URL path segment, e.g. `overview`.
    pub fn slug(&self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::Performance => "performance",
            Tab::Resources => "resources",
            Tab::Users => "users",
            Tab::Trends => "trends",
            Tab::Efficiency => "efficiency",
            Tab::Predictive => "predictive",
            Tab::Sustainability => "sustainability",
        }
    }

    /// Route function name, e.g. `get_overview_data`.
    pub fn route_name(&self) -> &'static str {
        use crate::routes::*;
        match self {
            Tab::Overview => overview::GET_OVERVIEW_DATA,
            Tab::Performance => performance::GET_PERFORMANCE_DATA,
            Tab::Resources => resources::GET_RESOURCES_DATA,
            Tab::Users => users::GET_USERS_DATA,
            Tab::Trends => trends::GET_TRENDS_DATA,
            Tab::Efficiency => efficiency::GET_EFFICIENCY_DATA,
            Tab::Predictive => predictive::GET_PREDICTIVE_DATA,
            Tab::Sustainability => sustainability::GET_SUSTAINABILITY_DATA,
        }
    }

    pub fn from_slug(slug: &str) -> Option<Tab> {
        Tab::ALL.into_iter().find(|t| t.slug() == slug)
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}
