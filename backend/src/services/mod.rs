//! Derivation layer.
//!
//! Pure functions from an [`AnalyticsDocument`](crate::models::AnalyticsDocument)
//! to display values and chart series. The building blocks (state grouping,
//! distribution summaries, histograms, rankings, resampling, ratios) are
//! composed by one `compute_*_data` function per dashboard tab. Nothing here
//! performs I/O or holds state; unavailable values are `None`.

pub mod distributions;
pub mod formatting;
pub mod histogram;
pub mod job_states;
pub mod ratios;
pub mod timeseries;

pub mod efficiency;
pub mod overview;
pub mod performance;
pub mod predictive;
pub mod resources;
pub mod sustainability;
pub mod trends;
pub mod users;


pub use efficiency::compute_efficiency_data;
pub use overview::compute_overview_data;
pub use performance::compute_performance_data;
pub use predictive::compute_predictive_data;
pub use resources::compute_resources_data;
pub use sustainability::compute_sustainability_data;
pub use trends::compute_trends_data;
pub use users::compute_users_data;
