pub mod efficiency;
pub mod overview;
pub mod performance;
pub mod predictive;
pub mod resources;
pub mod series;
pub mod sustainability;
pub mod trends;
pub mod users;

#[cfg(test)]
mod tests {
    #[test]
    fn test_module_structure() {
        // Test that all route module constants are accessible
        assert_eq!(super::overview::GET_OVERVIEW_DATA, "get_overview_data");
        assert_eq!(
            super::performance::GET_PERFORMANCE_DATA,
            "get_performance_data"
        );
        assert_eq!(super::resources::GET_RESOURCES_DATA, "get_resources_data");
        assert_eq!(super::users::GET_USERS_DATA, "get_users_data");
        assert_eq!(super::trends::GET_TRENDS_DATA, "get_trends_data");
        assert_eq!(
            super::efficiency::GET_EFFICIENCY_DATA,
            "get_efficiency_data"
        );
        assert_eq!(
            super::predictive::GET_PREDICTIVE_DATA,
            "get_predictive_data"
        );
        assert_eq!(
            super::sustainability::GET_SUSTAINABILITY_DATA,
            "get_sustainability_data"
        );
    }
}
