pub mod aggregation_service;
pub mod chart_service;
pub mod fetch_service;
pub mod presentation_service;
pub mod view_service;
