pub mod allocation_request_builder;
pub mod allocation_service;
pub mod chart_normalizer;
pub mod market_data_service;
pub mod projection_service;
