//! Core domain types and the pure data pipeline.

pub mod config_validation;
pub mod dashboard_config;
pub mod error;
pub mod load_state;
pub mod metrics;
pub mod normalize;
pub mod projection;
pub mod record;
pub mod summary;
