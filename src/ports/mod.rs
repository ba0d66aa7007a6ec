//! Port traits at the edges of the pipeline.

pub mod config_port;
pub mod dashboard_port;
pub mod document_port;
