//! Concrete adapter implementations for ports.

pub mod csv_document;
pub mod dashboard;
pub mod file_config_adapter;
#[cfg(feature = "http")]
pub mod http_document;
pub mod json_document;
pub mod location;
#[cfg(feature = "web")]
pub mod web;
