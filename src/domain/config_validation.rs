//! Configuration validation.
//!
//! Validates config fields before anything is loaded or rendered.

use std::net::IpAddr;

use crate::domain::error::QuoteboardError;
use crate::ports::config_port::ConfigPort;

pub fn validate_dashboard_config(config: &dyn ConfigPort) -> Result<(), QuoteboardError> {
    validate_chart_dimension(config, "width")?;
    validate_chart_dimension(config, "height")?;
    validate_bind(config)?;
    validate_port(config)?;
    Ok(())
}

/// Only required when no location is given on the command line.
pub fn validate_source_config(config: &dyn ConfigPort) -> Result<(), QuoteboardError> {
    match config.get_string("source", "location") {
        Some(location) if !location.trim().is_empty() => Ok(()),
        _ => Err(QuoteboardError::ConfigMissing {
            section: "source".to_string(),
            key: "location".to_string(),
        }),
    }
}

fn validate_chart_dimension(config: &dyn ConfigPort, key: &str) -> Result<(), QuoteboardError> {
    let value = config.get_double("chart", key, 1.0);
    if !value.is_finite() || value <= 0.0 {
        return Err(QuoteboardError::ConfigInvalid {
            section: "chart".to_string(),
            key: key.to_string(),
            reason: format!("{key} must be positive"),
        });
    }
    Ok(())
}

fn validate_bind(config: &dyn ConfigPort) -> Result<(), QuoteboardError> {
    if let Some(bind) = config.get_string("server", "bind") {
        if bind.trim().parse::<IpAddr>().is_err() {
            return Err(QuoteboardError::ConfigInvalid {
                section: "server".to_string(),
                key: "bind".to_string(),
                reason: format!("'{bind}' is not an IP address"),
            });
        }
    }
    Ok(())
}

fn validate_port(config: &dyn ConfigPort) -> Result<(), QuoteboardError> {
    let value = config.get_int("server", "port", 3000);
    if !(1..=65535).contains(&value) {
        return Err(QuoteboardError::ConfigInvalid {
            section: "server".to_string(),
            key: "port".to_string(),
            reason: "port must be between 1 and 65535".to_string(),
        });
    }
    Ok(())
}
