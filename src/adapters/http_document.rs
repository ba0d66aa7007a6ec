//! HTTP(S) document adapter.
//!
//! One GET per load. No retry and no custom timeout: a failed request simply
//! leaves the dashboard without data.

use serde_json::Value;

use crate::adapters::csv_document::parse_csv_document;
use crate::adapters::json_document::parse_json_document;
use crate::adapters::location::DocumentFormat;
use crate::domain::error::{QuoteboardError, RetrievalError};
use crate::ports::document_port::DocumentPort;

pub struct HttpDocumentAdapter {
    client: reqwest::blocking::Client,
}

impl HttpDocumentAdapter {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for HttpDocumentAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentPort for HttpDocumentAdapter {
    fn fetch(&self, location: &str) -> Result<Vec<Value>, QuoteboardError> {
        let response = self
            .client
            .get(location)
            .send()
            .map_err(|e| RetrievalError::Unreachable {
                location: location.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RetrievalError::Status {
                location: location.to_string(),
                status: status.as_u16(),
            }
            .into());
        }

        let body = response.text().map_err(|e| RetrievalError::Unreachable {
            location: location.to_string(),
            reason: format!("failed to read body: {}", e),
        })?;

        match DocumentFormat::from_location(location) {
            DocumentFormat::Csv => parse_csv_document(location, &body),
            DocumentFormat::Json => parse_json_document(location, &body),
        }
    }
}
