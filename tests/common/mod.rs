#![allow(dead_code)]

use quoteboard::domain::error::{QuoteboardError, RetrievalError};
use quoteboard::ports::document_port::DocumentPort;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::io::Write;

/// In-memory document source keyed by location.
pub struct MockDocumentPort {
    pub documents: HashMap<String, Vec<Value>>,
    pub errors: HashMap<String, String>,
}

impl MockDocumentPort {
    pub fn new() -> Self {
        Self {
            documents: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_document(mut self, location: &str, values: Vec<Value>) -> Self {
        self.documents.insert(location.to_string(), values);
        self
    }

    pub fn with_error(mut self, location: &str, reason: &str) -> Self {
        self.errors.insert(location.to_string(), reason.to_string());
        self
    }
}

impl DocumentPort for MockDocumentPort {
    fn fetch(&self, location: &str) -> Result<Vec<Value>, QuoteboardError> {
        if let Some(reason) = self.errors.get(location) {
            return Err(RetrievalError::Unreachable {
                location: location.to_string(),
                reason: reason.clone(),
            }
            .into());
        }
        self.documents
            .get(location)
            .cloned()
            .ok_or_else(|| RetrievalError::Status {
                location: location.to_string(),
                status: 404,
            }
            .into())
    }
}

pub fn record(timestamp: &str, close_price: f64, change_percent: f64) -> Value {
    json!({
        "code": "600000",
        "name": "浦发银行",
        "timestamp": timestamp,
        "closePrice": close_price,
        "changePercent": change_percent,
    })
}

/// The two-record 浦发银行 sample.
pub fn sample_records() -> Vec<Value> {
    vec![
        record("2024-01-02", 10.50, 1.23),
        record("2024-01-03", 10.20, -2.86),
    ]
}

pub fn write_temp_file(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
