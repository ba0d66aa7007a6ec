//! CSV file document adapter.
//!
//! The header row names the record keys; every cell arrives as a string and
//! numeric fields are parsed during normalization.

use serde_json::{Map, Value};

use crate::adapters::json_document::read_local;
use crate::domain::error::QuoteboardError;
use crate::ports::document_port::DocumentPort;

#[derive(Debug, Default, Clone)]
pub struct CsvDocumentAdapter;

impl CsvDocumentAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentPort for CsvDocumentAdapter {
    fn fetch(&self, location: &str) -> Result<Vec<Value>, QuoteboardError> {
        let content = read_local(location)?;
        parse_csv_document(location, &content)
    }
}

pub fn parse_csv_document(location: &str, content: &str) -> Result<Vec<Value>, QuoteboardError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(content.trim_start_matches('\u{feff}').as_bytes());

    let headers = rdr
        .headers()
        .map_err(|e| QuoteboardError::Document {
            location: location.to_string(),
            reason: format!("CSV header error: {}", e),
        })?
        .clone();

    let mut values = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|e| QuoteboardError::Document {
            location: location.to_string(),
            reason: format!("CSV parse error: {}", e),
        })?;

        let object: Map<String, Value> = headers
            .iter()
            .zip(record.iter())
            .map(|(key, cell)| (key.to_string(), Value::String(cell.to_string())))
            .collect();
        values.push(Value::Object(object));
    }

    Ok(values)
}
