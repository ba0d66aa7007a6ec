//! Routes a document location to the adapter that can read it.

use serde_json::Value;

use crate::adapters::csv_document::CsvDocumentAdapter;
#[cfg(feature = "http")]
use crate::adapters::http_document::HttpDocumentAdapter;
use crate::adapters::json_document::JsonDocumentAdapter;
use crate::domain::error::QuoteboardError;
#[cfg(not(feature = "http"))]
use crate::domain::error::RetrievalError;
use crate::ports::document_port::DocumentPort;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Csv,
}

impl DocumentFormat {
    /// Decided by extension, ignoring any query string or fragment. JSON otherwise.
    pub fn from_location(location: &str) -> Self {
        let path = location
            .split(['?', '#'])
            .next()
            .unwrap_or(location)
            .to_ascii_lowercase();
        if path.ends_with(".csv") {
            DocumentFormat::Csv
        } else {
            DocumentFormat::Json
        }
    }
}

pub fn is_remote(location: &str) -> bool {
    let lower = location.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

#[derive(Default)]
pub struct LocationRouter {
    json: JsonDocumentAdapter,
    csv: CsvDocumentAdapter,
    #[cfg(feature = "http")]
    http: HttpDocumentAdapter,
}

impl LocationRouter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentPort for LocationRouter {
    fn fetch(&self, location: &str) -> Result<Vec<Value>, QuoteboardError> {
        if is_remote(location) {
            #[cfg(feature = "http")]
            {
                return self.http.fetch(location);
            }
            #[cfg(not(feature = "http"))]
            {
                return Err(RetrievalError::Unsupported {
                    location: location.to_string(),
                    reason: "built without the http feature".to_string(),
                }
                .into());
            }
        }

        match DocumentFormat::from_location(location) {
            DocumentFormat::Csv => self.csv.fetch(location),
            DocumentFormat::Json => self.json.fetch(location),
        }
    }
}
