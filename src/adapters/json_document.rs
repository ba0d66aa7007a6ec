//! JSON file document adapter.

use serde_json::Value;
use std::fs;
use std::io::ErrorKind;

use crate::domain::error::{QuoteboardError, RetrievalError};
use crate::ports::document_port::DocumentPort;

#[derive(Debug, Default, Clone)]
pub struct JsonDocumentAdapter;

impl JsonDocumentAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentPort for JsonDocumentAdapter {
    fn fetch(&self, location: &str) -> Result<Vec<Value>, QuoteboardError> {
        let content = read_local(location)?;
        parse_json_document(location, &content)
    }
}

/// Read a local document, mapping I/O failures to retrieval errors.
pub(crate) fn read_local(location: &str) -> Result<String, QuoteboardError> {
    fs::read_to_string(location).map_err(|e| {
        let reason = match e.kind() {
            ErrorKind::NotFound => "file not found".to_string(),
            _ => e.to_string(),
        };
        RetrievalError::Unreachable {
            location: location.to_string(),
            reason,
        }
        .into()
    })
}

/// The document must be a top-level JSON array; its elements are checked later.
pub fn parse_json_document(location: &str, content: &str) -> Result<Vec<Value>, QuoteboardError> {
    let content = content.trim_start_matches('\u{feff}');
    let value: Value = serde_json::from_str(content).map_err(|e| QuoteboardError::Document {
        location: location.to_string(),
        reason: format!("invalid JSON: {}", e),
    })?;

    match value {
        Value::Array(elements) => Ok(elements),
        _ => Err(QuoteboardError::Document {
            location: location.to_string(),
            reason: "expected a JSON array of records".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn fetch_reads_array() {
        let file = write_temp(
            r#"[{"code":"600000","name":"浦发银行","timestamp":"2024-01-02","closePrice":10.5,"changePercent":1.23}]"#,
        );
        let values = JsonDocumentAdapter::new()
            .fetch(file.path().to_str().unwrap())
            .unwrap();
        assert_eq!(values.len(), 1);
        assert_eq!(values[0]["code"], "600000");
    }

    #[test]
    fn fetch_empty_array() {
        let file = write_temp("[]");
        let values = JsonDocumentAdapter::new()
            .fetch(file.path().to_str().unwrap())
            .unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn fetch_missing_file_is_retrieval_error() {
        let err = JsonDocumentAdapter::new()
            .fetch("/nonexistent/market_data.json")
            .unwrap_err();
        assert!(matches!(
            err,
            QuoteboardError::Retrieval(RetrievalError::Unreachable { ref reason, .. }) if reason == "file not found"
        ));
    }

    #[test]
    fn object_document_is_malformed() {
        let err = parse_json_document("doc.json", r#"{"data": []}"#).unwrap_err();
        assert!(matches!(err, QuoteboardError::Document { ref reason, .. } if reason.contains("array")));
    }

    #[test]
    fn invalid_json_is_malformed() {
        let err = parse_json_document("doc.json", "[{").unwrap_err();
        assert!(matches!(err, QuoteboardError::Document { ref reason, .. } if reason.starts_with("invalid JSON")));
    }

    #[test]
    fn leading_byte_order_mark_is_ignored() {
        let values = parse_json_document("bom.json", "\u{feff}[]").unwrap();
        assert!(values.is_empty());

        let file = write_temp("\u{feff}[{\"code\":\"600000\"}]");
        let values = JsonDocumentAdapter::new()
            .fetch(file.path().to_str().unwrap())
            .unwrap();
        assert_eq!(values[0]["code"], "600000");
    }

    #[test]
    fn elements_are_not_checked_here() {
        let values = parse_json_document("doc.json", "[1, \"two\", null]").unwrap();
        assert_eq!(values.len(), 3);
    }
}
