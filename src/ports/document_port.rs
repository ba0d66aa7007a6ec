//! Document retrieval port trait.

use serde_json::Value;

use crate::domain::error::QuoteboardError;

/// Source of the raw market document.
///
/// Implementations return the top-level sequence untouched; per-record
/// validation belongs to [`crate::domain::normalize::normalize`]. A location
/// that cannot be reached yields [`QuoteboardError::Retrieval`], a reachable
/// document that is not a sequence yields [`QuoteboardError::Document`].
pub trait DocumentPort {
    fn fetch(&self, location: &str) -> Result<Vec<Value>, QuoteboardError>;
}
