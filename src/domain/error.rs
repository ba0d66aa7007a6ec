//! Domain error types.

/// A malformed element in the raw document, with the position that failed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid record at index {index}: {reason}")]
pub struct ValidationError {
    pub reason: String,
    pub index: usize,
}

impl ValidationError {
    pub fn new(index: usize, reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            index,
        }
    }
}

/// The document could not be retrieved at all.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RetrievalError {
    #[error("document {location} unreachable: {reason}")]
    Unreachable { location: String, reason: String },

    #[error("document {location} returned HTTP status {status}")]
    Status { location: String, status: u16 },

    #[error("no document source for {location}: {reason}")]
    Unsupported { location: String, reason: String },
}

/// Top-level error type for quoteboard.
#[derive(Debug, thiserror::Error)]
pub enum QuoteboardError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error("malformed document {location}: {reason}")]
    Document { location: String, reason: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("render error: {reason}")]
    Render { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl QuoteboardError {
    /// True for failures the dashboard boundary turns into the "no data" state.
    pub fn is_data_failure(&self) -> bool {
        matches!(
            self,
            QuoteboardError::Retrieval(_)
                | QuoteboardError::Document { .. }
                | QuoteboardError::Validation(_)
        )
    }
}

impl From<&QuoteboardError> for std::process::ExitCode {
    fn from(err: &QuoteboardError) -> Self {
        let code: u8 = match err {
            QuoteboardError::Io(_) | QuoteboardError::Render { .. } => 1,
            QuoteboardError::ConfigParse { .. }
            | QuoteboardError::ConfigMissing { .. }
            | QuoteboardError::ConfigInvalid { .. } => 2,
            QuoteboardError::Retrieval(_) | QuoteboardError::Document { .. } => 3,
            QuoteboardError::Validation(_) => 4,
        };
        std::process::ExitCode::from(code)
    }
}
