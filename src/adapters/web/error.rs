//! HTTP error responses for web adapter.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::domain::error::QuoteboardError;

#[derive(Debug)]
pub struct WebError {
    pub status: StatusCode,
    pub message: String,
}

impl WebError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

pub fn status_from_error(err: &QuoteboardError) -> StatusCode {
    match err {
        QuoteboardError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        err if err.is_data_failure() => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<QuoteboardError> for WebError {
    fn from(err: QuoteboardError) -> Self {
        Self::new(status_from_error(&err), err.to_string())
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "status": self.status.as_u16(),
            "error": self.message,
        }));
        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::{RetrievalError, ValidationError};

    #[test]
    fn data_failures_map_to_gateway_and_unprocessable() {
        let unreachable: QuoteboardError = RetrievalError::Status {
            location: "http://x/market_data.json".into(),
            status: 404,
        }
        .into();
        assert_eq!(status_from_error(&unreachable), StatusCode::BAD_GATEWAY);

        let document = QuoteboardError::Document {
            location: "x.json".into(),
            reason: "not an array".into(),
        };
        assert_eq!(status_from_error(&document), StatusCode::BAD_GATEWAY);

        let invalid: QuoteboardError = ValidationError::new(3, "missing key closePrice").into();
        assert_eq!(status_from_error(&invalid), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn io_and_config_failures_are_internal() {
        let io: QuoteboardError = std::io::Error::other("disk").into();
        assert_eq!(status_from_error(&io), StatusCode::INTERNAL_SERVER_ERROR);

        let config = QuoteboardError::ConfigMissing {
            section: "source".into(),
            key: "location".into(),
        };
        assert_eq!(status_from_error(&config), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn render_failure_is_internal() {
        let err = QuoteboardError::Render {
            reason: "template".into(),
        };
        let web: WebError = err.into();
        assert_eq!(web.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(web.message.contains("template"));
    }
}
