//! Web server adapter.
//!
//! Serves the dashboard and JSON views of the market series. Every request
//! performs one fresh load on a blocking worker thread.

mod error;
mod handlers;

pub use error::WebError;
pub use handlers::*;

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::adapters::dashboard::HtmlDashboardAdapter;
use crate::domain::error::QuoteboardError;
use crate::ports::document_port::DocumentPort;

pub struct AppState {
    pub document: Arc<dyn DocumentPort + Send + Sync>,
    pub location: String,
    pub dashboard: HtmlDashboardAdapter,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::dashboard))
        .route("/market_data.json", get(handlers::market_data))
        .route("/api/summary", get(handlers::summary))
        .fallback(handlers::not_found)
        .with_state(Arc::new(state))
}

/// Serve on an already bound listener until the process is stopped.
pub async fn serve(listener: tokio::net::TcpListener, state: AppState) -> Result<(), QuoteboardError> {
    tracing::info!(addr = ?listener.local_addr().ok(), location = %state.location, "dashboard server listening");
    axum::serve(listener, build_router(state)).await?;
    Ok(())
}
