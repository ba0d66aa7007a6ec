//! HTTP request handlers for web adapter.

use axum::{
    Json,
    extract::State,
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

use crate::domain::load_state::{fetch_series, load_dashboard};
use crate::domain::record::MarketSeries;
use crate::domain::summary::derive;
use crate::ports::dashboard_port::DashboardPort;

use super::{AppState, WebError};

async fn load_series(state: &Arc<AppState>) -> Result<MarketSeries, WebError> {
    let state = Arc::clone(state);
    let series = tokio::task::spawn_blocking(move || {
        fetch_series(state.document.as_ref(), &state.location)
    })
    .await
    .map_err(|e| WebError::internal(format!("load task failed: {e}")))??;
    Ok(series)
}

/// Full dashboard page. Load failures render the placeholder.
pub async fn dashboard(State(state): State<Arc<AppState>>) -> Result<Response, WebError> {
    let worker = Arc::clone(&state);
    let load = tokio::task::spawn_blocking(move || {
        load_dashboard(worker.document.as_ref(), &worker.location)
    })
    .await
    .map_err(|e| WebError::internal(format!("load task failed: {e}")))?;

    let html = state.dashboard.render(&load)?;
    Ok(Html(html).into_response())
}

/// The normalized series in canonical key form.
pub async fn market_data(State(state): State<Arc<AppState>>) -> Result<Response, WebError> {
    let series = load_series(&state).await?;
    Ok(Json(series).into_response())
}

pub async fn summary(State(state): State<Arc<AppState>>) -> Result<Response, WebError> {
    let series = load_series(&state).await?;
    Ok(Json(derive(&series)).into_response())
}

pub async fn not_found() -> WebError {
    WebError::not_found("Page not found")
}
