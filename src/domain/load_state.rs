//! Dashboard load lifecycle and the failure boundary.
//!
//! A load moves `Idle -> Loading -> Loaded | Failed`. Every retrieval,
//! document or validation failure ends in `Failed`, which the rendering layer
//! treats exactly like an empty series.

use tracing::{debug, error, warn};

use crate::domain::error::QuoteboardError;
use crate::domain::normalize::normalize;
use crate::domain::record::MarketSeries;
use crate::domain::summary::{DerivedSummary, derive};
use crate::ports::document_port::DocumentPort;

/// Immutable result of one successful load.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub series: MarketSeries,
    pub summary: DerivedSummary,
}

impl Snapshot {
    pub fn new(series: MarketSeries) -> Self {
        let summary = derive(&series);
        Self { series, summary }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded(Snapshot),
    Failed {
        reason: String,
    },
}

impl LoadState {
    /// Start a new load. Whatever was shown before is discarded.
    pub fn begin(self) -> Self {
        LoadState::Loading
    }

    /// Finish the in-flight load. Outcomes arriving in any other state are dropped.
    pub fn complete(self, outcome: Result<MarketSeries, QuoteboardError>) -> Self {
        match self {
            LoadState::Loading => match outcome {
                Ok(series) => LoadState::Loaded(Snapshot::new(series)),
                Err(err) => LoadState::Failed {
                    reason: err.to_string(),
                },
            },
            other => other,
        }
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        match self {
            LoadState::Loaded(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    /// Loaded with at least one record.
    pub fn has_data(&self) -> bool {
        self.snapshot().is_some_and(|s| !s.series.is_empty())
    }

    pub fn status(&self) -> &'static str {
        match self {
            LoadState::Idle => "idle",
            LoadState::Loading => "loading",
            LoadState::Loaded(_) => "loaded",
            LoadState::Failed { .. } => "failed",
        }
    }
}

/// Retrieve and normalize without swallowing errors.
pub fn fetch_series(port: &dyn DocumentPort, location: &str) -> Result<MarketSeries, QuoteboardError> {
    let raw = port.fetch(location)?;
    Ok(normalize(&raw)?)
}

/// One full load through the boundary. Never fails.
pub fn load_dashboard(port: &dyn DocumentPort, location: &str) -> LoadState {
    let state = LoadState::Idle.begin();
    let outcome = fetch_series(port, location);

    match &outcome {
        Ok(series) => debug!(location, records = series.len(), "market data loaded"),
        Err(err) if err.is_data_failure() => {
            warn!(location, error = %err, "market data unavailable, rendering placeholder")
        }
        Err(err) => error!(location, error = %err, "document source failed, rendering placeholder"),
    }

    state.complete(outcome)
}
