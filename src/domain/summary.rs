//! Everything the dashboard needs from one series, computed in one pass.

use serde::Serialize;

use crate::domain::metrics::DerivedMetrics;
use crate::domain::projection::ChartProjection;
use crate::domain::record::MarketSeries;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DerivedSummary {
    pub metrics: Option<DerivedMetrics>,
    pub trend: ChartProjection,
    pub change: ChartProjection,
    pub distribution: ChartProjection,
}

pub fn derive(series: &MarketSeries) -> DerivedSummary {
    DerivedSummary {
        metrics: DerivedMetrics::compute(series),
        trend: ChartProjection::trend(series),
        change: ChartProjection::change(series),
        distribution: ChartProjection::distribution(series),
    }
}
