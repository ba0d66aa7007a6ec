//! Chart-ready projections of one numeric field of a series.

use serde::Serialize;

use crate::domain::record::MarketSeries;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Up,
    Down,
}

impl Sign {
    /// Zero counts as up.
    pub fn of(value: f64) -> Self {
        if value >= 0.0 { Sign::Up } else { Sign::Down }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sign::Up => "up",
            Sign::Down => "down",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionPoint {
    pub label: String,
    pub value: f64,
    pub sign: Sign,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartProjection {
    pub points: Vec<ProjectionPoint>,
    /// False when labels exist only for tooltip lookup.
    pub label_axis: bool,
}

impl ChartProjection {
    /// Close prices over time. Trend points carry no sign semantics.
    pub fn trend(series: &MarketSeries) -> Self {
        Self {
            points: series
                .iter()
                .map(|r| ProjectionPoint {
                    label: r.timestamp.clone(),
                    value: r.close_price,
                    sign: Sign::Up,
                })
                .collect(),
            label_axis: true,
        }
    }

    pub fn change(series: &MarketSeries) -> Self {
        Self {
            points: signed_changes(series),
            label_axis: true,
        }
    }

    pub fn distribution(series: &MarketSeries) -> Self {
        Self {
            points: signed_changes(series),
            label_axis: false,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProjectionPoint> {
        self.points.iter()
    }

    /// Smallest and largest value, or `None` when empty.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        let mut values = self.points.iter().map(|p| p.value);
        let first = values.next()?;
        Some(values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}

fn signed_changes(series: &MarketSeries) -> Vec<ProjectionPoint> {
    series
        .iter()
        .map(|r| ProjectionPoint {
            label: r.timestamp.clone(),
            value: r.change_percent,
            sign: Sign::of(r.change_percent),
        })
        .collect()
}
