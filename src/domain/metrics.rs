//! Summary statistics over a series.

use serde::Serialize;

use crate::domain::record::MarketSeries;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedMetrics {
    pub latest_price: f64,
    pub latest_change: f64,
    pub period_high: f64,
    pub period_low: f64,
    pub average_price: f64,
}

impl DerivedMetrics {
    /// `None` for an empty series: there is no latest value or average.
    pub fn compute(series: &MarketSeries) -> Option<Self> {
        let latest = series.last()?;

        let mut period_high = f64::NEG_INFINITY;
        let mut period_low = f64::INFINITY;
        let mut mean = CompensatedSum::default();
        let n = series.len() as f64;

        // Terms are pre-divided so the running total never exceeds the largest close.
        for record in series {
            period_high = period_high.max(record.close_price);
            period_low = period_low.min(record.close_price);
            mean.add(record.close_price / n);
        }

        let average_price = mean.total().clamp(period_low, period_high);

        Some(DerivedMetrics {
            latest_price: latest.close_price,
            latest_change: latest.change_percent,
            period_high,
            period_low,
            average_price,
        })
    }
}

/// Neumaier summation.
#[derive(Debug, Default, Clone, Copy)]
struct CompensatedSum {
    sum: f64,
    compensation: f64,
}

impl CompensatedSum {
    fn add(&mut self, value: f64) {
        let t = self.sum + value;
        if self.sum.abs() >= value.abs() {
            self.compensation += (self.sum - t) + value;
        } else {
            self.compensation += (value - t) + self.sum;
        }
        self.sum = t;
    }

    fn total(&self) -> f64 {
        self.sum + self.compensation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::normalize::normalize;
    use approx::assert_relative_eq;
    use serde_json::json;

    fn series(closes: &[f64], changes: &[f64]) -> MarketSeries {
        let raw: Vec<_> = closes
            .iter()
            .zip(changes)
            .enumerate()
            .map(|(i, (&close, &change))| {
                json!({
                    "code": "600000",
                    "name": "浦发银行",
                    "timestamp": format!("2024-02-{:02}", i + 1),
                    "closePrice": close,
                    "changePercent": change,
                })
            })
            .collect();
        normalize(&raw).unwrap()
    }

    #[test]
    fn empty_series_has_no_metrics() {
        assert_eq!(DerivedMetrics::compute(&MarketSeries::empty()), None);
    }

    #[test]
    fn two_record_scenario() {
        let m = DerivedMetrics::compute(&series(&[10.50, 10.20], &[1.23, -2.86])).unwrap();
        assert_relative_eq!(m.latest_price, 10.20);
        assert_relative_eq!(m.latest_change, -2.86);
        assert_relative_eq!(m.period_high, 10.50);
        assert_relative_eq!(m.period_low, 10.20);
        assert_relative_eq!(m.average_price, 10.35, epsilon = 1e-12);
    }

    #[test]
    fn single_record_collapses_extremes() {
        let m = DerivedMetrics::compute(&series(&[7.25], &[0.0])).unwrap();
        assert_relative_eq!(m.period_high, 7.25);
        assert_relative_eq!(m.period_low, 7.25);
        assert_relative_eq!(m.average_price, 7.25);
    }

    #[test]
    fn latest_follows_sequence_order_not_value() {
        let m = DerivedMetrics::compute(&series(&[5.0, 9.0, 6.0], &[0.1, 0.2, -0.3])).unwrap();
        assert_relative_eq!(m.latest_price, 6.0);
        assert_relative_eq!(m.latest_change, -0.3);
        assert_relative_eq!(m.period_high, 9.0);
        assert_relative_eq!(m.period_low, 5.0);
    }

    #[test]
    fn average_of_repeated_value_stays_in_range() {
        let closes = vec![0.1; 3];
        let changes = vec![0.0; 3];
        let m = DerivedMetrics::compute(&series(&closes, &changes)).unwrap();
        assert!(m.average_price >= m.period_low);
        assert!(m.average_price <= m.period_high);
    }

    #[test]
    fn average_of_near_max_closes_is_finite() {
        let m = DerivedMetrics::compute(&series(&[1e308, 1e308], &[0.0, 0.0])).unwrap();
        assert!(m.average_price.is_finite());
        assert_relative_eq!(m.average_price, 1e308);
        assert!(m.period_low <= m.average_price && m.average_price <= m.period_high);
    }

    #[test]
    fn average_of_max_and_zero() {
        let m = DerivedMetrics::compute(&series(&[f64::MAX, 0.0, f64::MAX], &[0.0, 0.0, 0.0])).unwrap();
        assert!(m.average_price.is_finite());
        assert!(m.period_low <= m.average_price && m.average_price <= m.period_high);
    }

    #[test]
    fn compensated_sum_recovers_small_terms() {
        let mut sum = CompensatedSum::default();
        sum.add(1e16);
        sum.add(1.0);
        sum.add(-1e16);
        assert_relative_eq!(sum.total(), 1.0);
    }
}
