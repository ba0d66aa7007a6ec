//! End-to-end pipeline tests: document port through normalization,
//! derivation and the dashboard boundary.

mod common;

use approx::assert_relative_eq;
use common::*;
use quoteboard::adapters::dashboard::{HtmlDashboardAdapter, PLACEHOLDER};
use quoteboard::domain::error::QuoteboardError;
use quoteboard::domain::load_state::{LoadState, fetch_series, load_dashboard};
use quoteboard::domain::normalize::normalize;
use quoteboard::domain::projection::Sign;
use quoteboard::domain::summary::derive;
use quoteboard::ports::dashboard_port::DashboardPort;
use serde_json::json;

const LOCATION: &str = "market_data.json";

#[test]
fn two_record_sample_metrics() {
    let series = normalize(&sample_records()).unwrap();
    let summary = derive(&series);
    let m = summary.metrics.unwrap();

    assert_relative_eq!(m.latest_price, 10.20);
    assert_relative_eq!(m.latest_change, -2.86);
    assert_relative_eq!(m.period_high, 10.50);
    assert_relative_eq!(m.period_low, 10.20);
    assert_relative_eq!(m.average_price, 10.35, epsilon = 1e-12);

    let signs: Vec<Sign> = summary.change.iter().map(|p| p.sign).collect();
    assert_eq!(signs, vec![Sign::Up, Sign::Down]);
}

#[test]
fn zero_change_is_up() {
    let series = normalize(&[record("2024-01-02", 10.0, 0.0)]).unwrap();
    let summary = derive(&series);
    assert_eq!(summary.change.points[0].sign, Sign::Up);
    assert_eq!(summary.distribution.points[0].sign, Sign::Up);
}

#[test]
fn single_record_metrics_collapse_to_that_record() {
    let series = normalize(&[record("2024-01-02", 8.88, 0.5)]).unwrap();
    let m = derive(&series).metrics.unwrap();
    assert_relative_eq!(m.period_high, 8.88);
    assert_relative_eq!(m.period_low, 8.88);
    assert_relative_eq!(m.average_price, 8.88);
}

#[test]
fn empty_document_renders_placeholder_without_error() {
    let port = MockDocumentPort::new().with_document(LOCATION, Vec::new());
    let state = load_dashboard(&port, LOCATION);

    assert_eq!(state.status(), "loaded");
    assert!(state.snapshot().unwrap().summary.metrics.is_none());

    let html = HtmlDashboardAdapter::default().render(&state).unwrap();
    assert!(html.contains(PLACEHOLDER));
}

#[test]
fn missing_close_price_is_validation_error_at_index_zero() {
    let raw = vec![json!({
        "code": "600000",
        "name": "浦发银行",
        "timestamp": "2024-01-02",
        "changePercent": 1.23,
    })];
    let port = MockDocumentPort::new().with_document(LOCATION, raw);

    let err = fetch_series(&port, LOCATION).unwrap_err();
    assert!(matches!(err, QuoteboardError::Validation(ref v) if v.index == 0));

    let state = load_dashboard(&port, LOCATION);
    assert!(matches!(state, LoadState::Failed { .. }));
    let html = HtmlDashboardAdapter::default().render(&state).unwrap();
    assert!(html.contains(PLACEHOLDER));
}

#[test]
fn one_bad_record_rejects_whole_series() {
    let mut raw = sample_records();
    raw.push(json!({"code": "600000", "name": "浦发银行", "timestamp": "2024-01-04", "closePrice": "abc", "changePercent": 0.1}));
    let port = MockDocumentPort::new().with_document(LOCATION, raw);

    let err = fetch_series(&port, LOCATION).unwrap_err();
    assert!(matches!(err, QuoteboardError::Validation(ref v) if v.index == 2));
    assert!(!load_dashboard(&port, LOCATION).has_data());
}

#[test]
fn unreachable_source_yields_no_data_state() {
    let port = MockDocumentPort::new().with_error(LOCATION, "connection refused");
    let state = load_dashboard(&port, LOCATION);
    assert_eq!(state.status(), "failed");
    assert!(!state.has_data());
}

#[test]
fn loaded_dashboard_shows_sample_values() {
    let port = MockDocumentPort::new().with_document(LOCATION, sample_records());
    let state = load_dashboard(&port, LOCATION);
    let html = HtmlDashboardAdapter::default().render(&state).unwrap();

    assert!(html.contains("浦发银行 Market Dashboard"));
    assert!(html.contains("¥10.35"));
    assert!(html.contains("Change (2024-01-03): -2.86%"));
    assert!(html.contains("<td>10.5000</td>"));
    assert!(html.contains("<td>10.2000</td>"));
}

#[test]
fn reload_replaces_previous_snapshot() {
    let port = MockDocumentPort::new().with_document(LOCATION, sample_records());
    let first = load_dashboard(&port, LOCATION);
    assert!(first.has_data());

    let reloading = first.begin();
    assert_eq!(reloading, LoadState::Loading);
    assert!(!reloading.has_data());
}

#[test]
fn canonical_raw_form_renormalizes_identically() {
    let series = normalize(&sample_records()).unwrap();
    let again = normalize(&series.to_raw()).unwrap();
    assert_eq!(series, again);
    assert_eq!(derive(&series), derive(&again));
}
