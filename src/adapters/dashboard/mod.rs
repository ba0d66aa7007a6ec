//! HTML dashboard adapter implementing DashboardPort.
//!
//! Renders a [`LoadState`] through the askama `dashboard.html` template with
//! the three charts inlined as SVG. Any state without data renders the
//! placeholder in every chart and in the table.

pub mod chart_svg;
pub mod format;

use askama::Template;
use chrono::Datelike;

use crate::domain::dashboard_config::{
    DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH, DEFAULT_CURRENCY_SYMBOL, DashboardConfig,
};
use crate::domain::error::QuoteboardError;
use crate::domain::load_state::{LoadState, Snapshot};
use crate::domain::metrics::DerivedMetrics;
use crate::domain::projection::Sign;
use crate::domain::record::MarketSeries;
use crate::ports::dashboard_port::DashboardPort;

use chart_svg::{ChartOptions, render_bar_chart, render_line_chart};

pub const PLACEHOLDER: &str = "Loading data or no data available...";
const TABLE_COLUMNS: [&str; 5] = ["Code", "Name", "Timestamp", "Close Price", "Change (%)"];

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardOptions {
    pub currency_symbol: String,
    pub show_table: bool,
    pub chart_width: f64,
    pub chart_height: f64,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            show_table: true,
            chart_width: DEFAULT_CHART_WIDTH,
            chart_height: DEFAULT_CHART_HEIGHT,
        }
    }
}

impl From<&DashboardConfig> for DashboardOptions {
    fn from(config: &DashboardConfig) -> Self {
        Self {
            currency_symbol: config.currency_symbol.clone(),
            show_table: config.show_table,
            chart_width: config.chart_width,
            chart_height: config.chart_height,
        }
    }
}

struct MetricCard {
    label: &'static str,
    value: String,
    class: &'static str,
}

#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardTemplate {
    title: String,
    description: String,
    status: &'static str,
    has_data: bool,
    placeholder: &'static str,
    cards: Vec<MetricCard>,
    trend_svg: String,
    change_svg: String,
    distribution_svg: String,
    show_table: bool,
    columns: [&'static str; 5],
    rows: Vec<Vec<String>>,
    year: i32,
}

#[derive(Debug, Clone, Default)]
pub struct HtmlDashboardAdapter {
    options: DashboardOptions,
}

impl HtmlDashboardAdapter {
    pub fn new(options: DashboardOptions) -> Self {
        Self { options }
    }

    fn metric_cards(&self, metrics: Option<&DerivedMetrics>) -> Vec<MetricCard> {
        let symbol = &self.options.currency_symbol;
        let price_card = |label: &'static str, value: Option<f64>| MetricCard {
            label,
            value: value.map_or_else(|| "N/A".to_string(), |v| format::price(symbol, v)),
            class: "neutral",
        };

        vec![
            price_card("Latest Close", metrics.map(|m| m.latest_price)),
            MetricCard {
                label: "Latest Change",
                value: metrics.map_or_else(|| "N/A".to_string(), |m| format::percent(m.latest_change)),
                class: metrics.map_or("neutral", |m| Sign::of(m.latest_change).as_str()),
            },
            price_card("Period High", metrics.map(|m| m.period_high)),
            price_card("Period Low", metrics.map(|m| m.period_low)),
            price_card("Average Close", metrics.map(|m| m.average_price)),
        ]
    }

    fn charts(&self, snapshot: &Snapshot) -> (String, String, String) {
        let (width, height) = (self.options.chart_width, self.options.chart_height);
        let summary = &snapshot.summary;
        (
            render_line_chart(&summary.trend, &ChartOptions::trend(width, height)),
            render_bar_chart(&summary.change, &ChartOptions::change(width, height)),
            render_bar_chart(&summary.distribution, &ChartOptions::distribution(width, height)),
        )
    }
}

pub fn page_title(series: Option<&MarketSeries>) -> String {
    match series.and_then(|s| s.name()) {
        Some(name) => format!("{} Market Dashboard", name),
        None => "Market Dashboard".to_string(),
    }
}

pub fn page_description(series: Option<&MarketSeries>) -> String {
    match series.and_then(|s| s.name()) {
        Some(name) => format!("{} market data analysis and visualization", name),
        None => "Market data analysis and visualization".to_string(),
    }
}

fn table_rows(series: &MarketSeries) -> Vec<Vec<String>> {
    series
        .iter()
        .map(|r| {
            vec![
                r.code.clone(),
                r.name.clone(),
                r.timestamp.clone(),
                format::table_number(r.close_price),
                format::table_number(r.change_percent),
            ]
        })
        .collect()
}

impl DashboardPort for HtmlDashboardAdapter {
    fn render(&self, state: &LoadState) -> Result<String, QuoteboardError> {
        let snapshot = state.snapshot().filter(|s| !s.series.is_empty());

        let (trend_svg, change_svg, distribution_svg) = match snapshot {
            Some(s) => self.charts(s),
            None => Default::default(),
        };

        let template = DashboardTemplate {
            title: page_title(snapshot.map(|s| &s.series)),
            description: page_description(snapshot.map(|s| &s.series)),
            status: state.status(),
            has_data: snapshot.is_some(),
            placeholder: PLACEHOLDER,
            cards: self.metric_cards(snapshot.and_then(|s| s.summary.metrics.as_ref())),
            trend_svg,
            change_svg,
            distribution_svg,
            show_table: self.options.show_table,
            columns: TABLE_COLUMNS,
            rows: snapshot.map(|s| table_rows(&s.series)).unwrap_or_default(),
            year: chrono::Local::now().year(),
        };

        template.render().map_err(|e| QuoteboardError::Render {
            reason: e.to_string(),
        })
    }
}
