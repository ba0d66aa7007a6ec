//! Inline SVG rendering of chart projections.
//!
//! Each chart takes a [`ChartProjection`] plus [`ChartOptions`] and returns a
//! self-contained `<svg>` element. Every point carries a `<title>` tooltip
//! with its raw label and formatted value.

use crate::adapters::dashboard::format::{ValueFormat, escape_xml};
use crate::domain::projection::{ChartProjection, Sign};

pub const UP_COLOR: &str = "#F56565";
pub const DOWN_COLOR: &str = "#48BB78";
pub const LINE_COLOR: &str = "#4FD1C5";
const GRID_COLOR: &str = "#4A5568";
const AXIS_TEXT_COLOR: &str = "#A0AEC0";
const BACKGROUND: &str = "#2D3748";

const MARGIN_LEFT: f64 = 64.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 30.0;
const MARGIN_BOTTOM: f64 = 40.0;
const Y_TICKS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub value_format: ValueFormat,
    pub color_by_sign: bool,
    /// Draw point labels under the x axis. A projection whose labels exist
    /// only for tooltips suppresses them regardless.
    pub label_axis: bool,
    /// Extra room above and below the data on the value axis.
    pub domain_padding: f64,
    /// Prefix for tooltips, as in `Change (2024-01-02): 1.23%`.
    pub series_name: Option<String>,
}

impl ChartOptions {
    pub fn trend(width: f64, height: f64) -> Self {
        Self {
            title: "Close Price".to_string(),
            width,
            height,
            value_format: ValueFormat::Fixed2,
            color_by_sign: false,
            label_axis: true,
            domain_padding: 1.0,
            series_name: None,
        }
    }

    pub fn change(width: f64, height: f64) -> Self {
        Self {
            title: "Change (%)".to_string(),
            width,
            height,
            value_format: ValueFormat::Percent,
            color_by_sign: true,
            label_axis: true,
            domain_padding: 0.0,
            series_name: None,
        }
    }

    pub fn distribution(width: f64, height: f64) -> Self {
        Self {
            title: "Change Distribution".to_string(),
            label_axis: false,
            series_name: Some("Change".to_string()),
            ..Self::change(width, height)
        }
    }

    fn plot_width(&self) -> f64 {
        (self.width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0)
    }

    fn plot_height(&self) -> f64 {
        (self.height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0)
    }

    fn tooltip(&self, label: &str, value: f64) -> String {
        let formatted = self.value_format.apply(value);
        match &self.series_name {
            Some(name) => format!("{} ({}): {}", name, label, formatted),
            None => format!("{}: {}", label, formatted),
        }
    }

    fn point_color(&self, sign: Sign) -> &'static str {
        match (self.color_by_sign, sign) {
            (false, _) => LINE_COLOR,
            (true, Sign::Up) => UP_COLOR,
            (true, Sign::Down) => DOWN_COLOR,
        }
    }
}

/// Value-axis range. Never zero-width.
fn value_domain(lo: f64, hi: f64) -> (f64, f64) {
    if hi > lo { (lo, hi) } else { (lo - 0.5, hi + 0.5) }
}

pub fn render_line_chart(projection: &ChartProjection, options: &ChartOptions) -> String {
    let Some((min_value, max_value)) = projection.bounds() else {
        return String::new();
    };
    let (lo, hi) = value_domain(
        min_value - options.domain_padding,
        max_value + options.domain_padding,
    );

    let plot_width = options.plot_width();
    let plot_height = options.plot_height();
    let last_index = (projection.len() - 1).max(1) as f64;

    let x_scale = |i: usize| -> f64 { MARGIN_LEFT + (i as f64 / last_index) * plot_width };
    let y_scale = |v: f64| -> f64 { MARGIN_TOP + plot_height - ((v - lo) / (hi - lo)) * plot_height };

    let mut path_data = String::new();
    for (i, point) in projection.iter().enumerate() {
        let command = if i == 0 { "M" } else { " L" };
        path_data.push_str(&format!(
            "{} {:.1} {:.1}",
            command,
            x_scale(i),
            y_scale(point.value)
        ));
    }

    let mut svg = open_svg(options);
    push_value_axis(&mut svg, options, lo, hi);
    if options.label_axis && projection.label_axis {
        push_label_axis(&mut svg, projection, options, |i| x_scale(i));
    }
    svg.push_str(&format!(
        "  <path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"2\"/>\n",
        path_data, LINE_COLOR
    ));
    for (i, point) in projection.iter().enumerate() {
        svg.push_str(&format!(
            "  <circle class=\"point\" cx=\"{:.1}\" cy=\"{:.1}\" r=\"4\" fill=\"{}\"><title>{}</title></circle>\n",
            x_scale(i),
            y_scale(point.value),
            options.point_color(point.sign),
            escape_xml(&options.tooltip(&point.label, point.value))
        ));
    }
    svg.push_str("</svg>");
    svg
}

pub fn render_bar_chart(projection: &ChartProjection, options: &ChartOptions) -> String {
    let Some((min_value, max_value)) = projection.bounds() else {
        return String::new();
    };
    let (lo, hi) = value_domain(
        min_value.min(0.0) - options.domain_padding,
        max_value.max(0.0) + options.domain_padding,
    );

    let plot_width = options.plot_width();
    let plot_height = options.plot_height();
    let slot = plot_width / projection.len() as f64;
    let bar_width = (slot * 0.8).max(1.0);

    let x_center = |i: usize| -> f64 { MARGIN_LEFT + slot * (i as f64 + 0.5) };
    let y_scale = |v: f64| -> f64 { MARGIN_TOP + plot_height - ((v - lo) / (hi - lo)) * plot_height };
    let baseline = y_scale(0.0);

    let mut svg = open_svg(options);
    push_value_axis(&mut svg, options, lo, hi);
    svg.push_str(&format!(
        "  <line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"{}\" stroke-width=\"1\"/>\n",
        MARGIN_LEFT,
        baseline,
        MARGIN_LEFT + plot_width,
        baseline,
        AXIS_TEXT_COLOR
    ));
    if options.label_axis && projection.label_axis {
        push_label_axis(&mut svg, projection, options, |i| x_center(i));
    }
    for (i, point) in projection.iter().enumerate() {
        let top = y_scale(point.value).min(baseline);
        let bar_height = (y_scale(point.value) - baseline).abs();
        svg.push_str(&format!(
            "  <rect class=\"bar\" x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" fill=\"{}\"><title>{}</title></rect>\n",
            x_center(i) - bar_width / 2.0,
            top,
            bar_width,
            bar_height,
            options.point_color(point.sign),
            escape_xml(&options.tooltip(&point.label, point.value))
        ));
    }
    svg.push_str("</svg>");
    svg
}

fn open_svg(options: &ChartOptions) -> String {
    let mut svg = String::new();
    svg.push_str(&format!(
        r##"<svg width="{}" height="{}" viewBox="0 0 {} {}" xmlns="http://www.w3.org/2000/svg" role="img">"##,
        options.width, options.height, options.width, options.height
    ));
    svg.push_str(&format!(
        "\n  <rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
        BACKGROUND
    ));
    svg.push_str(&format!(
        "  <text x=\"{}\" y=\"18\" text-anchor=\"end\" font-size=\"12\" fill=\"{}\">{}</text>\n",
        options.width - MARGIN_RIGHT,
        AXIS_TEXT_COLOR,
        escape_xml(&options.title)
    ));
    svg
}

fn push_value_axis(svg: &mut String, options: &ChartOptions, lo: f64, hi: f64) {
    let plot_height = options.plot_height();
    let right = MARGIN_LEFT + options.plot_width();

    for tick in 0..Y_TICKS {
        let fraction = tick as f64 / (Y_TICKS - 1) as f64;
        let value = lo + (hi - lo) * fraction;
        let y = MARGIN_TOP + plot_height - fraction * plot_height;
        svg.push_str(&format!(
            "  <line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"{}\" stroke-dasharray=\"3 3\" stroke-width=\"1\"/>\n",
            MARGIN_LEFT, y, right, y, GRID_COLOR
        ));
        svg.push_str(&format!(
            "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\" font-size=\"10\" fill=\"{}\">{}</text>\n",
            MARGIN_LEFT - 6.0,
            y + 3.0,
            AXIS_TEXT_COLOR,
            options.value_format.apply(value)
        ));
    }
}

/// First, middle and last labels, so long series stay legible.
fn push_label_axis<F>(svg: &mut String, projection: &ChartProjection, options: &ChartOptions, x_of: F)
where
    F: Fn(usize) -> f64,
{
    let n = projection.len();
    let mut indices = vec![0, n / 2, n - 1];
    indices.dedup();

    for i in indices {
        svg.push_str(&format!(
            "  <text class=\"axis-label\" x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"10\" fill=\"{}\">{}</text>\n",
            x_of(i),
            options.height - MARGIN_BOTTOM / 2.0 + 4.0,
            AXIS_TEXT_COLOR,
            escape_xml(&projection.points[i].label)
        ));
    }
}
