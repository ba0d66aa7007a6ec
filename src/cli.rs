//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::dashboard::format;
use crate::adapters::dashboard::{DashboardOptions, HtmlDashboardAdapter};
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::location::LocationRouter;
use crate::domain::config_validation::{validate_dashboard_config, validate_source_config};
use crate::domain::dashboard_config::{DEFAULT_CURRENCY_SYMBOL, DEFAULT_PORT, DashboardConfig};
use crate::domain::error::QuoteboardError;
use crate::domain::load_state::{LoadState, fetch_series, load_dashboard};
use crate::domain::record::MarketSeries;
use crate::domain::summary::{DerivedSummary, derive};
use crate::ports::config_port::ConfigPort;
use crate::ports::dashboard_port::DashboardPort;

#[derive(Parser, Debug)]
#[command(name = "quoteboard", about = "Market data dashboard generator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load market data and write the HTML dashboard
    Render {
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// File path or http(s) URL of the market data document
        #[arg(short, long)]
        input: Option<String>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print derived metrics for a market data document
    Summary {
        #[arg(short, long)]
        input: String,
        /// Print the full derived summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check that every record in a document is well formed
    Validate {
        #[arg(short, long)]
        input: String,
    },
    /// Start the dashboard web server
    Serve {
        #[arg(short, long)]
        config: PathBuf,
    },
}

/// Values given on the command line that win over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub location: Option<String>,
    pub output: Option<String>,
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Render {
            config,
            input,
            output,
        } => run_render(config.as_ref(), input, output),
        Command::Summary { input, json } => run_summary(&input, json),
        Command::Validate { input } => run_validate(&input),
        Command::Serve { config } => run_serve(&config),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    let adapter = FileConfigAdapter::from_file(path).map_err(|err| {
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })?;
    tracing::debug!(origin = adapter.origin(), "config loaded");
    Ok(adapter)
}

fn fail(err: QuoteboardError) -> ExitCode {
    eprintln!("error: {err}");
    (&err).into()
}

pub fn build_dashboard_config(
    config: &dyn ConfigPort,
    overrides: &Overrides,
) -> Result<DashboardConfig, QuoteboardError> {
    validate_dashboard_config(config)?;

    let location = match &overrides.location {
        Some(location) => location.clone(),
        None => {
            validate_source_config(config)?;
            config.get_string_or("source", "location", "")
        }
    };

    let port = config.get_int("server", "port", i64::from(DEFAULT_PORT));
    let port = u16::try_from(port).map_err(|_| QuoteboardError::ConfigInvalid {
        section: "server".into(),
        key: "port".into(),
        reason: "port must be between 1 and 65535".into(),
    })?;

    let defaults = DashboardConfig::with_location(location);
    Ok(DashboardConfig {
        output: overrides
            .output
            .clone()
            .unwrap_or_else(|| config.get_string_or("report", "output", &defaults.output)),
        currency_symbol: config.get_string_or("report", "currency_symbol", &defaults.currency_symbol),
        show_table: config.get_bool("report", "show_table", defaults.show_table),
        chart_width: config.get_double("chart", "width", defaults.chart_width),
        chart_height: config.get_double("chart", "height", defaults.chart_height),
        bind: config.get_string_or("server", "bind", &defaults.bind),
        port,
        ..defaults
    })
}

/// Human-readable metrics block printed by `summary`.
pub fn summary_text(series: &MarketSeries, summary: &DerivedSummary) -> String {
    let mut out = String::new();
    match (series.name(), series.code()) {
        (Some(name), Some(code)) => out.push_str(&format!("Instrument: {} ({})\n", name, code)),
        _ => out.push_str("Instrument: unknown\n"),
    }
    out.push_str(&format!("Records: {}\n", series.len()));

    match &summary.metrics {
        Some(m) => {
            let symbol = DEFAULT_CURRENCY_SYMBOL;
            out.push_str(&format!("Latest close:  {}\n", format::price(symbol, m.latest_price)));
            out.push_str(&format!("Latest change: {}\n", format::percent(m.latest_change)));
            out.push_str(&format!("Period high:   {}\n", format::price(symbol, m.period_high)));
            out.push_str(&format!("Period low:    {}\n", format::price(symbol, m.period_low)));
            out.push_str(&format!("Average close: {}\n", format::price(symbol, m.average_price)));
        }
        None => out.push_str("No data available\n"),
    }
    out
}

fn run_render(
    config_path: Option<&PathBuf>,
    input: Option<String>,
    output: Option<PathBuf>,
) -> ExitCode {
    let overrides = Overrides {
        location: input,
        output: output.map(|p| p.display().to_string()),
    };

    let adapter = match config_path {
        Some(path) => {
            eprintln!("Loading config from {}", path.display());
            match load_config(path) {
                Ok(a) => a,
                Err(code) => return code,
            }
        }
        None => match FileConfigAdapter::from_string("") {
            Ok(a) => a,
            Err(e) => return fail(e),
        },
    };

    let dashboard_config = match build_dashboard_config(&adapter, &overrides) {
        Ok(c) => c,
        Err(e) => return fail(e),
    };

    eprintln!("Loading market data from {}", dashboard_config.location);
    let router = LocationRouter::new();
    let state = load_dashboard(&router, &dashboard_config.location);

    match &state {
        LoadState::Loaded(snapshot) if !snapshot.series.is_empty() => {
            eprintln!("Loaded {} records", snapshot.series.len());
        }
        LoadState::Failed { reason } => {
            eprintln!("warning: {reason}; rendering placeholder");
        }
        _ => eprintln!("warning: no data available; rendering placeholder"),
    }

    let dashboard = HtmlDashboardAdapter::new(DashboardOptions::from(&dashboard_config));
    if let Err(e) = dashboard.write(&state, &dashboard_config.output) {
        return fail(e);
    }

    eprintln!("Dashboard written to {}", dashboard_config.output);
    ExitCode::SUCCESS
}

fn run_summary(input: &str, json: bool) -> ExitCode {
    let series = match fetch_series(&LocationRouter::new(), input) {
        Ok(s) => s,
        Err(e) => return fail(e),
    };
    let summary = derive(&series);

    if json {
        match serde_json::to_string_pretty(&summary) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                return fail(QuoteboardError::Render {
                    reason: e.to_string(),
                });
            }
        }
    } else {
        print!("{}", summary_text(&series, &summary));
    }
    ExitCode::SUCCESS
}

fn run_validate(input: &str) -> ExitCode {
    match fetch_series(&LocationRouter::new(), input) {
        Ok(series) => {
            println!("{}: {} valid records", input, series.len());
            ExitCode::SUCCESS
        }
        Err(e) => fail(e),
    }
}

fn run_serve(config_path: &PathBuf) -> ExitCode {
    #[cfg(feature = "web")]
    {
        use crate::adapters::web::{AppState, serve};
        use std::sync::Arc;

        eprintln!("Loading config from {}", config_path.display());
        let adapter = match load_config(config_path) {
            Ok(a) => a,
            Err(code) => return code,
        };
        let dashboard_config = match build_dashboard_config(&adapter, &Overrides::default()) {
            Ok(c) => c,
            Err(e) => return fail(e),
        };

        let addr = dashboard_config.socket_addr();
        eprintln!("Starting web server on {}", addr);

        let state = AppState {
            document: Arc::new(LocationRouter::new()),
            location: dashboard_config.location.clone(),
            dashboard: HtmlDashboardAdapter::new(DashboardOptions::from(&dashboard_config)),
        };

        let runtime = match tokio::runtime::Runtime::new() {
            Ok(rt) => rt,
            Err(e) => return fail(e.into()),
        };
        let listener = match runtime.block_on(tokio::net::TcpListener::bind(&addr)) {
            Ok(l) => l,
            Err(e) => return fail(e.into()),
        };
        match runtime.block_on(serve(listener, state)) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => fail(e),
        }
    }

    #[cfg(not(feature = "web"))]
    {
        let _ = config_path;
        eprintln!("error: web feature is required for serve");
        ExitCode::from(1)
    }
}
