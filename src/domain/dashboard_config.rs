//! Dashboard settings resolved from configuration and CLI flags.

pub const DEFAULT_OUTPUT: &str = "dashboard.html";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "¥";
pub const DEFAULT_CHART_WIDTH: f64 = 720.0;
pub const DEFAULT_CHART_HEIGHT: f64 = 360.0;
pub const DEFAULT_BIND: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub location: String,
    pub output: String,
    pub currency_symbol: String,
    pub show_table: bool,
    pub chart_width: f64,
    pub chart_height: f64,
    pub bind: String,
    pub port: u16,
}

impl DashboardConfig {
    pub fn with_location(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            output: DEFAULT_OUTPUT.to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            show_table: true,
            chart_width: DEFAULT_CHART_WIDTH,
            chart_height: DEFAULT_CHART_HEIGHT,
            bind: DEFAULT_BIND.to_string(),
            port: DEFAULT_PORT,
        }
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = DashboardConfig::with_location("market_data.json");
        assert_eq!(c.location, "market_data.json");
        assert_eq!(c.output, "dashboard.html");
        assert_eq!(c.currency_symbol, "¥");
        assert!(c.show_table);
        assert!((c.chart_width - 720.0).abs() < f64::EPSILON);
        assert!((c.chart_height - 360.0).abs() < f64::EPSILON);
        assert_eq!(c.socket_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn override_with_struct_update() {
        let c = DashboardConfig {
            port: 8080,
            bind: "0.0.0.0".into(),
            ..DashboardConfig::with_location("x.json")
        };
        assert_eq!(c.socket_addr(), "0.0.0.0:8080");
    }
}
