//! Display formatting applied at render time.
//!
//! The pipeline keeps full precision; these helpers decide what the reader
//! sees.

/// `-0.0` prints as `0.00`, not `-0.00`.
fn unsigned_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

pub fn fixed2(value: f64) -> String {
    format!("{:.2}", unsigned_zero(value))
}

pub fn percent(value: f64) -> String {
    format!("{:.2}%", unsigned_zero(value))
}

pub fn price(currency_symbol: &str, value: f64) -> String {
    format!("{}{:.2}", currency_symbol, unsigned_zero(value))
}

/// Table cells: integer-valued numbers get no decimals, everything else four.
pub fn table_number(value: f64) -> String {
    let value = unsigned_zero(value);
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.4}", value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    Fixed2,
    Percent,
}

impl ValueFormat {
    pub fn apply(&self, value: f64) -> String {
        match self {
            ValueFormat::Fixed2 => fixed2(value),
            ValueFormat::Percent => percent(value),
        }
    }
}

/// Escape text for SVG/XML content and attribute values.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_two_decimals() {
        assert_eq!(fixed2(10.35), "10.35");
        assert_eq!(fixed2(10.2), "10.20");
        assert_eq!(fixed2(-0.0), "0.00");
    }

    #[test]
    fn percent_keeps_sign() {
        assert_eq!(percent(-2.86), "-2.86%");
        assert_eq!(percent(1.234), "1.23%");
        assert_eq!(percent(0.0), "0.00%");
    }

    #[test]
    fn price_prefixes_symbol() {
        assert_eq!(price("¥", 10.5), "¥10.50");
        assert_eq!(price("", 3.0), "3.00");
    }

    #[test]
    fn table_number_integer_has_no_decimals() {
        assert_eq!(table_number(10.0), "10");
        assert_eq!(table_number(0.0), "0");
        assert_eq!(table_number(-3.0), "-3");
    }

    #[test]
    fn table_number_fraction_has_four_decimals() {
        assert_eq!(table_number(10.5), "10.5000");
        assert_eq!(table_number(-2.86), "-2.8600");
        assert_eq!(table_number(1.23456), "1.2346");
    }

    #[test]
    fn value_format_dispatch() {
        assert_eq!(ValueFormat::Fixed2.apply(1.0), "1.00");
        assert_eq!(ValueFormat::Percent.apply(1.0), "1.00%");
    }

    #[test]
    fn escape_xml_special_characters() {
        assert_eq!(escape_xml("a<b & \"c\"'"), "a&lt;b &amp; &quot;c&quot;&#39;");
        assert_eq!(escape_xml("浦发银行"), "浦发银行");
    }
}
