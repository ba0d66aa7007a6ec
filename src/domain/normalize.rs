//! Record validation and normalization.
//!
//! Turns the loosely-typed document into a [`MarketSeries`] in one pass.
//! The whole call fails on the first malformed element; there is no partial
//! recovery.

use serde_json::{Map, Value};

use crate::domain::error::ValidationError;
use crate::domain::record::{
    CHANGE_PERCENT, CLOSE_PRICE, CODE, FieldKey, MarketRecord, MarketSeries, NAME, TIMESTAMP,
};

pub fn normalize(raw: &[Value]) -> Result<MarketSeries, ValidationError> {
    let mut records: Vec<MarketRecord> = Vec::with_capacity(raw.len());

    for (index, element) in raw.iter().enumerate() {
        let object = element.as_object().ok_or_else(|| {
            ValidationError::new(index, format!("expected an object, found {}", kind(element)))
        })?;
        let record = normalize_record(index, object)?;

        if let Some(first) = records.first() {
            if record.code != first.code {
                return Err(ValidationError::new(
                    index,
                    format!("code {} differs from series code {}", record.code, first.code),
                ));
            }
            if record.name != first.name {
                return Err(ValidationError::new(
                    index,
                    format!("name {} differs from series name {}", record.name, first.name),
                ));
            }
        }

        records.push(record);
    }

    Ok(MarketSeries::from_validated(records))
}

fn normalize_record(index: usize, object: &Map<String, Value>) -> Result<MarketRecord, ValidationError> {
    let code = identifier_field(index, object, CODE)?;
    let name = text_field(index, object, NAME)?;
    let timestamp = label_field(index, object, TIMESTAMP)?;

    let close_price = number_field(index, object, CLOSE_PRICE)?;
    if close_price < 0.0 {
        return Err(ValidationError::new(
            index,
            format!("{} must be non-negative, got {}", CLOSE_PRICE.canonical, close_price),
        ));
    }
    let change_percent = number_field(index, object, CHANGE_PERCENT)?;

    Ok(MarketRecord {
        code,
        name,
        timestamp,
        close_price,
        change_percent,
    })
}

fn required<'a>(
    index: usize,
    object: &'a Map<String, Value>,
    field: FieldKey,
) -> Result<&'a Value, ValidationError> {
    field
        .lookup(object)
        .ok_or_else(|| ValidationError::new(index, format!("missing key {}", field.canonical)))
}

fn non_empty(index: usize, field: FieldKey, text: &str) -> Result<String, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(
            index,
            format!("{} must not be empty", field.canonical),
        ));
    }
    Ok(trimmed.to_string())
}

fn text_field(index: usize, object: &Map<String, Value>, field: FieldKey) -> Result<String, ValidationError> {
    match required(index, object, field)? {
        Value::String(s) => non_empty(index, field, s),
        other => Err(ValidationError::new(
            index,
            format!("{} must be a string, found {}", field.canonical, kind(other)),
        )),
    }
}

/// Exchange codes are frequently stored as bare integers.
fn identifier_field(
    index: usize,
    object: &Map<String, Value>,
    field: FieldKey,
) -> Result<String, ValidationError> {
    match required(index, object, field)? {
        Value::String(s) => non_empty(index, field, s),
        Value::Number(n) if n.is_u64() || n.is_i64() => Ok(n.to_string()),
        other => Err(ValidationError::new(
            index,
            format!("{} must be a string, found {}", field.canonical, kind(other)),
        )),
    }
}

fn label_field(index: usize, object: &Map<String, Value>, field: FieldKey) -> Result<String, ValidationError> {
    match required(index, object, field)? {
        Value::String(s) => non_empty(index, field, s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(ValidationError::new(
            index,
            format!("{} must be a string, found {}", field.canonical, kind(other)),
        )),
    }
}

fn number_field(index: usize, object: &Map<String, Value>, field: FieldKey) -> Result<f64, ValidationError> {
    let value = match required(index, object, field)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        other => {
            return Err(ValidationError::new(
                index,
                format!("{} must be a number, found {}", field.canonical, kind(other)),
            ));
        }
    };

    match value {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(ValidationError::new(
            index,
            format!("{} is not a finite number", field.canonical),
        )),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
