//! Market record and series representation.

use serde::Serialize;
use serde_json::Value;

/// One required field of a raw record: its canonical key plus the legacy
/// keys older documents use for the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldKey {
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
}

impl FieldKey {
    /// First present key wins, canonical before aliases.
    pub fn lookup<'a>(&self, record: &'a serde_json::Map<String, Value>) -> Option<&'a Value> {
        std::iter::once(self.canonical)
            .chain(self.aliases.iter().copied())
            .find_map(|key| record.get(key))
    }
}

pub const CODE: FieldKey = FieldKey {
    canonical: "code",
    aliases: &["代码"],
};
pub const NAME: FieldKey = FieldKey {
    canonical: "name",
    aliases: &["简称"],
};
pub const TIMESTAMP: FieldKey = FieldKey {
    canonical: "timestamp",
    aliases: &["时间"],
};
pub const CLOSE_PRICE: FieldKey = FieldKey {
    canonical: "closePrice",
    aliases: &["收盘价(元)"],
};
pub const CHANGE_PERCENT: FieldKey = FieldKey {
    canonical: "changePercent",
    aliases: &["涨跌幅(%)"],
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketRecord {
    pub code: String,
    pub name: String,
    pub timestamp: String,
    pub close_price: f64,
    pub change_percent: f64,
}

/// Ordered records for a single instrument, ascending by timestamp.
///
/// Non-empty series are only built by [`crate::domain::normalize::normalize`],
/// so every record is known to be well formed and to share `code`/`name`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MarketSeries {
    records: Vec<MarketRecord>,
}

impl MarketSeries {
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn from_validated(records: Vec<MarketRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[MarketRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MarketRecord> {
        self.records.iter()
    }

    pub fn last(&self) -> Option<&MarketRecord> {
        self.records.last()
    }

    pub fn code(&self) -> Option<&str> {
        self.records.first().map(|r| r.code.as_str())
    }

    pub fn name(&self) -> Option<&str> {
        self.records.first().map(|r| r.name.as_str())
    }

    /// Re-emit the records as canonical key-value structures.
    pub fn to_raw(&self) -> Vec<Value> {
        self.records
            .iter()
            .map(|record| {
                let mut map = serde_json::Map::new();
                map.insert(CODE.canonical.into(), Value::from(record.code.clone()));
                map.insert(NAME.canonical.into(), Value::from(record.name.clone()));
                map.insert(
                    TIMESTAMP.canonical.into(),
                    Value::from(record.timestamp.clone()),
                );
                map.insert(CLOSE_PRICE.canonical.into(), Value::from(record.close_price));
                map.insert(
                    CHANGE_PERCENT.canonical.into(),
                    Value::from(record.change_percent),
                );
                Value::Object(map)
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a MarketSeries {
    type Item = &'a MarketRecord;
    type IntoIter = std::slice::Iter<'a, MarketRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
