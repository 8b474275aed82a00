use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use std::fmt;

/// A single value carried by a [`Record`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RecordValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<i64> for RecordValue {
    fn from(value: i64) -> Self {
        RecordValue::Int(value)
    }
}

impl From<f64> for RecordValue {
    fn from(value: f64) -> Self {
        RecordValue::Float(value)
    }
}

impl From<&str> for RecordValue {
    fn from(value: &str) -> Self {
        RecordValue::Text(value.to_string())
    }
}

impl From<String> for RecordValue {
    fn from(value: String) -> Self {
        RecordValue::Text(value)
    }
}

impl fmt::Display for RecordValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordValue::Int(value) => write!(f, "{}", value),
            RecordValue::Float(value) => write!(f, "{}", value),
            RecordValue::Text(value) => write!(f, "{}", value),
        }
    }
}

/// One timestamped record appended to a stream.
///
/// Values keep the order they were added in.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub timestamp: DateTime<FixedOffset>,
    pub values: Vec<(String, RecordValue)>,
}

impl Record {
    /// Looks up a value by key.
    pub fn value(&self, key: &str) -> Option<&RecordValue> {
        self.values
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::America::New_York;

    #[test]
    fn test_value_lookup() {
        let record = Record {
            timestamp: New_York
                .with_ymd_and_hms(2023, 4, 7, 14, 15, 0)
                .unwrap()
                .fixed_offset(),
            values: vec![
                ("real_n_bikes".to_string(), RecordValue::Int(412)),
                ("note".to_string(), RecordValue::Text("x".to_string())),
            ],
        };

        assert_eq!(record.value("real_n_bikes"), Some(&RecordValue::Int(412)));
        assert_eq!(record.value("missing"), None);
    }

    #[test]
    fn test_value_display() {
        assert_eq!(RecordValue::Int(412).to_string(), "412");
        assert_eq!(RecordValue::Text("Sunny".into()).to_string(), "Sunny");
    }
}
