//! Lenient field decoders for create/update bodies.
//!
//! The dashboard serializes its HTML forms as flat JSON objects whose values
//! are all strings, while scripted clients send real numbers.
//! Both shapes are accepted. An empty string clears typed columns (stored as
//! NULL) but is kept verbatim for text columns.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{de::Error, Deserialize, Deserializer};
use serde_json::Value;

fn raw<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Value>::deserialize(deserializer)
}

/// Text column: numbers and booleans are stringified.
pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match raw(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(D::Error::custom(format!("expected text, found {other}"))),
    }
}

/// Returns the trimmed text of a scalar, `None` when blank.
fn scalar_text<E: Error>(value: Option<Value>) -> Result<Option<String>, E> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
        }
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(E::custom(format!("expected a scalar value, found {other}"))),
    }
}

pub fn opt_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    scalar_text::<D::Error>(raw(deserializer)?)?
        .map(|s| {
            s.parse::<i32>()
                .map_err(|_| D::Error::custom(format!("invalid integer: {s}")))
        })
        .transpose()
}

pub fn opt_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    scalar_text::<D::Error>(raw(deserializer)?)?
        .map(|s| {
            Decimal::from_str(&s)
                .or_else(|_| Decimal::from_scientific(&s))
                .map_err(|_| D::Error::custom(format!("invalid amount: {s}")))
        })
        .transpose()
}

/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp.
pub fn opt_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    scalar_text::<D::Error>(raw(deserializer)?)?
        .map(|s| parse_date(&s).ok_or_else(|| D::Error::custom(format!("invalid date: {s}"))))
        .transpose()
}

/// Accepts `HH:MM` or `HH:MM:SS`.
pub fn opt_time<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
where
    D: Deserializer<'de>,
{
    scalar_text::<D::Error>(raw(deserializer)?)?
        .map(|s| parse_time(&s).ok_or_else(|| D::Error::custom(format!("invalid time: {s}"))))
        .transpose()
}

pub(crate) fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}

pub(crate) fn parse_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "opt_string")]
        name: Option<String>,
        #[serde(default, deserialize_with = "opt_i32")]
        store: Option<i32>,
        #[serde(default, deserialize_with = "opt_decimal")]
        cost: Option<Decimal>,
        #[serde(default, deserialize_with = "opt_date")]
        day: Option<NaiveDate>,
        #[serde(default, deserialize_with = "opt_time")]
        at: Option<NaiveTime>,
    }

    fn decode(value: serde_json::Value) -> Result<Sample, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn accepts_form_strings() {
        let sample = decode(json!({
            "name": "Rice",
            "store": "3",
            "cost": "12.50",
            "day": "2024-05-01",
            "at": "14:30"
        }))
        .unwrap();

        assert_eq!(sample.name.as_deref(), Some("Rice"));
        assert_eq!(sample.store, Some(3));
        assert_eq!(sample.cost, Some(Decimal::new(1250, 2)));
        assert_eq!(sample.day, NaiveDate::from_ymd_opt(2024, 5, 1));
        assert_eq!(sample.at, NaiveTime::from_hms_opt(14, 30, 0));
    }

    #[test]
    fn accepts_typed_json() {
        let sample = decode(json!({
            "name": 42,
            "store": 7,
            "cost": 9.99,
            "at": "08:15:30"
        }))
        .unwrap();

        assert_eq!(sample.name.as_deref(), Some("42"));
        assert_eq!(sample.store, Some(7));
        assert_eq!(sample.cost, Some(Decimal::new(999, 2)));
        assert_eq!(sample.at, NaiveTime::from_hms_opt(8, 15, 30));
    }

    #[test]
    fn blank_typed_values_become_null_but_text_is_kept() {
        let sample = decode(json!({
            "name": "",
            "store": "",
            "cost": "  ",
            "day": ""
        }))
        .unwrap();

        assert_eq!(sample.name.as_deref(), Some(""));
        assert_eq!(sample.store, None);
        assert_eq!(sample.cost, None);
        assert_eq!(sample.day, None);
    }

    #[test]
    fn absent_and_null_fields_are_none() {
        let sample = decode(json!({ "name": null })).unwrap();
        assert!(sample.name.is_none());
        assert!(sample.store.is_none());
        assert!(sample.at.is_none());
    }

    #[test]
    fn rejects_garbage() {
        assert!(decode(json!({ "store": "abc" })).is_err());
        assert!(decode(json!({ "cost": "twelve" })).is_err());
        assert!(decode(json!({ "day": "01/05/2024" })).is_err());
        assert!(decode(json!({ "name": ["a"] })).is_err());
    }

    #[test]
    fn dates_accept_rfc3339_timestamps() {
        assert_eq!(
            parse_date("2024-02-29T10:00:00Z"),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
    }
}
