//! Typed property values and their JSON literal encoding
//!
//! Every value a document can carry is one of the [`FieldValue`] variants.
//! The set is closed: a property of any other shape has to be converted by
//! the caller before it reaches the statement factory.

use crate::error::{Error, Result};
use chrono::{DateTime, NaiveDateTime, NaiveTime, TimeZone};
use serde_json::{Number, Value};
use std::fmt;
use std::time::Duration;

/// Wire format for date/time values (second precision, no zone)
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Wire format for time-of-day values
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// A document property value
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Float(f64),
    Integer(i64),
    Unsigned(u64),
    Text(String),
    DateTime(NaiveDateTime),
    Time(NaiveTime),
    Duration(Duration),
    Bool(bool),
    Array(Vec<FieldValue>),
}

impl FieldValue {
    /// Convert to the JSON value written into document bodies
    pub fn to_json(&self) -> Result<Value> {
        Ok(match self {
            FieldValue::Float(f) => Value::Number(finite(*f)?),
            FieldValue::Integer(i) => Value::from(*i),
            FieldValue::Unsigned(u) => Value::from(*u),
            FieldValue::Text(s) => Value::String(s.clone()),
            FieldValue::DateTime(dt) => Value::String(dt.format(DATE_TIME_FORMAT).to_string()),
            FieldValue::Time(t) => Value::String(t.format(TIME_FORMAT).to_string()),
            FieldValue::Duration(d) => Value::String(format_duration(d)),
            FieldValue::Bool(b) => Value::Bool(*b),
            FieldValue::Array(values) => Value::Array(
                values
                    .iter()
                    .map(FieldValue::to_json)
                    .collect::<Result<Vec<_>>>()?,
            ),
        })
    }

    /// Convert to the JSON value used inside `match`/`term`/`range` clauses.
    ///
    /// Scalars are sent as strings of their display text and left to the
    /// engine to coerce against the field mapping.
    pub fn to_condition_json(&self) -> Result<Value> {
        match self {
            FieldValue::Array(values) => Ok(Value::Array(
                values
                    .iter()
                    .map(FieldValue::to_condition_json)
                    .collect::<Result<Vec<_>>>()?,
            )),
            FieldValue::Float(f) => {
                finite(*f)?;
                Ok(Value::String(self.to_string()))
            }
            _ => Ok(Value::String(self.to_string())),
        }
    }
}

/// Encode a value as its exact JSON literal
pub fn escape(value: &FieldValue) -> Result<String> {
    Ok(serde_json::to_string(&value.to_json()?)?)
}

fn finite(f: f64) -> Result<Number> {
    Number::from_f64(f)
        .ok_or_else(|| Error::UnsupportedValue(format!("non-finite float ({})", f)))
}

fn format_duration(d: &Duration) -> String {
    let secs = d.as_secs();
    format!(
        "{:02}:{:02}:{:02}",
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Float(v) => write!(f, "{}", v),
            FieldValue::Integer(v) => write!(f, "{}", v),
            FieldValue::Unsigned(v) => write!(f, "{}", v),
            FieldValue::Text(v) => f.write_str(v),
            FieldValue::DateTime(v) => write!(f, "{}", v.format(DATE_TIME_FORMAT)),
            FieldValue::Time(v) => write!(f, "{}", v.format(TIME_FORMAT)),
            FieldValue::Duration(v) => f.write_str(&format_duration(v)),
            FieldValue::Bool(v) => write!(f, "{}", v),
            FieldValue::Array(values) => {
                f.write_str("[")?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", v)?;
                }
                f.write_str("]")
            }
        }
    }
}

impl TryFrom<Value> for FieldValue {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Bool(b) => Ok(FieldValue::Bool(b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(FieldValue::Integer(i))
                } else if let Some(u) = n.as_u64() {
                    Ok(FieldValue::Unsigned(u))
                } else {
                    n.as_f64()
                        .map(FieldValue::Float)
                        .ok_or_else(|| Error::UnsupportedValue(format!("number {}", n)))
                }
            }
            Value::String(s) => Ok(FieldValue::Text(s)),
            Value::Array(values) => Ok(FieldValue::Array(
                values
                    .into_iter()
                    .map(FieldValue::try_from)
                    .collect::<Result<Vec<_>>>()?,
            )),
            Value::Null => Err(Error::UnsupportedValue("null".to_string())),
            Value::Object(_) => Err(Error::UnsupportedValue("object".to_string())),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Float(v)
    }
}

impl From<f32> for FieldValue {
    fn from(v: f32) -> Self {
        // Widen through the shortest decimal so 3.14f32 stays 3.14
        FieldValue::Float(v.to_string().parse().unwrap_or(f64::from(v)))
    }
}

macro_rules! from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for FieldValue {
            fn from(v: $t) -> Self {
                FieldValue::Integer(i64::from(v))
            }
        })*
    };
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for FieldValue {
            fn from(v: $t) -> Self {
                FieldValue::Unsigned(u64::from(v))
            }
        })*
    };
}

from_signed!(i8, i16, i32, i64);
from_unsigned!(u8, u16, u32, u64);

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

impl From<&String> for FieldValue {
    fn from(v: &String) -> Self {
        FieldValue::Text(v.clone())
    }
}

impl From<NaiveDateTime> for FieldValue {
    fn from(v: NaiveDateTime) -> Self {
        FieldValue::DateTime(v)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for FieldValue {
    fn from(v: DateTime<Tz>) -> Self {
        FieldValue::DateTime(v.naive_local())
    }
}

impl From<NaiveTime> for FieldValue {
    fn from(v: NaiveTime) -> Self {
        FieldValue::Time(v)
    }
}

impl From<Duration> for FieldValue {
    fn from(v: Duration) -> Self {
        FieldValue::Duration(v)
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(values: Vec<T>) -> Self {
        FieldValue::Array(values.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2017, 6, 3)
            .unwrap()
            .and_hms_milli_opt(14, 5, 9, 750)
            .unwrap()
    }

    #[test]
    fn test_escape_float_is_bare_invariant_decimal() {
        assert_eq!(escape(&FieldValue::from(3.14)).unwrap(), "3.14");
        assert_eq!(escape(&FieldValue::from(-0.5)).unwrap(), "-0.5");
    }

    #[test]
    fn test_escape_f32_keeps_short_form() {
        assert_eq!(escape(&FieldValue::from(3.14f32)).unwrap(), "3.14");
    }

    #[test]
    fn test_escape_non_finite_float_fails() {
        let err = escape(&FieldValue::from(f64::NAN)).unwrap_err();
        assert!(matches!(err, Error::UnsupportedValue(_)));
        assert!(escape(&FieldValue::from(f64::INFINITY)).is_err());
    }

    #[test]
    fn test_escape_integers() {
        assert_eq!(escape(&FieldValue::from(42i32)).unwrap(), "42");
        assert_eq!(escape(&FieldValue::from(-7i64)).unwrap(), "-7");
        assert_eq!(escape(&FieldValue::from(255u8)).unwrap(), "255");
        assert_eq!(escape(&FieldValue::from(u64::MAX)).unwrap(), u64::MAX.to_string());
    }

    #[test]
    fn test_escape_text_is_quoted() {
        assert_eq!(escape(&FieldValue::from("hello")).unwrap(), "\"hello\"");
    }

    #[test]
    fn test_escape_text_escapes_quotes_and_controls() {
        let escaped = escape(&FieldValue::from("say \"hi\"\n\tnow\\")).unwrap();
        assert_eq!(escaped, r#""say \"hi\"\n\tnow\\""#);
        let parsed: Value = serde_json::from_str(&escaped).unwrap();
        assert_eq!(parsed, "say \"hi\"\n\tnow\\");
    }

    #[test]
    fn test_escape_date_time_truncates_to_seconds() {
        assert_eq!(
            escape(&FieldValue::from(date_time())).unwrap(),
            "\"2017-06-03 14:05:09\""
        );
    }

    #[test]
    fn test_escape_zoned_date_time_uses_wall_clock() {
        let zoned = chrono::FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .from_local_datetime(&date_time())
            .single()
            .unwrap();
        assert_eq!(
            escape(&FieldValue::from(zoned)).unwrap(),
            "\"2017-06-03 14:05:09\""
        );
    }

    #[test]
    fn test_escape_time_and_duration() {
        let t = NaiveTime::from_hms_opt(8, 30, 0).unwrap();
        assert_eq!(escape(&FieldValue::from(t)).unwrap(), "\"08:30:00\"");

        let d = Duration::from_millis((2 * 3600 + 3 * 60 + 4) * 1000 + 999);
        assert_eq!(escape(&FieldValue::from(d)).unwrap(), "\"02:03:04\"");

        let long = Duration::from_secs(27 * 3600 + 61);
        assert_eq!(escape(&FieldValue::from(long)).unwrap(), "\"27:01:01\"");
    }

    #[test]
    fn test_escape_bool_lowercase() {
        assert_eq!(escape(&FieldValue::from(true)).unwrap(), "true");
        assert_eq!(escape(&FieldValue::from(false)).unwrap(), "false");
    }

    #[test]
    fn test_escape_array_recurses() {
        let value = FieldValue::Array(vec![
            FieldValue::from(1i32),
            FieldValue::from("two"),
            FieldValue::from(vec![3.5, 4.0]),
        ]);
        assert_eq!(escape(&value).unwrap(), "[1,\"two\",[3.5,4.0]]");
    }

    #[test]
    fn test_escape_empty_array() {
        assert_eq!(escape(&FieldValue::Array(vec![])).unwrap(), "[]");
    }

    #[test]
    fn test_condition_json_stringifies_scalars() {
        assert_eq!(
            FieldValue::from(18i32).to_condition_json().unwrap(),
            Value::String("18".to_string())
        );
        assert_eq!(
            FieldValue::from(true).to_condition_json().unwrap(),
            Value::String("true".to_string())
        );
        assert_eq!(
            FieldValue::from(vec![1i32, 2]).to_condition_json().unwrap(),
            serde_json::json!(["1", "2"])
        );
    }

    #[test]
    fn test_try_from_json() {
        assert_eq!(
            FieldValue::try_from(serde_json::json!(12)).unwrap(),
            FieldValue::Integer(12)
        );
        assert_eq!(
            FieldValue::try_from(serde_json::json!(1.5)).unwrap(),
            FieldValue::Float(1.5)
        );
        assert_eq!(
            FieldValue::try_from(serde_json::json!(["a", true])).unwrap(),
            FieldValue::Array(vec![FieldValue::from("a"), FieldValue::from(true)])
        );
    }

    #[test]
    fn test_try_from_json_rejects_objects_and_nulls() {
        let err = FieldValue::try_from(serde_json::json!({"a": 1})).unwrap_err();
        assert!(err.to_string().contains("object"));
        assert!(FieldValue::try_from(serde_json::json!([1, null])).is_err());
    }
}
