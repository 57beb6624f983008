#![warn(dead_code)]
////////////////////////////////////////////////////////////////////
// TypedValue class
////////////////////////////////////////////////////////////////////

use std::fmt::{Display, Formatter};

use chrono::{DateTime, NaiveDateTime};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::cnv_error;
use crate::data_types::DataType;
use crate::data_types::DataType::*;
use crate::numbers::Numbers;
use crate::numbers::Numbers::*;
use crate::typed_values::TypedValue::*;

const ISO_DATE_FORMAT: &str =
    r"^\d{4}-\d\d-\d\dT\d\d:\d\d:\d\d(\.\d+)?(([+-]\d\d:\d\d)|Z)?$";
const DOUBLE_FORMAT: &str = r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$";
const INTEGER_FORMAT: &str = r"^[+-]?\d+$";

/// Basic value unit; a value line yields one [TypedValue] per token
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TypedValue {
    Boolean(bool),
    DateValue(i64),
    Null,
    Number(Numbers),
    StringValue(String),
}

impl TypedValue {

    ////////////////////////////////////////////////////////////////////
    //  STATIC METHODS
    ////////////////////////////////////////////////////////////////////

    /// infers the most specific type for a single raw token; the
    /// precedence is fixed: boolean, integer, double, datetime, null
    /// and finally text. A token is numeric only when the entire token
    /// matches the literal grammar (e.g. "12abc" is text, not 12).
    pub fn wrap_token(token: &str) -> std::io::Result<Self> {
        let int_regex = Regex::new(INTEGER_FORMAT).map_err(|e| cnv_error!(e))?;
        let double_regex = Regex::new(DOUBLE_FORMAT).map_err(|e| cnv_error!(e))?;
        let iso_date_regex = Regex::new(ISO_DATE_FORMAT).map_err(|e| cnv_error!(e))?;
        let result = match token {
            s if s.eq_ignore_ascii_case("true") => Boolean(true),
            s if s.eq_ignore_ascii_case("false") => Boolean(false),
            s if int_regex.is_match(s) => Self::from_integer_digits(s)?,
            s if double_regex.is_match(s) =>
                Number(F64Value(s.parse().map_err(|e| cnv_error!(e))?)),
            s if iso_date_regex.is_match(s) => Self::from_iso_date(s),
            s if s.eq_ignore_ascii_case("null") => Null,
            s => StringValue(s.to_string()),
        };
        Ok(result)
    }

    /// converts a full-token digit run; runs beyond the i64 range
    /// degrade to a double rather than failing
    fn from_integer_digits(token: &str) -> std::io::Result<Self> {
        match token.parse::<i64>() {
            Ok(number) => Ok(Number(I64Value(number))),
            Err(_) => Ok(Number(F64Value(token.parse().map_err(|e| cnv_error!(e))?))),
        }
    }

    /// converts an ISO-8601 combined date-time token; tokens that match
    /// the date shape but fail calendar validation fall back to text
    fn from_iso_date(token: &str) -> Self {
        match Self::millis_from_iso_date(token) {
            Some(millis) => DateValue(millis),
            None => StringValue(token.to_string()),
        }
    }

    fn millis_from_iso_date(token: &str) -> Option<i64> {
        // the offset-free profile first (e.g. "2024-01-01T00:00:00"),
        // taken as UTC; then the offset/'Z' profile per RFC 3339
        if let Ok(ts) = NaiveDateTime::parse_from_str(token, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(ts.and_utc().timestamp_millis());
        }
        DateTime::parse_from_rfc3339(token).ok().map(|ts| ts.timestamp_millis())
    }

    fn millis_to_iso_date(millis: i64) -> Option<String> {
        let seconds = millis / 1000;
        let nanoseconds = (millis % 1000) * 1_000_000;
        let datetime = DateTime::from_timestamp(seconds, nanoseconds as u32)?;
        Some(datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string())
    }

    ////////////////////////////////////////////////////////////////////
    //  INSTANCE METHODS
    ////////////////////////////////////////////////////////////////////

    /// returns the datatype tag of the value; [Null] carries no type of
    /// its own and reports [AnyType]
    pub fn get_type(&self) -> DataType {
        match self {
            Boolean(..) => BooleanType,
            DateValue(..) => DateTimeType,
            Null => AnyType,
            Number(number) => number.get_type(),
            StringValue(..) => StringType,
        }
    }

    /// renders the value as source text (strings quoted)
    pub fn to_code(&self) -> String {
        match self {
            StringValue(s) => format!("\"{s}\""),
            other => other.to_string(),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Boolean(b) => serde_json::json!(b),
            DateValue(millis) => serde_json::json!(Self::millis_to_iso_date(*millis)),
            Null => serde_json::Value::Null,
            Number(F64Value(v)) => serde_json::json!(v),
            Number(I64Value(v)) => serde_json::json!(v),
            StringValue(s) => serde_json::json!(s),
        }
    }
}

impl Display for TypedValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Boolean(b) => write!(f, "{b}"),
            DateValue(millis) =>
                write!(f, "{}", Self::millis_to_iso_date(*millis).unwrap_or_default()),
            Null => write!(f, "null"),
            Number(number) => write!(f, "{number}"),
            StringValue(s) => write!(f, "{s}"),
        }
    }
}

// Unit tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolean_literals() {
        assert_eq!(TypedValue::wrap_token("true").unwrap(), Boolean(true));
        assert_eq!(TypedValue::wrap_token("false").unwrap(), Boolean(false));
        assert_eq!(TypedValue::wrap_token("TRUE").unwrap(), Boolean(true));
        assert_eq!(TypedValue::wrap_token("False").unwrap(), Boolean(false));
    }

    #[test]
    fn test_integer_literals() {
        assert_eq!(TypedValue::wrap_token("3").unwrap(), Number(I64Value(3)));
        assert_eq!(TypedValue::wrap_token("-42").unwrap(), Number(I64Value(-42)));
        assert_eq!(TypedValue::wrap_token("+7").unwrap(), Number(I64Value(7)));
        assert_eq!(TypedValue::wrap_token("9223372036854775807").unwrap(),
                   Number(I64Value(i64::MAX)));
    }

    #[test]
    fn test_integer_overflow_degrades_to_double() {
        assert_eq!(TypedValue::wrap_token("9223372036854775808").unwrap(),
                   Number(F64Value(9223372036854775808.0)));
    }

    #[test]
    fn test_double_literals() {
        assert_eq!(TypedValue::wrap_token("2.5").unwrap(), Number(F64Value(2.5)));
        assert_eq!(TypedValue::wrap_token("-0.25").unwrap(), Number(F64Value(-0.25)));
        assert_eq!(TypedValue::wrap_token(".5").unwrap(), Number(F64Value(0.5)));
        assert_eq!(TypedValue::wrap_token("2.5e3").unwrap(), Number(F64Value(2500.0)));
        assert_eq!(TypedValue::wrap_token("1E-2").unwrap(), Number(F64Value(0.01)));
    }

    #[test]
    fn test_non_finite_words_are_text() {
        assert_eq!(TypedValue::wrap_token("inf").unwrap(), StringValue("inf".into()));
        assert_eq!(TypedValue::wrap_token("NaN").unwrap(), StringValue("NaN".into()));
        assert_eq!(TypedValue::wrap_token("Infinity").unwrap(), StringValue("Infinity".into()));
    }

    #[test]
    fn test_partial_numeric_tokens_are_text() {
        assert_eq!(TypedValue::wrap_token("12abc").unwrap(), StringValue("12abc".into()));
        assert_eq!(TypedValue::wrap_token("2.5x").unwrap(), StringValue("2.5x".into()));
        assert_eq!(TypedValue::wrap_token("--3").unwrap(), StringValue("--3".into()));
    }

    #[test]
    fn test_datetime_literals() {
        assert_eq!(TypedValue::wrap_token("2024-01-01T00:00:00").unwrap(),
                   DateValue(1704067200000));
        assert_eq!(TypedValue::wrap_token("2024-01-01T00:00:00Z").unwrap(),
                   DateValue(1704067200000));
        assert_eq!(TypedValue::wrap_token("2024-01-01T00:00:00.250").unwrap(),
                   DateValue(1704067200250));
        assert_eq!(TypedValue::wrap_token("2024-01-01T01:00:00+01:00").unwrap(),
                   DateValue(1704067200000));
    }

    #[test]
    fn test_invalid_calendar_dates_are_text() {
        assert_eq!(TypedValue::wrap_token("2024-13-01T00:00:00").unwrap(),
                   StringValue("2024-13-01T00:00:00".into()));
    }

    #[test]
    fn test_null_literal() {
        assert_eq!(TypedValue::wrap_token("null").unwrap(), Null);
        assert_eq!(TypedValue::wrap_token("NULL").unwrap(), Null);
        assert_eq!(TypedValue::wrap_token("nullable").unwrap(),
                   StringValue("nullable".into()));
    }

    #[test]
    fn test_text_fallback() {
        assert_eq!(TypedValue::wrap_token("hello").unwrap(), StringValue("hello".into()));
    }

    #[test]
    fn test_wrap_token_is_idempotent() {
        for token in ["true", "3", "2.5", "2024-01-01T00:00:00", "null", "hello"] {
            assert_eq!(TypedValue::wrap_token(token).unwrap(),
                       TypedValue::wrap_token(token).unwrap());
        }
    }

    #[test]
    fn test_get_type() {
        assert_eq!(Boolean(true).get_type(), BooleanType);
        assert_eq!(Number(I64Value(3)).get_type(), IntegerType);
        assert_eq!(Number(F64Value(2.5)).get_type(), DoubleType);
        assert_eq!(DateValue(0).get_type(), DateTimeType);
        assert_eq!(Null.get_type(), AnyType);
        assert_eq!(StringValue("abc".into()).get_type(), StringType);
    }

    #[test]
    fn test_to_code() {
        assert_eq!(Boolean(true).to_code(), "true");
        assert_eq!(Number(I64Value(100)).to_code(), "100");
        assert_eq!(StringValue("hello".into()).to_code(), "\"hello\"");
        assert_eq!(Null.to_code(), "null");
        assert_eq!(DateValue(1704067200000).to_code(), "2024-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_to_json() {
        assert_eq!(Boolean(false).to_json().to_string(), "false");
        assert_eq!(Number(I64Value(3)).to_json().to_string(), "3");
        assert_eq!(Number(F64Value(2.5)).to_json().to_string(), "2.5");
        assert_eq!(Null.to_json(), serde_json::Value::Null);
        assert_eq!(StringValue("abc".into()).to_json().to_string(), "\"abc\"");
        assert_eq!(DateValue(1704067200000).to_json().to_string(),
                   "\"2024-01-01T00:00:00.000Z\"");
    }
}
