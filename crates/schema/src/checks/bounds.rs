//! `min`/`max` checks across kinds.
//!
//! The comparison a bound performs depends on the limit flavour recorded by
//! the builder: counts compare a length (characters, bytes, or elements),
//! numeric and wide-integer bounds compare magnitudes, date bounds compare
//! calendar dates parsed with the stage's declared format.

use chrono::NaiveDate;

use crate::checks::{Verdict, date};
use crate::definition::{DateFormat, Kind, Limit};
use crate::value::Value;

/// Extracts the calendar date of a value under the stage's declared format.
fn as_date(declared: Option<&Kind>, value: &Value) -> Option<NaiveDate> {
    match value {
        Value::DateTime(dt) => Some(dt.date_naive()),
        Value::Text(s) => match declared {
            Some(Kind::Date(format)) => date::parse_date(*format, s),
            _ => date::parse_date(DateFormat::Iso8601, s),
        },
        _ => None,
    }
}

pub(crate) fn min(limit: &Limit, declared: Option<&Kind>, value: &Value, name: &str) -> Verdict {
    match (limit, value) {
        (Limit::Count(n), Value::Text(s)) => {
            Verdict::from_bool(s.chars().count() >= *n, format!("value with at least {n} characters"), || {
                format!("{name} must have at least {n} characters!")
            })
        }
        (Limit::Count(n), Value::Array(items)) => {
            Verdict::from_bool(items.len() >= *n, format!("array with at least {n} items"), || {
                format!("{name} must have at least {n} items!")
            })
        }
        (Limit::Count(n), Value::Buffer(bytes)) => {
            Verdict::from_bool(bytes.len() >= *n, format!("buffer with at least {n} bytes"), || {
                format!("{name} must have at least {n} bytes!")
            })
        }
        (Limit::Number(n), Value::Number(v)) => {
            Verdict::from_bool(v >= n, format!("value greater than or equal to {n}"), || {
                format!("{name} must be greater than or equal to {n}!")
            })
        }
        (Limit::BigInt(n), Value::BigInt(v)) => {
            Verdict::from_bool(v >= n, format!("value greater than or equal to {n}"), || {
                format!("{name} must be greater than or equal to {n}!")
            })
        }
        (Limit::Date(bound), _) => {
            let parsed = as_date(declared, value);
            Verdict::from_bool(
                parsed.is_some_and(|d| d >= *bound),
                format!("date greater than or equal to {bound}"),
                || format!("{name} must be a date greater than or equal to {bound}!"),
            )
        }
        (limit, _) => Verdict::fail(
            format!("value comparable with {limit}"),
            format!("{name} cannot be compared with {limit}!"),
        ),
    }
}

pub(crate) fn max(limit: &Limit, declared: Option<&Kind>, value: &Value, name: &str) -> Verdict {
    match (limit, value) {
        (Limit::Count(n), Value::Text(s)) => {
            Verdict::from_bool(s.chars().count() <= *n, format!("value with at most {n} characters"), || {
                format!("{name} must have at most {n} characters!")
            })
        }
        (Limit::Count(n), Value::Array(items)) => {
            Verdict::from_bool(items.len() <= *n, format!("array with at most {n} items"), || {
                format!("{name} must have at most {n} items!")
            })
        }
        (Limit::Count(n), Value::Buffer(bytes)) => {
            Verdict::from_bool(bytes.len() <= *n, format!("buffer with at most {n} bytes"), || {
                format!("{name} must have at most {n} bytes!")
            })
        }
        (Limit::Number(n), Value::Number(v)) => {
            Verdict::from_bool(v <= n, format!("value less than or equal to {n}"), || {
                format!("{name} must be less than or equal to {n}!")
            })
        }
        (Limit::BigInt(n), Value::BigInt(v)) => {
            Verdict::from_bool(v <= n, format!("value less than or equal to {n}"), || {
                format!("{name} must be less than or equal to {n}!")
            })
        }
        (Limit::Date(bound), _) => {
            let parsed = as_date(declared, value);
            Verdict::from_bool(
                parsed.is_some_and(|d| d <= *bound),
                format!("date less than or equal to {bound}"),
                || format!("{name} must be a date less than or equal to {bound}!"),
            )
        }
        (limit, _) => Verdict::fail(
            format!("value comparable with {limit}"),
            format!("{name} cannot be compared with {limit}!"),
        ),
    }
}

// ============================================================================
// TESTS
// ============================================================================
