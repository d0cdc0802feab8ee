//! Stage-boundary conversions.
//!
//! Each stage after the first converts the previous stage's output into its
//! own declared kind before checking it. Conversion is best-effort: when no
//! conversion exists the original value is left in place and the new stage's
//! type check fails in the ordinary way, so a bad `parse_to` never needs its
//! own error channel.

use chrono::NaiveTime;

use crate::checks::date;
use crate::definition::Kind;
use crate::value::Value;

/// Attempts to convert `value` into `kind`. `None` means "no conversion".
pub(crate) fn coerce(value: &Value, kind: &Kind) -> Option<Value> {
    // Gate sentinels pass through untouched; the gate decides their fate.
    if value.is_absent() || value.is_null() {
        return None;
    }

    match kind {
        Kind::Text => to_text(value),
        Kind::Number => to_number(value),
        Kind::BigInt => to_big_int(value),
        Kind::Boolean => to_boolean(value),
        Kind::Date(format) => match value {
            Value::Text(s) => {
                let day = date::parse_date(*format, s)?;
                let midnight = NaiveTime::MIN;
                Some(Value::DateTime(day.and_time(midnight).and_utc()))
            }
            _ => None,
        },
        Kind::Buffer => match value {
            Value::Text(s) => Some(Value::Buffer(s.clone().into_bytes().into())),
            _ => None,
        },
        // No conversions target composites or callables; same-kind values
        // simply flow through the type check.
        Kind::Callable | Kind::Any | Kind::Object(_) | Kind::Array(_) => None,
    }
}

fn to_text(value: &Value) -> Option<Value> {
    match value {
        Value::Number(_) | Value::BigInt(_) | Value::Bool(_) | Value::DateTime(_) => {
            Some(Value::Text(value.to_string()))
        }
        _ => None,
    }
}

fn to_number(value: &Value) -> Option<Value> {
    match value {
        Value::Text(s) => s.trim().parse::<f64>().ok().map(Value::Number),
        Value::BigInt(i) => {
            // Reject silently lossy conversions.
            let as_float = *i as f64;
            (as_float as i128 == *i).then_some(Value::Number(as_float))
        }
        Value::Bool(b) => Some(Value::Number(if *b { 1.0 } else { 0.0 })),
        _ => None,
    }
}

fn to_big_int(value: &Value) -> Option<Value> {
    match value {
        Value::Text(s) => s.trim().parse::<i128>().ok().map(Value::BigInt),
        Value::Number(n) => {
            (n.is_finite() && n.fract() == 0.0).then_some(Value::BigInt(*n as i128))
        }
        Value::Bool(b) => Some(Value::BigInt(i128::from(*b))),
        _ => None,
    }
}

fn to_boolean(value: &Value) -> Option<Value> {
    match value {
        Value::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Some(Value::Bool(true)),
            "false" => Some(Value::Bool(false)),
            _ => None,
        },
        Value::Number(n) => Some(Value::Bool(*n != 0.0)),
        Value::BigInt(i) => Some(Value::Bool(*i != 0)),
        _ => None,
    }
}

// ============================================================================
// TESTS
// ============================================================================
