//! Equality and membership checks.
//!
//! Comparison is structural for every kind except callables, which compare
//! by identity (see `Value`'s `PartialEq`).

use crate::checks::Verdict;
use crate::value::Value;

pub(crate) fn equal(expected: &Value, value: &Value, name: &str) -> Verdict {
    Verdict::from_bool(value == expected, format!("value equal to {expected}"), || {
        format!("{name} must be equal to {expected}!")
    })
}

pub(crate) fn not_equal(other: &Value, value: &Value, name: &str) -> Verdict {
    Verdict::from_bool(value != other, format!("value different from {other}"), || {
        format!("{name} must not be equal to {other}!")
    })
}

pub(crate) fn one_of(allowed: &[Value], value: &Value, name: &str) -> Verdict {
    Verdict::from_bool(allowed.contains(value), "one of the allowed values", || {
        format!("{name} must be one of the allowed values!")
    })
}

// ============================================================================
// TESTS
// ============================================================================
