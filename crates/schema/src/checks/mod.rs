//! Per-kind check functions.
//!
//! Every check is a pure function from a value to a [`Verdict`] — pass or
//! fail plus the `expect` description and failure message the report entry
//! carries. The executor owns sequencing and aggregation; nothing in this
//! module touches the report directly.

pub(crate) mod bounds;
pub(crate) mod compare;
pub(crate) mod date;
pub(crate) mod number;
pub(crate) mod text;

use std::borrow::Cow;

use crate::definition::{Kind, Method};
use crate::value::Value;

// ============================================================================
// VERDICT
// ============================================================================

/// Outcome of one check.
#[derive(Debug, Clone)]
pub(crate) struct Verdict {
    pub ok: bool,
    /// What the check expected, for the report entry.
    pub expect: Cow<'static, str>,
    /// Failure message; empty on pass.
    pub message: String,
}

impl Verdict {
    pub(crate) fn pass(expect: impl Into<Cow<'static, str>>) -> Self {
        Self {
            ok: true,
            expect: expect.into(),
            message: String::new(),
        }
    }

    pub(crate) fn fail(expect: impl Into<Cow<'static, str>>, message: String) -> Self {
        Self {
            ok: false,
            expect: expect.into(),
            message,
        }
    }

    pub(crate) fn from_bool(
        ok: bool,
        expect: impl Into<Cow<'static, str>>,
        message: impl FnOnce() -> String,
    ) -> Self {
        if ok {
            Self::pass(expect)
        } else {
            Self::fail(expect, message())
        }
    }
}

// ============================================================================
// TYPE CHECK
// ============================================================================

/// Verifies the value matches the stage's declared kind.
pub(crate) fn kind_check(kind: &Kind, value: &Value, name: &str) -> Verdict {
    let matched = match kind {
        Kind::Text => matches!(value, Value::Text(_)),
        Kind::Number => matches!(value, Value::Number(_)),
        Kind::BigInt => matches!(value, Value::BigInt(_)),
        Kind::Boolean => matches!(value, Value::Bool(_)),
        Kind::Date(format) => date::is_date(*format, value),
        Kind::Buffer => matches!(value, Value::Buffer(_)),
        Kind::Callable => matches!(value, Value::Callable(_)),
        Kind::Any => true,
        Kind::Object(_) => matches!(value, Value::Object(_)),
        Kind::Array(_) => matches!(value, Value::Array(_)),
    };

    let expect: Cow<'static, str> = match kind {
        Kind::Date(format) => format!("date in {} format", format.token()).into(),
        Kind::Any => "any type".into(),
        other => format!("{} type", other.name()).into(),
    };

    Verdict::from_bool(matched, expect, || match kind {
        Kind::Date(format) => format!("{name} must be a date in {} format!", format.token()),
        _ => format!("{name} must be a {} type!", kind.name()),
    })
}

// ============================================================================
// MODIFIER DISPATCH
// ============================================================================

/// Runs one modifier descriptor against a value.
///
/// Returns `None` for descriptors that are not checks (gate, alias, default,
/// custom, stage boundary) — the executor handles those itself.
pub(crate) fn run(
    method: &Method,
    declared: Option<&Kind>,
    value: &Value,
    name: &str,
) -> Option<Verdict> {
    match method {
        Method::Min(limit) => Some(bounds::min(limit, declared, value, name)),
        Method::Max(limit) => Some(bounds::max(limit, declared, value, name)),
        Method::Positive => Some(number::positive(value, name)),
        Method::Negative => Some(number::negative(value, name)),
        Method::Integer => Some(number::integer(value, name)),
        Method::Float => Some(number::float(value, name)),
        Method::MinWord(count) => Some(text::min_word(*count, value, name)),
        Method::Equal(expected) => Some(compare::equal(expected, value, name)),
        Method::NotEqual(other) => Some(compare::not_equal(other, value, name)),
        Method::OneOf(allowed) => Some(compare::one_of(allowed, value, name)),
        Method::Regex(pattern) => Some(text::regex_match(pattern, value, name)),
        Method::Email => Some(text::email(value, name)),
        Method::Uuid => Some(text::uuid(value, name)),
        Method::Time(format) => Some(text::time(*format, value, name)),
        Method::NotRequired
        | Method::Nullable
        | Method::Kind(_)
        | Method::Alias(_)
        | Method::Default(_)
        | Method::Custom(_)
        | Method::ParseTo => None,
    }
}

// ============================================================================
// TESTS
// ============================================================================
