//! Schema definitions and method descriptors.
//!
//! A [`Definition`] is the frozen output of the fluent builder: an ordered
//! sequence of [`Method`] descriptors, one per recorded builder call. It is
//! pure data — building never validates, and every modifier produces a *new*
//! definition (copy-on-write append), so a base schema is never mutated by
//! the variants derived from it.

use chrono::NaiveDate;
use indexmap::IndexMap;
use regex::Regex;

use crate::hook::CustomHook;
use crate::value::Value;

/// Ordered field-name → definition map backing the object kind.
pub type ObjectShape = IndexMap<String, Definition>;

// ============================================================================
// KINDS
// ============================================================================

/// The closed set of kinds a pipeline stage can assert.
///
/// Composite variants carry their nested schemas; `Any` is the intentional
/// no-op type check.
#[derive(Debug, Clone)]
pub enum Kind {
    /// Text.
    Text,
    /// Double-precision number.
    Number,
    /// Wide integer.
    BigInt,
    /// Boolean.
    Boolean,
    /// Calendar date in a declared token format.
    Date(DateFormat),
    /// Binary buffer.
    Buffer,
    /// Callable value.
    Callable,
    /// Always passes.
    Any,
    /// Key/value structure with one definition per declared key.
    Object(ObjectShape),
    /// Ordered sequence with a single element definition.
    Array(Box<Definition>),
}

impl Kind {
    /// The method label reports use for this kind's type check.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Text => "string",
            Kind::Number => "number",
            Kind::BigInt => "bigInt",
            Kind::Boolean => "boolean",
            Kind::Date(_) => "date",
            Kind::Buffer => "buffer",
            Kind::Callable => "function",
            Kind::Any => "any",
            Kind::Object(_) => "object",
            Kind::Array(_) => "array",
        }
    }
}

// ============================================================================
// DATE / TIME FORMAT TOKENS
// ============================================================================

/// Supported date format tokens.
///
/// A malformed token is unrepresentable: formats are a closed enum, so the
/// configuration error a stringly-typed token would need simply cannot occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `YYYY-MM-DD`, optionally followed by a full RFC 3339 time part.
    Iso8601,
    /// `YYYY-MM-DD`
    YyyyMmDd,
    /// `YYYY-DD-MM`
    YyyyDdMm,
    /// `YYYY/MM/DD`
    YyyyMmDdSlash,
    /// `YYYY/DD/MM`
    YyyyDdMmSlash,
    /// `DD-MM-YYYY`
    DdMmYyyy,
    /// `MM-DD-YYYY`
    MmDdYyyy,
    /// `DD/MM/YYYY`
    DdMmYyyySlash,
    /// `MM/DD/YYYY`
    MmDdYyyySlash,
}

impl DateFormat {
    /// The token text used in report messages.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            DateFormat::Iso8601 => "ISO8601",
            DateFormat::YyyyMmDd => "YYYY-MM-DD",
            DateFormat::YyyyDdMm => "YYYY-DD-MM",
            DateFormat::YyyyMmDdSlash => "YYYY/MM/DD",
            DateFormat::YyyyDdMmSlash => "YYYY/DD/MM",
            DateFormat::DdMmYyyy => "DD-MM-YYYY",
            DateFormat::MmDdYyyy => "MM-DD-YYYY",
            DateFormat::DdMmYyyySlash => "DD/MM/YYYY",
            DateFormat::MmDdYyyySlash => "MM/DD/YYYY",
        }
    }
}

/// Supported time format tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFormat {
    /// `HH:MM`
    HhMm,
    /// `HH:MM:SS`
    HhMmSs,
    /// `HH:MM:SS.MS` (1 to 3 fractional digits)
    HhMmSsMs,
}

impl TimeFormat {
    /// The token text used in report messages.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            TimeFormat::HhMm => "HH:MM",
            TimeFormat::HhMmSs => "HH:MM:SS",
            TimeFormat::HhMmSsMs => "HH:MM:SS.MS",
        }
    }
}

// ============================================================================
// LIMITS
// ============================================================================

/// Parameter flavour of a `min`/`max` descriptor, typed per kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Limit {
    /// Character, byte, or element count.
    Count(usize),
    /// Numeric bound.
    Number(f64),
    /// Wide-integer bound.
    BigInt(i128),
    /// Calendar-date bound.
    Date(NaiveDate),
}

impl std::fmt::Display for Limit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Limit::Count(n) => write!(f, "{n}"),
            Limit::Number(n) => write!(f, "{n}"),
            Limit::BigInt(n) => write!(f, "{n}"),
            Limit::Date(d) => write!(f, "{d}"),
        }
    }
}

// ============================================================================
// METHOD DESCRIPTORS
// ============================================================================

/// One recorded builder call.
///
/// `required` is implicit: a definition is required unless [`Method::NotRequired`]
/// appears in its stage.
#[derive(Debug, Clone)]
pub enum Method {
    /// The value may be absent.
    NotRequired,
    /// The value may be null.
    Nullable,
    /// The stage's type assertion.
    Kind(Kind),
    /// Lower bound (length, size, count, numeric, or date).
    Min(Limit),
    /// Upper bound.
    Max(Limit),
    /// The number must be greater than zero.
    Positive,
    /// The number must be less than zero.
    Negative,
    /// The number must have no fractional part.
    Integer,
    /// The number must have a fractional part.
    Float,
    /// The text must contain at least this many words.
    MinWord(usize),
    /// Exact structural equality.
    Equal(Value),
    /// Structural inequality.
    NotEqual(Value),
    /// Membership in a fixed set.
    OneOf(Vec<Value>),
    /// The text must match the pattern.
    Regex(Regex),
    /// Email format.
    Email,
    /// UUID format.
    Uuid,
    /// Time-of-day in a declared token format.
    Time(TimeFormat),
    /// Human-readable label used in messages; no validation effect.
    Alias(String),
    /// Fallback substituted when the input is absent, before the gate.
    Default(Value),
    /// User-supplied hook that can accept, reject, or retype the value.
    Custom(CustomHook),
    /// Stage boundary: close the current stage, open one for a new kind.
    ParseTo,
}

impl Method {
    /// The method label used in report entries.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Method::NotRequired => "notRequired",
            Method::Nullable => "nullable",
            Method::Kind(kind) => kind.name(),
            Method::Min(_) => "min",
            Method::Max(_) => "max",
            Method::Positive => "positive",
            Method::Negative => "negative",
            Method::Integer => "integer",
            Method::Float => "float",
            Method::MinWord(_) => "minWord",
            Method::Equal(_) => "equal",
            Method::NotEqual(_) => "notEqual",
            Method::OneOf(_) => "oneOf",
            Method::Regex(_) => "regex",
            Method::Email => "email",
            Method::Uuid => "uuid",
            Method::Time(_) => "time",
            Method::Alias(_) => "alias",
            Method::Default(_) => "default",
            Method::Custom(_) => "custom",
            Method::ParseTo => "parseTo",
        }
    }
}

// ============================================================================
// DEFINITION
// ============================================================================

/// Immutable ordered sequence of method descriptors for one value.
///
/// Cheap to clone and safe to share across arbitrarily many concurrent
/// validations; every `validate`/`test` call allocates its own report.
#[derive(Debug, Clone, Default)]
pub struct Definition {
    methods: Vec<Method>,
}

impl Definition {
    /// An empty definition.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded descriptors, in declaration order.
    #[must_use]
    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    pub(crate) fn from_methods(methods: Vec<Method>) -> Self {
        Self { methods }
    }

    /// Returns a new definition extending this one with `method`.
    ///
    /// Copy-on-write: the receiver is left untouched, so derived schemas
    /// never affect their base.
    #[must_use]
    pub fn with(&self, method: Method) -> Self {
        let mut methods = self.methods.clone();
        methods.push(method);
        Self { methods }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_leaves_base_untouched() {
        let base = Definition::new().with(Method::Kind(Kind::Text));
        let derived = base.with(Method::Nullable);
        assert_eq!(base.methods().len(), 1);
        assert_eq!(derived.methods().len(), 2);
    }

    #[test]
    fn method_names_match_report_labels() {
        assert_eq!(Method::NotRequired.name(), "notRequired");
        assert_eq!(Method::Kind(Kind::BigInt).name(), "bigInt");
        assert_eq!(Method::Min(Limit::Count(2)).name(), "min");
        assert_eq!(Method::ParseTo.name(), "parseTo");
    }

    #[test]
    fn format_tokens() {
        assert_eq!(DateFormat::DdMmYyyySlash.token(), "DD/MM/YYYY");
        assert_eq!(TimeFormat::HhMmSsMs.token(), "HH:MM:SS.MS");
    }
}
