//! Runtime value model.
//!
//! The engine validates plain structured values handed over by upstream
//! collaborators (body/query/param parsing). [`Value`] is the closed sum
//! type of every kind the pipeline can see, including the [`Value::Absent`]
//! sentinel for a missing input — distinct from an explicit [`Value::Null`],
//! which gates differently (see the executor's nullable step).

use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// Ordered key/value map backing the object kind.
///
/// Declaration order is a contract: object keys are validated in the order
/// they appear, and reports list entries in that order.
pub type ObjectMap = IndexMap<String, Value>;

/// Signature of a callable runtime value.
pub type CallableFn = dyn Fn(&Value) -> Value + Send + Sync;

// ============================================================================
// VALUE
// ============================================================================

/// A runtime value flowing through a validation pipeline.
///
/// # Examples
///
/// ```
/// use provar_schema::value::Value;
///
/// let v = Value::from("hello");
/// assert_eq!(v.kind_name(), "string");
/// assert!(!v.is_absent());
/// ```
#[derive(Clone)]
pub enum Value {
    /// The input was not supplied at all (the undefined sentinel).
    Absent,
    /// An explicit null.
    Null,
    /// Text.
    Text(String),
    /// A double-precision number; `integer()`/`float()` modifiers refine it.
    Number(f64),
    /// A wide integer, validated by the big-int kind.
    BigInt(i128),
    /// A boolean.
    Bool(bool),
    /// A point in time.
    DateTime(DateTime<Utc>),
    /// A binary buffer.
    Buffer(Bytes),
    /// A callable value. Compared by identity, never by behavior.
    Callable(Arc<CallableFn>),
    /// An ordered key/value structure.
    Object(ObjectMap),
    /// An ordered sequence.
    Array(Vec<Value>),
}

impl Value {
    /// Human label for this value's kind, as used in report messages.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Absent => "undefined",
            Value::Null => "null",
            Value::Text(_) => "string",
            Value::Number(_) => "number",
            Value::BigInt(_) => "bigInt",
            Value::Bool(_) => "boolean",
            Value::DateTime(_) => "date",
            Value::Buffer(_) => "buffer",
            Value::Callable(_) => "function",
            Value::Object(_) => "object",
            Value::Array(_) => "array",
        }
    }

    /// Returns true for the undefined sentinel.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// Returns true for an explicit null.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Looks up an object entry by key. Returns `None` for non-objects.
    #[must_use]
    pub fn entry(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// Builds an object value from key/value pairs, keeping their order.
    ///
    /// # Examples
    ///
    /// ```
    /// use provar_schema::value::Value;
    ///
    /// let v = Value::object([("id", Value::from(1.0)), ("name", Value::from("ana"))]);
    /// assert_eq!(v.entry("name"), Some(&Value::from("ana")));
    /// ```
    pub fn object<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Builds an array value from elements.
    pub fn array<V, I>(items: I) -> Self
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        Value::Array(items.into_iter().map(Into::into).collect())
    }

    /// Converts to a `serde_json::Value`.
    ///
    /// Kinds JSON cannot express use stand-ins: `Absent` becomes `null`,
    /// `DateTime` an RFC 3339 string, `Buffer` a byte array, `Callable` the
    /// string `"[callable]"`.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Absent | Value::Null => serde_json::Value::Null,
            Value::Text(s) => serde_json::Value::String(s.clone()),
            Value::Number(n) => serde_json::Number::from_f64(*n)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            Value::BigInt(i) => i64::try_from(*i).map_or_else(
                |_| serde_json::Value::String(i.to_string()),
                |n| serde_json::Value::Number(n.into()),
            ),
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::DateTime(dt) => {
                serde_json::Value::String(dt.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            Value::Buffer(b) => serde_json::Value::Array(
                b.iter().map(|byte| serde_json::json!(byte)).collect(),
            ),
            Value::Callable(_) => serde_json::Value::String("[callable]".to_owned()),
            Value::Object(map) => serde_json::Value::Object(
                map.iter().map(|(k, v)| (k.clone(), v.to_json())).collect(),
            ),
            Value::Array(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => n.as_f64().map_or(Value::Null, Value::Number),
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            ),
        }
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<i128> for Value {
    fn from(n: i128) -> Self {
        Value::BigInt(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(dt: DateTime<Utc>) -> Self {
        Value::DateTime(dt)
    }
}

impl From<Bytes> for Value {
    fn from(b: Bytes) -> Self {
        Value::Buffer(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<ObjectMap> for Value {
    fn from(map: ObjectMap) -> Self {
        Value::Object(map)
    }
}

impl<V: Into<Value>> From<Option<V>> for Value {
    fn from(opt: Option<V>) -> Self {
        opt.map_or(Value::Absent, Into::into)
    }
}

// ============================================================================
// EQUALITY / DEBUG / DISPLAY
// ============================================================================

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Absent, Value::Absent) | (Value::Null, Value::Null) => true,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::DateTime(a), Value::DateTime(b)) => a == b,
            (Value::Buffer(a), Value::Buffer(b)) => a == b,
            (Value::Callable(a), Value::Callable(b)) => Arc::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Absent => write!(f, "Absent"),
            Value::Null => write!(f, "Null"),
            Value::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Value::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Value::BigInt(i) => f.debug_tuple("BigInt").field(i).finish(),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::DateTime(dt) => f.debug_tuple("DateTime").field(dt).finish(),
            Value::Buffer(b) => write!(f, "Buffer({} bytes)", b.len()),
            Value::Callable(_) => write!(f, "Callable(..)"),
            Value::Object(map) => f.debug_tuple("Object").field(map).finish(),
            Value::Array(items) => f.debug_tuple("Array").field(items).finish(),
        }
    }
}

impl fmt::Display for Value {
    /// Renders the value the way report messages quote it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Absent => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() {
                    write!(f, "{n:.0}")
                } else {
                    write!(f, "{n}")
                }
            }
            Value::BigInt(i) => write!(f, "{i}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::DateTime(dt) => write!(f, "{}", dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
            Value::Buffer(b) => write!(f, "<buffer {} bytes>", b.len()),
            Value::Callable(_) => write!(f, "[callable]"),
            Value::Object(_) | Value::Array(_) => write!(f, "{}", self.to_json()),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Absent | Value::Null => serializer.serialize_unit(),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Number(n) => {
                if n.is_finite() {
                    serializer.serialize_f64(*n)
                } else {
                    serializer.serialize_unit()
                }
            }
            // Wide integers beyond i64 fall back to a string; serde_json has
            // no lossless representation for them without arbitrary_precision.
            Value::BigInt(i) => match i64::try_from(*i) {
                Ok(n) => serializer.serialize_i64(n),
                Err(_) => serializer.serialize_str(&i.to_string()),
            },
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::DateTime(dt) => {
                serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            Value::Buffer(b) => {
                let mut seq = serializer.serialize_seq(Some(b.len()))?;
                for byte in b.iter() {
                    seq.serialize_element(byte)?;
                }
                seq.end()
            }
            Value::Callable(_) => serializer.serialize_str("[callable]"),
            Value::Object(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map {
                    out.serialize_entry(k, v)?;
                }
                out.end()
            }
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
