//! The fluent schema builder.
//!
//! [`schema()`] opens a builder; the first call picks the kind, every
//! further call appends one method descriptor. Building never validates —
//! the result is a frozen [`Definition`] behind a kind-specific wrapper, and
//! all checking happens when one of the [`Schema`] entry points runs.
//!
//! Every modifier takes `self` and returns a new builder, and the frozen
//! definition is copy-on-write underneath, so deriving a variant from a
//! shared base never mutates the base:
//!
//! ```
//! use provar_schema::prelude::*;
//!
//! let base = schema().string().min_length(2);
//! let relaxed = base.clone().not_required();
//! assert!(!base.validate(Value::Absent));
//! assert!(relaxed.validate(Value::Absent));
//! ```

mod array;
mod datetime;
mod number;
mod object;
mod scalar;
mod text;

pub use array::ArraySchema;
pub use datetime::DateSchema;
pub use number::{
    BigIntSchema, NumberSchema, PrecisionSet, PrecisionUnset, SignSet, SignUnset,
};
pub use object::ObjectSchema;
pub use scalar::{AnySchema, BooleanSchema, BufferSchema, CallableSchema};
pub use text::StringSchema;

use crate::definition::{DateFormat, Definition, Kind, Method};
use crate::error::{FailureAction, SchemaError};
use crate::executor;
use crate::report::Report;
use crate::value::Value;

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// Common surface of every built schema.
///
/// A schema is immutable and cheap to clone; one instance can serve
/// arbitrarily many concurrent validations.
pub trait Schema {
    /// The frozen descriptor sequence this schema validates with.
    fn definition(&self) -> &Definition;

    /// Runs the pipeline and collapses the report to a boolean.
    ///
    /// Returns `false` when a custom hook defers to a future, since there is
    /// nothing here to await it with; use [`Schema::test_async`] for that.
    fn validate(&self, value: impl Into<Value>) -> bool
    where
        Self: Sized,
    {
        executor::test_sync(self.definition(), value.into(), "value")
            .is_ok_and(|report| report.passed_all)
    }

    /// Runs the pipeline and returns the full report, entries named `name`.
    ///
    /// # Errors
    ///
    /// [`SchemaError::AsyncHookInSyncContext`] when a custom hook defers to a
    /// future.
    ///
    /// # Examples
    ///
    /// ```
    /// use provar_schema::prelude::*;
    ///
    /// let report = schema().string().email().test("nope", "email")?;
    /// assert!(!report.passed_all);
    /// assert_eq!(report.first_error_message(), Some("email must be a valid email!"));
    /// # Ok::<(), provar_schema::SchemaError>(())
    /// ```
    fn test(&self, value: impl Into<Value>, name: &str) -> Result<Report, SchemaError>
    where
        Self: Sized,
    {
        executor::test_sync(self.definition(), value.into(), name)
    }

    /// Runs the pipeline, awaiting any deferred custom hooks.
    fn test_async(
        &self,
        value: impl Into<Value>,
        name: &str,
    ) -> impl Future<Output = Report> + Send
    where
        Self: Sized,
    {
        executor::test_async(self.definition(), value.into(), name)
    }

    /// Runs the pipeline and applies `action` to a failed report.
    ///
    /// # Errors
    ///
    /// [`SchemaError::AsyncHookInSyncContext`] for deferred hooks;
    /// [`SchemaError::Validation`] under [`FailureAction::Raise`];
    /// [`SchemaError::Raised`] under [`FailureAction::RaiseWith`].
    fn enforce(
        &self,
        value: impl Into<Value>,
        name: &str,
        action: FailureAction,
    ) -> Result<Report, SchemaError>
    where
        Self: Sized,
    {
        let report = executor::test_sync(self.definition(), value.into(), name)?;
        if report.passed_all {
            return Ok(report);
        }
        let message = report
            .first_error_message()
            .unwrap_or("validation failed")
            .to_owned();
        match action {
            FailureAction::Collect => Ok(report),
            FailureAction::Raise => Err(SchemaError::Validation(message)),
            FailureAction::RaiseWith(target) => Err(SchemaError::Raised(target.raise(message))),
        }
    }
}

/// Opens a schema builder.
///
/// # Examples
///
/// ```
/// use provar_schema::prelude::*;
///
/// let user = schema()
///     .object()
///     .field("name", schema().string().min_word(2))
///     .field("age", schema().number().positive().integer());
///
/// assert!(user.validate(Value::object([
///     ("name", Value::from("Ada Lovelace")),
///     ("age", Value::from(36.0)),
/// ])));
/// ```
#[must_use]
pub fn schema() -> SchemaRoot {
    SchemaRoot
}

/// Kind selector returned by [`schema()`].
#[derive(Debug, Clone, Copy)]
pub struct SchemaRoot;

impl SchemaRoot {
    /// A text schema.
    #[must_use]
    pub fn string(self) -> StringSchema {
        StringSchema::new(Definition::new().with(Method::Kind(Kind::Text)))
    }

    /// A double-precision number schema.
    #[must_use]
    pub fn number(self) -> NumberSchema {
        NumberSchema::new(Definition::new().with(Method::Kind(Kind::Number)))
    }

    /// A wide-integer schema.
    #[must_use]
    pub fn big_int(self) -> BigIntSchema {
        BigIntSchema::new(Definition::new().with(Method::Kind(Kind::BigInt)))
    }

    /// A boolean schema.
    #[must_use]
    pub fn boolean(self) -> BooleanSchema {
        BooleanSchema::new(Definition::new().with(Method::Kind(Kind::Boolean)))
    }

    /// A calendar-date schema accepting the given token format.
    #[must_use]
    pub fn date(self, format: DateFormat) -> DateSchema {
        DateSchema::new(Definition::new().with(Method::Kind(Kind::Date(format))))
    }

    /// A binary-buffer schema.
    #[must_use]
    pub fn buffer(self) -> BufferSchema {
        BufferSchema::new(Definition::new().with(Method::Kind(Kind::Buffer)))
    }

    /// A schema accepting any callable value.
    #[must_use]
    pub fn callable(self) -> CallableSchema {
        CallableSchema::new(Definition::new().with(Method::Kind(Kind::Callable)))
    }

    /// A schema whose type check always passes.
    #[must_use]
    pub fn any(self) -> AnySchema {
        AnySchema::new(Definition::new().with(Method::Kind(Kind::Any)))
    }

    /// An object schema with no declared keys yet; add them with
    /// [`ObjectSchema::field`]. Undeclared keys pass through untouched.
    #[must_use]
    pub fn object(self) -> ObjectSchema {
        ObjectSchema::new(Definition::new().with(Method::Kind(Kind::Object(
            crate::definition::ObjectShape::new(),
        ))))
    }

    /// An array schema validating every element against `element`.
    #[must_use]
    pub fn array(self, element: impl Schema) -> ArraySchema {
        ArraySchema::new(Definition::new().with(Method::Kind(Kind::Array(Box::new(
            element.definition().clone(),
        )))))
    }
}

// ============================================================================
// STAGE BOUNDARY
// ============================================================================

/// Target-kind selector returned by `parse_to()`.
///
/// Picks the kind of the next pipeline stage: the value validated so far is
/// converted to that kind, and the stage's checks run against the converted
/// value. A value the conversion cannot express fails the new stage's type
/// check with the original value intact.
///
/// # Examples
///
/// ```
/// use provar_schema::prelude::*;
///
/// let port = schema().string().parse_to().number().integer().min(1.0).max(65535.0);
/// assert!(port.validate("8080"));
/// assert!(!port.validate("eighty"));
/// ```
#[derive(Debug, Clone)]
pub struct ParseTo {
    def: Definition,
}

impl ParseTo {
    pub(crate) fn new(def: Definition) -> Self {
        Self {
            def: def.with(Method::ParseTo),
        }
    }

    /// Convert to text.
    #[must_use]
    pub fn string(self) -> StringSchema {
        StringSchema::new(self.def.with(Method::Kind(Kind::Text)))
    }

    /// Convert to a double-precision number.
    #[must_use]
    pub fn number(self) -> NumberSchema {
        NumberSchema::new(self.def.with(Method::Kind(Kind::Number)))
    }

    /// Convert to a wide integer.
    #[must_use]
    pub fn big_int(self) -> BigIntSchema {
        BigIntSchema::new(self.def.with(Method::Kind(Kind::BigInt)))
    }

    /// Convert to a boolean.
    #[must_use]
    pub fn boolean(self) -> BooleanSchema {
        BooleanSchema::new(self.def.with(Method::Kind(Kind::Boolean)))
    }

    /// Convert to a calendar date in the given token format.
    #[must_use]
    pub fn date(self, format: DateFormat) -> DateSchema {
        DateSchema::new(self.def.with(Method::Kind(Kind::Date(format))))
    }

    /// Convert to a binary buffer.
    #[must_use]
    pub fn buffer(self) -> BufferSchema {
        BufferSchema::new(self.def.with(Method::Kind(Kind::Buffer)))
    }
}

// ============================================================================
// SHARED MODIFIERS
// ============================================================================

/// Expands the modifiers every kind-specific builder shares. The enclosing
/// impl block must provide `fn append(self, Method) -> Self`.
macro_rules! shared_modifiers {
    () => {
        /// Allows the value to be absent; an absent value settles the whole
        /// pipeline as passed.
        #[must_use = "builder methods must be chained or built"]
        pub fn not_required(self) -> Self {
            self.append(crate::definition::Method::NotRequired)
        }

        /// Allows the value to be null; a null settles the whole pipeline as
        /// passed.
        #[must_use = "builder methods must be chained or built"]
        pub fn nullable(self) -> Self {
            self.append(crate::definition::Method::Nullable)
        }

        /// Renames the field in report entries and messages.
        #[must_use = "builder methods must be chained or built"]
        pub fn alias(self, name: impl Into<String>) -> Self {
            self.append(crate::definition::Method::Alias(name.into()))
        }

        /// Substitutes `value` when the input is absent, before the gate.
        #[must_use = "builder methods must be chained or built"]
        pub fn default(self, value: impl Into<crate::value::Value>) -> Self {
            self.append(crate::definition::Method::Default(value.into()))
        }

        /// Requires exact structural equality with `expected`.
        #[must_use = "builder methods must be chained or built"]
        pub fn equal(self, expected: impl Into<crate::value::Value>) -> Self {
            self.append(crate::definition::Method::Equal(expected.into()))
        }

        /// Requires structural inequality with `other`.
        #[must_use = "builder methods must be chained or built"]
        pub fn not_equal(self, other: impl Into<crate::value::Value>) -> Self {
            self.append(crate::definition::Method::NotEqual(other.into()))
        }

        /// Requires membership in a fixed set of allowed values.
        #[must_use = "builder methods must be chained or built"]
        pub fn one_of<V>(self, allowed: impl IntoIterator<Item = V>) -> Self
        where
            V: Into<crate::value::Value>,
        {
            self.append(crate::definition::Method::OneOf(
                allowed.into_iter().map(Into::into).collect(),
            ))
        }

        /// Appends a custom hook that can accept, reject, or retype the
        /// value. See [`HookContext`](crate::hook::HookContext).
        #[must_use = "builder methods must be chained or built"]
        pub fn custom<F>(self, hook: F) -> Self
        where
            F: Fn(crate::hook::HookContext) -> crate::hook::HookOutcome + Send + Sync + 'static,
        {
            self.append(crate::definition::Method::Custom(
                crate::hook::CustomHook::new(hook),
            ))
        }

        /// Closes this stage and opens one for a new kind; the value is
        /// converted at the boundary.
        #[must_use = "builder methods must be chained or built"]
        pub fn parse_to(self) -> crate::builder::ParseTo {
            crate::builder::ParseTo::new(self.def)
        }
    };
}

pub(crate) use shared_modifiers;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ThrowTarget;
    use pretty_assertions::assert_eq;

    #[test]
    fn building_records_without_validating() {
        let s = schema().string().min_length(2).nullable();
        assert_eq!(s.definition().methods().len(), 3);
    }

    #[test]
    fn derived_schema_leaves_base_untouched() {
        let base = schema().string().min_length(2);
        let derived = base.clone().not_required().alias("nickname");
        assert_eq!(base.definition().methods().len(), 2);
        assert_eq!(derived.definition().methods().len(), 4);
    }

    #[test]
    fn validate_collapses_the_report() {
        let s = schema().string();
        assert!(s.validate("hello"));
        assert!(!s.validate(1.0));
    }

    #[test]
    fn enforce_collect_returns_the_failed_report() {
        let report = schema()
            .string()
            .enforce(1.0, "name", FailureAction::Collect)
            .unwrap();
        assert!(!report.passed_all);
    }

    #[test]
    fn enforce_raise_uses_the_first_failure_message() {
        let err = schema()
            .string()
            .enforce(Value::Absent, "name", FailureAction::Raise)
            .unwrap_err();
        assert_eq!(err.to_string(), "name is required!");
    }

    #[test]
    fn enforce_raise_with_builds_the_callers_error() {
        #[derive(Debug, thiserror::Error)]
        #[error("bad request: {0}")]
        struct BadRequest(String);

        let err = schema()
            .string()
            .enforce(
                Value::Absent,
                "name",
                FailureAction::RaiseWith(ThrowTarget::new(BadRequest)),
            )
            .unwrap_err();
        assert_eq!(err.to_string(), "bad request: name is required!");
    }
}
