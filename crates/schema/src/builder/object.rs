//! Object schemas.

use super::{Schema, shared_modifiers};
use crate::definition::{Definition, Kind, Method};

/// Builder for key/value structures.
///
/// Declared keys validate against their field schema and count toward the
/// parent report; keys never declared pass through untouched. A declared key
/// missing from the input fails its gate unless the field schema is
/// `not_required()`.
///
/// # Examples
///
/// ```
/// use provar_schema::prelude::*;
///
/// let signup = schema()
///     .object()
///     .field("email", schema().string().email())
///     .field("age", schema().number().positive().integer().not_required());
///
/// assert!(signup.validate(Value::object([("email", "ada@lovelace.uk")])));
/// assert!(!signup.validate(Value::object([("age", 36.0)])));
/// ```
#[derive(Debug, Clone)]
pub struct ObjectSchema {
    def: Definition,
}

impl ObjectSchema {
    pub(crate) fn new(def: Definition) -> Self {
        Self { def }
    }

    fn append(self, method: Method) -> Self {
        Self {
            def: self.def.with(method),
        }
    }

    shared_modifiers!();

    /// Declares a key validated by `field`.
    ///
    /// Redeclaring a key replaces its schema; declaration order is the
    /// validation order.
    #[must_use = "builder methods must be chained or built"]
    pub fn field(self, name: impl Into<String>, field: impl Schema) -> Self {
        let mut methods = self.def.methods().to_vec();
        for method in &mut methods {
            if let Method::Kind(Kind::Object(shape)) = method {
                shape.insert(name.into(), field.definition().clone());
                break;
            }
        }
        Self {
            def: Definition::from_methods(methods),
        }
    }
}

impl Schema for ObjectSchema {
    fn definition(&self) -> &Definition {
        &self.def
    }
}
