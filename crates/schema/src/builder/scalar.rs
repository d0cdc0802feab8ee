//! Boolean, buffer, callable, and any schemas.

use super::{Schema, shared_modifiers};
use crate::definition::{Definition, Limit, Method};

// ============================================================================
// BOOLEAN
// ============================================================================

/// Builder for boolean values.
#[derive(Debug, Clone)]
pub struct BooleanSchema {
    def: Definition,
}

impl BooleanSchema {
    pub(crate) fn new(def: Definition) -> Self {
        Self { def }
    }

    fn append(self, method: Method) -> Self {
        Self {
            def: self.def.with(method),
        }
    }

    shared_modifiers!();
}

impl Schema for BooleanSchema {
    fn definition(&self) -> &Definition {
        &self.def
    }
}

// ============================================================================
// BUFFER
// ============================================================================

/// Builder for binary buffers.
///
/// # Examples
///
/// ```
/// use provar_schema::prelude::*;
/// use bytes::Bytes;
///
/// let avatar = schema().buffer().min_size(1).max_size(1024);
/// assert!(avatar.validate(Bytes::from_static(b"\x89PNG")));
/// assert!(!avatar.validate(Bytes::new()));
/// ```
#[derive(Debug, Clone)]
pub struct BufferSchema {
    def: Definition,
}

impl BufferSchema {
    pub(crate) fn new(def: Definition) -> Self {
        Self { def }
    }

    fn append(self, method: Method) -> Self {
        Self {
            def: self.def.with(method),
        }
    }

    shared_modifiers!();

    /// Requires at least `count` bytes.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_size(self, count: usize) -> Self {
        self.append(Method::Min(Limit::Count(count)))
    }

    /// Requires at most `count` bytes.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_size(self, count: usize) -> Self {
        self.append(Method::Max(Limit::Count(count)))
    }
}

impl Schema for BufferSchema {
    fn definition(&self) -> &Definition {
        &self.def
    }
}

// ============================================================================
// CALLABLE
// ============================================================================

/// Builder for callable values.
#[derive(Debug, Clone)]
pub struct CallableSchema {
    def: Definition,
}

impl CallableSchema {
    pub(crate) fn new(def: Definition) -> Self {
        Self { def }
    }

    fn append(self, method: Method) -> Self {
        Self {
            def: self.def.with(method),
        }
    }

    shared_modifiers!();
}

impl Schema for CallableSchema {
    fn definition(&self) -> &Definition {
        &self.def
    }
}

// ============================================================================
// ANY
// ============================================================================

/// Builder whose type check always passes; only modifiers constrain it.
#[derive(Debug, Clone)]
pub struct AnySchema {
    def: Definition,
}

impl AnySchema {
    pub(crate) fn new(def: Definition) -> Self {
        Self { def }
    }

    fn append(self, method: Method) -> Self {
        Self {
            def: self.def.with(method),
        }
    }

    shared_modifiers!();
}

impl Schema for AnySchema {
    fn definition(&self) -> &Definition {
        &self.def
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::schema;
    use crate::value::{CallableFn, Value};
    use bytes::Bytes;
    use std::sync::Arc;

    #[test]
    fn boolean_accepts_only_bools() {
        let s = schema().boolean();
        assert!(s.validate(true));
        assert!(!s.validate("true"));
    }

    #[test]
    fn buffer_size_bounds_count_bytes() {
        let s = schema().buffer().min_size(2).max_size(4);
        assert!(s.validate(Bytes::from_static(b"abc")));
        assert!(!s.validate(Bytes::from_static(b"a")));
        assert!(!s.validate(Bytes::from_static(b"abcde")));
    }

    #[test]
    fn callable_accepts_callable_values() {
        let s = schema().callable();
        let f: Arc<CallableFn> = Arc::new(|v| v.clone());
        assert!(s.validate(Value::Callable(f)));
        assert!(!s.validate("not callable"));
    }

    #[test]
    fn any_passes_every_concrete_kind() {
        let s = schema().any();
        assert!(s.validate("text"));
        assert!(s.validate(1.0));
        assert!(!s.validate(Value::Absent));
    }

    #[test]
    fn any_with_one_of_restricts_values() {
        let s = schema().any().one_of(["draft", "sent"]);
        assert!(s.validate("draft"));
        assert!(!s.validate("archived"));
    }
}
