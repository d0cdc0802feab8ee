//! Array schemas.

use super::{Schema, shared_modifiers};
use crate::definition::{Definition, Limit, Method};

/// Builder for ordered sequences with a single element schema.
///
/// Element failures reach the parent report tagged with their zero-based
/// `index`; element passes stay private to the element run.
///
/// # Examples
///
/// ```
/// use provar_schema::prelude::*;
///
/// let tags = schema().array(schema().string().min_length(1)).max_items(5);
/// assert!(tags.validate(Value::array(["rust", "schema"])));
/// assert!(!tags.validate(Value::array([Value::from("ok"), Value::from(1.0)])));
/// ```
#[derive(Debug, Clone)]
pub struct ArraySchema {
    def: Definition,
}

impl ArraySchema {
    pub(crate) fn new(def: Definition) -> Self {
        Self { def }
    }

    fn append(self, method: Method) -> Self {
        Self {
            def: self.def.with(method),
        }
    }

    shared_modifiers!();

    /// Requires at least `count` elements.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_items(self, count: usize) -> Self {
        self.append(Method::Min(Limit::Count(count)))
    }

    /// Requires at most `count` elements.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_items(self, count: usize) -> Self {
        self.append(Method::Max(Limit::Count(count)))
    }
}

impl Schema for ArraySchema {
    fn definition(&self) -> &Definition {
        &self.def
    }
}
