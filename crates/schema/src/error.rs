//! Configuration-class errors and raise targets.
//!
//! Per-check failures are report *data*, never `Err`: the engine completes
//! the whole pipeline and hands back a full report. `SchemaError` covers the
//! cases that abort a call instead — reaching an asynchronous hook from a
//! synchronous entry point, and the raising modes of [`Schema::enforce`].
//!
//! [`Schema::enforce`]: crate::builder::Schema::enforce

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

/// A caller-supplied error raised by `enforce`.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

// ============================================================================
// SCHEMA ERROR
// ============================================================================

/// Errors that abort a validation call.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A custom hook returned a pending future inside `validate`/`test`.
    #[error("custom hook for `{field}` is asynchronous; use `test_async`")]
    AsyncHookInSyncContext {
        /// Name of the field whose hook deferred.
        field: String,
    },

    /// `enforce` with [`FailureAction::Raise`]: the first failure's message.
    #[error("{0}")]
    Validation(String),

    /// `enforce` with [`FailureAction::RaiseWith`]: the caller's error.
    #[error(transparent)]
    Raised(BoxedError),
}

// ============================================================================
// THROW TARGET
// ============================================================================

/// A caller-supplied error constructor for [`FailureAction::RaiseWith`].
///
/// Construction is the capability check: `E: std::error::Error` is verified
/// by the bound once, at configuration time. A non-error raise target is
/// unrepresentable, so no runtime probe is ever attempted.
///
/// # Examples
///
/// ```
/// use provar_schema::error::ThrowTarget;
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("bad request: {0}")]
/// struct BadRequest(String);
///
/// let target = ThrowTarget::new(BadRequest);
/// ```
#[derive(Clone)]
pub struct ThrowTarget(Arc<dyn Fn(String) -> BoxedError + Send + Sync>);

impl ThrowTarget {
    /// Wraps an error constructor taking the first failure's message.
    pub fn new<E, F>(ctor: F) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
        F: Fn(String) -> E + Send + Sync + 'static,
    {
        Self(Arc::new(move |message| Box::new(ctor(message))))
    }

    pub(crate) fn raise(&self, message: String) -> BoxedError {
        (self.0)(message)
    }
}

impl fmt::Debug for ThrowTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ThrowTarget(..)")
    }
}

// ============================================================================
// FAILURE ACTION
// ============================================================================

/// What `enforce` does when the report fails.
#[derive(Debug, Clone, Default)]
pub enum FailureAction {
    /// Return the failed report to the caller.
    #[default]
    Collect,
    /// Return `Err(SchemaError::Validation)` with the first failure's message.
    Raise,
    /// Raise through a caller-supplied error constructor.
    RaiseWith(ThrowTarget),
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("api error: {0}")]
    struct ApiError(String);

    #[test]
    fn throw_target_builds_the_callers_error() {
        let target = ThrowTarget::new(ApiError);
        let err = target.raise("name is required".to_owned());
        assert_eq!(err.to_string(), "api error: name is required");
    }

    #[test]
    fn async_hook_error_names_the_field() {
        let err = SchemaError::AsyncHookInSyncContext {
            field: "email".to_owned(),
        };
        assert!(err.to_string().contains("email"));
        assert!(err.to_string().contains("test_async"));
    }
}
