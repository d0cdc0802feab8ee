//! Custom validation hooks.
//!
//! A hook is a user-supplied function appended with `custom(..)`. It receives
//! the current pipeline value and finishes through exactly one of two typed
//! paths: [`HookContext::success`] replaces the value (and its logical kind)
//! for all downstream stages, [`HookContext::failed`] records a failure and
//! halts the remaining modifiers of the stage. A hook may also defer to a
//! future; only `test_async` awaits it — the synchronous entry points refuse
//! pending hooks.

use std::fmt;
use std::sync::Arc;

use futures::future::BoxFuture;

use crate::value::Value;

// ============================================================================
// HOOK RESULT TYPES
// ============================================================================

/// Final decision of a custom hook.
#[derive(Debug)]
pub enum HookVerdict {
    /// The value is accepted and replaced for all downstream stages.
    Success(Value),
    /// The value is rejected with a message recorded in the report.
    Failed(String),
}

impl HookVerdict {
    /// Accepts the value, replacing it with `value`.
    pub fn success(value: impl Into<Value>) -> Self {
        HookVerdict::Success(value.into())
    }

    /// Rejects the value with `message`.
    pub fn failed(message: impl Into<String>) -> Self {
        HookVerdict::Failed(message.into())
    }
}

/// What a hook invocation produced: an immediate verdict or a future one.
pub enum HookOutcome {
    /// The hook finished synchronously.
    Ready(HookVerdict),
    /// The hook needs to be awaited; only `test_async` will.
    Pending(BoxFuture<'static, HookVerdict>),
}

impl fmt::Debug for HookOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HookOutcome::Ready(v) => f.debug_tuple("Ready").field(v).finish(),
            HookOutcome::Pending(_) => write!(f, "Pending(..)"),
        }
    }
}

// ============================================================================
// HOOK CONTEXT
// ============================================================================

/// The context handed to a custom hook.
///
/// # Examples
///
/// ```
/// use provar_schema::prelude::*;
///
/// let parse = schema().string().custom(|ctx| match ctx.value() {
///     Value::Text(s) if s.starts_with("user-") => {
///         let id = s.trim_start_matches("user-").to_owned();
///         ctx.success(id)
///     }
///     _ => ctx.failed("expected a user-prefixed id"),
/// });
/// assert!(parse.validate("user-42"));
/// assert!(!parse.validate("42"));
/// ```
#[derive(Debug)]
pub struct HookContext {
    value: Value,
}

impl HookContext {
    pub(crate) fn new(value: Value) -> Self {
        Self { value }
    }

    /// The current pipeline value.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Consumes the context, taking ownership of the value.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.value
    }

    /// Accepts the value, replacing it with `value` for downstream stages.
    #[must_use]
    pub fn success(self, value: impl Into<Value>) -> HookOutcome {
        HookOutcome::Ready(HookVerdict::success(value))
    }

    /// Rejects the value with `message`.
    #[must_use]
    pub fn failed(self, message: impl Into<String>) -> HookOutcome {
        HookOutcome::Ready(HookVerdict::failed(message))
    }

    /// Defers the verdict to a future, for hooks that need to await.
    ///
    /// # Examples
    ///
    /// ```
    /// use provar_schema::prelude::*;
    ///
    /// let s = schema().string().custom(|ctx| {
    ///     let value = ctx.value().clone();
    ///     ctx.defer(async move {
    ///         // e.g. a uniqueness lookup would happen here
    ///         HookVerdict::success(value)
    ///     })
    /// });
    /// ```
    #[must_use]
    pub fn defer<F>(self, future: F) -> HookOutcome
    where
        F: Future<Output = HookVerdict> + Send + 'static,
    {
        HookOutcome::Pending(Box::pin(future))
    }
}

// ============================================================================
// CUSTOM HOOK DESCRIPTOR PAYLOAD
// ============================================================================

/// A stored custom hook, cloneable into every validation run.
#[derive(Clone)]
pub struct CustomHook(Arc<dyn Fn(HookContext) -> HookOutcome + Send + Sync>);

impl CustomHook {
    /// Wraps a hook function.
    pub fn new<F>(hook: F) -> Self
    where
        F: Fn(HookContext) -> HookOutcome + Send + Sync + 'static,
    {
        Self(Arc::new(hook))
    }

    pub(crate) fn call(&self, value: Value) -> HookOutcome {
        (self.0)(HookContext::new(value))
    }
}

impl fmt::Debug for CustomHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CustomHook(..)")
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ready_success_carries_new_value() {
        let hook = CustomHook::new(|ctx| ctx.success(123.0));
        match hook.call(Value::from("old")) {
            HookOutcome::Ready(HookVerdict::Success(v)) => assert_eq!(v, Value::Number(123.0)),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn ready_failure_carries_message() {
        let hook = CustomHook::new(|ctx| ctx.failed("nope"));
        match hook.call(Value::Null) {
            HookOutcome::Ready(HookVerdict::Failed(msg)) => assert_eq!(msg, "nope"),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn deferred_hook_is_pending() {
        let hook = CustomHook::new(|ctx| {
            let value = ctx.value().clone();
            ctx.defer(async move { HookVerdict::Success(value) })
        });
        assert!(matches!(hook.call(Value::Null), HookOutcome::Pending(_)));
    }
}
