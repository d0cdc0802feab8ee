//! The validation pipeline.
//!
//! One executor drives both entry point families. Every run is async
//! internally; the synchronous entries drive it with a local executor, which
//! never suspends because pending hooks are refused in sync mode instead of
//! awaited. Composite kinds recurse through [`run_definition`], boxed to keep
//! the future type finite.

pub(crate) mod coerce;

use std::borrow::Cow;

use futures::future::BoxFuture;
use tracing::trace;

use crate::checks;
use crate::definition::{Definition, Kind, ObjectShape};
use crate::error::SchemaError;
use crate::hook::{HookOutcome, HookVerdict};
use crate::report::{CheckFailure, CheckPass, FailureKind, Report, Reporter};
use crate::splitter::{self, Stage};
use crate::value::Value;

// ============================================================================
// MODE
// ============================================================================

/// How pending hooks are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    /// Pending hooks are refused; the run is flagged and halted.
    Sync,
    /// Pending hooks are awaited.
    Async,
}

/// What a stage hands to its successor.
enum StageFlow {
    /// Run the next stage against this value.
    Next(Value),
    /// The pipeline is settled; skip the remaining stages.
    Stop(Value),
}

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// Runs the pipeline synchronously.
///
/// Errors with [`SchemaError::AsyncHookInSyncContext`] when a hook defers to
/// a future, since there is nothing to await it with here.
pub(crate) fn test_sync(
    definition: &Definition,
    value: Value,
    name: &str,
) -> Result<Report, SchemaError> {
    let mut reporter = Reporter::new();
    let out =
        futures::executor::block_on(run_definition(definition, value, name, Mode::Sync, &mut reporter, None));
    if let Some(field) = reporter.async_hook.take() {
        return Err(SchemaError::AsyncHookInSyncContext { field });
    }
    Ok(reporter.finish(out))
}

/// Runs the pipeline, awaiting any deferred hooks.
pub(crate) async fn test_async(definition: &Definition, value: Value, name: &str) -> Report {
    let mut reporter = Reporter::new();
    let out = run_definition(definition, value, name, Mode::Async, &mut reporter, None).await;
    reporter.finish(out)
}

// ============================================================================
// PIPELINE
// ============================================================================

/// Runs every stage of a definition, returning the transformed value.
///
/// Boxed so object and array recursion can call back into it.
fn run_definition<'a>(
    definition: &'a Definition,
    value: Value,
    name: &'a str,
    mode: Mode,
    reporter: &'a mut Reporter,
    index: Option<usize>,
) -> BoxFuture<'a, Value> {
    Box::pin(async move {
        let stages = splitter::split(definition);
        let mut current = value;
        for (position, stage) in stages.iter().enumerate() {
            trace!(field = name, stage = position, kind = ?stage.kind().map(Kind::name), "running stage");
            match run_stage(stage, current, name, mode, reporter, index, position > 0).await {
                StageFlow::Next(v) => current = v,
                StageFlow::Stop(v) => return v,
            }
            if reporter.async_hook.is_some() {
                return current;
            }
        }
        current
    })
}

/// Runs one stage: default, gate, conversion, nullable, type check with
/// composite recursion, then the modifiers in declaration order.
async fn run_stage(
    stage: &Stage,
    mut value: Value,
    name: &str,
    mode: Mode,
    reporter: &mut Reporter,
    index: Option<usize>,
    convert: bool,
) -> StageFlow {
    let label = stage.alias().unwrap_or(name);

    if value.is_absent()
        && let Some(fallback) = stage.default_value()
    {
        value = fallback.clone();
    }

    // Gate: absent values settle here, one way or the other.
    if value.is_absent() {
        if stage.is_not_required() {
            reporter.pass(CheckPass {
                method: "notRequired".into(),
                name: owned(label),
                expect: "value is not required and of any type".into(),
                received: value.clone(),
                index,
            });
        } else {
            reporter.fail(CheckFailure {
                method: "required".into(),
                kind: FailureKind::MissingValue,
                name: owned(label),
                expect: "value other than undefined".into(),
                received: value.clone(),
                index,
                message: format!("{label} is required!"),
            });
        }
        return StageFlow::Stop(value);
    }
    reporter.pass(CheckPass {
        method: "required".into(),
        name: owned(label),
        expect: "value other than undefined".into(),
        received: value.clone(),
        index,
    });

    // Stages after a boundary convert their input first. A failed conversion
    // leaves the value as-is and lets the type check below report it.
    if convert
        && let Some(kind) = stage.kind()
        && let Some(converted) = coerce::coerce(&value, kind)
    {
        value = converted;
    }

    if value.is_null() && stage.is_nullable() {
        reporter.pass(CheckPass {
            method: "nullable".into(),
            name: owned(label),
            expect: "the value can be null".into(),
            received: value.clone(),
            index,
        });
        return StageFlow::Stop(value);
    }
    // A null without nullable falls through: the type check rejects it.

    let declared = stage.kind();
    if let Some(kind) = declared {
        let verdict = checks::kind_check(kind, &value, label);
        if verdict.ok {
            reporter.pass(CheckPass {
                method: kind.name().into(),
                name: owned(label),
                expect: verdict.expect,
                received: value.clone(),
                index,
            });
            match kind {
                Kind::Object(shape) => value = run_object(shape, value, mode, reporter).await,
                Kind::Array(element) => {
                    value = run_array(element, value, label, mode, reporter).await;
                }
                _ => {}
            }
            if reporter.async_hook.is_some() {
                return StageFlow::Stop(value);
            }
        } else {
            reporter.fail(CheckFailure {
                method: kind.name().into(),
                kind: FailureKind::InvalidValue,
                name: owned(label),
                expect: verdict.expect,
                received: value.clone(),
                index,
                message: verdict.message,
            });
            // The stage's modifiers are meaningless against the wrong kind,
            // but later stages still get their chance.
            return StageFlow::Next(value);
        }
    }

    for method in stage.methods() {
        if let crate::definition::Method::Custom(hook) = method {
            let verdict = match hook.call(value.clone()) {
                HookOutcome::Ready(verdict) => verdict,
                HookOutcome::Pending(future) => match mode {
                    Mode::Async => future.await,
                    Mode::Sync => {
                        reporter.async_hook = Some(label.to_owned());
                        return StageFlow::Stop(value);
                    }
                },
            };
            match verdict {
                HookVerdict::Success(replacement) => {
                    reporter.pass(CheckPass {
                        method: "custom".into(),
                        name: owned(label),
                        expect: "custom validation to pass".into(),
                        received: value.clone(),
                        index,
                    });
                    value = replacement;
                }
                HookVerdict::Failed(message) => {
                    reporter.fail(CheckFailure {
                        method: "custom".into(),
                        kind: FailureKind::InvalidValue,
                        name: owned(label),
                        expect: "custom validation to pass".into(),
                        received: value.clone(),
                        index,
                        message,
                    });
                    // A failed hook halts the rest of this stage's modifiers.
                    break;
                }
            }
        } else if let Some(verdict) = checks::run(method, declared, &value, label) {
            if verdict.ok {
                reporter.pass(CheckPass {
                    method: method.name().into(),
                    name: owned(label),
                    expect: verdict.expect,
                    received: value.clone(),
                    index,
                });
            } else {
                reporter.fail(CheckFailure {
                    method: method.name().into(),
                    kind: FailureKind::InvalidValue,
                    name: owned(label),
                    expect: verdict.expect,
                    received: value.clone(),
                    index,
                    message: verdict.message,
                });
            }
        }
    }

    StageFlow::Next(value)
}

// ============================================================================
// COMPOSITE RECURSION
// ============================================================================

/// Validates each declared key against the object's entry for it.
///
/// Key runs share the parent reporter: their passes and failures count
/// directly toward the parent's totals, named after the key. Transformed
/// child values are written back; keys the shape does not declare pass
/// through untouched.
async fn run_object(
    shape: &ObjectShape,
    value: Value,
    mode: Mode,
    reporter: &mut Reporter,
) -> Value {
    let Value::Object(mut map) = value else {
        return value;
    };
    for (key, definition) in shape {
        let child = map.get(key.as_str()).cloned().unwrap_or(Value::Absent);
        let out = run_definition(definition, child, key, mode, reporter, None).await;
        if reporter.async_hook.is_some() {
            break;
        }
        if out.is_absent() {
            map.shift_remove(key.as_str());
        } else {
            map.insert(key.clone(), out);
        }
    }
    Value::Object(map)
}

/// Validates every element against the element definition.
///
/// Each element runs in its own reporter; only its failures are merged into
/// the parent, tagged with the element position. Element successes never
/// reach the parent's counters.
async fn run_array(
    element: &Definition,
    value: Value,
    name: &str,
    mode: Mode,
    reporter: &mut Reporter,
) -> Value {
    let Value::Array(items) = value else {
        return value;
    };
    let mut out = Vec::with_capacity(items.len());
    for (position, item) in items.into_iter().enumerate() {
        let mut sub = Reporter::new();
        let transformed = run_definition(element, item, name, mode, &mut sub, Some(position)).await;
        reporter.absorb_element_failures(sub, position);
        out.push(transformed);
        if reporter.async_hook.is_some() {
            break;
        }
    }
    Value::Array(out)
}

fn owned(label: &str) -> Cow<'static, str> {
    Cow::Owned(label.to_owned())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::{Limit, Method};
    use crate::hook::CustomHook;
    use pretty_assertions::assert_eq;

    fn string_def() -> Definition {
        Definition::new().with(Method::Kind(Kind::Text))
    }

    #[test]
    fn passing_run_counts_gate_and_type() {
        let report = test_sync(&string_def(), Value::from("hi"), "value").unwrap();
        assert!(report.passed_all);
        assert_eq!(report.total_tests, 2);
        assert_eq!(report.successes[0].method, "required");
        assert_eq!(report.successes[1].method, "string");
    }

    #[test]
    fn absent_value_fails_the_gate_only() {
        let report = test_sync(&string_def(), Value::Absent, "value").unwrap();
        assert!(!report.passed_all);
        assert_eq!(report.total_tests, 1);
        assert_eq!(report.errors[0].kind, FailureKind::MissingValue);
        assert_eq!(report.errors[0].message, "value is required!");
    }

    #[test]
    fn not_required_halts_on_absent() {
        let def = string_def().with(Method::NotRequired);
        let report = test_sync(&def, Value::Absent, "value").unwrap();
        assert!(report.passed_all);
        assert_eq!(report.total_tests, 1);
        assert_eq!(report.successes[0].method, "notRequired");
    }

    #[test]
    fn default_substitutes_before_the_gate() {
        let def = string_def().with(Method::Default(Value::from("anon")));
        let report = test_sync(&def, Value::Absent, "value").unwrap();
        assert!(report.passed_all);
        assert_eq!(report.value, Value::from("anon"));
    }

    #[test]
    fn nullable_halts_before_the_type_check() {
        let def = string_def().with(Method::Nullable);
        let report = test_sync(&def, Value::Null, "value").unwrap();
        assert!(report.passed_all);
        assert_eq!(report.successes.last().map(|e| e.method.as_ref()), Some("nullable"));
    }

    #[test]
    fn null_without_nullable_fails_the_type_check() {
        let report = test_sync(&string_def(), Value::Null, "value").unwrap();
        assert!(!report.passed_all);
        assert_eq!(report.errors[0].method, "string");
    }

    #[test]
    fn type_mismatch_skips_stage_modifiers() {
        let def = string_def().with(Method::Min(Limit::Count(2)));
        let report = test_sync(&def, Value::from(5.0), "value").unwrap();
        assert_eq!(report.failed, 1);
        assert_eq!(report.errors[0].method, "string");
    }

    #[test]
    fn alias_renames_report_entries() {
        let def = string_def().with(Method::Alias("nickname".to_owned()));
        let report = test_sync(&def, Value::Absent, "value").unwrap();
        assert_eq!(report.errors[0].name, "nickname");
        assert_eq!(report.errors[0].message, "nickname is required!");
    }

    #[test]
    fn parse_to_converts_between_stages() {
        let def = string_def()
            .with(Method::ParseTo)
            .with(Method::Kind(Kind::Number))
            .with(Method::Min(Limit::Number(100.0)));
        let report = test_sync(&def, Value::from("123"), "value").unwrap();
        assert!(report.passed_all);
        assert_eq!(report.value, Value::Number(123.0));
    }

    #[test]
    fn failed_conversion_fails_the_next_type_check() {
        let def = string_def()
            .with(Method::ParseTo)
            .with(Method::Kind(Kind::Number));
        let report = test_sync(&def, Value::from("not a number"), "value").unwrap();
        assert!(!report.passed_all);
        assert_eq!(report.errors[0].method, "number");
        assert_eq!(report.value, Value::from("not a number"));
    }

    #[test]
    fn ready_hook_replaces_the_value() {
        let def = string_def().with(Method::Custom(CustomHook::new(|ctx| {
            let upper = match ctx.value() {
                Value::Text(s) => s.to_uppercase(),
                _ => String::new(),
            };
            ctx.success(upper)
        })));
        let report = test_sync(&def, Value::from("hi"), "value").unwrap();
        assert!(report.passed_all);
        assert_eq!(report.value, Value::from("HI"));
    }

    #[test]
    fn failed_hook_halts_remaining_modifiers() {
        let def = string_def()
            .with(Method::Custom(CustomHook::new(|ctx| ctx.failed("rejected"))))
            .with(Method::Min(Limit::Count(1)));
        let report = test_sync(&def, Value::from("hi"), "value").unwrap();
        // required + string pass, custom fails, min never runs.
        assert_eq!(report.total_tests, 3);
        assert_eq!(report.errors[0].message, "rejected");
    }

    #[test]
    fn pending_hook_is_refused_in_sync_mode() {
        let def = string_def().with(Method::Custom(CustomHook::new(|ctx| {
            let value = ctx.value().clone();
            ctx.defer(async move { HookVerdict::Success(value) })
        })));
        let err = test_sync(&def, Value::from("hi"), "value").unwrap_err();
        assert!(matches!(
            err,
            SchemaError::AsyncHookInSyncContext { ref field } if field == "value"
        ));
    }

    #[tokio::test]
    async fn pending_hook_is_awaited_in_async_mode() {
        let def = string_def().with(Method::Custom(CustomHook::new(|ctx| {
            ctx.defer(async { HookVerdict::success("from the future") })
        })));
        let report = test_async(&def, Value::from("hi"), "value").await;
        assert!(report.passed_all);
        assert_eq!(report.value, Value::from("from the future"));
    }

    #[test]
    fn array_elements_contribute_failures_only() {
        let def = Definition::new().with(Method::Kind(Kind::Array(Box::new(string_def()))));
        let report = test_sync(
            &def,
            Value::from(vec![Value::from(1.0), Value::from("x")]),
            "value",
        )
        .unwrap();
        // required + array pass; element 0 fails its string check.
        assert_eq!(report.total_tests, 3);
        assert_eq!(report.errors[0].index, Some(0));
        assert_eq!(report.value, Value::from(vec![Value::from(1.0), Value::from("x")]));
    }

    #[test]
    fn object_keys_contribute_passes_and_failures() {
        let mut shape = ObjectShape::new();
        shape.insert("name".to_owned(), string_def());
        shape.insert(
            "age".to_owned(),
            Definition::new().with(Method::Kind(Kind::Number)),
        );
        let def = Definition::new().with(Method::Kind(Kind::Object(shape)));

        let value = Value::object([("name", Value::from("ada")), ("age", Value::from("old"))]);
        let report = test_sync(&def, value, "value").unwrap();
        // required + object, name: required + string, age: required; age's
        // number check fails.
        assert_eq!(report.passed, 5);
        assert_eq!(report.failed, 1);
        assert_eq!(report.errors[0].name, "age");
    }

    #[test]
    fn object_missing_declared_key_fails_its_gate() {
        let mut shape = ObjectShape::new();
        shape.insert("name".to_owned(), string_def());
        let def = Definition::new().with(Method::Kind(Kind::Object(shape)));

        let report = test_sync(&def, Value::object::<&str, Value, _>([]), "value").unwrap();
        assert!(!report.passed_all);
        assert_eq!(report.errors[0].name, "name");
        assert_eq!(report.errors[0].kind, FailureKind::MissingValue);
    }
}
