//! Result aggregation and the public report contract.
//!
//! A [`Report`] is the JSON-serializable outcome of one validation call. Its
//! shape is a public contract consumed by callers that render validation
//! errors (an HTTP middleware taking `errors[0].message` as a 400 body, for
//! instance), so field names serialize in camelCase exactly as documented.

use std::borrow::Cow;
use std::time::Instant;

use serde::Serialize;

use crate::value::Value;

// ============================================================================
// ENTRY TYPES
// ============================================================================

/// Failure taxonomy of a report entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The required gate failed.
    MissingValue,
    /// A type, format, range, or custom check failed.
    InvalidValue,
}

impl FailureKind {
    /// The wire label of this failure kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FailureKind::MissingValue => "missing value",
            FailureKind::InvalidValue => "invalid value",
        }
    }
}

impl Serialize for FailureKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One passed check.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckPass {
    /// The builder method that produced this check.
    pub method: Cow<'static, str>,
    /// Field name (or alias) the check ran against.
    pub name: Cow<'static, str>,
    /// What the check expected, as a description.
    pub expect: Cow<'static, str>,
    /// The value the check evaluated.
    pub received: Value,
    /// Zero-based element position, for array element checks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

/// One failed check.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckFailure {
    /// The builder method that produced this check.
    pub method: Cow<'static, str>,
    /// `"missing value"` or `"invalid value"`.
    #[serde(rename = "type")]
    pub kind: FailureKind,
    /// Field name (or alias) the check ran against.
    pub name: Cow<'static, str>,
    /// What the check expected, as a description.
    pub expect: Cow<'static, str>,
    /// The value the check evaluated.
    pub received: Value,
    /// Zero-based element position, for array element checks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    /// Human-readable failure message.
    pub message: String,
}

// ============================================================================
// REPORT
// ============================================================================

/// The aggregated outcome of one validation call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// True when every check passed.
    pub passed_all: bool,
    /// Number of passed checks.
    pub passed: u32,
    /// Number of failed checks.
    pub failed: u32,
    /// Total checks evaluated; always `passed + failed`.
    pub total_tests: u32,
    /// Passed checks, in evaluation order.
    pub successes: Vec<CheckPass>,
    /// Failed checks, in evaluation order.
    pub errors: Vec<CheckFailure>,
    /// Elapsed wall time, formatted `"Ns Mms"`.
    pub time: String,
    /// The final transformed value at completion, regardless of outcome —
    /// including default substitution, coercion, and hook replacement.
    pub value: Value,
}

impl Report {
    /// Renders the report as a `serde_json::Value` in the public shape.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }

    /// The first failure's message, if any.
    #[must_use]
    pub fn first_error_message(&self) -> Option<&str> {
        self.errors.first().map(|e| e.message.as_str())
    }
}

// ============================================================================
// REPORTER
// ============================================================================

/// Accumulates report entries during one pipeline run.
///
/// Allocated fresh per call; nothing leaks between invocations of a shared
/// schema.
#[derive(Debug)]
pub(crate) struct Reporter {
    passed: u32,
    failed: u32,
    successes: Vec<CheckPass>,
    errors: Vec<CheckFailure>,
    started: Instant,
    /// Set when a pending hook is reached in sync mode; names the field.
    pub(crate) async_hook: Option<String>,
}

impl Reporter {
    pub(crate) fn new() -> Self {
        Self {
            passed: 0,
            failed: 0,
            successes: Vec::new(),
            errors: Vec::new(),
            started: Instant::now(),
            async_hook: None,
        }
    }

    pub(crate) fn pass(&mut self, entry: CheckPass) {
        self.passed += 1;
        self.successes.push(entry);
    }

    pub(crate) fn fail(&mut self, entry: CheckFailure) {
        self.failed += 1;
        self.errors.push(entry);
    }

    /// Merges an element run into this reporter, keeping only failures.
    ///
    /// Array recursion records element errors tagged with their position but
    /// drops element successes, so the parent's counters only grow on
    /// failure. Failures already carrying an index (from a nested array) keep
    /// it.
    pub(crate) fn absorb_element_failures(&mut self, element: Reporter, index: usize) {
        if self.async_hook.is_none() {
            self.async_hook = element.async_hook;
        }
        for mut failure in element.errors {
            failure.index.get_or_insert(index);
            self.fail(failure);
        }
    }

    pub(crate) fn finish(self, value: Value) -> Report {
        let elapsed = self.started.elapsed();
        Report {
            passed_all: self.failed == 0,
            passed: self.passed,
            failed: self.failed,
            total_tests: self.passed + self.failed,
            successes: self.successes,
            errors: self.errors,
            time: format!("{}s {}ms", elapsed.as_secs(), elapsed.subsec_millis()),
            value,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pass_entry(method: &'static str) -> CheckPass {
        CheckPass {
            method: method.into(),
            name: "value".into(),
            expect: "something".into(),
            received: Value::from("x"),
            index: None,
        }
    }

    fn fail_entry(method: &'static str, kind: FailureKind) -> CheckFailure {
        CheckFailure {
            method: method.into(),
            kind,
            name: "value".into(),
            expect: "something".into(),
            received: Value::from("x"),
            index: None,
            message: "value is wrong!".to_owned(),
        }
    }

    #[test]
    fn counters_track_insertions() {
        let mut reporter = Reporter::new();
        reporter.pass(pass_entry("required"));
        reporter.fail(fail_entry("string", FailureKind::InvalidValue));
        let report = reporter.finish(Value::from("x"));

        assert!(!report.passed_all);
        assert_eq!(report.passed, 1);
        assert_eq!(report.failed, 1);
        assert_eq!(report.total_tests, 2);
    }

    #[test]
    fn element_absorption_keeps_only_failures() {
        let mut parent = Reporter::new();
        let mut element = Reporter::new();
        element.pass(pass_entry("string"));
        element.fail(fail_entry("string", FailureKind::InvalidValue));
        parent.absorb_element_failures(element, 3);

        let report = parent.finish(Value::Null);
        assert_eq!(report.passed, 0);
        assert_eq!(report.failed, 1);
        assert_eq!(report.errors[0].index, Some(3));
    }

    #[test]
    fn json_contract_uses_camel_case_and_type_label() {
        let mut reporter = Reporter::new();
        reporter.fail(fail_entry("required", FailureKind::MissingValue));
        let json = reporter.finish(Value::Absent).to_json();

        assert_eq!(json["passedAll"], json!(false));
        assert_eq!(json["totalTests"], json!(1));
        assert_eq!(json["errors"][0]["type"], json!("missing value"));
        assert!(json["errors"][0].get("index").is_none());
        assert!(json["time"].as_str().is_some_and(|t| t.ends_with("ms")));
    }
}
