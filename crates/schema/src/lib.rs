//! # provar-schema
//!
//! A runtime schema engine: declare the shape of untrusted data with a
//! fluent builder, run it against a value, and get back either a boolean or
//! a full JSON-serializable report of every check that ran.
//!
//! ## Quick Start
//!
//! ```rust
//! use provar_schema::prelude::*;
//!
//! let signup = schema()
//!     .object()
//!     .field("email", schema().string().email())
//!     .field("age", schema().string().parse_to().number().positive().integer());
//!
//! let report = signup.test(
//!     Value::object([("email", "ada@lovelace.uk"), ("age", "36")]),
//!     "signup",
//! )?;
//! assert!(report.passed_all);
//! assert_eq!(report.value.entry("age"), Some(&Value::Number(36.0)));
//! # Ok::<(), provar_schema::SchemaError>(())
//! ```
//!
//! ## How a run works
//!
//! Building records method descriptors and never validates. At validation
//! time the descriptor sequence is split into stages at each `parse_to()`
//! boundary; every stage runs its gate, nullability, type check, and
//! modifiers in declaration order, converting the value at each boundary.
//! The run always completes — failures are report entries, not early
//! returns — and the report carries the final transformed value.
//!
//! Custom hooks may defer to a future; [`Schema::test_async`] awaits them,
//! while the synchronous entry points refuse them with
//! [`SchemaError::AsyncHookInSyncContext`].

pub mod builder;
pub mod definition;
pub mod error;
pub mod hook;
pub mod prelude;
pub mod report;
pub mod value;

mod checks;
mod executor;
mod splitter;

pub use builder::{Schema, schema};
pub use definition::{DateFormat, Definition, TimeFormat};
pub use error::{FailureAction, SchemaError, ThrowTarget};
pub use hook::{HookContext, HookOutcome, HookVerdict};
pub use report::Report;
pub use value::Value;
