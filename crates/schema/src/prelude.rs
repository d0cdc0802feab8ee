//! Prelude module for convenient imports.
//!
//! Provides a single `use provar_schema::prelude::*;` import that brings in
//! the builder entry point, the entry-point trait, and the types builder
//! calls and hooks mention.
//!
//! # Examples
//!
//! ```rust
//! use provar_schema::prelude::*;
//!
//! let s = schema().string().email().nullable();
//! assert!(s.validate("ada@lovelace.uk"));
//! assert!(s.validate(Value::Null));
//! ```

// ============================================================================
// BUILDER: entry point and kind-specific builders
// ============================================================================

pub use crate::builder::{
    AnySchema, ArraySchema, BigIntSchema, BooleanSchema, BufferSchema, CallableSchema, DateSchema,
    NumberSchema, ObjectSchema, Schema, StringSchema, schema,
};

// ============================================================================
// CONFIGURATION: formats, failure actions, raise targets
// ============================================================================

pub use crate::definition::{DateFormat, TimeFormat};
pub use crate::error::{FailureAction, SchemaError, ThrowTarget};

// ============================================================================
// RUNTIME: values, reports, hooks
// ============================================================================

pub use crate::hook::{HookContext, HookOutcome, HookVerdict};
pub use crate::report::{CheckFailure, CheckPass, FailureKind, Report};
pub use crate::value::Value;
