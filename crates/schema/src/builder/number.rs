//! Number and wide-integer schemas.
//!
//! Sign and precision are typestate: once `positive()` is called,
//! `negative()` is no longer on the builder at all, and likewise for
//! `integer()`/`float()`. A contradictory pair is a compile error rather
//! than a schema that can never pass.

use std::marker::PhantomData;

use super::{Schema, shared_modifiers};
use crate::definition::{Definition, Limit, Method};

/// Sign constraint not yet chosen.
#[derive(Debug, Clone, Copy)]
pub struct SignUnset;
/// Sign constraint recorded; `positive()`/`negative()` are gone.
#[derive(Debug, Clone, Copy)]
pub struct SignSet;
/// Precision constraint not yet chosen.
#[derive(Debug, Clone, Copy)]
pub struct PrecisionUnset;
/// Precision constraint recorded; `integer()`/`float()` are gone.
#[derive(Debug, Clone, Copy)]
pub struct PrecisionSet;

// ============================================================================
// NUMBER
// ============================================================================

/// Builder for double-precision numbers.
///
/// # Examples
///
/// ```
/// use provar_schema::prelude::*;
///
/// let age = schema().number().positive().integer().max(130.0);
/// assert!(age.validate(36.0));
/// assert!(!age.validate(-1.0));
/// assert!(!age.validate(36.5));
/// ```
#[derive(Debug, Clone)]
pub struct NumberSchema<S = SignUnset, P = PrecisionUnset> {
    def: Definition,
    _state: PhantomData<(S, P)>,
}

impl NumberSchema {
    pub(crate) fn new(def: Definition) -> Self {
        Self {
            def,
            _state: PhantomData,
        }
    }
}

impl<S, P> NumberSchema<S, P> {
    fn append(self, method: Method) -> Self {
        Self {
            def: self.def.with(method),
            _state: PhantomData,
        }
    }

    fn retag<S2, P2>(self, method: Method) -> NumberSchema<S2, P2> {
        NumberSchema {
            def: self.def.with(method),
            _state: PhantomData,
        }
    }

    shared_modifiers!();

    /// Requires the number to be at least `bound`.
    #[must_use = "builder methods must be chained or built"]
    pub fn min(self, bound: f64) -> Self {
        self.append(Method::Min(Limit::Number(bound)))
    }

    /// Requires the number to be at most `bound`.
    #[must_use = "builder methods must be chained or built"]
    pub fn max(self, bound: f64) -> Self {
        self.append(Method::Max(Limit::Number(bound)))
    }
}

impl<P> NumberSchema<SignUnset, P> {
    /// Requires the number to be greater than zero.
    #[must_use = "builder methods must be chained or built"]
    pub fn positive(self) -> NumberSchema<SignSet, P> {
        self.retag(Method::Positive)
    }

    /// Requires the number to be less than zero.
    #[must_use = "builder methods must be chained or built"]
    pub fn negative(self) -> NumberSchema<SignSet, P> {
        self.retag(Method::Negative)
    }
}

impl<S> NumberSchema<S, PrecisionUnset> {
    /// Requires a finite number with no fractional part.
    #[must_use = "builder methods must be chained or built"]
    pub fn integer(self) -> NumberSchema<S, PrecisionSet> {
        self.retag(Method::Integer)
    }

    /// Requires a finite number with a fractional part.
    #[must_use = "builder methods must be chained or built"]
    pub fn float(self) -> NumberSchema<S, PrecisionSet> {
        self.retag(Method::Float)
    }
}

impl<S, P> Schema for NumberSchema<S, P> {
    fn definition(&self) -> &Definition {
        &self.def
    }
}

// ============================================================================
// BIG INT
// ============================================================================

/// Builder for wide integers.
#[derive(Debug, Clone)]
pub struct BigIntSchema<S = SignUnset> {
    def: Definition,
    _state: PhantomData<S>,
}

impl BigIntSchema {
    pub(crate) fn new(def: Definition) -> Self {
        Self {
            def,
            _state: PhantomData,
        }
    }
}

impl<S> BigIntSchema<S> {
    fn append(self, method: Method) -> Self {
        Self {
            def: self.def.with(method),
            _state: PhantomData,
        }
    }

    shared_modifiers!();

    /// Requires the integer to be at least `bound`.
    #[must_use = "builder methods must be chained or built"]
    pub fn min(self, bound: i128) -> Self {
        self.append(Method::Min(Limit::BigInt(bound)))
    }

    /// Requires the integer to be at most `bound`.
    #[must_use = "builder methods must be chained or built"]
    pub fn max(self, bound: i128) -> Self {
        self.append(Method::Max(Limit::BigInt(bound)))
    }
}

impl BigIntSchema<SignUnset> {
    /// Requires the integer to be greater than zero.
    #[must_use = "builder methods must be chained or built"]
    pub fn positive(self) -> BigIntSchema<SignSet> {
        BigIntSchema {
            def: self.def.with(Method::Positive),
            _state: PhantomData,
        }
    }

    /// Requires the integer to be less than zero.
    #[must_use = "builder methods must be chained or built"]
    pub fn negative(self) -> BigIntSchema<SignSet> {
        BigIntSchema {
            def: self.def.with(Method::Negative),
            _state: PhantomData,
        }
    }
}

impl<S> Schema for BigIntSchema<S> {
    fn definition(&self) -> &Definition {
        &self.def
    }
}

// ============================================================================
// TESTS
// ============================================================================
