//! Stage partitioning.
//!
//! A definition's descriptor sequence is split into pipeline stages at every
//! `parseTo` boundary. Boundaries are purely syntactic — the position of the
//! descriptor, no look-ahead — and each stage is validated against the
//! output of the previous one.

use smallvec::SmallVec;

use crate::definition::{Definition, Kind, Method};
use crate::value::Value;

/// Most schemas have one or two stages; avoid heap traffic for those.
pub type Stages = SmallVec<[Stage; 2]>;

// ============================================================================
// STAGE
// ============================================================================

/// A contiguous run of descriptors between `parseTo` boundaries.
#[derive(Debug, Clone, Default)]
pub struct Stage {
    methods: Vec<Method>,
}

impl Stage {
    /// The stage's descriptors, in declaration order.
    #[must_use]
    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    /// The kind this stage asserts: its first `Kind` descriptor.
    #[must_use]
    pub fn kind(&self) -> Option<&Kind> {
        self.methods.iter().find_map(|m| match m {
            Method::Kind(kind) => Some(kind),
            _ => None,
        })
    }

    /// Whether the stage tolerates an absent value.
    #[must_use]
    pub fn is_not_required(&self) -> bool {
        self.methods.iter().any(|m| matches!(m, Method::NotRequired))
    }

    /// Whether the stage tolerates an explicit null.
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        self.methods.iter().any(|m| matches!(m, Method::Nullable))
    }

    /// The declared fallback for an absent value, if any.
    #[must_use]
    pub fn default_value(&self) -> Option<&Value> {
        self.methods.iter().find_map(|m| match m {
            Method::Default(value) => Some(value),
            _ => None,
        })
    }

    /// The declared alias label, if any.
    #[must_use]
    pub fn alias(&self) -> Option<&str> {
        self.methods.iter().find_map(|m| match m {
            Method::Alias(name) => Some(name.as_str()),
            _ => None,
        })
    }
}

// ============================================================================
// SPLIT
// ============================================================================

/// Partitions a definition into ordered pipeline stages.
///
/// Descriptors accumulate into the current stage; a `parseTo` pushes the
/// current stage (even when empty) and opens a new one; the trailing stage
/// is pushed only when non-empty.
#[must_use]
pub fn split(definition: &Definition) -> Stages {
    let mut stages = Stages::new();
    let mut current = Stage::default();

    for method in definition.methods() {
        if matches!(method, Method::ParseTo) {
            stages.push(std::mem::take(&mut current));
        } else {
            current.methods.push(method.clone());
        }
    }

    if !current.methods.is_empty() {
        stages.push(current);
    }

    stages
}

// ============================================================================
// TESTS
// ============================================================================
