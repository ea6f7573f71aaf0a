//! # Error Types
//!
//! Error types for modeling operations. All errors are explicit and name the
//! entities involved so that a failing call can be diagnosed from the message.
//!
//! ## Error Policy
//!
//! - Precondition violations (malformed input) return an error immediately
//! - Unsupported geometry is reported, never approximated
//! - Unrepresentable evaluation is not an error: it yields `None`

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur during modeling operations.
///
/// ## Example
///
/// ```rust
/// use brep_kernel::{Model, ModelError, Orientation};
///
/// let model = Model::new();
/// let a = model.point(glam::DVec3::ZERO);
/// let b = model.point(glam::DVec3::X);
/// let line = model.line(&a, &b).unwrap();
/// let stray = model.point(glam::DVec3::Y);
///
/// assert_eq!(line.orientation_of(&a).unwrap(), Orientation::Forward);
/// assert!(matches!(line.orientation_of(&stray), Err(ModelError::MissingUse { .. })));
/// ```
#[derive(Error, Debug)]
pub enum ModelError {
    /// An entity was asked about a use it does not have.
    #[error("{owner} does not use {target}")]
    MissingUse {
        /// Entity whose use list was searched
        owner: String,
        /// Entity that was not found
        target: String,
    },

    /// An operation received an entity of the wrong kind.
    #[error("Expected {expected}, found {found}")]
    WrongKind {
        /// Description of the accepted kinds
        expected: &'static str,
        /// The offending entity
        found: String,
    },

    /// A curve or face is missing a required use or helper slot.
    #[error("{entity} has no {slot}")]
    MissingSlot {
        /// The malformed entity
        entity: String,
        /// Name of the missing slot
        slot: &'static str,
    },

    /// An assembly contained no cells.
    #[error("Assembly {0} has no cells")]
    EmptyAssembly(String),

    /// Assembly cells disagree on their dimension.
    #[error("Assembly cells must share one dimension: {first} and {other}")]
    MixedCells {
        /// First cell of the assembly
        first: String,
        /// Cell whose dimension differs
        other: String,
    },

    /// A loop could not be chained into a single closed cycle.
    #[error("{loop_entity} does not continue past {point}")]
    BrokenLoop {
        /// The loop being reordered
        loop_entity: String,
        /// Point at which no continuation was found
        point: String,
    },

    /// A dependency did not precede its dependent in a closure.
    #[error("Closure order violated: {entity} depends on {dependency}")]
    OrderingViolation {
        /// Entity being processed
        entity: String,
        /// Dependency that was not yet processed
        dependency: String,
    },

    /// A sweep looked for a point or edge result that was never recorded.
    #[error("No sweep result recorded for {0}")]
    MissingSweep(String),

    /// Geometry the kernel does not know how to represent.
    #[error("Unsupported geometry: {0}")]
    UnsupportedGeometry(String),

    /// Writing an export file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ModelError {
    /// Creates a wrong-kind error for `found`.
    pub fn wrong_kind(expected: &'static str, found: &crate::Entity) -> Self {
        Self::WrongKind {
            expected,
            found: found.to_string(),
        }
    }

    /// Creates a missing-slot error for `entity`.
    pub fn missing_slot(entity: &crate::Entity, slot: &'static str) -> Self {
        Self::MissingSlot {
            entity: entity.to_string(),
            slot,
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for modeling operations.
pub type ModelResult<T> = Result<T, ModelError>;

// =============================================================================
// TESTS
// =============================================================================
