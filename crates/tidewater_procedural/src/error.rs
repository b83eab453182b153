//! # Placement Error Types
//!
//! Only real failures live here. "No room left" for an ordinary object is an
//! `Option::None`, not an error; see the placer docs.

use thiserror::Error;

/// Errors that can occur in the placement engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlacementError {
    /// A random range was empty or inverted.
    #[error("invalid range: min {min} must be below max {max}")]
    Range {
        /// Inclusive lower bound that was requested.
        min: i64,
        /// Exclusive upper bound that was requested.
        max: i64,
    },

    /// A selection was requested from an empty input.
    #[error("cannot choose from an empty {0}")]
    EmptyInput(&'static str),

    /// A catalog weight was zero or negative.
    #[error("catalog weight must be at least 1, got {weight}")]
    InvalidWeight {
        /// The rejected weight.
        weight: i64,
    },

    /// A catalog was built with no entries.
    #[error("catalog has no entries")]
    EmptyCatalog,

    /// A template was built with no primary object.
    #[error("template has no primary object")]
    EmptyTemplate,

    /// A keep-clear radius was not a positive finite number.
    #[error("keep-clear radius must be positive, got {radius}")]
    InvalidRadius {
        /// The rejected radius.
        radius: f64,
    },

    /// No coastal cell can hold the mandatory anchor. Aborts the run.
    #[error("no coastal location with clearance {radius} for the anchor")]
    NoAnchorSpace {
        /// Clearance radius that was searched for.
        radius: f64,
    },
}

/// Result type for placement operations.
pub type PlacementResult<T> = Result<T, PlacementError>;
