//! # Content Error Types
//!
//! All errors that can occur while building or loading content.

use thiserror::Error;
use tidewater_procedural::PlacementError;

/// Errors that can occur in the content crate.
#[derive(Error, Debug)]
pub enum ContentError {
    /// A catalog file could not be read.
    #[error("cannot read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// A catalog file is not valid TOML or has the wrong shape.
    #[error("invalid catalog file: {0}")]
    Parse(#[from] toml::de::Error),

    /// A team name is not one of `player`, `enemy`, `neutral`.
    #[error("unknown team: {0}")]
    UnknownTeam(String),

    /// A catalog entry lists no objects.
    #[error("catalog entry {index} has no parts")]
    EmptyEntry {
        /// Zero-based entry index in the file.
        index: usize,
    },

    /// A catalog, template or container failed validation.
    #[error(transparent)]
    Placement(#[from] PlacementError),
}

/// Result type for content operations.
pub type ContentResult<T> = Result<T, ContentError>;
