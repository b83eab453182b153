//! # Generation Error Types
//!
//! Everything that can stop a generation run.

use thiserror::Error;
use tidewater_content::ContentError;
use tidewater_procedural::PlacementError;

/// Errors that abort a generation run.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// Placement failed fatally (no room for the anchor, bad catalog).
    #[error("placement failed: {0}")]
    Placement(#[from] PlacementError),

    /// Built-in or file content was invalid.
    #[error("content error: {0}")]
    Content(#[from] ContentError),

    /// A config file could not be read or written.
    #[error("config I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A config file is not valid TOML.
    #[error("invalid config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A config could not be serialised.
    #[error("cannot serialise config: {0}")]
    ConfigWrite(#[from] toml::ser::Error),
}

/// Result type for generation operations.
pub type GenerationResult<T> = Result<T, GenerationError>;
