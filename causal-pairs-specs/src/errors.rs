//! Error types for the fixture harness.

use thiserror::Error;

/// Errors that can occur while loading fixtures.
#[derive(Debug, Error)]
pub enum SpecError {
    /// A fixture file is not valid fixture TOML.
    #[error("parse error in {path}: {message}")]
    Parse { path: String, message: String },

    /// A fixture file or directory could not be read.
    #[error("failed to load fixture: {path}: {message}")]
    Load { path: String, message: String },
}

/// Result type for fixture operations.
pub type SpecResult<T> = Result<T, SpecError>;
