//! Typed error variants for the guidepost-config crate.
//!
//! Structured error types for guide-file I/O and validation, so callers at
//! the crate boundary can match on specific failure modes instead of opaque
//! `anyhow` strings.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while loading or validating a guide configuration.
///
/// All variants are fatal to guide construction: a tour never starts from a
/// partially loaded config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The guide file could not be read from disk.
    #[error("failed to read guide config '{}': {source}", .path.display())]
    Io {
        /// Path to the guide file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The guide file contained invalid JSON, or a step was missing a
    /// required field (`object_name`, `description`).
    #[error("JSON parse error in guide config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field value failed semantic validation.
    ///
    /// The inner string describes which field is invalid and why.
    #[error("guide config validation error: {0}")]
    Validation(String),
}
