//! # Mesh Errors
//!
//! Error types for the configuration boundary of mesh generation.
//!
//! Geometry operations themselves never fail: degenerate input degrades to
//! a no-op. Errors only come from parsing shape names and option records,
//! and from explicit validation.

use thiserror::Error;

/// Errors that can occur while configuring or validating meshes.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Shape name not recognized
    #[error("Unknown shape: {name}")]
    UnknownShape { name: String },

    /// Option record could not be parsed
    #[error("Invalid shape options: {0}")]
    InvalidOptions(#[from] serde_json::Error),

    /// Mesh validation failed
    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },
}

impl MeshError {
    /// Creates an unknown shape error.
    pub fn unknown_shape(name: impl Into<String>) -> Self {
        Self::UnknownShape { name: name.into() }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
        }
    }
}

/// Result type alias for mesh operations.
pub type Result<T> = std::result::Result<T, MeshError>;
