//! # Planet Errors

use lowpoly_mesh::MeshError;
use thiserror::Error;

/// Errors from planet configuration and generation.
#[derive(Debug, Error)]
pub enum PlanetError {
    /// Preset name not recognized
    #[error("Unknown planet preset: {name}")]
    UnknownPreset { name: String },

    /// Preset or option record could not be parsed
    #[error("Invalid planet preset: {0}")]
    InvalidPreset(#[from] serde_json::Error),

    /// Generated geometry failed validation
    #[error("Mesh error: {0}")]
    Mesh(#[from] MeshError),
}

impl PlanetError {
    /// Creates an unknown preset error.
    pub fn unknown_preset(name: impl Into<String>) -> Self {
        Self::UnknownPreset { name: name.into() }
    }
}

/// Result type alias for planet operations.
pub type Result<T> = std::result::Result<T, PlanetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PlanetError::unknown_preset("jungle");
        assert_eq!(err.to_string(), "Unknown planet preset: jungle");
    }

    #[test]
    fn test_mesh_error_converts() {
        let err: PlanetError = MeshError::validation("bad").into();
        assert!(matches!(err, PlanetError::Mesh(_)));
        assert!(err.to_string().contains("bad"));
    }
}
