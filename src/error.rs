//! Error types for icosphere planet generation

use std::fmt;

/// Errors that can occur during mesh generation
#[derive(Debug, Clone, PartialEq)]
pub enum PlanetError {
    /// An input was outside its valid domain (e.g. a negative resolution)
    InvalidArgument(String),
}

impl fmt::Display for PlanetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanetError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for PlanetError {}

/// Result type alias for planet operations
pub type Result<T> = std::result::Result<T, PlanetError>;

/// Reject negative subdivision resolutions
pub(crate) fn check_resolution(resolution: i32) -> Result<u32> {
    u32::try_from(resolution).map_err(|_| {
        PlanetError::InvalidArgument(format!(
            "resolution must be >= 0 (got {})",
            resolution
        ))
    })
}
