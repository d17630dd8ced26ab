use std::fmt;

use crate::store::StoreError;

/// Represents the different types of errors that can occur while building
/// or using a language detector.
#[derive(Debug)]
pub enum DetectorError {
    /// Error occurred during the build phase
    BuildError(String),
    /// Error occurred due to invalid input parameters
    ValidationError(String),
}

impl fmt::Display for DetectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BuildError(msg) => write!(f, "Build error: {}", msg),
            Self::ValidationError(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for DetectorError {}

impl From<StoreError> for DetectorError {
    fn from(err: StoreError) -> Self {
        DetectorError::BuildError(err.to_string())
    }
}
