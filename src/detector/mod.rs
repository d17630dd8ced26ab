use serde::Serialize;

use crate::ngram::NgramOrder;

mod builder;
mod correlation;
mod detector;
mod error;
mod profiling;

pub use builder::{DetectorBuilder, LanguageDefinition};
pub use detector::Detector;
pub use error::DetectorError;

/// Information about the current state and configuration of a detector.
#[derive(Debug, Clone, Serialize)]
pub struct DetectorInfo {
    /// N-gram order the detector was built for.
    pub order: NgramOrder,
    /// Number of candidate languages.
    pub num_languages: usize,
    /// Language identifiers in scoring order.
    pub languages: Vec<String>,
}
