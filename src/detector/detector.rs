use crate::ngram::NgramOrder;
use crate::normalizer::TextNormalizer;
use crate::profile::FrequencyProfile;

use super::correlation::{aligned_vectors, pearson_correlation};
use super::profiling::TextProfiling;

/// A character n-gram language detector.
///
/// Holds one trained frequency profile per candidate language, in a stable
/// scoring order. Because a tie between scores is resolved in favor of the
/// language scored first, that order is part of the observable contract:
/// it is the order profiles were discovered (file-name order) or added to
/// the builder.
///
/// The detector is immutable after construction and can be shared across
/// threads.
///
/// # Example
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use wernicke::{Detector, LanguageDefinition, NgramOrder};
///
/// let detector = Detector::builder()
///     .with_order(NgramOrder::Unigram)
///     .add_language(
///         LanguageDefinition::new("english")
///             .with_sample_text("the quick brown fox jumps over the lazy dog"),
///     )?
///     .add_language(
///         LanguageDefinition::new("spanish")
///             .with_sample_text("el veloz murcielago comia feliz cardillo y kiwi"),
///     )?
///     .build()?;
///
/// let (language, scores) = detector.detect("the fox sleeps");
/// assert_eq!(scores.len(), 2);
/// println!("detected: {:?}", language);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Detector {
    pub(crate) order: NgramOrder,
    pub(crate) normalizer: TextNormalizer,
    pub(crate) profiles: Vec<(String, FrequencyProfile)>,
}

// Compile-time verification of thread-safety
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn verify_thread_safety() {
        assert_send_sync::<Detector>();
    }
};

impl TextProfiling for Detector {
    fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }
}

impl Detector {
    /// Creates a new DetectorBuilder for fluent construction
    pub fn builder() -> super::builder::DetectorBuilder {
        super::builder::DetectorBuilder::new()
    }

    /// N-gram order the detector was built for.
    pub fn order(&self) -> NgramOrder {
        self.order
    }

    /// Returns information about the detector's current state
    pub fn info(&self) -> super::DetectorInfo {
        super::DetectorInfo {
            order: self.order,
            num_languages: self.profiles.len(),
            languages: self
                .profiles
                .iter()
                .map(|(label, _)| label.clone())
                .collect(),
        }
    }

    /// Classifies a single query line.
    ///
    /// The line is normalized, profiled against each language's vocabulary
    /// and scored with the Pearson correlation between the two aligned
    /// frequency vectors. The running maximum starts at 0.0 and a language
    /// replaces the current best only on a strictly greater score, so the
    /// first language scored wins ties and nothing below or at zero is ever
    /// selected.
    ///
    /// # Returns
    /// A tuple containing:
    /// * The winning language, or `None` when no language scores above
    ///   zero: an empty profile set, a degenerate line (nothing left
    ///   after normalization), and all-undefined correlations all land
    ///   here.
    /// * The per-language scores in scoring order; undefined correlations
    ///   are reported as NaN.
    pub fn detect(&self, line: &str) -> (Option<String>, Vec<(String, f64)>) {
        let mut scores = Vec::with_capacity(self.profiles.len());
        let mut best: Option<&str> = None;
        let mut best_score = 0.0_f64;
        for (label, profile) in &self.profiles {
            let query = self.profile_with_vocabulary(line, profile);
            let (reference_vector, query_vector) = aligned_vectors(profile, &query);
            let score = pearson_correlation(&reference_vector, &query_vector);
            if score.is_finite() && score > best_score {
                best_score = score;
                best = Some(label.as_str());
            }
            scores.push((label.clone(), score));
        }
        (best.map(str::to_owned), scores)
    }

    /// Classifies every line of `text` independently, preserving line
    /// order.
    pub fn detect_lines(&self, text: &str) -> Vec<Option<String>> {
        text.lines().map(|line| self.detect(line).0).collect()
    }
}
