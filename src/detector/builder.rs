use std::path::PathBuf;

use log::{info, warn};

use crate::ngram::NgramOrder;
use crate::normalizer::TextNormalizer;
use crate::profile::FrequencyProfile;
use crate::store::ProfileStore;

use super::detector::Detector;
use super::error::DetectorError;
use super::profiling::TextProfiling;

/// Represents a candidate language with its label and an optional training
/// sample.
#[derive(Debug, Clone)]
pub struct LanguageDefinition {
    /// The identifier the detector will answer with.
    pub label: String,
    /// Sample text in the language, profiled at build time. Required for
    /// [`DetectorBuilder::add_language`]; languages whose profile already
    /// exists go through [`DetectorBuilder::add_profile`] or profile
    /// discovery instead.
    pub sample_text: Option<String>,
}

impl LanguageDefinition {
    /// Creates a new language definition with the given label.
    ///
    /// # Example
    /// ```
    /// use wernicke::LanguageDefinition;
    ///
    /// let language = LanguageDefinition::new("english")
    ///     .with_sample_text("the quick brown fox jumps over the lazy dog");
    /// ```
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            sample_text: None,
        }
    }

    /// Attaches the training sample the language profile is built from.
    pub fn with_sample_text(mut self, sample_text: impl Into<String>) -> Self {
        self.sample_text = Some(sample_text.into());
        self
    }
}

/// A builder for constructing a Detector with a fluent interface.
///
/// Profiles can come from three places, assembled in this order at build
/// time: discovery in a weights directory (file-name order), language
/// definitions profiled from sample text, and directly injected profiles.
/// An explicit language replaces a discovered profile with the same label.
#[derive(Default, Debug)]
pub struct DetectorBuilder {
    order: Option<NgramOrder>,
    normalizer: TextNormalizer,
    profile_dir: Option<PathBuf>,
    definitions: Vec<LanguageDefinition>,
    profiles: Vec<(String, FrequencyProfile)>,
}

impl TextProfiling for DetectorBuilder {
    fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }
}

impl DetectorBuilder {
    /// Creates a new empty DetectorBuilder instance with the default
    /// normalizer.
    pub fn new() -> Self {
        Self {
            order: None,
            normalizer: TextNormalizer::new(),
            profile_dir: None,
            definitions: Vec::new(),
            profiles: Vec::new(),
        }
    }

    /// Sets the n-gram order for the whole detector. Must be called before
    /// `build`; orders are never mixed within one detector.
    pub fn with_order(mut self, order: NgramOrder) -> Self {
        self.order = Some(order);
        self
    }

    /// Replaces the default text normalizer.
    pub fn with_normalizer(mut self, normalizer: TextNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Points the builder at a directory of trained weight files. Every
    /// file matching the detector's n-gram order is loaded during
    /// `build()`; the part of the file name before the order's suffix
    /// becomes the language label.
    pub fn with_profile_dir(mut self, profile_dir: impl Into<PathBuf>) -> Self {
        self.profile_dir = Some(profile_dir.into());
        self
    }

    /// Adds a candidate language trained in-memory from its sample text.
    ///
    /// # Returns
    /// * `Result<Self, DetectorError>` - The builder instance if
    ///   successful, or an error if:
    ///   - The label is empty
    ///   - The label was already added
    ///   - No sample text is provided, or it is empty
    ///
    /// # Example
    /// ```
    /// use wernicke::{Detector, LanguageDefinition, NgramOrder};
    ///
    /// let builder = Detector::builder()
    ///     .with_order(NgramOrder::Unigram)
    ///     .add_language(
    ///         LanguageDefinition::new("english")
    ///             .with_sample_text("the quick brown fox"),
    ///     );
    /// ```
    pub fn add_language(mut self, definition: LanguageDefinition) -> Result<Self, DetectorError> {
        self.validate_new_label(&definition.label)?;
        match definition.sample_text.as_deref() {
            Some(sample) if !sample.is_empty() => {}
            _ => {
                return Err(DetectorError::ValidationError(format!(
                    "language '{}' must provide a non-empty sample text",
                    definition.label
                )))
            }
        }
        self.definitions.push(definition);
        Ok(self)
    }

    /// Adds a candidate language from an already-built frequency profile.
    pub fn add_profile(
        mut self,
        label: impl Into<String>,
        profile: FrequencyProfile,
    ) -> Result<Self, DetectorError> {
        let label = label.into();
        self.validate_new_label(&label)?;
        self.profiles.push((label, profile));
        Ok(self)
    }

    /// Builds and returns the final Detector instance.
    ///
    /// # Returns
    /// * `Result<Detector, DetectorError>` - The constructed Detector if
    ///   successful, or an error if:
    ///   - No n-gram order was set
    ///   - The weights directory cannot be read
    ///   - A language's sample text yields no n-gram window
    ///
    /// An empty profile set is allowed (the detector then answers `None`
    /// for every line) but is logged as a warning since it usually means
    /// the weights directory was wrong.
    pub fn build(self) -> Result<Detector, DetectorError> {
        let order = match self.order {
            Some(order) => order,
            None => {
                return Err(DetectorError::BuildError(
                    "n-gram order must be set before build".to_string(),
                ))
            }
        };

        let mut profiles: Vec<(String, FrequencyProfile)> = Vec::new();
        if let Some(profile_dir) = &self.profile_dir {
            let store = ProfileStore::new(profile_dir).map_err(|err| {
                DetectorError::BuildError(format!(
                    "cannot open weights directory {:?}: {}",
                    profile_dir, err
                ))
            })?;
            profiles = store.discover_profiles(order)?;
        }

        for definition in &self.definitions {
            let sample = definition.sample_text.as_deref().unwrap_or_default();
            let profile = self.profile_text(sample, order).map_err(|err| {
                DetectorError::ValidationError(format!(
                    "sample text for '{}' cannot be profiled: {}",
                    definition.label, err
                ))
            })?;
            info!(
                "Profiled language '{}' from sample text ({} n-gram(s))",
                definition.label,
                profile.len()
            );
            Self::insert_profile(&mut profiles, definition.label.clone(), profile);
        }
        for (label, profile) in self.profiles {
            Self::insert_profile(&mut profiles, label, profile);
        }

        if profiles.is_empty() {
            warn!("Detector built with no language profiles; every detection will return None");
        }

        Ok(Detector {
            order,
            normalizer: self.normalizer,
            profiles,
        })
    }

    fn insert_profile(
        profiles: &mut Vec<(String, FrequencyProfile)>,
        label: String,
        profile: FrequencyProfile,
    ) {
        match profiles.iter_mut().find(|(existing, _)| *existing == label) {
            Some(entry) => {
                warn!("Replacing discovered profile for '{}'", label);
                entry.1 = profile;
            }
            None => profiles.push((label, profile)),
        }
    }

    /// Validates a label before it joins the builder: it must be non-empty
    /// and not collide with a previously added language.
    fn validate_new_label(&self, label: &str) -> Result<(), DetectorError> {
        if label.is_empty() {
            return Err(DetectorError::ValidationError(
                "language label cannot be empty".to_string(),
            ));
        }
        let taken = self
            .definitions
            .iter()
            .any(|definition| definition.label == label)
            || self.profiles.iter().any(|(existing, _)| existing == label);
        if taken {
            return Err(DetectorError::ValidationError(format!(
                "language '{}' is already defined",
                label
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_label_rejected() {
        let result = DetectorBuilder::new()
            .with_order(NgramOrder::Unigram)
            .add_language(LanguageDefinition::new("").with_sample_text("text"));
        assert!(result.is_err());
    }

    #[test]
    fn test_duplicate_label_rejected() {
        let result = DetectorBuilder::new()
            .with_order(NgramOrder::Unigram)
            .add_language(LanguageDefinition::new("english").with_sample_text("one"))
            .and_then(|builder| {
                builder.add_language(LanguageDefinition::new("english").with_sample_text("two"))
            });
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_sample_text_rejected() {
        let result = DetectorBuilder::new()
            .with_order(NgramOrder::Unigram)
            .add_language(LanguageDefinition::new("english"));
        assert!(result.is_err());
    }
}
