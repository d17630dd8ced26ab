use std::collections::hash_map::Entry;
use std::collections::HashMap;

use thiserror::Error;

use crate::ngram::NgramOrder;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    /// The text is too short to produce a single window of the requested
    /// width, so no frequency can be computed without dividing by zero.
    #[error("text yields no {width}-gram window")]
    NoWindows { width: usize },
}

/// A relative-frequency distribution over character n-grams.
///
/// The profile remembers the order in which n-grams were first inserted.
/// That order is what gets written to disk by the profile store and what
/// defines the vector positions when two profiles are aligned for scoring,
/// so it must be stable. Profiles are immutable once constructed.
///
/// There are two constructors with deliberately different denominators:
///
/// * [`FrequencyProfile::from_text`] divides each count by the total number
///   of windows, so the values of a full-text profile sum to 1.0. This is
///   the training-side shape.
/// * [`FrequencyProfile::with_vocabulary`] divides by the size of the
///   reference vocabulary instead of by anything measured on the text.
///   Query lines are often only a handful of characters long; normalizing
///   by the reference vocabulary keeps their vectors comparable against a
///   full-text profile. The resulting values do not sum to 1.0 and may
///   individually exceed 1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyProfile {
    ngrams: Vec<String>,
    frequencies: HashMap<String, f64>,
}

impl FrequencyProfile {
    /// Builds a profile from a full (already normalized) text by sliding a
    /// window of the order's width over it with stride 1. The last
    /// character of a text never forms a bigram on its own.
    ///
    /// # Errors
    /// [`ProfileError::NoWindows`] if the text is shorter than the window
    /// width (this includes the empty text).
    pub fn from_text(text: &str, order: NgramOrder) -> Result<Self, ProfileError> {
        let chars: Vec<char> = text.chars().collect();
        let width = order.width();
        if chars.len() < width {
            return Err(ProfileError::NoWindows { width });
        }

        let total = chars.len() - width + 1;
        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut ngrams: Vec<String> = Vec::new();
        for window in chars.windows(width) {
            let ngram: String = window.iter().collect();
            match counts.entry(ngram) {
                Entry::Occupied(mut occupied) => *occupied.get_mut() += 1,
                Entry::Vacant(vacant) => {
                    ngrams.push(vacant.key().clone());
                    vacant.insert(1);
                }
            }
        }

        let frequencies = counts
            .into_iter()
            .map(|(ngram, count)| (ngram, count as f64 / total as f64))
            .collect();
        Ok(Self { ngrams, frequencies })
    }

    /// Builds a query-side profile over the n-grams of `vocabulary`, in
    /// vocabulary order. Each vocabulary n-gram is counted in `text` with
    /// overlapping occurrences included, and every count is divided by the
    /// number of distinct n-grams in the vocabulary, not by the number of
    /// occurrences. N-grams absent from `text` get frequency 0.0.
    ///
    /// Never fails: an empty vocabulary yields an empty profile.
    pub fn with_vocabulary(text: &str, vocabulary: &FrequencyProfile) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let denominator = vocabulary.len() as f64;
        let mut ngrams = Vec::with_capacity(vocabulary.len());
        let mut frequencies = HashMap::with_capacity(vocabulary.len());
        for ngram in vocabulary.ngrams() {
            let needle: Vec<char> = ngram.chars().collect();
            let count = if needle.is_empty() {
                0
            } else {
                chars
                    .windows(needle.len())
                    .filter(|window| *window == needle.as_slice())
                    .count()
            };
            frequencies.insert(ngram.to_owned(), count as f64 / denominator);
            ngrams.push(ngram.to_owned());
        }
        Self { ngrams, frequencies }
    }

    /// Builds a profile from pre-computed `(ngram, frequency)` records,
    /// keeping first-insertion order. A repeated n-gram keeps its original
    /// position but takes the later value.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, f64)>) -> Self {
        let mut ngrams = Vec::new();
        let mut frequencies = HashMap::new();
        for (ngram, value) in entries {
            if frequencies.insert(ngram.clone(), value).is_none() {
                ngrams.push(ngram);
            }
        }
        Self { ngrams, frequencies }
    }

    /// Relative frequency of `ngram`, or `None` if it is not part of this
    /// profile's vocabulary.
    pub fn frequency(&self, ngram: &str) -> Option<f64> {
        self.frequencies.get(ngram).copied()
    }

    /// N-grams in insertion order.
    pub fn ngrams(&self) -> impl Iterator<Item = &str> {
        self.ngrams.iter().map(String::as_str)
    }

    /// `(ngram, frequency)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.ngrams.iter().map(move |ngram| {
            let value = self.frequencies.get(ngram).copied().unwrap_or(0.0);
            (ngram.as_str(), value)
        })
    }

    /// Number of distinct n-grams.
    pub fn len(&self) -> usize {
        self.ngrams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ngrams.is_empty()
    }
}
