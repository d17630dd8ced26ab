use std::fmt;

use serde::{Deserialize, Serialize};

/// The n-gram order used for a whole training or detection run.
///
/// The order is fixed once per run and never mixed: unigram weight files
/// and bigram weight files live side by side in the same directory and are
/// told apart purely by their file-name suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NgramOrder {
    /// Single-character windows.
    Unigram,
    /// Two-character windows.
    Bigram,
}

impl NgramOrder {
    /// Maps the CLI n-gram size onto an order: `1` selects unigrams, any
    /// other integer selects bigrams.
    ///
    /// # Example
    /// ```
    /// use wernicke::NgramOrder;
    ///
    /// assert_eq!(NgramOrder::from_size(1), NgramOrder::Unigram);
    /// assert_eq!(NgramOrder::from_size(2), NgramOrder::Bigram);
    /// assert_eq!(NgramOrder::from_size(7), NgramOrder::Bigram);
    /// ```
    pub fn from_size(size: i64) -> Self {
        if size == 1 {
            NgramOrder::Unigram
        } else {
            NgramOrder::Bigram
        }
    }

    /// Window width in characters.
    pub fn width(&self) -> usize {
        match self {
            NgramOrder::Unigram => 1,
            NgramOrder::Bigram => 2,
        }
    }

    /// File-name suffix for weight files of this order. The language
    /// identifier of a weight file is whatever precedes the first
    /// occurrence of this suffix.
    pub fn weights_suffix(&self) -> &'static str {
        match self {
            NgramOrder::Unigram => "-unigram-weights.txt",
            NgramOrder::Bigram => "-bigram-weights.txt",
        }
    }
}

impl fmt::Display for NgramOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NgramOrder::Unigram => write!(f, "unigram"),
            NgramOrder::Bigram => write!(f, "bigram"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_size() {
        assert_eq!(NgramOrder::from_size(1), NgramOrder::Unigram);
        assert_eq!(NgramOrder::from_size(2), NgramOrder::Bigram);
        assert_eq!(NgramOrder::from_size(0), NgramOrder::Bigram);
        assert_eq!(NgramOrder::from_size(-3), NgramOrder::Bigram);
    }

    #[test]
    fn test_width() {
        assert_eq!(NgramOrder::Unigram.width(), 1);
        assert_eq!(NgramOrder::Bigram.width(), 2);
    }

    #[test]
    fn test_weights_suffix() {
        assert_eq!(NgramOrder::Unigram.weights_suffix(), "-unigram-weights.txt");
        assert_eq!(NgramOrder::Bigram.weights_suffix(), "-bigram-weights.txt");
    }
}
