//! A lightweight character n-gram language detector for offline training
//! and evaluation.
//!
//! Training builds one relative-frequency table per language from a
//! directory of labeled corpus files and persists it as a plain
//! tab-separated weight file. Detection profiles each line of a query file
//! against every trained table and picks the language whose frequency
//! vector correlates best with the line, then scores the predictions
//! against an answer key.
//!
//! # Basic Usage
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use wernicke::{Detector, LanguageDefinition, NgramOrder};
//!
//! let detector = Detector::builder()
//!     .with_order(NgramOrder::Bigram)
//!     .add_language(
//!         LanguageDefinition::new("english")
//!             .with_sample_text("the quick brown fox jumps over the lazy dog"),
//!     )?
//!     .add_language(
//!         LanguageDefinition::new("spanish")
//!             .with_sample_text("el veloz murcielago comia feliz cardillo y kiwi"),
//!     )?
//!     .build()?;
//!
//! let (language, scores) = detector.detect("the fox sleeps");
//! assert_eq!(scores.len(), 2);
//! println!("detected: {:?}", language);
//! # Ok(())
//! # }
//! ```
//!
//! # File-based training and evaluation
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use wernicke::{evaluate, parse_answer_key, Detector, NgramOrder, ProfileStore, Trainer};
//!
//! // Train: one weight file per corpus file, named after it.
//! let store = ProfileStore::new("weights")?;
//! let trainer = Trainer::new(store, NgramOrder::Unigram);
//! trainer.train_directory("corpus")?;
//!
//! // Detect: load everything back and score a query file line by line.
//! let detector = Detector::builder()
//!     .with_order(NgramOrder::Unigram)
//!     .with_profile_dir("weights")
//!     .build()?;
//! let predictions = detector.detect_lines(&std::fs::read_to_string("queries.txt")?);
//! let expected = parse_answer_key(&std::fs::read_to_string("answers.txt")?);
//! println!("{}", evaluate(&expected, &predictions)?);
//! # Ok(())
//! # }
//! ```

pub mod detector;
pub mod evaluator;
pub mod ngram;
pub mod normalizer;
pub mod profile;
pub mod store;
pub mod trainer;

pub use detector::{Detector, DetectorBuilder, DetectorError, DetectorInfo, LanguageDefinition};
pub use evaluator::{evaluate, parse_answer_key, Evaluation, EvaluationError};
pub use ngram::NgramOrder;
pub use normalizer::TextNormalizer;
pub use profile::{FrequencyProfile, ProfileError};
pub use store::{ProfileStore, StoreError};
pub use trainer::{Trainer, TrainingSummary};

pub fn init_logger() {
    env_logger::init();
}
