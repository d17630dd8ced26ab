use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::Serialize;

use crate::ngram::NgramOrder;
use crate::normalizer::TextNormalizer;
use crate::profile::FrequencyProfile;
use crate::store::{ProfileStore, StoreError};

/// Outcome of a training run over a corpus directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrainingSummary {
    /// Weight files written.
    pub trained: usize,
    /// Corpus files skipped because they yielded no n-gram window.
    pub skipped: usize,
}

/// Builds per-language weight files from a directory of corpus files.
///
/// Every entry of the corpus directory is treated as a text file in one
/// known language. File contents are decoded best-effort (invalid UTF-8
/// sequences are replaced rather than aborting the run), normalized,
/// profiled at the trainer's n-gram order and written through the store as
/// `<corpus file name><suffix>`, so the corpus file name becomes the
/// language identifier recovered later by profile discovery.
///
/// # Example
/// ```no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use wernicke::{NgramOrder, ProfileStore, Trainer};
///
/// let store = ProfileStore::new("weights")?;
/// let trainer = Trainer::new(store, NgramOrder::Bigram);
/// let summary = trainer.train_directory("corpus")?;
/// println!("trained {} profile(s)", summary.trained);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Trainer {
    store: ProfileStore,
    normalizer: TextNormalizer,
    order: NgramOrder,
}

impl Trainer {
    pub fn new(store: ProfileStore, order: NgramOrder) -> Self {
        Self {
            store,
            normalizer: TextNormalizer::new(),
            order,
        }
    }

    /// Replaces the default normalizer.
    pub fn with_normalizer(mut self, normalizer: TextNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Trains one profile per entry of `corpus_dir`, in file-name order.
    ///
    /// A corpus file whose normalized text yields zero n-gram windows is
    /// skipped with a warning and counted in the summary; an unreadable
    /// entry aborts the run with the underlying I/O error.
    pub fn train_directory<P: AsRef<Path>>(
        &self,
        corpus_dir: P,
    ) -> Result<TrainingSummary, StoreError> {
        let corpus_dir = corpus_dir.as_ref();
        let mut names: Vec<String> = Vec::new();
        for entry in fs::read_dir(corpus_dir)? {
            let entry = entry?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();

        let mut summary = TrainingSummary {
            trained: 0,
            skipped: 0,
        };
        for name in names {
            let path = corpus_dir.join(&name);
            let raw = fs::read(&path)?;
            let text = String::from_utf8_lossy(&raw);
            let normalized = self.normalizer.normalize(&text);
            match FrequencyProfile::from_text(&normalized, self.order) {
                Ok(profile) => {
                    let written = self.store.save_profile(&name, self.order, &profile)?;
                    info!(
                        "Trained {} profile for {:?} ({} n-gram(s)) -> {:?}",
                        self.order,
                        path,
                        profile.len(),
                        written
                    );
                    summary.trained += 1;
                }
                Err(err) => {
                    warn!("Skipping corpus file {:?}: {}", path, err);
                    summary.skipped += 1;
                }
            }
        }
        Ok(summary)
    }
}
