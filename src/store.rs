use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};
use thiserror::Error;

use crate::ngram::NgramOrder;
use crate::profile::FrequencyProfile;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

/// Manages trained weight files on disk.
///
/// A weight file holds one `<ngram><TAB><frequency>` record per line, in
/// profile insertion order, with no header or trailing metadata. The file
/// is named `<language><suffix>` where the suffix encodes the n-gram order
/// (see [`NgramOrder::weights_suffix`]). The directory and the record
/// separator are fixed at construction; nothing in the store depends on the
/// process working directory.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    weights_dir: PathBuf,
    separator: char,
}

impl ProfileStore {
    /// Creates a store rooted at `weights_dir`, creating the directory if
    /// it does not exist yet.
    pub fn new<P: AsRef<Path>>(weights_dir: P) -> io::Result<Self> {
        let weights_dir = weights_dir.as_ref().to_path_buf();
        fs::create_dir_all(&weights_dir)?;
        Ok(Self {
            weights_dir,
            separator: '\t',
        })
    }

    /// Path of the weight file for `language` at the given order.
    pub fn weights_path(&self, language: &str, order: NgramOrder) -> PathBuf {
        self.weights_dir
            .join(format!("{}{}", language, order.weights_suffix()))
    }

    /// Writes `profile` as the weight file for `language`, overwriting any
    /// existing file. Returns the path written.
    pub fn save_profile(
        &self,
        language: &str,
        order: NgramOrder,
        profile: &FrequencyProfile,
    ) -> Result<PathBuf, StoreError> {
        let path = self.weights_path(language, order);
        let file = File::create(&path)?;
        let mut writer = BufWriter::new(file);
        for (ngram, frequency) in profile.iter() {
            writeln!(writer, "{}{}{}", ngram, self.separator, frequency)?;
        }
        writer.flush()?;
        debug!("Wrote {} weight record(s) to {:?}", profile.len(), path);
        Ok(path)
    }

    /// Reads a weight file back into a profile.
    ///
    /// A line is accepted only if it splits on the separator into exactly
    /// two non-empty fields and the second field parses as a float.
    /// Malformed lines are skipped, not reported as errors; keys are kept
    /// exactly as written.
    pub fn load_profile<P: AsRef<Path>>(&self, path: P) -> Result<FrequencyProfile, StoreError> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        let mut entries: Vec<(String, f64)> = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let fields: Vec<&str> = line.split(self.separator).collect();
            if fields.len() != 2 || fields[0].is_empty() || fields[1].is_empty() {
                debug!("Skipping malformed weight record: {:?}", line);
                continue;
            }
            match fields[1].parse::<f64>() {
                Ok(value) => entries.push((fields[0].to_string(), value)),
                Err(_) => debug!("Skipping weight record with bad frequency: {:?}", line),
            }
        }
        Ok(FrequencyProfile::from_entries(entries))
    }

    /// Loads every trained profile of the given order present in the
    /// weights directory.
    ///
    /// Directory entries are scanned in file-name order so the result is
    /// reproducible regardless of how the OS enumerates the directory. A
    /// file participates if its name contains the order's suffix anywhere;
    /// the language identifier is the prefix before the first occurrence of
    /// the suffix. When two files map to the same language, the one scanned
    /// last wins.
    pub fn discover_profiles(
        &self,
        order: NgramOrder,
    ) -> Result<Vec<(String, FrequencyProfile)>, StoreError> {
        let suffix = order.weights_suffix();
        let mut names: Vec<String> = Vec::new();
        for entry in fs::read_dir(&self.weights_dir)? {
            let entry = entry?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();

        let mut profiles: Vec<(String, FrequencyProfile)> = Vec::new();
        for name in names {
            let position = match name.find(suffix) {
                Some(position) => position,
                None => continue,
            };
            let language = name[..position].to_string();
            let profile = self.load_profile(self.weights_dir.join(&name))?;
            debug!(
                "Loaded {} {} weight(s) for '{}' from {:?}",
                profile.len(),
                order,
                language,
                name
            );
            match profiles.iter_mut().find(|(label, _)| *label == language) {
                Some(existing) => existing.1 = profile,
                None => profiles.push((language, profile)),
            }
        }
        info!(
            "Discovered {} {} profile(s) in {:?}",
            profiles.len(),
            order,
            self.weights_dir
        );
        Ok(profiles)
    }
}
