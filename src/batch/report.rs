//! Conversion report returned by a batch run.

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::filter::SkipReason;

/// One source file that produced a WAV
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConvertedFile {
    /// Source file name
    pub source: String,
    /// Output file name, in the same directory
    pub output: String,
    /// Number of mono samples written
    pub num_samples: usize,
    /// Playback length at the fixed sample rate
    pub duration_secs: f64,
}

/// One directory entry left alone
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    pub name: String,
    pub reason: SkipReason,
}

/// Result of converting one directory
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionReport {
    pub directory: PathBuf,
    pub sample_rate: u32,
    /// Set when no output was written
    pub dry_run: bool,
    pub converted: Vec<ConvertedFile>,
    pub skipped: Vec<SkippedFile>,
}

impl ConversionReport {
    pub fn new(directory: &Path, sample_rate: u32, dry_run: bool) -> Self {
        ConversionReport {
            directory: directory.to_path_buf(),
            sample_rate,
            dry_run,
            converted: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Number of files converted
    pub fn converted_count(&self) -> usize {
        self.converted.len()
    }

    /// Skipped entries with the given reason
    pub fn skipped_for(&self, reason: SkipReason) -> impl Iterator<Item = &SkippedFile> {
        self.skipped.iter().filter(move |s| s.reason == reason)
    }

    /// Pretty JSON rendering
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
