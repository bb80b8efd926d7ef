//! Batch Conversion Module
//!
//! Walks a sound directory and converts every raw signed PCM file into a WAV
//! next to it:
//!
//! enumerate entries -> filter -> remap + encode -> write
//!
//! The transform itself lives in [`crate::engine`] and never touches the
//! filesystem.

pub mod filter;
pub mod report;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};
use walkdir::WalkDir;

use crate::engine::pcm::{duration_secs, remap_buffer, SAMPLE_RATE};
use crate::engine::wav::write_wav;
use crate::error::{Raw2WavError, Result};

pub use filter::{output_name, skip_reason_for_name, SkipReason};
pub use report::{ConversionReport, ConvertedFile, SkippedFile};

/// Default sound directory, relative to the repository root
pub const DEFAULT_SOUNDS_DIR: &str = "data/sounds";

/// Options for a batch run
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Compute the report without writing any file
    pub dry_run: bool,
}

/// What happened to a batch run
#[derive(Debug, Clone, PartialEq)]
pub enum BatchOutcome {
    /// The source directory does not exist; nothing was done
    MissingDirectory(PathBuf),
    /// The directory was processed
    Completed(ConversionReport),
}

/// Convert every candidate file in `dir`.
///
/// Entries are visited in file name order. A missing directory is reported
/// through [`BatchOutcome::MissingDirectory`], not as an error.
///
/// # Errors
/// * `DirectoryScanError` - If the directory cannot be listed
/// * `FileReadError` - If a source file cannot be read
/// * `FileWriteError` - If an output file cannot be written; the batch stops
pub fn convert_directory(dir: &Path, options: &BatchOptions) -> Result<BatchOutcome> {
    if !dir.is_dir() {
        debug!("Sound directory missing: {}", dir.display());
        return Ok(BatchOutcome::MissingDirectory(dir.to_path_buf()));
    }

    info!("Converting raw samples in {}", dir.display());

    let mut report = ConversionReport::new(dir, SAMPLE_RATE, options.dry_run);

    // Collect up front so freshly written outputs are never revisited.
    for path in list_entries(dir)? {
        let name = file_name_of(&path);

        let skip = if path.is_file() {
            skip_reason_for_name(&name)
        } else {
            Some(SkipReason::NotAFile)
        };
        if let Some(reason) = skip {
            debug!("Skipping {} ({:?})", name, reason);
            report.skipped.push(SkippedFile { name, reason });
            continue;
        }

        let out_path = dir.join(output_name(path.file_name().unwrap_or_default()));
        match convert_one(&path, &out_path, options.dry_run)? {
            Some(converted) => report.converted.push(converted),
            None => {
                debug!("Skipping {} (empty)", name);
                report.skipped.push(SkippedFile {
                    name,
                    reason: SkipReason::Empty,
                });
            }
        }
    }

    info!(
        "Converted {} file(s), skipped {}",
        report.converted_count(),
        report.skipped.len()
    );

    Ok(BatchOutcome::Completed(report))
}

/// Convert a single raw file.
///
/// `output` defaults to the batch naming rule in the input's directory.
/// Returns `None` when the input is empty; no file is written then.
///
/// # Errors
/// * `FileNotFound` - If `input` does not exist
/// * `FileReadError` / `FileWriteError` - On I/O failure
pub fn convert_file(input: &Path, output: Option<&Path>) -> Result<Option<ConvertedFile>> {
    if !input.is_file() {
        return Err(Raw2WavError::FileNotFound {
            path: input.to_path_buf(),
        });
    }

    let out_path = match output {
        Some(path) => path.to_path_buf(),
        None => input.with_file_name(output_name(input.file_name().unwrap_or_default())),
    };

    convert_one(input, &out_path, false)
}

/// Visible WAV files directly inside `dir`, sorted by file name.
///
/// Hidden entries such as `._name.wav` sidecars are left out, matching the
/// batch filter.
///
/// # Errors
/// * `DirectoryScanError` - If the directory cannot be listed
pub fn list_wav_files(dir: &Path) -> Result<Vec<PathBuf>> {
    Ok(list_entries(dir)?
        .into_iter()
        .filter(|path| {
            let name = file_name_of(path);
            path.is_file()
                && !name.starts_with('.')
                && skip_reason_for_name(&name) == Some(SkipReason::AlreadyWav)
        })
        .collect())
}

// ============================================================================
// Internal helper functions
// ============================================================================

/// Direct children of `dir`, sorted by file name
fn list_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .map(|entry| {
            entry
                .map(|e| e.into_path())
                .map_err(|e| Raw2WavError::DirectoryScanError {
                    path: dir.to_path_buf(),
                    source: e,
                })
        })
        .collect()
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn convert_one(input: &Path, output: &Path, dry_run: bool) -> Result<Option<ConvertedFile>> {
    let raw = fs::read(input).map_err(|e| Raw2WavError::FileReadError {
        path: input.to_path_buf(),
        source: e,
    })?;

    if raw.is_empty() {
        return Ok(None);
    }

    let samples = remap_buffer(&raw);

    if dry_run {
        debug!("Dry run, not writing {}", output.display());
    } else {
        write_output(output, &samples)?;
    }

    Ok(Some(ConvertedFile {
        source: file_name_of(input),
        output: file_name_of(output),
        num_samples: samples.len(),
        duration_secs: duration_secs(samples.len()),
    }))
}

fn write_output(path: &Path, samples: &[u8]) -> Result<()> {
    let to_write_error = |e: std::io::Error| Raw2WavError::FileWriteError {
        path: path.to_path_buf(),
        source: e,
    };

    let file = File::create(path).map_err(to_write_error)?;
    let mut writer = BufWriter::new(file);
    write_wav(&mut writer, samples, SAMPLE_RATE).map_err(to_write_error)?;
    writer.flush().map_err(to_write_error)?;

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
