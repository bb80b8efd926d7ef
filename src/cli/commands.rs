//! CLI Command Implementations
//!
//! Progress and summaries go to stdout, diagnostics to stderr.

use std::path::Path;

use log::{info, warn};

use crate::batch::{self, BatchOptions, BatchOutcome, ConversionReport};
use crate::engine::{verify_wav, SAMPLE_RATE};
use crate::error::Result;

/// Prefix for summary and diagnostic lines
const TAG: &str = "[raw2wav]";

/// Convert every raw file in `dir`.
///
/// A missing directory prints a diagnostic and succeeds.
pub fn convert(dir: &Path, dry_run: bool, json: bool) -> Result<()> {
    info!("Converting {} at {} Hz", dir.display(), SAMPLE_RATE);

    let options = BatchOptions { dry_run };
    let report = match batch::convert_directory(dir, &options)? {
        BatchOutcome::MissingDirectory(path) => {
            eprintln!("{} No directory: {}", TAG, path.display());
            return Ok(());
        }
        BatchOutcome::Completed(report) => report,
    };

    if json {
        println!("{}", report.to_json()?);
    } else {
        print_report(&report);
    }

    Ok(())
}

/// Convert one raw file.
pub fn convert_file(input: &Path, output: Option<&Path>) -> Result<()> {
    info!("Converting single file: {}", input.display());

    match batch::convert_file(input, output)? {
        Some(converted) => println!(
            "  {} -> {} ({} samples, {:.3}s)",
            converted.source, converted.output, converted.num_samples, converted.duration_secs
        ),
        None => println!("{} {} is empty, nothing to convert", TAG, input.display()),
    }

    Ok(())
}

/// Decode every WAV in `dir` and check its format.
///
/// Prints one line per file and fails with the first invalid file.
pub fn verify(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        eprintln!("{} No directory: {}", TAG, dir.display());
        return Ok(());
    }

    let mut first_failure = None;
    let mut checked = 0usize;

    for path in batch::list_wav_files(dir)? {
        checked += 1;
        let name = path.file_name().unwrap_or_default().to_string_lossy();

        match verify_wav(&path, SAMPLE_RATE) {
            Ok(info) => println!("  ok   {} ({} samples)", name, info.num_samples),
            Err(e) => {
                warn!("{}", e);
                println!("  FAIL {}", name);
                first_failure.get_or_insert(e);
            }
        }
    }

    if let Some(err) = first_failure {
        for suggestion in err.recovery_suggestions() {
            eprintln!("  hint: {}", suggestion);
        }
        return Err(err);
    }

    println!("{} Verified {} file(s) in {}", TAG, checked, dir.display());
    Ok(())
}

fn print_report(report: &ConversionReport) {
    for converted in &report.converted {
        println!("  {} -> {}", converted.source, converted.output);
    }

    if report.converted_count() > 0 {
        let verb = if report.dry_run {
            "Would convert"
        } else {
            "Converted"
        };
        println!(
            "{} {} {} file(s) to .wav in {}",
            TAG,
            verb,
            report.converted_count(),
            report.directory.display()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::encode;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_convert_missing_directory_succeeds() {
        let dir = tempdir().unwrap();
        assert!(convert(&dir.path().join("sounds"), false, false).is_ok());
    }

    #[test]
    fn test_convert_writes_outputs() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("boom.raw"), [0x80u8, 0x00, 0x7F]).unwrap();

        convert(dir.path(), false, false).unwrap();

        let wav = fs::read(dir.path().join("boom.raw.wav")).unwrap();
        assert_eq!(wav, encode(&[0x00, 0x80, 0xFF], SAMPLE_RATE));
    }

    #[test]
    fn test_convert_json_dry_run() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("boom.raw"), [0x01u8]).unwrap();

        convert(dir.path(), true, true).unwrap();

        assert!(!dir.path().join("boom.raw.wav").exists());
    }

    #[test]
    fn test_verify_missing_directory_succeeds() {
        let dir = tempdir().unwrap();
        assert!(verify(&dir.path().join("sounds")).is_ok());
    }

    #[test]
    fn test_verify_accepts_converted_directory() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("boom.raw"), [0x10u8, 0x20]).unwrap();
        convert(dir.path(), false, false).unwrap();

        assert!(verify(dir.path()).is_ok());
    }

    #[test]
    fn test_verify_rejects_wrong_format() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("good.wav"), encode(&[0x80], SAMPLE_RATE)).unwrap();
        fs::write(dir.path().join("fast.wav"), encode(&[0x80; 8], 44100)).unwrap();

        let err = verify(dir.path()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_WAV");
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("noise.wav"), b"not a riff file").unwrap();

        assert!(verify(dir.path()).is_err());
    }

    #[test]
    fn test_verify_ignores_hidden_sidecars() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("._boom.wav"), b"resource fork").unwrap();

        assert!(verify(dir.path()).is_ok());
    }
}
