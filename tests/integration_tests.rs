//! Integration Tests
//!
//! End-to-end tests for directory conversion.

use std::fs;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use raw2wav::batch::{convert_directory, BatchOptions, BatchOutcome, SkipReason};
use raw2wav::engine::{read_signed_samples, verify_wav, WavHeader, HEADER_LEN, SAMPLE_RATE};

fn run(dir: &std::path::Path) -> raw2wav::batch::ConversionReport {
    match convert_directory(dir, &BatchOptions::default()).unwrap() {
        BatchOutcome::Completed(report) => report,
        BatchOutcome::MissingDirectory(path) => panic!("missing: {}", path.display()),
    }
}

fn file_names(dir: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

// === Batch Scenario ===

#[test]
fn test_sound_directory_conversion() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("boom.raw"), [0x80u8, 0x00, 0x7F]).unwrap();
    fs::write(dir.path().join("README.md"), b"# Sounds\n").unwrap();
    fs::write(dir.path().join("existing.wav"), b"not touched").unwrap();

    let report = run(dir.path());

    assert_eq!(report.converted_count(), 1);
    assert_eq!(
        file_names(dir.path()),
        vec!["README.md", "boom.raw", "boom.raw.wav", "existing.wav"]
    );

    let wav = fs::read(dir.path().join("boom.raw.wav")).unwrap();
    let header = WavHeader::parse(&wav).unwrap();
    assert_eq!(header.data_size, 3);
    assert_eq!(header.sample_rate, SAMPLE_RATE);
    assert_eq!(&wav[HEADER_LEN..], &[0x00, 0x80, 0xFF]);

    assert_eq!(fs::read(dir.path().join("README.md")).unwrap(), b"# Sounds\n");
    assert_eq!(fs::read(dir.path().join("existing.wav")).unwrap(), b"not touched");
    assert_eq!(report.skipped_for(SkipReason::Readme).count(), 1);
    assert_eq!(report.skipped_for(SkipReason::AlreadyWav).count(), 1);
}

#[test]
fn test_output_name_is_lower_cased() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("SPLASH.RAW"), [0x10u8]).unwrap();

    run(dir.path());

    assert!(dir.path().join("splash.raw.wav").is_file());
}

#[test]
fn test_rerun_is_idempotent() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("hit"), [0x01u8, 0x02, 0xFE]).unwrap();

    run(dir.path());
    let first = fs::read(dir.path().join("hit.wav")).unwrap();

    let second_report = run(dir.path());
    let second = fs::read(dir.path().join("hit.wav")).unwrap();

    assert_eq!(first, second);
    assert_eq!(second_report.converted_count(), 1);
    assert_eq!(second_report.skipped_for(SkipReason::AlreadyWav).count(), 1);
}

#[test]
fn test_hidden_files_are_ignored() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".gitkeep"), [0x01u8]).unwrap();

    let report = run(dir.path());

    assert_eq!(report.converted_count(), 0);
    assert_eq!(file_names(dir.path()), vec![".gitkeep"]);
}

// === Decoder Compatibility ===

#[test]
fn test_converted_file_decodes_to_original_samples() {
    let dir = tempdir().unwrap();
    let raw: Vec<u8> = (0..=255u8).rev().collect();
    fs::write(dir.path().join("sweep.raw"), &raw).unwrap();

    run(dir.path());

    let path = dir.path().join("sweep.raw.wav");
    let info = verify_wav(&path, SAMPLE_RATE).unwrap();
    assert_eq!(info.num_samples, 256);
    assert_eq!(info.sample_rate, 16013);
    assert_eq!(read_signed_samples(&path).unwrap(), raw);
}
