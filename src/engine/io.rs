//! WAV file inspection
//!
//! Reads converted files back through `hound`, an independent decoder, to
//! confirm the asset loader will accept them.

use std::path::Path;

use hound::{SampleFormat, WavReader};
use serde::Serialize;

use crate::error::{Raw2WavError, Result};

/// Format details of a WAV file as seen by the decoder
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WavInfo {
    /// Number of interleaved channels
    pub channels: u16,
    /// Samples per second
    pub sample_rate: u32,
    /// Bits per sample
    pub bits_per_sample: u16,
    /// Total number of samples across all channels
    pub num_samples: u32,
}

/// Open a WAV file and report its format.
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `InvalidWav` - If the decoder rejects the file
pub fn inspect_wav(path: &Path) -> Result<WavInfo> {
    let reader = open_reader(path)?;
    let spec = reader.spec();

    Ok(WavInfo {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        num_samples: reader.len(),
    })
}

/// Check that a file is 8-bit integer mono PCM at `expected_rate`.
///
/// # Errors
/// * `InvalidWav` - If the file cannot be decoded or has a different format
pub fn verify_wav(path: &Path, expected_rate: u32) -> Result<WavInfo> {
    let reader = open_reader(path)?;
    let spec = reader.spec();

    let problem = if spec.sample_format != SampleFormat::Int {
        Some("samples are not integer PCM".to_string())
    } else if spec.channels != 1 {
        Some(format!("{} channels (expected mono)", spec.channels))
    } else if spec.bits_per_sample != 8 {
        Some(format!("{}-bit samples (expected 8-bit)", spec.bits_per_sample))
    } else if spec.sample_rate != expected_rate {
        Some(format!(
            "sample rate {} Hz (expected {} Hz)",
            spec.sample_rate, expected_rate
        ))
    } else {
        None
    };

    if let Some(reason) = problem {
        return Err(Raw2WavError::InvalidWav {
            path: path.to_path_buf(),
            reason,
            source: None,
        });
    }

    Ok(WavInfo {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        num_samples: reader.len(),
    })
}

/// Decode an 8-bit WAV payload back into raw signed PCM bytes.
///
/// `hound` reports 8-bit samples as `i8`, undoing the unsigned offset, so the
/// result equals the bytes of the original raw file.
pub fn read_signed_samples(path: &Path) -> Result<Vec<u8>> {
    let mut reader = open_reader(path)?;

    reader
        .samples::<i8>()
        .map(|s| s.map(|v| v as u8))
        .collect::<std::result::Result<Vec<u8>, _>>()
        .map_err(|e| Raw2WavError::InvalidWav {
            path: path.to_path_buf(),
            reason: format!("Failed to read 8-bit samples: {}", e),
            source: Some(e),
        })
}

// ============================================================================
// Internal helper functions
// ============================================================================

fn open_reader(path: &Path) -> Result<WavReader<std::io::BufReader<std::fs::File>>> {
    if !path.exists() {
        return Err(Raw2WavError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    WavReader::open(path).map_err(|e| Raw2WavError::InvalidWav {
        path: path.to_path_buf(),
        reason: format!("Failed to open WAV file: {}", e),
        source: Some(e),
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::pcm::{remap_buffer, SAMPLE_RATE};
    use crate::engine::wav::encode;
    use tempfile::tempdir;

    #[test]
    fn test_decoder_accepts_encoded_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tone.wav");
        let samples: Vec<u8> = (0..=255).collect();
        std::fs::write(&path, encode(&samples, SAMPLE_RATE)).unwrap();

        let info = verify_wav(&path, SAMPLE_RATE).unwrap();
        assert_eq!(
            info,
            WavInfo {
                channels: 1,
                sample_rate: SAMPLE_RATE,
                bits_per_sample: 8,
                num_samples: 256,
            }
        );
    }

    #[test]
    fn test_decoded_samples_match_raw_input() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("boom.raw.wav");
        let raw = vec![0x80, 0x00, 0x7F, 0xFF, 0x01];
        std::fs::write(&path, encode(&remap_buffer(&raw), SAMPLE_RATE)).unwrap();

        assert_eq!(read_signed_samples(&path).unwrap(), raw);
    }

    #[test]
    fn test_verify_rejects_wrong_rate() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fast.wav");
        std::fs::write(&path, encode(&[0x80; 16], 44100)).unwrap();

        let err = verify_wav(&path, SAMPLE_RATE).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_WAV");
        assert!(err.to_string().contains("44100"));
    }

    #[test]
    fn test_inspect_missing_file() {
        let dir = tempdir().unwrap();
        let err = inspect_wav(&dir.path().join("missing.wav")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_NOT_FOUND");
    }

    #[test]
    fn test_inspect_rejects_non_wav() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("noise.wav");
        std::fs::write(&path, b"definitely not a riff file").unwrap();

        assert!(inspect_wav(&path).is_err());
    }
}
