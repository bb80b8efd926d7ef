//! Error handling for raw2wav
//!
//! A missing source directory is not an error (see `batch::BatchOutcome`).
//! Everything here terminates the batch that raised it.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for raw2wav operations
pub type Result<T> = std::result::Result<T, Raw2WavError>;

/// Main error type for raw2wav operations
#[derive(Error, Debug)]
pub enum Raw2WavError {
    // File Errors
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Failed to read file: {path}: {source}")]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}: {source}")]
    FileWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to scan directory: {path}: {source}")]
    DirectoryScanError {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    // Format Errors
    #[error("Invalid WAV file: {path}: {reason}")]
    InvalidWav {
        path: PathBuf,
        reason: String,
        #[source]
        source: Option<hound::Error>,
    },

    #[error("Malformed WAV header: {reason}")]
    MalformedHeader { reason: String },

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Raw2WavError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Raw2WavError::FileNotFound { .. } => "FILE_NOT_FOUND",
            Raw2WavError::FileReadError { .. } => "FILE_READ_ERROR",
            Raw2WavError::FileWriteError { .. } => "FILE_WRITE_ERROR",
            Raw2WavError::DirectoryScanError { .. } => "DIRECTORY_SCAN_ERROR",
            Raw2WavError::InvalidWav { .. } => "INVALID_WAV",
            Raw2WavError::MalformedHeader { .. } => "MALFORMED_HEADER",
            Raw2WavError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Check if re-running after fixing the input could succeed.
    ///
    /// Conversion is idempotent, so every file-level failure is recoverable by
    /// re-running. Format errors on produced files are not.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Raw2WavError::FileNotFound { .. }
                | Raw2WavError::FileReadError { .. }
                | Raw2WavError::FileWriteError { .. }
                | Raw2WavError::DirectoryScanError { .. }
        )
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            Raw2WavError::FileNotFound { .. } => vec![
                "Check the file path is correct",
                "Run from the repository root so data/sounds resolves",
            ],
            Raw2WavError::FileWriteError { .. } => vec![
                "Check the sound directory is writable",
                "Free up disk space and re-run the conversion",
            ],
            Raw2WavError::InvalidWav { .. } => vec![
                "Delete the .wav file and re-run the conversion",
                "Make sure the source is raw 8-bit signed PCM, not an existing audio container",
            ],
            _ => vec![],
        }
    }
}
