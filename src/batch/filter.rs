//! Candidate selection and output naming for batch conversion.

use std::ffi::{OsStr, OsString};
use std::path::Path;

use serde::Serialize;

/// Documentation file that lives next to the sounds
const README_NAME: &str = "readme.md";

/// Extension of converted files
pub const WAV_EXTENSION: &str = "wav";

/// Why a directory entry was not converted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Directory, broken link or other non-regular entry
    NotAFile,
    /// Already has a `.wav` extension
    AlreadyWav,
    /// Name starts with `.`
    Hidden,
    /// The sound directory's readme
    Readme,
    /// Zero-length source, nothing to convert
    Empty,
}

/// Decide from the file name alone whether an entry is skipped.
///
/// Regular-file and emptiness checks need the filesystem and happen in the
/// caller.
pub fn skip_reason_for_name(name: &str) -> Option<SkipReason> {
    let is_wav = Path::new(name)
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case(WAV_EXTENSION));

    if is_wav {
        Some(SkipReason::AlreadyWav)
    } else if name.starts_with('.') {
        Some(SkipReason::Hidden)
    } else if name.eq_ignore_ascii_case(README_NAME) {
        Some(SkipReason::Readme)
    } else {
        None
    }
}

/// Name of the converted file: the lower-cased source name plus `.wav`.
///
/// Bytes that are not valid UTF-8 are kept as they are, so distinct source
/// names never collapse onto the same output.
pub fn output_name(source_name: &OsStr) -> OsString {
    let mut name = lowercase_name(source_name);
    name.push(".");
    name.push(WAV_EXTENSION);
    name
}

fn lowercase_name(name: &OsStr) -> OsString {
    match name.to_str() {
        Some(utf8) => OsString::from(utf8.to_lowercase()),
        None => lowercase_raw(name),
    }
}

#[cfg(unix)]
fn lowercase_raw(name: &OsStr) -> OsString {
    use std::os::unix::ffi::{OsStrExt, OsStringExt};

    OsString::from_vec(lowercase_bytes(name.as_bytes()))
}

#[cfg(not(unix))]
fn lowercase_raw(name: &OsStr) -> OsString {
    OsString::from(name.to_string_lossy().to_lowercase())
}

/// Lower-case the UTF-8 runs of `bytes`, copying invalid sequences through.
#[cfg_attr(not(unix), allow(dead_code))]
fn lowercase_bytes(mut bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len());

    loop {
        match std::str::from_utf8(bytes) {
            Ok(valid) => {
                out.extend_from_slice(valid.to_lowercase().as_bytes());
                return out;
            }
            Err(e) => {
                let (valid, rest) = bytes.split_at(e.valid_up_to());
                out.extend_from_slice(String::from_utf8_lossy(valid).to_lowercase().as_bytes());

                let invalid_len = e.error_len().unwrap_or(rest.len());
                out.extend_from_slice(&rest[..invalid_len]);
                bytes = &rest[invalid_len..];
            }
        }
    }
}
