//! Sample format conversion
//!
//! Source sound effects are raw 8-bit signed PCM as played by the PAL
//! hardware mixer. WAV stores 8-bit samples unsigned, offset by 128.

// ============================================================================
// Constants
// ============================================================================

/// PAL CPU clock in Hz
pub const PAL_CLOCK_HZ: u32 = 7_093_789;

/// Audio period register value used for every sound effect channel
pub const AUDIO_PERIOD: u32 = 443;

/// Output sample rate for every converted file (16013 Hz)
pub const SAMPLE_RATE: u32 = PAL_CLOCK_HZ / AUDIO_PERIOD;

/// Offset between signed and unsigned 8-bit PCM
const SIGN_OFFSET: u8 = 0x80;

// ============================================================================
// Per-sample remap
// ============================================================================

/// Convert a signed 8-bit sample to its unsigned WAV representation.
///
/// Computes `(sample + 128) mod 256`. Total over all inputs.
#[inline]
pub fn remap(sample: i8) -> u8 {
    (sample as u8) ^ SIGN_OFFSET
}

/// Inverse of [`remap`]: recovers the original signed sample.
#[inline]
pub fn unmap(sample: u8) -> i8 {
    (sample ^ SIGN_OFFSET) as i8
}

// ============================================================================
// Buffer helpers
// ============================================================================

/// Remap a raw signed PCM buffer into unsigned WAV payload bytes.
///
/// Each input byte is read as an `i8`. Output length equals input length.
pub fn remap_buffer(raw: &[u8]) -> Vec<u8> {
    raw.iter().map(|&b| remap(b as i8)).collect()
}

/// Undo [`remap_buffer`], returning raw signed PCM bytes.
pub fn unmap_buffer(payload: &[u8]) -> Vec<u8> {
    payload.iter().map(|&b| unmap(b) as u8).collect()
}

/// Playback length of `num_samples` mono samples at [`SAMPLE_RATE`].
pub fn duration_secs(num_samples: usize) -> f64 {
    num_samples as f64 / SAMPLE_RATE as f64
}

// ============================================================================
// Tests
// ============================================================================
