//! raw2wav - Raw PCM to WAV conversion
//!
//! Sound effects ship as raw 8-bit signed PCM. The engine's asset loader
//! only reads WAV, so this crate turns each raw file into a minimal 8-bit
//! unsigned mono WAV at the hardware playback rate (16013 Hz).
//!
//! # Layout
//!
//! - [`engine`]: pure sample remap and WAV encoding, plus decoder checks
//! - [`batch`]: directory scan, filtering and per-file conversion
//! - [`cli`]: command-line front end

pub mod batch;
pub mod cli;
pub mod engine;
pub mod error;

pub use error::{Raw2WavError, Result};
