//! Conversion Engine Module
//!
//! Pure transforms plus file inspection:
//! - Signed to unsigned 8-bit sample remap
//! - Canonical 44-byte WAV encoding
//! - Decoder-based verification of produced files

pub mod io;
pub mod pcm;
pub mod wav;

pub use io::{inspect_wav, read_signed_samples, verify_wav, WavInfo};
pub use pcm::{remap, remap_buffer, unmap, unmap_buffer, SAMPLE_RATE};
pub use wav::{encode, write_wav, WavHeader, HEADER_LEN};
