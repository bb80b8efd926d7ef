//! Minimal WAV container for 8-bit mono PCM
//!
//! Layout is the canonical 44-byte header (RIFF descriptor, 16-byte `fmt `
//! chunk, `data` chunk header) followed by the sample payload. All integer
//! fields are little-endian.

use std::io::{self, Write};

use crate::error::{Raw2WavError, Result};

/// Size of the canonical header in bytes
pub const HEADER_LEN: usize = 44;

/// RIFF size field covers everything after the first 8 bytes
const RIFF_OVERHEAD: u32 = 36;

const FMT_CHUNK_SIZE: u32 = 16;
const FORMAT_PCM: u16 = 1;
const NUM_CHANNELS: u16 = 1;
const BITS_PER_SAMPLE: u16 = 8;
const BLOCK_ALIGN: u16 = NUM_CHANNELS * BITS_PER_SAMPLE / 8;

/// Header of an 8-bit unsigned mono PCM WAV file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    /// Samples per second
    pub sample_rate: u32,
    /// Payload length in bytes (one byte per sample)
    pub data_size: u32,
}

impl WavHeader {
    /// Header for `num_samples` samples at `sample_rate`.
    ///
    /// Sample counts beyond `u32::MAX` are not representable and wrap.
    pub fn new(sample_rate: u32, num_samples: usize) -> Self {
        WavHeader {
            sample_rate,
            data_size: num_samples as u32,
        }
    }

    /// Value of the RIFF chunk size field
    pub fn riff_size(&self) -> u32 {
        RIFF_OVERHEAD.wrapping_add(self.data_size)
    }

    /// Bytes per second of audio
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * BLOCK_ALIGN as u32
    }

    /// Serialize to the fixed 44-byte layout.
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];
        let fields: [&[u8]; 13] = [
            b"RIFF",
            &self.riff_size().to_le_bytes(),
            b"WAVE",
            b"fmt ",
            &FMT_CHUNK_SIZE.to_le_bytes(),
            &FORMAT_PCM.to_le_bytes(),
            &NUM_CHANNELS.to_le_bytes(),
            &self.sample_rate.to_le_bytes(),
            &self.byte_rate().to_le_bytes(),
            &BLOCK_ALIGN.to_le_bytes(),
            &BITS_PER_SAMPLE.to_le_bytes(),
            b"data",
            &self.data_size.to_le_bytes(),
        ];

        let mut pos = 0;
        for field in fields {
            out[pos..pos + field.len()].copy_from_slice(field);
            pos += field.len();
        }
        out
    }

    /// Parse a header previously produced by [`WavHeader::to_bytes`].
    ///
    /// Only the exact canonical layout is accepted: any extra chunk, other
    /// format tag, channel count or bit depth is rejected.
    ///
    /// # Errors
    /// * `MalformedHeader` - If the bytes are not a canonical 8-bit mono header
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_LEN {
            return Err(malformed(format!(
                "need {} bytes, got {}",
                HEADER_LEN,
                bytes.len()
            )));
        }

        expect_tag(bytes, 0, b"RIFF")?;
        expect_tag(bytes, 8, b"WAVE")?;
        expect_tag(bytes, 12, b"fmt ")?;
        expect_tag(bytes, 36, b"data")?;

        if read_u32(bytes, 16) != FMT_CHUNK_SIZE {
            return Err(malformed("fmt chunk is not 16 bytes".to_string()));
        }
        if read_u16(bytes, 20) != FORMAT_PCM {
            return Err(malformed("audio format is not PCM".to_string()));
        }
        if read_u16(bytes, 22) != NUM_CHANNELS {
            return Err(malformed("not mono".to_string()));
        }
        if read_u16(bytes, 32) != BLOCK_ALIGN || read_u16(bytes, 34) != BITS_PER_SAMPLE {
            return Err(malformed("not 8-bit samples".to_string()));
        }

        let header = WavHeader {
            sample_rate: read_u32(bytes, 24),
            data_size: read_u32(bytes, 40),
        };

        if read_u32(bytes, 4) != header.riff_size() {
            return Err(malformed("RIFF size does not match data size".to_string()));
        }
        if read_u32(bytes, 28) != header.byte_rate() {
            return Err(malformed("byte rate does not match sample rate".to_string()));
        }

        Ok(header)
    }
}

/// Encode unsigned 8-bit samples as a complete WAV file in memory.
///
/// The result is exactly `44 + samples.len()` bytes and depends only on the
/// arguments.
pub fn encode(samples: &[u8], sample_rate: u32) -> Vec<u8> {
    let header = WavHeader::new(sample_rate, samples.len());
    let mut out = Vec::with_capacity(HEADER_LEN + samples.len());
    out.extend_from_slice(&header.to_bytes());
    out.extend_from_slice(samples);
    out
}

/// Write a complete WAV file to `writer`.
///
/// Same bytes as [`encode`], without building the intermediate buffer.
pub fn write_wav<W: Write>(writer: &mut W, samples: &[u8], sample_rate: u32) -> io::Result<()> {
    let header = WavHeader::new(sample_rate, samples.len());
    writer.write_all(&header.to_bytes())?;
    writer.write_all(samples)?;
    Ok(())
}

// ============================================================================
// Internal helper functions
// ============================================================================

fn malformed(reason: String) -> Raw2WavError {
    Raw2WavError::MalformedHeader { reason }
}

fn expect_tag(bytes: &[u8], offset: usize, tag: &[u8; 4]) -> Result<()> {
    if &bytes[offset..offset + 4] == tag {
        Ok(())
    } else {
        Err(malformed(format!(
            "expected {:?} at offset {}",
            String::from_utf8_lossy(tag),
            offset
        )))
    }
}

fn read_u16(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

// ============================================================================
// Tests
// ============================================================================
