//! # bytepress-lzw: 16-bit LZW dictionary coding
//!
//! Lempel-Ziv-Welch compression with fixed-width codes: the frame is a
//! contiguous sequence of 16-bit little-endian codes, so its length is
//! always a multiple of two. Codes `0..=255` are the single bytes; new
//! sequences take codes from 256 upward, assigned in the identical order
//! by encoder and decoder. There is no clear or reset code; input that
//! would need a code past the 16-bit space fails with
//! `DictionaryExhausted` instead of truncating.
//!
//! ## Example
//!
//! ```rust
//! use bytepress_core::Codec;
//! use bytepress_lzw::LzwCodec;
//!
//! let codec = LzwCodec::new();
//! let frame = codec.compress(b"ABABABA").unwrap();
//! assert_eq!(frame, vec![0x41, 0x00, 0x42, 0x00, 0x00, 0x01, 0x02, 0x01]);
//! assert_eq!(codec.decompress(&frame).unwrap(), b"ABABABA");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod decoder;
mod dictionary;
mod encoder;

pub use dictionary::MAX_CODES;

use bytepress_core::{Codec, Result};

/// LZW codec with a 16-bit code space.
#[derive(Debug, Clone, Copy, Default)]
pub struct LzwCodec;

impl LzwCodec {
    /// Create an LZW codec.
    pub fn new() -> Self {
        Self
    }
}

impl Codec for LzwCodec {
    fn name(&self) -> &'static str {
        "lzw"
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        encoder::encode(input)
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        decoder::decode(input)
    }
}
