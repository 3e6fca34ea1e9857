//! # bytepress-bwt: block-wise Burrows-Wheeler transform
//!
//! The input splits into fixed-size blocks; each block is replaced by
//! the last column of its sorted rotation matrix plus the row index of
//! the original block. The transform produces no compression on its own
//! but groups similar bytes, so it chains well in front of RLE or an
//! entropy coder.
//!
//! Frame layout:
//!
//! 1. one byte: block count `M`
//! 2. per block: one byte of block length `ℓ`, one byte of primary
//!    index `I < ℓ`, then the `ℓ` transformed bytes
//!
//! Every frame field is one byte, so blocks are capped at 255 bytes
//! (the configured block size is clamped to that on construction) and
//! inputs past 255 blocks fail with `TooManyBlocks` before anything is
//! written.
//!
//! ## Example
//!
//! ```rust
//! use bytepress_core::Codec;
//! use bytepress_bwt::BwtCodec;
//!
//! let codec = BwtCodec::new(8);
//! let frame = codec.compress(b"banana").unwrap();
//! assert_eq!(&frame[..3], &[0x01, 0x06, 0x03]);
//! assert_eq!(codec.decompress(&frame).unwrap(), b"banana");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod transform;

use bytepress_core::{BytepressError, Codec, Result};

/// Largest block the frame's one-byte length field can describe.
pub const MAX_BLOCK_LEN: usize = 255;

/// Largest block count the frame's one-byte count field can describe.
pub const MAX_BLOCKS: usize = 255;

/// Default block size.
pub const DEFAULT_BLOCK_LEN: usize = 255;

/// Block-wise BWT codec.
#[derive(Debug, Clone, Copy)]
pub struct BwtCodec {
    block_len: usize,
}

impl BwtCodec {
    /// Create a BWT codec with the given block size, clamped to
    /// `1..=255`.
    pub fn new(block_len: usize) -> Self {
        Self {
            block_len: block_len.clamp(1, MAX_BLOCK_LEN),
        }
    }

    /// The effective (clamped) block size.
    pub fn block_len(&self) -> usize {
        self.block_len
    }
}

impl Default for BwtCodec {
    fn default() -> Self {
        Self::new(DEFAULT_BLOCK_LEN)
    }
}

impl Codec for BwtCodec {
    fn name(&self) -> &'static str {
        "bwt"
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        if input.is_empty() {
            return Ok(Vec::new());
        }

        let blocks = input.len().div_ceil(self.block_len);
        if blocks > MAX_BLOCKS {
            return Err(BytepressError::too_many_blocks(blocks, MAX_BLOCKS));
        }

        let mut output = Vec::with_capacity(1 + input.len() + 2 * blocks);
        output.push(blocks as u8);
        for block in input.chunks(self.block_len) {
            let (last_column, primary) = transform::transform(block);
            output.push(block.len() as u8);
            output.push(primary as u8);
            output.extend_from_slice(&last_column);
        }

        Ok(output)
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        if input.is_empty() {
            return Ok(Vec::new());
        }

        let blocks = usize::from(input[0]);
        if blocks == 0 {
            return Err(BytepressError::malformed(0, "zero block count"));
        }

        let mut output = Vec::new();
        let mut pos = 1usize;
        for _ in 0..blocks {
            let header = input
                .get(pos..pos + 2)
                .ok_or_else(|| BytepressError::unexpected_eof(pos + 2 - input.len()))?;
            let block_len = usize::from(header[0]);
            let primary = usize::from(header[1]);
            if block_len == 0 {
                return Err(BytepressError::malformed(pos, "zero block length"));
            }
            if primary >= block_len {
                return Err(BytepressError::malformed(
                    pos + 1,
                    format!("primary index {primary} outside block of {block_len}"),
                ));
            }

            let block = input
                .get(pos + 2..pos + 2 + block_len)
                .ok_or_else(|| BytepressError::unexpected_eof(pos + 2 + block_len - input.len()))?;
            output.extend_from_slice(&transform::inverse(block, primary));
            pos += 2 + block_len;
        }

        if pos != input.len() {
            return Err(BytepressError::malformed(
                pos,
                "trailing bytes after final block",
            ));
        }

        Ok(output)
    }
}
