//! # bytepress-huffman: static Huffman coding
//!
//! A static tree is built from the input's byte frequencies, serialized
//! pre-order at the front of the frame, and the payload is the
//! concatenation of leaf codes, packed MSB-first.
//!
//! Frame layout:
//!
//! 1. one byte: length `T` of the serialized tree
//! 2. `T` bytes: the tree, pre-order (`0x01 value` leaf, `0x00` internal)
//! 3. one byte: number of zero padding bits in the final payload byte
//! 4. the bit-packed payload
//!
//! The padding count pins down the exact payload bit length; without it
//! the all-zero code (always owned by the leftmost leaf) would be
//! indistinguishable from padding. An input with a single distinct byte
//! has a bare-leaf tree and uses the one-bit code `0`.
//!
//! The one-byte tree length caps the tree at 255 serialized bytes. A
//! tree over `K` distinct bytes serializes to `3K - 1` bytes, so inputs
//! with more than 85 distinct byte values fail with `TreeTooLarge`.
//!
//! ## Example
//!
//! ```rust
//! use bytepress_core::Codec;
//! use bytepress_huffman::HuffmanCodec;
//!
//! let codec = HuffmanCodec::new();
//! let frame = codec.compress(b"ABAB").unwrap();
//! assert_eq!(frame[0], 5);
//! assert_eq!(codec.decompress(&frame).unwrap(), b"ABAB");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod tree;

use bytepress_core::{BitReader, BitWriter, BytepressError, Codec, Result};
use tree::Node;

/// Largest serialized tree the one-byte length field can describe.
pub const MAX_TREE_BYTES: usize = 255;

/// Static Huffman codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct HuffmanCodec;

impl HuffmanCodec {
    /// Create a Huffman codec.
    pub fn new() -> Self {
        Self
    }
}

impl Codec for HuffmanCodec {
    fn name(&self) -> &'static str {
        "huffman"
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut freqs = [0u64; 256];
        for &byte in input {
            freqs[usize::from(byte)] += 1;
        }
        let Some(root) = tree::build(&freqs) else {
            return Ok(Vec::new());
        };

        let mut serialized = Vec::new();
        tree::serialize(&root, &mut serialized);
        if serialized.len() > MAX_TREE_BYTES {
            return Err(BytepressError::tree_too_large(
                serialized.len(),
                MAX_TREE_BYTES,
            ));
        }

        let codes = tree::assign_codes(&root);
        let mut writer = BitWriter::new();
        for &byte in input {
            let code = codes[usize::from(byte)]
                .as_ref()
                .expect("every input byte owns a leaf");
            writer.write_code(code);
        }
        let (payload, pad) = writer.finish();

        let mut frame = Vec::with_capacity(2 + serialized.len() + payload.len());
        frame.push(serialized.len() as u8);
        frame.extend_from_slice(&serialized);
        frame.push(pad);
        frame.extend_from_slice(&payload);
        Ok(frame)
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        if input.is_empty() {
            return Ok(Vec::new());
        }

        let tree_len = usize::from(input[0]);
        if tree_len == 0 {
            return Err(BytepressError::malformed(0, "empty tree"));
        }
        let tree_bytes = input
            .get(1..1 + tree_len)
            .ok_or_else(|| BytepressError::unexpected_eof(1 + tree_len + 1 - input.len()))?;
        let (root, consumed) = tree::deserialize(tree_bytes, 1)?;
        if consumed != tree_len {
            return Err(BytepressError::malformed(
                1 + consumed,
                "tree shorter than its declared length",
            ));
        }

        let pad = *input
            .get(1 + tree_len)
            .ok_or_else(|| BytepressError::unexpected_eof(1))?;
        if pad > 7 {
            return Err(BytepressError::malformed(
                1 + tree_len,
                format!("padding of {pad} bits exceeds a byte"),
            ));
        }
        let payload = &input[2 + tree_len..];
        if payload.is_empty() {
            // A non-empty input always emits at least one code bit.
            return Err(BytepressError::malformed(2 + tree_len, "missing payload"));
        }

        let total_bits = payload.len() * 8 - usize::from(pad);
        let mut reader = BitReader::new(payload);
        let mut output = Vec::new();

        if let Node::Leaf(value) = &root {
            // Bare-leaf tree: the sole code is the single bit `0`.
            for _ in 0..total_bits {
                if reader.read_bit() == Some(true) {
                    return Err(BytepressError::malformed(
                        2 + tree_len,
                        "set bit under a single-leaf tree",
                    ));
                }
                output.push(*value);
            }
            return Ok(output);
        }

        let mut node = &root;
        for _ in 0..total_bits {
            let bit = reader
                .read_bit()
                .expect("bit count is bounded by the payload length");
            let Node::Internal { left, right } = node else {
                unreachable!("leaves reset the walk to the root");
            };
            let next: &Node = if bit { right } else { left };
            match next {
                Node::Leaf(value) => {
                    output.push(*value);
                    node = &root;
                }
                Node::Internal { .. } => node = next,
            }
        }
        if !std::ptr::eq(node, &root) {
            return Err(BytepressError::malformed(
                input.len() - 1,
                "payload ends inside a code",
            ));
        }

        Ok(output)
    }
}
