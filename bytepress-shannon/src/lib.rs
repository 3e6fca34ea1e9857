//! # bytepress-shannon: Shannon-Fano coding
//!
//! Symbols are ordered by decreasing frequency and recursively split at
//! the point that best balances the two frequency sums; the left part
//! of every split takes a `0` bit, the right part a `1`. The resulting
//! prefix-free table is serialized into the frame header and the
//! payload is the concatenation of symbol codes, packed MSB-first.
//!
//! Frame layout:
//!
//! 1. one byte: header length `H`
//! 2. `H` bytes of header: a symbol count `n`, then per symbol one byte
//!    of value, one byte of code bit-length `L`, and `L.div_ceil(8)`
//!    bytes of code bits
//! 3. one byte: number of zero padding bits in the final payload byte
//! 4. the bit-packed payload
//!
//! As with the Huffman frame, the padding count makes the payload bit
//! length exact: the most frequent symbol always owns the all-zero
//! code, so padding would otherwise decode as spurious trailing
//! symbols. The one-byte `H` caps the header at 255 bytes, which bounds
//! the alphabet at roughly 84 distinct bytes; larger alphabets fail
//! with `HeaderTooLarge` before anything is written.
//!
//! ## Example
//!
//! ```rust
//! use bytepress_core::Codec;
//! use bytepress_shannon::ShannonFanoCodec;
//!
//! let codec = ShannonFanoCodec::new();
//! let frame = codec.compress(b"AABBC").unwrap();
//! assert_eq!(codec.decompress(&frame).unwrap(), b"AABBC");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod codebook;

use bytepress_core::{BitCode, BitReader, BitWriter, BytepressError, Codec, Result};
use std::collections::HashMap;

/// Largest serialized header the one-byte length field can describe.
pub const MAX_HEADER_BYTES: usize = 255;

/// Shannon-Fano codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShannonFanoCodec;

impl ShannonFanoCodec {
    /// Create a Shannon-Fano codec.
    pub fn new() -> Self {
        Self
    }
}

impl Codec for ShannonFanoCodec {
    fn name(&self) -> &'static str {
        "sf"
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        if input.is_empty() {
            return Ok(Vec::new());
        }

        let mut freqs = [0u64; 256];
        for &byte in input {
            freqs[usize::from(byte)] += 1;
        }
        let records = codebook::build(&freqs);

        let mut header = Vec::with_capacity(1 + records.len() * 3);
        header.push(records.len() as u8);
        for record in &records {
            header.push(record.symbol);
            header.push(record.code.len() as u8);
            header.extend_from_slice(record.code.as_bytes());
        }
        if header.len() > MAX_HEADER_BYTES {
            return Err(BytepressError::header_too_large(
                header.len(),
                MAX_HEADER_BYTES,
            ));
        }

        let mut codes: [Option<&BitCode>; 256] = [None; 256];
        for record in &records {
            codes[usize::from(record.symbol)] = Some(&record.code);
        }

        let mut writer = BitWriter::new();
        for &byte in input {
            let code = codes[usize::from(byte)].expect("every input byte has a record");
            writer.write_code(code);
        }
        let (payload, pad) = writer.finish();

        let mut frame = Vec::with_capacity(2 + header.len() + payload.len());
        frame.push(header.len() as u8);
        frame.extend_from_slice(&header);
        frame.push(pad);
        frame.extend_from_slice(&payload);
        Ok(frame)
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        if input.is_empty() {
            return Ok(Vec::new());
        }

        let header_len = usize::from(input[0]);
        if header_len == 0 {
            return Err(BytepressError::malformed(0, "empty code table header"));
        }
        let header = input
            .get(1..1 + header_len)
            .ok_or_else(|| BytepressError::unexpected_eof(1 + header_len + 1 - input.len()))?;

        let (table, max_code_len) = parse_code_table(header)?;

        let pad = *input
            .get(1 + header_len)
            .ok_or_else(|| BytepressError::unexpected_eof(1))?;
        if pad > 7 {
            return Err(BytepressError::malformed(
                1 + header_len,
                format!("padding of {pad} bits exceeds a byte"),
            ));
        }
        let payload = &input[2 + header_len..];
        if payload.is_empty() {
            return Err(BytepressError::malformed(2 + header_len, "missing payload"));
        }

        let total_bits = payload.len() * 8 - usize::from(pad);
        let mut reader = BitReader::new(payload);
        let mut output = Vec::new();
        let mut current = BitCode::new();

        for _ in 0..total_bits {
            let bit = reader
                .read_bit()
                .expect("bit count is bounded by the payload length");
            current.push(bit);
            if let Some(&symbol) = table.get(&current) {
                output.push(symbol);
                current = BitCode::new();
            } else if current.len() >= max_code_len {
                return Err(BytepressError::malformed(
                    2 + header_len,
                    "bit sequence matches no code",
                ));
            }
        }
        if !current.is_empty() {
            return Err(BytepressError::malformed(
                input.len() - 1,
                "payload ends inside a code",
            ));
        }

        Ok(output)
    }
}

/// Parse the header into a code table and the longest code length.
fn parse_code_table(header: &[u8]) -> Result<(HashMap<BitCode, u8>, u16)> {
    let count = usize::from(header[0]);
    if count == 0 {
        return Err(BytepressError::malformed(1, "empty code table"));
    }

    let mut table = HashMap::with_capacity(count);
    let mut max_code_len = 0u16;
    let mut pos = 1usize;

    for _ in 0..count {
        let &symbol = header
            .get(pos)
            .ok_or_else(|| BytepressError::malformed(pos, "code table overruns header"))?;
        let &code_len = header
            .get(pos + 1)
            .ok_or_else(|| BytepressError::malformed(pos + 1, "code table overruns header"))?;
        if code_len == 0 {
            return Err(BytepressError::malformed(pos + 1, "zero-length code"));
        }

        let code_bytes = usize::from(code_len).div_ceil(8);
        let bits = header
            .get(pos + 2..pos + 2 + code_bytes)
            .ok_or_else(|| BytepressError::malformed(pos + 2, "code bits overrun header"))?;
        let code = BitCode::from_bytes(bits, u16::from(code_len))
            .ok_or_else(|| BytepressError::malformed(pos + 2, "code bits overrun header"))?;

        max_code_len = max_code_len.max(code.len());
        if table.insert(code, symbol).is_some() {
            return Err(BytepressError::malformed(pos, "duplicate code"));
        }
        pos += 2 + code_bytes;
    }

    if pos != header.len() {
        return Err(BytepressError::malformed(pos, "trailing bytes in header"));
    }

    Ok((table, max_code_len))
}
