//! LZW decoder (decompression).

use crate::dictionary::LzwDictionary;
use bytepress_core::{BytepressError, Result};

/// Decode a sequence of 16-bit little-endian codes.
///
/// Rebuilds the encoder's dictionary one step behind the code stream.
/// A code equal to the next unassigned code is the KwKwK case (the
/// encoder emitted a sequence it registered on the same step); anything
/// past that cannot have come from the encoder.
pub(crate) fn decode(input: &[u8]) -> Result<Vec<u8>> {
    if input.is_empty() {
        return Ok(Vec::new());
    }
    if input.len() % 2 != 0 {
        return Err(BytepressError::malformed(
            input.len() - 1,
            "code truncated: frame length must be even",
        ));
    }

    let codes: Vec<u32> = input
        .chunks_exact(2)
        .map(|pair| u32::from(u16::from_le_bytes([pair[0], pair[1]])))
        .collect();

    let mut dict = LzwDictionary::new();

    let first = codes[0];
    if first > 255 {
        return Err(BytepressError::malformed(
            0,
            format!("first code {first} names no single byte"),
        ));
    }
    let mut prev = dict
        .get_string(first)
        .expect("single-byte codes are pre-seeded")
        .to_vec();
    let mut output = prev.clone();

    for (index, &code) in codes.iter().enumerate().skip(1) {
        let current = if let Some(sequence) = dict.get_string(code) {
            sequence.to_vec()
        } else if code == dict.next_code() {
            let mut sequence = prev.clone();
            sequence.push(prev[0]);
            sequence
        } else {
            return Err(BytepressError::malformed(
                index * 2,
                format!("code {code} beyond dictionary"),
            ));
        };

        output.extend_from_slice(&current);

        prev.push(current[0]);
        dict.add_string_decode(prev)?;
        prev = current;
    }

    Ok(output)
}
