//! LZW encoder (compression).

use crate::dictionary::LzwDictionary;
use bytepress_core::Result;

/// Encode `input` as a sequence of 16-bit little-endian codes.
///
/// Builds the longest sequence already known to the dictionary, emits
/// its code, and registers the sequence extended by one byte. Every
/// emitted code fits in 16 bits; needing a code past that space aborts
/// with `DictionaryExhausted` before anything is returned.
pub(crate) fn encode(input: &[u8]) -> Result<Vec<u8>> {
    if input.is_empty() {
        return Ok(Vec::new());
    }

    let mut dict = LzwDictionary::new();
    let mut output = Vec::new();
    let mut current = vec![input[0]];

    for &byte in &input[1..] {
        let mut candidate = current.clone();
        candidate.push(byte);

        if dict.find_code(&candidate).is_some() {
            current = candidate;
        } else {
            let code = dict
                .find_code(&current)
                .expect("current sequence was found or seeded on a previous step");
            output.extend_from_slice(&(code as u16).to_le_bytes());

            dict.add_string(candidate)?;
            current.clear();
            current.push(byte);
        }
    }

    let code = dict
        .find_code(&current)
        .expect("current sequence was found or seeded on a previous step");
    output.extend_from_slice(&(code as u16).to_le_bytes());

    Ok(output)
}
