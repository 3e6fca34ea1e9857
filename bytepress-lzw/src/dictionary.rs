//! LZW dictionary (code table) management.

use bytepress_core::{BytepressError, Result};
use std::collections::HashMap;

/// Total number of codes the 16-bit frame format can carry.
pub const MAX_CODES: u32 = 65_536;

/// LZW dictionary mapping byte sequences to codes and back.
///
/// Codes `0..=255` are pre-seeded with the single-byte sequences; new
/// codes are assigned monotonically starting at 256. The dictionary
/// lives for exactly one compress or decompress call.
#[derive(Debug)]
pub struct LzwDictionary {
    /// Code table: code -> byte sequence.
    table: Vec<Vec<u8>>,
    /// Reverse lookup: byte sequence -> code (encoding only).
    reverse: HashMap<Vec<u8>, u32>,
    /// Next available code.
    next_code: u32,
}

impl LzwDictionary {
    /// Create a dictionary seeded with the 256 single-byte sequences.
    pub fn new() -> Self {
        let mut table = Vec::with_capacity(512);
        let mut reverse = HashMap::with_capacity(512);
        for byte in 0..=u8::MAX {
            table.push(vec![byte]);
            reverse.insert(vec![byte], u32::from(byte));
        }
        Self {
            table,
            reverse,
            next_code: 256,
        }
    }

    /// Assign the next code to `sequence` (for encoding).
    ///
    /// Fails with `DictionaryExhausted` once the 16-bit code space is
    /// spent; the encoder never truncates or freezes.
    pub fn add_string(&mut self, sequence: Vec<u8>) -> Result<u32> {
        if self.next_code >= MAX_CODES {
            return Err(BytepressError::dictionary_exhausted(MAX_CODES));
        }
        let code = self.next_code;
        self.table.push(sequence.clone());
        self.reverse.insert(sequence, code);
        self.next_code += 1;
        Ok(code)
    }

    /// Assign the next code to `sequence` (for decoding).
    ///
    /// Same as [`add_string`](Self::add_string) without maintaining the
    /// reverse map, which decoding never consults.
    pub fn add_string_decode(&mut self, sequence: Vec<u8>) -> Result<u32> {
        if self.next_code >= MAX_CODES {
            return Err(BytepressError::dictionary_exhausted(MAX_CODES));
        }
        let code = self.next_code;
        self.table.push(sequence);
        self.next_code += 1;
        Ok(code)
    }

    /// Get the byte sequence for a code.
    pub fn get_string(&self, code: u32) -> Option<&[u8]> {
        self.table.get(code as usize).map(Vec::as_slice)
    }

    /// Find the code for a byte sequence (for encoding).
    pub fn find_code(&self, sequence: &[u8]) -> Option<u32> {
        self.reverse.get(sequence).copied()
    }

    /// The code the next insertion will receive.
    pub fn next_code(&self) -> u32 {
        self.next_code
    }
}

impl Default for LzwDictionary {
    fn default() -> Self {
        Self::new()
    }
}
