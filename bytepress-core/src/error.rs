//! Error types for bytepress codec operations.
//!
//! One enum covers the whole workspace: framing violations detected
//! while decoding, and representation limits detected before encoding
//! writes anything. Codecs never attempt partial recovery: the first
//! error aborts the call and no output is returned.

use thiserror::Error;

/// The main error type for bytepress operations.
#[derive(Debug, Error)]
pub enum BytepressError {
    /// Frame data violates a codec's framing invariants.
    #[error("malformed frame at offset {offset}: {message}")]
    MalformedFrame {
        /// Byte offset where the violation was detected.
        offset: usize,
        /// Description of the violation.
        message: String,
    },

    /// Frame ended before the bytes a header promised.
    #[error("unexpected end of frame: expected {expected} more bytes")]
    UnexpectedEof {
        /// Number of bytes that were expected but not available.
        expected: usize,
    },

    /// LZW input would need a code past the 16-bit code space.
    #[error("LZW dictionary exhausted (max {max_codes} codes)")]
    DictionaryExhausted {
        /// Total number of codes the frame format can represent.
        max_codes: u32,
    },

    /// Huffman tree serialization exceeds the frame's one-byte length field.
    #[error("Huffman tree too large: serializes to {serialized} bytes, max {max}")]
    TreeTooLarge {
        /// Size of the serialized tree in bytes.
        serialized: usize,
        /// Largest representable tree size.
        max: usize,
    },

    /// Shannon-Fano code table exceeds the frame's one-byte length field.
    #[error("code table header too large: {size} bytes, max {max}")]
    HeaderTooLarge {
        /// Size of the serialized header in bytes.
        size: usize,
        /// Largest representable header size.
        max: usize,
    },

    /// BWT input spans more blocks than the frame's one-byte count field.
    #[error("input needs {blocks} BWT blocks, frame supports at most {max}")]
    TooManyBlocks {
        /// Number of blocks the input would occupy.
        blocks: usize,
        /// Largest representable block count.
        max: usize,
    },

    /// Algorithm token outside the recognized set.
    #[error("unsupported algorithm: {name}")]
    UnsupportedAlgorithm {
        /// The token that failed to parse.
        name: String,
    },
}

/// Result type alias for bytepress operations.
pub type Result<T> = std::result::Result<T, BytepressError>;

impl BytepressError {
    /// Create a malformed frame error.
    pub fn malformed(offset: usize, message: impl Into<String>) -> Self {
        Self::MalformedFrame {
            offset,
            message: message.into(),
        }
    }

    /// Create an unexpected EOF error.
    pub fn unexpected_eof(expected: usize) -> Self {
        Self::UnexpectedEof { expected }
    }

    /// Create a dictionary exhausted error.
    pub fn dictionary_exhausted(max_codes: u32) -> Self {
        Self::DictionaryExhausted { max_codes }
    }

    /// Create a tree too large error.
    pub fn tree_too_large(serialized: usize, max: usize) -> Self {
        Self::TreeTooLarge { serialized, max }
    }

    /// Create a header too large error.
    pub fn header_too_large(size: usize, max: usize) -> Self {
        Self::HeaderTooLarge { size, max }
    }

    /// Create a too many blocks error.
    pub fn too_many_blocks(blocks: usize, max: usize) -> Self {
        Self::TooManyBlocks { blocks, max }
    }

    /// Create an unsupported algorithm error.
    pub fn unsupported_algorithm(name: impl Into<String>) -> Self {
        Self::UnsupportedAlgorithm { name: name.into() }
    }
}
