//! The algorithm registry: the closed token set pipelines are built from.

use bytepress_bwt::BwtCodec;
use bytepress_core::{BytepressError, Codec, Result};
use bytepress_huffman::HuffmanCodec;
use bytepress_lzw::LzwCodec;
use bytepress_rle::RleCodec;
use bytepress_shannon::ShannonFanoCodec;
use std::fmt;
use std::str::FromStr;

/// The five algorithms a pipeline can chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Run-length encoding.
    Rle,
    /// 16-bit LZW dictionary coding.
    Lzw,
    /// Static Huffman coding.
    Huffman,
    /// Shannon-Fano coding.
    ShannonFano,
    /// Block-wise Burrows-Wheeler transform.
    Bwt,
}

impl Algorithm {
    /// Every algorithm, in a stable order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Rle,
        Algorithm::Lzw,
        Algorithm::Huffman,
        Algorithm::ShannonFano,
        Algorithm::Bwt,
    ];

    /// The token naming this algorithm on the command line.
    pub fn token(&self) -> &'static str {
        match self {
            Algorithm::Rle => "rle",
            Algorithm::Lzw => "lzw",
            Algorithm::Huffman => "huffman",
            Algorithm::ShannonFano => "sf",
            Algorithm::Bwt => "bwt",
        }
    }

    /// Construct the codec for this algorithm.
    pub fn codec(&self) -> Box<dyn Codec> {
        match self {
            Algorithm::Rle => Box::new(RleCodec::new()),
            Algorithm::Lzw => Box::new(LzwCodec::new()),
            Algorithm::Huffman => Box::new(HuffmanCodec::new()),
            Algorithm::ShannonFano => Box::new(ShannonFanoCodec::new()),
            Algorithm::Bwt => Box::new(BwtCodec::default()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Algorithm {
    type Err = BytepressError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "rle" => Ok(Algorithm::Rle),
            "lzw" => Ok(Algorithm::Lzw),
            "huffman" => Ok(Algorithm::Huffman),
            "sf" => Ok(Algorithm::ShannonFano),
            "bwt" => Ok(Algorithm::Bwt),
            other => Err(BytepressError::unsupported_algorithm(other)),
        }
    }
}

/// Parse a comma-separated algorithm list such as `"rle,lzw"`.
///
/// Tokens are trimmed; any unknown token fails the whole list.
pub fn parse_algorithms(list: &str) -> Result<Vec<Algorithm>> {
    list.split(',').map(|token| token.trim().parse()).collect()
}
