//! # bytepress-chain: codec pipelines
//!
//! A [`Pipeline`] composes codecs in a declared order: compression runs
//! the stages front to back, each stage consuming the previous stage's
//! frame; decompression runs them back to front. Nothing in the bytes
//! records which codecs produced them; decoding requires the same
//! ordered list used for encoding.
//!
//! [`Algorithm`] is the registry tying command-line tokens to codecs.
//!
//! ## Example
//!
//! ```rust
//! use bytepress_chain::Pipeline;
//! use bytepress_core::Codec;
//!
//! let pipeline = Pipeline::parse("rle,lzw").unwrap();
//! let frame = pipeline.compress(b"AAABBBCCC").unwrap();
//! assert_eq!(pipeline.decompress(&frame).unwrap(), b"AAABBBCCC");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod algorithm;

pub use algorithm::{Algorithm, parse_algorithms};

use bytepress_core::{Codec, Result};

/// An ordered composition of codecs.
///
/// The empty pipeline is the identity transform. The first stage error
/// short-circuits the run and is reported verbatim.
pub struct Pipeline {
    stages: Vec<Box<dyn Codec>>,
}

impl Pipeline {
    /// Compose the given stages in order.
    pub fn new(stages: Vec<Box<dyn Codec>>) -> Self {
        Self { stages }
    }

    /// Compose the codecs for an algorithm list, in list order.
    pub fn from_algorithms(algorithms: &[Algorithm]) -> Self {
        Self::new(algorithms.iter().map(Algorithm::codec).collect())
    }

    /// Build a pipeline from a comma-separated token list.
    pub fn parse(list: &str) -> Result<Self> {
        Ok(Self::from_algorithms(&parse_algorithms(list)?))
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether the pipeline has no stages.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl Codec for Pipeline {
    fn name(&self) -> &'static str {
        "pipeline"
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        self.stages
            .iter()
            .try_fold(input.to_vec(), |data, stage| stage.compress(&data))
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        self.stages
            .iter()
            .rev()
            .try_fold(input.to_vec(), |data, stage| stage.decompress(&data))
    }
}
