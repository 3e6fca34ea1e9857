//! The codec contract.
//!
//! Every compression algorithm in the workspace implements [`Codec`].
//! The trait is object-safe so codecs can be boxed into a pipeline and
//! run without knowing the concrete algorithm.

use crate::error::Result;

/// A whole-buffer compression codec.
///
/// Both operations are total over their valid input domain and satisfy
/// the round-trip law: `decompress(compress(x)) == x` for every `x` the
/// codec can represent. Empty input produces empty output without error,
/// in both directions; a non-empty frame never decodes to empty output.
///
/// Implementations take `&self`; a codec value holds configuration
/// only, and all working state (dictionaries, trees, sort buffers) lives
/// and dies inside a single call. Distinct codec values can therefore
/// run concurrently on independent inputs without synchronization.
pub trait Codec {
    /// Short stable name used in diagnostics, e.g. `"rle"` or `"lzw"`.
    fn name(&self) -> &'static str;

    /// Compress `input` into a self-describing frame.
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>>;

    /// Decode a frame produced by [`compress`](Codec::compress) on an
    /// identically configured codec.
    ///
    /// Returns an error if the frame violates the codec's framing
    /// invariants; no partial output is ever returned.
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>>;
}
