//! # bytepress Core
//!
//! Shared building blocks for the bytepress codec crates:
//!
//! - [`traits`]: the [`Codec`] contract every algorithm implements
//! - [`error`]: the workspace-wide error type
//! - [`bitstream`]: MSB-first bit packing for the entropy coders
//!
//! Every codec in the workspace is a whole-buffer transform: it takes a
//! byte slice, returns an owned byte buffer, and its compressed output
//! (the *frame*) carries all metadata its own decoder needs. Nothing in
//! a frame identifies which codec produced it; callers must decode with
//! the codec (or codec chain) used to encode.
//!
//! ## Example
//!
//! ```rust
//! use bytepress_core::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! writer.push_bit(true);
//! writer.push_bit(false);
//! writer.push_bit(true);
//! let (bytes, pad) = writer.finish();
//! assert_eq!(bytes, vec![0b1010_0000]);
//! assert_eq!(pad, 5);
//!
//! let mut reader = BitReader::new(&bytes);
//! assert_eq!(reader.read_bit(), Some(true));
//! assert_eq!(reader.read_bit(), Some(false));
//! assert_eq!(reader.read_bit(), Some(true));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bitstream;
pub mod error;
pub mod traits;

// Re-exports for convenience
pub use bitstream::{BitCode, BitReader, BitWriter};
pub use error::{BytepressError, Result};
pub use traits::Codec;
