//! Command implementations for the bytepress CLI.

mod compress;
mod decompress;

pub use compress::cmd_compress;
pub use decompress::cmd_decompress;

/// Extension carried by compressed artifacts.
pub(crate) const COMP_EXTENSION: &str = "comp";
