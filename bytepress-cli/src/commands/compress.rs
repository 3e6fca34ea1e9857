//! Compress command implementation.

use super::COMP_EXTENSION;
use crate::utils::compression_ratio;
use bytepress_chain::Pipeline;
use bytepress_core::Codec;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Machine-readable statistics for a compression run.
#[derive(Debug, Serialize)]
struct CompressStats<'a> {
    input: String,
    output: String,
    algorithms: &'a str,
    original_size: usize,
    compressed_size: usize,
    ratio: f64,
}

pub fn cmd_compress(
    file: &Path,
    algorithms: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Reject unknown tokens before touching the file.
    let pipeline = Pipeline::parse(algorithms)?;

    let data = fs::read(file)?;
    let compressed = pipeline.compress(&data)?;

    let mut output = file.as_os_str().to_owned();
    output.push(format!(".{COMP_EXTENSION}"));
    let output = PathBuf::from(output);
    fs::write(&output, &compressed)?;

    let ratio = compression_ratio(data.len(), compressed.len());
    if json {
        let stats = CompressStats {
            input: file.display().to_string(),
            output: output.display().to_string(),
            algorithms,
            original_size: data.len(),
            compressed_size: compressed.len(),
            ratio,
        };
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!(
            "Compressed {} ({} bytes) -> {} ({} bytes) using {} ({:.1}% of original)",
            file.display(),
            data.len(),
            output.display(),
            compressed.len(),
            algorithms,
            ratio,
        );
    }

    Ok(())
}
