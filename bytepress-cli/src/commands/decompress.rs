//! Decompress command implementation.

use super::COMP_EXTENSION;
use bytepress_chain::Pipeline;
use bytepress_core::Codec;
use serde::Serialize;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;

/// Machine-readable statistics for a decompression run.
#[derive(Debug, Serialize)]
struct DecompressStats<'a> {
    input: String,
    output: String,
    algorithms: &'a str,
    compressed_size: usize,
    restored_size: usize,
}

pub fn cmd_decompress(
    file: &Path,
    algorithms: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let pipeline = Pipeline::parse(algorithms)?;

    if file.extension().and_then(OsStr::to_str) != Some(COMP_EXTENSION) {
        return Err(format!("compressed file must have a .{COMP_EXTENSION} extension").into());
    }

    let data = fs::read(file)?;
    let restored = pipeline.decompress(&data)?;

    let output = file.with_extension("");
    fs::write(&output, &restored)?;

    if json {
        let stats = DecompressStats {
            input: file.display().to_string(),
            output: output.display().to_string(),
            algorithms,
            compressed_size: data.len(),
            restored_size: restored.len(),
        };
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!(
            "Decompressed {} ({} bytes) -> {} ({} bytes) using {}",
            file.display(),
            data.len(),
            output.display(),
            restored.len(),
            algorithms,
        );
    }

    Ok(())
}
