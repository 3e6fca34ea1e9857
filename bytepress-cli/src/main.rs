//! bytepress CLI - chainable byte-stream compression.

mod commands;
mod utils;

use clap::{Parser, Subcommand};
use commands::{cmd_compress, cmd_decompress};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bytepress")]
#[command(author, version, about = "Chainable lossless compression for files")]
#[command(long_about = "
bytepress runs a file through an ordered chain of codecs and undoes the
chain in reverse on decompression. The chain is not recorded in the
output file - decompression must be given the same ordered algorithm
list that compression used.

Algorithms: rle, lzw, huffman, sf, bwt

Examples:
  bytepress compress notes.txt
  bytepress compress -a bwt,rle,huffman notes.txt
  bytepress decompress -a bwt,rle,huffman notes.txt.comp
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file into `<FILE>.comp`
    #[command(alias = "c")]
    Compress {
        /// File to compress
        file: PathBuf,

        /// Comma-separated algorithm chain
        #[arg(short, long, default_value = "lzw")]
        algorithms: String,

        /// Print statistics as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Restore a `.comp` file, stripping the extension
    #[command(alias = "d")]
    Decompress {
        /// File to decompress (must end in `.comp`)
        file: PathBuf,

        /// Comma-separated algorithm chain used at compression time
        #[arg(short, long, default_value = "lzw")]
        algorithms: String,

        /// Print statistics as JSON
        #[arg(short, long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compress {
            file,
            algorithms,
            json,
        } => cmd_compress(&file, &algorithms, json),
        Commands::Decompress {
            file,
            algorithms,
            json,
        } => cmd_decompress(&file, &algorithms, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
