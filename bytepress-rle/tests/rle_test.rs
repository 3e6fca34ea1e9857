//! RLE integration tests.

use bytepress_core::{BytepressError, Codec};
use bytepress_rle::RleCodec;

fn roundtrip(input: &[u8]) {
    let codec = RleCodec::new();
    let frame = codec.compress(input).expect("compression failed");
    let restored = codec.decompress(&frame).expect("decompression failed");
    assert_eq!(restored, input, "round-trip mismatch for {} bytes", input.len());
}

#[test]
fn test_roundtrip_single_byte() {
    roundtrip(b"A");
    roundtrip(&[0x00]);
    roundtrip(&[0xFF]);
}

#[test]
fn test_roundtrip_repeated_byte() {
    for n in [1, 2, 255, 256, 1000] {
        roundtrip(&vec![b'X'; n]);
    }
}

#[test]
fn test_roundtrip_text() {
    roundtrip(b"mississippi");
    roundtrip(b"the quick brown fox jumps over the lazy dog");
    roundtrip(b"bookkeeper balloon committee");
}

#[test]
fn test_roundtrip_pseudo_random() {
    // Run-free data doubles in size but must still round-trip.
    for n in [1, 10, 100, 1000] {
        let input: Vec<u8> = (0..n).map(|i| ((i * 31 + 17) % 256) as u8).collect();
        roundtrip(&input);
    }
}

#[test]
fn test_runs_compress() {
    let codec = RleCodec::new();
    let input = vec![b'r'; 1000];
    let frame = codec.compress(&input).unwrap();
    assert_eq!(frame.len(), 8);
}

#[test]
fn test_truncated_frame_rejected() {
    let codec = RleCodec::new();
    let frame = codec.compress(b"AAABBB").unwrap();
    let err = codec.decompress(&frame[..frame.len() - 1]).unwrap_err();
    assert!(matches!(err, BytepressError::MalformedFrame { .. }));
}
