//! Pipeline integration tests: every codec subset round-trips.

use bytepress_chain::{Algorithm, Pipeline};
use bytepress_core::{BytepressError, Codec};

/// Inputs small and narrow enough for every stage of every chain: the
/// entropy coders cap their alphabets, and frames from earlier stages
/// count toward those caps.
fn subset_inputs() -> Vec<Vec<u8>> {
    vec![
        Vec::new(),
        b"AAABBBCCC".to_vec(),
        b"banana bandana".to_vec(),
        vec![b'X'; 1000],
        vec![7u8; 200],
        b"tick tock tick tock".to_vec(),
    ]
}

#[test]
fn test_all_codec_subsets_roundtrip() {
    for mask in 0u32..32 {
        let algorithms: Vec<Algorithm> = Algorithm::ALL
            .into_iter()
            .enumerate()
            .filter(|&(i, _)| mask & (1 << i) != 0)
            .map(|(_, algorithm)| algorithm)
            .collect();
        let pipeline = Pipeline::from_algorithms(&algorithms);

        for input in subset_inputs() {
            let frame = pipeline
                .compress(&input)
                .unwrap_or_else(|e| panic!("compress failed for {algorithms:?}: {e}"));
            let restored = pipeline
                .decompress(&frame)
                .unwrap_or_else(|e| panic!("decompress failed for {algorithms:?}: {e}"));
            assert_eq!(restored, input, "round-trip mismatch for {algorithms:?}");
        }
    }
}

#[test]
fn test_reversed_permutation_roundtrips() {
    let mut algorithms = Algorithm::ALL.to_vec();
    algorithms.reverse();
    let pipeline = Pipeline::from_algorithms(&algorithms);

    for input in subset_inputs() {
        let frame = pipeline.compress(&input).unwrap();
        assert_eq!(pipeline.decompress(&frame).unwrap(), input);
    }
}

#[test]
fn test_rle_then_lzw_scenario() {
    // RLE turns "AAABBBCCC" into six bytes; LZW then packs those.
    let rle = Algorithm::Rle.codec();
    let intermediate = rle.compress(b"AAABBBCCC").unwrap();
    assert_eq!(intermediate, vec![0x03, b'A', 0x03, b'B', 0x03, b'C']);

    let pipeline = Pipeline::parse("rle,lzw").unwrap();
    let frame = pipeline.compress(b"AAABBBCCC").unwrap();
    assert_eq!(
        frame,
        Algorithm::Lzw.codec().compress(&intermediate).unwrap()
    );
    assert_eq!(pipeline.decompress(&frame).unwrap(), b"AAABBBCCC");
}

#[test]
fn test_empty_input_through_every_single_stage() {
    for algorithm in Algorithm::ALL {
        let pipeline = Pipeline::from_algorithms(&[algorithm]);
        assert!(pipeline.compress(b"").unwrap().is_empty());
        assert!(pipeline.decompress(b"").unwrap().is_empty());
    }
}

#[test]
fn test_determinism_across_runs() {
    let pipeline = Pipeline::parse("bwt,rle,huffman").unwrap();
    let input = b"so it goes, and so it goes, and so it goes";
    assert_eq!(
        pipeline.compress(input).unwrap(),
        pipeline.compress(input).unwrap()
    );
}

#[test]
fn test_limit_error_surfaces_verbatim() {
    // The Huffman stage rejects wide alphabets; the pipeline must not
    // wrap or swallow that.
    let pipeline = Pipeline::parse("huffman,rle").unwrap();
    let input: Vec<u8> = (0..=255).collect();
    let err = pipeline.compress(&input).unwrap_err();
    assert!(matches!(err, BytepressError::TreeTooLarge { .. }));
}

#[test]
fn test_garbage_rejected_by_reverse_chain() {
    let pipeline = Pipeline::parse("rle,lzw").unwrap();
    let err = pipeline.decompress(&[0x01]).unwrap_err();
    assert!(matches!(err, BytepressError::MalformedFrame { .. }));
}
