//! End-to-end tests for the bytepress binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

fn write_input(dir: &tempfile::TempDir, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write test input");
    path
}

fn roundtrip_with(algorithms: &str, contents: &[u8]) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = write_input(&dir, "data.bin", contents);
    let compressed = dir.path().join("data.bin.comp");

    Command::cargo_bin("bytepress")
        .unwrap()
        .arg("compress")
        .arg("-a")
        .arg(algorithms)
        .arg(&input)
        .assert()
        .success();
    assert!(compressed.exists(), "compressed artifact missing");

    // Remove the original so decompression provably recreates it.
    fs::remove_file(&input).unwrap();

    Command::cargo_bin("bytepress")
        .unwrap()
        .arg("decompress")
        .arg("-a")
        .arg(algorithms)
        .arg(&compressed)
        .assert()
        .success();

    assert_eq!(fs::read(&input).unwrap(), contents);
}

#[test]
fn roundtrip_default_algorithm() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "notes.txt", b"tick tock tick tock");

    Command::cargo_bin("bytepress")
        .unwrap()
        .arg("compress")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("notes.txt.comp"));

    Command::cargo_bin("bytepress")
        .unwrap()
        .arg("decompress")
        .arg(dir.path().join("notes.txt.comp"))
        .assert()
        .success();

    assert_eq!(fs::read(&input).unwrap(), b"tick tock tick tock");
}

#[test]
fn roundtrip_single_codecs() {
    for algorithms in ["rle", "lzw", "huffman", "sf", "bwt"] {
        roundtrip_with(algorithms, b"AAABBBCCC mississippi AAABBBCCC");
    }
}

#[test]
fn roundtrip_chained_codecs() {
    roundtrip_with("rle,lzw", b"AAABBBCCC");
    roundtrip_with("bwt,rle,huffman", b"banana bandana banana bandana");
    roundtrip_with("rle,lzw,huffman,sf,bwt", b"tick tock tick tock");
}

#[test]
fn roundtrip_empty_file() {
    roundtrip_with("lzw", b"");
}

#[test]
fn unknown_algorithm_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "data.bin", b"payload");

    Command::cargo_bin("bytepress")
        .unwrap()
        .arg("compress")
        .arg("-a")
        .arg("lzw,ppmd")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported algorithm"));
}

#[test]
fn decompress_requires_comp_extension() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "data.bin", b"payload");

    Command::cargo_bin("bytepress")
        .unwrap()
        .arg("decompress")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains(".comp"));
}

#[test]
fn corrupt_frame_fails_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    // Odd length is malformed for the LZW frame.
    let input = write_input(&dir, "data.bin.comp", &[0x41, 0x00, 0x42]);

    Command::cargo_bin("bytepress")
        .unwrap()
        .arg("decompress")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed frame"));
}

#[test]
fn json_statistics_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "data.bin", &vec![b'X'; 1000]);

    Command::cargo_bin("bytepress")
        .unwrap()
        .arg("compress")
        .arg("-a")
        .arg("rle")
        .arg("--json")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"original_size\": 1000"))
        .stdout(predicate::str::contains("\"algorithms\": \"rle\""));
}
