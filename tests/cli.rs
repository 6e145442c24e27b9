//! End-to-end tests for the `huffpack` binary.

#![cfg(feature = "cli")]

use std::ffi::OsStr;
use std::fs;
use std::process::{Command, Output};

use tempfile::tempdir;

fn huffpack(args: &[&OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_huffpack"))
        .args(args)
        .output()
        .expect("run huffpack")
}

#[test]
fn test_compress_then_decompress_default_paths() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("story.txt");
    let original = b"It was the best of times, it was the worst of times.".repeat(20);
    fs::write(&input, &original).unwrap();

    let out = huffpack(&[input.as_os_str()]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let compressed = dir.path().join("story.txt.huff");
    assert!(compressed.exists());
    assert!(fs::metadata(&compressed).unwrap().len() < original.len() as u64);

    // Decompressing writes story.txt back next to the .huff file
    fs::remove_file(&input).unwrap();
    let out = huffpack(&[OsStr::new("--decompress"), compressed.as_os_str()]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(fs::read(&input).unwrap(), original);
}

#[test]
fn test_explicit_output_path() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("data.bin");
    let packed = dir.path().join("packed");
    let restored = dir.path().join("restored");
    fs::write(&input, [0u8, 1, 2, 3, 0, 0, 0, 255]).unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_huffpack"))
        .arg(&input)
        .arg("-o")
        .arg(&packed)
        .output()
        .unwrap();
    assert!(out.status.success());

    let out = Command::new(env!("CARGO_BIN_EXE_huffpack"))
        .arg("-d")
        .arg(&packed)
        .arg("--output")
        .arg(&restored)
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(fs::read(&restored).unwrap(), fs::read(&input).unwrap());
}

#[test]
fn test_empty_file_roundtrip() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("empty");
    fs::write(&input, b"").unwrap();

    assert!(huffpack(&[input.as_os_str()]).status.success());
    let compressed = dir.path().join("empty.huff");
    assert_eq!(fs::read(&compressed).unwrap().len(), 12);

    fs::remove_file(&input).unwrap();
    assert!(huffpack(&[OsStr::new("-d"), compressed.as_os_str()]).status.success());
    assert!(fs::read(&input).unwrap().is_empty());
}

#[test]
fn test_verbose_reports_tables() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("aaab.txt");
    fs::write(&input, b"aaab").unwrap();

    let out = huffpack(&[OsStr::new("--verbose"), input.as_os_str()]);
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Frequency table (2 symbols)"), "{stderr}");
    assert!(stderr.contains("Code table"), "{stderr}");
}

#[test]
fn test_verbose_prints_tree_outline() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("aaab.txt");
    fs::write(&input, b"aaab").unwrap();

    let out = huffpack(&[OsStr::new("-v"), input.as_os_str()]);
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Huffman tree (depth 1):"), "{stderr}");
    assert!(stderr.contains("  4:\n    1: 'b'\n    3: 'a'\n"), "{stderr}");
}

#[test]
fn test_missing_input_fails() {
    let dir = tempdir().unwrap();
    let out = huffpack(&[dir.path().join("does-not-exist").as_os_str()]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).starts_with("Error:"));
}

#[test]
fn test_decompress_corrupt_input_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("bad.huff");
    fs::write(&input, [9u8, 0, 0, 0, 1]).unwrap();

    let out = huffpack(&[OsStr::new("-d"), input.as_os_str()]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Format error"), "{stderr}");
}
