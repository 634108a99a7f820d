//! Tests for bounded prefix reads

#![allow(clippy::expect_used)]

use std::fs;

use tempfile::TempDir;

use crate::sniff::{sniff_prefix, SNIFF_WINDOW};

#[test]
fn test_empty_file_yields_empty_prefix() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("empty.bin");
    fs::write(&path, b"").expect("Failed to write file");

    let prefix = sniff_prefix(&path).expect("Failed to sniff");
    assert!(prefix.is_empty());
}

#[test]
fn test_short_file_yields_exact_bytes_without_padding() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("short.bin");
    fs::write(&path, b"%P").expect("Failed to write file");

    let prefix = sniff_prefix(&path).expect("Failed to sniff");
    // Exactly two bytes, not a zero-padded 128-byte buffer
    assert_eq!(prefix, b"%P");
}

#[test]
fn test_file_exactly_at_window_yields_full_window() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("exact.bin");
    let content: Vec<u8> = (0..SNIFF_WINDOW as u32).map(|i| (i % 251) as u8).collect();
    fs::write(&path, &content).expect("Failed to write file");

    let prefix = sniff_prefix(&path).expect("Failed to sniff");
    assert_eq!(prefix, content);
}

#[test]
fn test_large_file_truncated_to_window() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("large.bin");
    let content: Vec<u8> = (0..1000u32).map(|i| (i % 251) as u8).collect();
    fs::write(&path, &content).expect("Failed to write file");

    let prefix = sniff_prefix(&path).expect("Failed to sniff");
    assert_eq!(prefix.len(), SNIFF_WINDOW);
    assert_eq!(prefix, &content[..SNIFF_WINDOW]);
}

#[test]
fn test_missing_file_is_an_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("does-not-exist.bin");

    assert!(sniff_prefix(&path).is_err());
}

#[test]
fn test_directory_is_an_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let dir = temp_dir.path().join("subdir");
    fs::create_dir(&dir).expect("Failed to create dir");

    // Opening or reading a directory must surface as a per-file error
    assert!(sniff_prefix(&dir).is_err());
}
