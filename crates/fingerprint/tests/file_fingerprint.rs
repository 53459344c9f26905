//! End-to-end tests for the file-level fingerprint driver.

use std::fs;
use std::io::ErrorKind;

use checksums::Md5;
use fingerprint::{FingerprintError, fingerprint_file, fingerprint_file_in};

#[test]
fn ten_thousand_zero_bytes_match_in_memory_digest() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("zeros.bin");
    let content = vec![0u8; 10_000];
    fs::write(&path, &content).expect("write test file");

    let fingerprint = fingerprint_file(&path).expect("hash file");
    assert_eq!(fingerprint.digest(), Md5::digest(&content));
    assert_eq!(fingerprint.len(), 10_000);
    assert_eq!(fingerprint.path(), path);
}

#[test]
fn empty_file_yields_the_empty_digest() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("empty");
    fs::write(&path, b"").expect("write test file");

    let fingerprint = fingerprint_file(&path).expect("hash file");
    assert_eq!(
        fingerprint.digest().to_string(),
        "d41d8cd98f00b204e9800998ecf8427e"
    );
    assert!(fingerprint.is_empty());
}

#[test]
fn known_content_matches_reference_vector() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("abc.txt");
    fs::write(&path, b"abc").expect("write test file");

    let fingerprint = fingerprint_file(&path).expect("hash file");
    assert_eq!(
        fingerprint.digest().to_string(),
        "900150983cd24fb0d6963f7d28e17f72"
    );
}

#[test]
fn directory_relative_lookup_matches_absolute_path() {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::write(dir.path().join("data.bin"), b"message digest").expect("write test file");

    let relative = fingerprint_file_in(dir.path(), "data.bin").expect("hash via dir");
    let absolute = fingerprint_file(dir.path().join("data.bin")).expect("hash via path");
    assert_eq!(relative.digest(), absolute.digest());
    assert_eq!(relative.len(), absolute.len());
}

#[test]
fn missing_file_surfaces_open_error_with_os_code() {
    let dir = tempfile::tempdir().expect("create temp dir");

    let err = fingerprint_file_in(dir.path(), "no-such-file").unwrap_err();
    assert!(matches!(err, FingerprintError::Open { .. }));
    assert_eq!(err.io_error().kind(), ErrorKind::NotFound);

    // The negative-errno form is derived from the same system error.
    let code = err.os_error_code().expect("open failure carries an errno");
    assert!(code < 0);
}

#[test]
fn file_larger_than_reader_buffer_is_streamed() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("large.bin");
    let content: Vec<u8> = (0..(Md5::DEFAULT_READER_BUFFER_LEN * 3 + 17))
        .map(|i| (i % 251) as u8)
        .collect();
    fs::write(&path, &content).expect("write test file");

    let fingerprint = fingerprint_file(&path).expect("hash file");
    assert_eq!(fingerprint.digest(), Md5::digest(&content));
    assert_eq!(fingerprint.len(), content.len() as u64);
}
