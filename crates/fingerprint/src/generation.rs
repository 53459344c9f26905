//! crates/fingerprint/src/generation.rs
//!
//! File fingerprint generation from input data.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

#[cfg(feature = "tracing")]
use tracing::instrument;

use checksums::{Md5, Md5Digest};

use crate::error::FingerprintError;
use crate::file::FileFingerprint;

/// Computes the MD5 digest of everything `reader` yields until end-of-stream.
///
/// Chunks are fed to the engine in arrival order; a read returning zero bytes
/// ends the stream and finalizes the digest exactly once.
///
/// # Errors
///
/// Propagates the first non-retryable I/O error raised by `reader`.
pub fn fingerprint_reader<R: Read>(reader: &mut R) -> io::Result<Md5Digest> {
    let mut buffer = vec![0u8; Md5::DEFAULT_READER_BUFFER_LEN];
    fingerprint_reader_with_buffer(reader, &mut buffer)
}

/// Variant of [`fingerprint_reader`] reusing a caller-provided buffer.
///
/// # Errors
///
/// Returns [`io::ErrorKind::InvalidInput`] for an empty buffer; otherwise
/// propagates reader errors unchanged.
pub fn fingerprint_reader_with_buffer<R: Read>(
    reader: &mut R,
    buffer: &mut [u8],
) -> io::Result<Md5Digest> {
    let mut hasher = Md5::new();
    hasher.update_reader_with_buffer(reader, buffer)?;
    Ok(hasher.finalize())
}

/// Fingerprints the file at `path`.
///
/// The file handle is closed unconditionally once hashing finishes, whether
/// it succeeded or failed.
///
/// # Errors
///
/// - [`FingerprintError::Open`] when the file cannot be opened; the
///   underlying system error is surfaced unchanged and never retried.
/// - [`FingerprintError::Read`] when a read fails mid-stream.
#[cfg_attr(
    feature = "tracing",
    instrument(skip_all, fields(path = %path.as_ref().display()), name = "fingerprint_file")
)]
pub fn fingerprint_file(path: impl AsRef<Path>) -> Result<FileFingerprint, FingerprintError> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|source| FingerprintError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut hasher = Md5::new();
    let len = hasher
        .update_reader(&mut file)
        .map_err(|source| FingerprintError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(FileFingerprint::new(
        path.to_path_buf(),
        hasher.finalize(),
        len,
    ))
}

/// Fingerprints `name` resolved relative to `dir`.
///
/// # Errors
///
/// Same as [`fingerprint_file`].
pub fn fingerprint_file_in(
    dir: impl AsRef<Path>,
    name: impl AsRef<Path>,
) -> Result<FileFingerprint, FingerprintError> {
    fingerprint_file(dir.as_ref().join(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reader_digest_matches_one_shot() {
        let data = b"message digest";
        let mut reader = data.as_slice();
        let digest = fingerprint_reader(&mut reader).expect("in-memory reads");
        assert_eq!(digest, Md5::digest(data));
    }

    #[test]
    fn reader_with_tiny_buffer_still_matches() {
        let data: Vec<u8> = (0..1000u32).map(|i| (i % 256) as u8).collect();
        let mut reader = data.as_slice();
        let mut buffer = [0u8; 7];
        let digest =
            fingerprint_reader_with_buffer(&mut reader, &mut buffer).expect("in-memory reads");
        assert_eq!(digest, Md5::digest(&data));
    }

    #[test]
    fn empty_stream_yields_the_empty_digest() {
        let mut reader = io::empty();
        let digest = fingerprint_reader(&mut reader).expect("empty reader");
        assert_eq!(digest.to_string(), "d41d8cd98f00b204e9800998ecf8427e");
    }
}
