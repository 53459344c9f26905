use std::path::{Path, PathBuf};

use checksums::Md5Digest;

/// Digest of a file's contents together with the path and byte count that
/// produced it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FileFingerprint {
    path: PathBuf,
    digest: Md5Digest,
    len: u64,
}

impl FileFingerprint {
    /// Creates a fingerprint record.
    #[must_use]
    pub const fn new(path: PathBuf, digest: Md5Digest, len: u64) -> Self {
        Self { path, digest, len }
    }

    /// Path of the fingerprinted file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Content digest.
    #[must_use]
    pub const fn digest(&self) -> Md5Digest {
        self.digest
    }

    /// Number of bytes hashed.
    #[must_use]
    pub const fn len(&self) -> u64 {
        self.len
    }

    /// Reports whether the file was empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}
