use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors returned when computing file fingerprints.
///
/// Open failures and mid-stream read failures are kept distinct so callers
/// can tell a missing or unreadable file from a transport that died partway
/// through. Neither case is retried.
#[derive(Debug, Error)]
pub enum FingerprintError {
    /// The named file could not be opened for reading.
    #[error("failed to open {path}: {source}")]
    Open {
        /// Path handed to the open call.
        path: PathBuf,
        /// Underlying system error, surfaced unchanged.
        #[source]
        source: io::Error,
    },
    /// Reading the file failed after it was opened.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path of the file being read.
        path: PathBuf,
        /// Underlying system error, surfaced unchanged.
        #[source]
        source: io::Error,
    },
}

impl FingerprintError {
    /// Path of the file involved in the failure.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Open { path, .. } | Self::Read { path, .. } => path,
        }
    }

    /// Underlying I/O error.
    #[must_use]
    pub fn io_error(&self) -> &io::Error {
        match self {
            Self::Open { source, .. } | Self::Read { source, .. } => source,
        }
    }

    /// Negative error code derived from the operating system error, when one
    /// exists.
    ///
    /// Mirrors the `-errno` convention of C checksum drivers so callers that
    /// speak numeric codes can recover one; synthetic I/O errors with no OS
    /// origin yield `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fingerprint::fingerprint_file;
    ///
    /// let err = fingerprint_file("/definitely/not/here").unwrap_err();
    /// assert_eq!(err.os_error_code(), Some(-libc_enoent()));
    ///
    /// fn libc_enoent() -> i32 {
    ///     std::io::Error::from(std::io::ErrorKind::NotFound)
    ///         .raw_os_error()
    ///         .unwrap_or(2)
    /// }
    /// ```
    #[must_use]
    pub fn os_error_code(&self) -> Option<i32> {
        self.io_error().raw_os_error().map(|code| -code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_error_reports_path_and_code() {
        let err = FingerprintError::Open {
            path: PathBuf::from("/tmp/missing"),
            source: io::Error::from_raw_os_error(2),
        };
        assert_eq!(err.path(), Path::new("/tmp/missing"));
        assert_eq!(err.os_error_code(), Some(-2));
        assert!(err.to_string().starts_with("failed to open /tmp/missing"));
    }

    #[test]
    fn synthetic_errors_have_no_os_code() {
        let err = FingerprintError::Read {
            path: PathBuf::from("stream"),
            source: io::Error::other("broken transport"),
        };
        assert_eq!(err.os_error_code(), None);
        assert!(err.to_string().starts_with("failed to read stream"));
    }
}
