use thiserror::Error;

/// Error returned when reconstructing an MD5 digest from a byte slice of the
/// wrong length.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("md5 digest requires {} bytes, received {len}", DigestSliceError::EXPECTED_LEN)]
pub struct DigestSliceError {
    len: usize,
}

impl DigestSliceError {
    /// Number of bytes required to decode an MD5 digest.
    pub const EXPECTED_LEN: usize = 16;

    pub(crate) const fn new(len: usize) -> Self {
        Self { len }
    }

    /// Number of bytes the caller supplied when the error was raised.
    #[must_use]
    pub const fn len(self) -> usize {
        self.len
    }

    /// Reports whether the provided slice was empty when the error occurred.
    ///
    /// # Examples
    ///
    /// ```
    /// use checksums::Md5Digest;
    ///
    /// let err = Md5Digest::from_slice(&[]).unwrap_err();
    /// assert!(err.is_empty());
    /// ```
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }
}
