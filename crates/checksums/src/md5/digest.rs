use core::fmt;

use super::error::DigestSliceError;

/// 128-bit MD5 digest value.
///
/// The digest is an opaque 16-byte array; [`fmt::Display`] renders the
/// conventional 32 lowercase hexadecimal characters.
///
/// # Examples
///
/// ```
/// use checksums::Md5;
///
/// let digest = Md5::digest(b"abc");
/// assert_eq!(digest.to_string(), "900150983cd24fb0d6963f7d28e17f72");
/// assert_eq!(format!("{digest:X}"), "900150983CD24FB0D6963F7D28E17F72");
/// ```
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Md5Digest([u8; Md5Digest::LEN]);

impl Md5Digest {
    /// Number of bytes in an MD5 digest.
    pub const LEN: usize = 16;

    /// Wraps a raw 16-byte digest.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; Self::LEN]) -> Self {
        Self(bytes)
    }

    /// Reconstructs a digest from a byte slice.
    ///
    /// # Errors
    ///
    /// Returns [`DigestSliceError`] when `bytes` is not exactly
    /// [`Md5Digest::LEN`] bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DigestSliceError> {
        let raw: [u8; Self::LEN] = bytes
            .try_into()
            .map_err(|_| DigestSliceError::new(bytes.len()))?;
        Ok(Self(raw))
    }

    /// Borrows the raw digest bytes.
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }

    /// Consumes the digest and returns the raw bytes.
    #[inline]
    #[must_use]
    pub const fn into_bytes(self) -> [u8; Self::LEN] {
        self.0
    }

    /// Renders the digest as 32 lowercase hexadecimal characters.
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Md5Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Md5Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Md5Digest({self:x})")
    }
}

impl fmt::LowerHex for Md5Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for Md5Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}

impl AsRef<[u8]> for Md5Digest {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; Md5Digest::LEN]> for Md5Digest {
    #[inline]
    fn from(bytes: [u8; Md5Digest::LEN]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl_from_owned_and_ref!(Md5Digest => [u8; Md5Digest::LEN], into_bytes);

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [u8; Md5Digest::LEN] = [
        0x90, 0x01, 0x50, 0x98, 0x3c, 0xd2, 0x4f, 0xb0, 0xd6, 0x96, 0x3f, 0x7d, 0x28, 0xe1, 0x7f,
        0x72,
    ];

    #[test]
    fn display_renders_lowercase_hex() {
        let digest = Md5Digest::from_bytes(SAMPLE);
        assert_eq!(digest.to_string(), "900150983cd24fb0d6963f7d28e17f72");
        assert_eq!(digest.to_hex(), digest.to_string());
    }

    #[test]
    fn upper_hex_renders_uppercase() {
        let digest = Md5Digest::from_bytes(SAMPLE);
        assert_eq!(
            format!("{digest:X}"),
            "900150983CD24FB0D6963F7D28E17F72"
        );
    }

    #[test]
    fn debug_embeds_hex_form() {
        let digest = Md5Digest::from_bytes(SAMPLE);
        assert_eq!(
            format!("{digest:?}"),
            "Md5Digest(900150983cd24fb0d6963f7d28e17f72)"
        );
    }

    #[test]
    fn from_slice_round_trips() {
        let digest = Md5Digest::from_bytes(SAMPLE);
        let rebuilt = Md5Digest::from_slice(digest.as_bytes()).expect("length matches");
        assert_eq!(rebuilt, digest);
    }

    #[test]
    fn from_slice_rejects_wrong_length() {
        let err = Md5Digest::from_slice(&SAMPLE[..5]).unwrap_err();
        assert_eq!(err.len(), 5);

        let long = [0u8; 17];
        let err = Md5Digest::from_slice(&long).unwrap_err();
        assert_eq!(err.len(), 17);
    }

    #[test]
    fn conversions_expose_raw_bytes() {
        let digest = Md5Digest::from_bytes(SAMPLE);
        let owned: [u8; Md5Digest::LEN] = digest.into();
        assert_eq!(owned, SAMPLE);
        let from_ref: [u8; Md5Digest::LEN] = (&digest).into();
        assert_eq!(from_ref, SAMPLE);
        assert_eq!(digest.as_ref(), SAMPLE.as_slice());
    }
}
