//! Incremental MD5 digest engine.
//!
//! The engine follows the classical iterative construction: input bytes are
//! accumulated into 64-byte blocks, each completed block is folded into the
//! four-word accumulator state by the compression function, and finalization
//! appends the standard padding and bit-length trailer before encoding the
//! state as the 16-byte digest.
//!
//! # Upstream Reference
//!
//! Behavior matches rsync's bundled RFC 1321 implementation (`lib/md5.c`)
//! bit-for-bit, including the padding rule and the little-endian length
//! encoding.
//!
//! # Example
//!
//! ```rust
//! use checksums::Md5;
//!
//! let mut hasher = Md5::new();
//! hasher.update(b"message ");
//! hasher.update(b"digest");
//! assert_eq!(hasher.finalize().to_string(), "f96b697d7cb7938d525a2f31aaf161d0");
//! ```

/// Macro to implement From trait for both owned and reference types.
///
/// This reduces boilerplate when implementing conversions that work
/// identically for both `T` and `&T`. The macro generates both
/// implementations, ensuring consistent behavior and eliminating
/// duplicate code.
///
/// # Arguments
///
/// * `$source` - Source type (will also generate `&$source`)
/// * `$target` - Target type
/// * `$method` - Method to call on the source for conversion
macro_rules! impl_from_owned_and_ref {
    ($source:ty => $target:ty, $method:ident) => {
        impl From<$source> for $target {
            #[inline]
            fn from(value: $source) -> Self {
                value.$method()
            }
        }

        impl From<&$source> for $target {
            #[inline]
            fn from(value: &$source) -> Self {
                value.$method()
            }
        }
    };
}

mod block;
mod digest;
mod error;
mod wire;

pub use digest::Md5Digest;
pub use error::DigestSliceError;

use std::fmt;
use std::io::{self, Read};

use block::{BLOCK_LEN, INIT_A, INIT_B, INIT_C, INIT_D};

/// Padding source: a single `0x80` marker followed by zeros.
const PADDING: [u8; BLOCK_LEN] = {
    let mut pad = [0u8; BLOCK_LEN];
    pad[0] = 0x80;
    pad
};

/// Streaming MD5 hasher.
///
/// Input may arrive in chunks of any size; chunk boundaries are
/// observationally transparent. At most 63 bytes are ever buffered between
/// [`update`](Self::update) calls, and [`finalize`](Self::finalize) consumes
/// the hasher so a spent state cannot be reused.
///
/// Each hash computation owns its state exclusively; hashing several streams
/// concurrently requires one `Md5` instance per stream.
///
/// # Examples
///
/// ```
/// use checksums::Md5;
///
/// let mut incremental = Md5::new();
/// incremental.update(b"Hello, ");
/// incremental.update(b"fingerprint!");
///
/// // Equivalent to hashing the concatenated input in one call.
/// assert_eq!(
///     incremental.finalize(),
///     Md5::digest(b"Hello, fingerprint!"),
/// );
/// ```
#[derive(Clone)]
pub struct Md5 {
    state: [u32; 4],
    /// Total bytes consumed, wrapping mod 2^64. The buffer fill is
    /// `len % 64`; the finalization bit count is `len * 8` mod 2^64.
    len: u64,
    buffer: [u8; BLOCK_LEN],
}

impl Md5 {
    /// Default buffer length used by [`update_reader`](Self::update_reader).
    pub const DEFAULT_READER_BUFFER_LEN: usize = 32 * 1024;

    /// Creates a hasher with the fixed RFC 1321 initial state.
    ///
    /// # Examples
    ///
    /// ```
    /// use checksums::Md5;
    ///
    /// let hasher = Md5::new();
    /// assert!(hasher.is_empty());
    /// assert_eq!(hasher.message_len(), 0);
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: [INIT_A, INIT_B, INIT_C, INIT_D],
            len: 0,
            buffer: [0u8; BLOCK_LEN],
        }
    }

    /// Resets the hasher back to its freshly constructed state.
    pub const fn reset(&mut self) {
        self.state = [INIT_A, INIT_B, INIT_C, INIT_D];
        self.len = 0;
        self.buffer = [0u8; BLOCK_LEN];
    }

    /// Returns the number of bytes consumed so far.
    #[inline]
    #[must_use]
    pub const fn message_len(&self) -> u64 {
        self.len
    }

    /// Returns `true` if no bytes have been consumed yet.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Feeds additional bytes into the digest state.
    ///
    /// An empty slice is a no-op. A single call handles every boundary shape:
    /// input that only tops up the internal buffer, input completing one or
    /// more full blocks, and input spanning many blocks plus a partial tail.
    pub fn update(&mut self, data: &[u8]) {
        if data.is_empty() {
            return;
        }

        let fill = (self.len % BLOCK_LEN as u64) as usize;
        self.len = self.len.wrapping_add(data.len() as u64);

        let mut input = data;
        if fill != 0 {
            let space = BLOCK_LEN - fill;
            if input.len() < space {
                self.buffer[fill..fill + input.len()].copy_from_slice(input);
                return;
            }
            let (head, tail) = input.split_at(space);
            self.buffer[fill..].copy_from_slice(head);
            block::compress(&mut self.state, &self.buffer);
            input = tail;
        }

        let mut blocks = input.chunks_exact(BLOCK_LEN);
        for full in blocks.by_ref() {
            block::compress(&mut self.state, full);
        }

        let tail = blocks.remainder();
        if !tail.is_empty() {
            self.buffer[..tail.len()].copy_from_slice(tail);
        }
    }

    /// Updates the hasher by consuming data from an [`io::Read`]
    /// implementation until end-of-stream.
    ///
    /// Reads are retried on [`io::ErrorKind::Interrupted`]; any other error
    /// propagates unchanged, leaving the hasher with exactly the bytes
    /// observed so far. Returns the total number of bytes consumed.
    ///
    /// # Errors
    ///
    /// Returns [`io::ErrorKind::InvalidInput`] when `buffer` is empty, or the
    /// first non-retryable error raised by `reader`.
    #[inline]
    pub fn update_reader_with_buffer<R: Read>(
        &mut self,
        reader: &mut R,
        buffer: &mut [u8],
    ) -> io::Result<u64> {
        if buffer.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "md5 reader buffer must not be empty",
            ));
        }

        let mut total = 0u64;
        loop {
            match reader.read(buffer) {
                Ok(0) => break,
                Ok(n) => {
                    self.update(&buffer[..n]);
                    Self::saturating_increment_total(&mut total, n);
                }
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            }
        }
        Ok(total)
    }

    /// Convenience wrapper around
    /// [`update_reader_with_buffer`](Self::update_reader_with_buffer) that
    /// allocates a heap buffer of [`DEFAULT_READER_BUFFER_LEN`](Self::DEFAULT_READER_BUFFER_LEN) bytes.
    ///
    /// # Errors
    ///
    /// Propagates the first non-retryable error raised by `reader`.
    pub fn update_reader<R: Read>(&mut self, reader: &mut R) -> io::Result<u64> {
        let mut buffer = vec![0u8; Self::DEFAULT_READER_BUFFER_LEN];
        self.update_reader_with_buffer(reader, &mut buffer)
    }

    /// Finalizes the digest and returns the 128-bit MD5 output.
    ///
    /// Consumes the hasher: the padding and length trailer may only be
    /// appended once, so a spent state cannot observe further `update` calls
    /// by construction. Start a fresh [`Md5::new`] for the next computation.
    #[must_use]
    pub fn finalize(mut self) -> Md5Digest {
        // Bit length of the message, captured before padding is appended.
        let bits = self.len.wrapping_mul(8);

        let fill = (self.len % BLOCK_LEN as u64) as usize;
        let pad_len = if fill < 56 { 56 - fill } else { 120 - fill };

        let mut trailer = [0u8; 8];
        wire::encode_word(&mut trailer, 0, bits as u32);
        wire::encode_word(&mut trailer, 4, (bits >> 32) as u32);

        // Both appends route through `update`: the padding may complete one
        // block, the trailer always completes the last.
        self.update(&PADDING[..pad_len]);
        self.update(&trailer);

        let mut bytes = [0u8; Md5Digest::LEN];
        for (index, word) in self.state.iter().enumerate() {
            wire::encode_word(&mut bytes, index * 4, *word);
        }
        Md5Digest::from_bytes(bytes)
    }

    /// Convenience helper that computes the MD5 digest for `data` in one
    /// shot.
    ///
    /// # Examples
    ///
    /// ```
    /// use checksums::Md5;
    ///
    /// let digest = Md5::digest(b"");
    /// assert_eq!(digest.to_string(), "d41d8cd98f00b204e9800998ecf8427e");
    /// ```
    #[must_use]
    pub fn digest(data: &[u8]) -> Md5Digest {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }

    #[inline]
    fn saturating_increment_total(total: &mut u64, amount: usize) {
        let inc = u64::try_from(amount).unwrap_or(u64::MAX);
        *total = total.saturating_add(inc);
    }
}

impl Default for Md5 {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Md5 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Accumulator words are opaque intermediate state until finalize.
        f.debug_struct("Md5")
            .field("message_len", &self.len)
            .finish_non_exhaustive()
    }
}
