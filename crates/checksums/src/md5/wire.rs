//! Little-endian word codec for the MD5 block format.
//!
//! RFC 1321 defines the digest over a little-endian byte encoding regardless
//! of host architecture. All conversions between message bytes and 32-bit
//! words go through this module so the rest of the engine operates purely on
//! native words.

use super::block::BLOCK_LEN;

/// Number of 32-bit words in one message block.
pub(crate) const BLOCK_WORDS: usize = BLOCK_LEN / 4;

/// Reads the little-endian 32-bit word starting at `offset`.
///
/// The buffer must hold at least `offset + 4` bytes; a shorter buffer is a
/// programming error and panics.
#[inline]
pub(crate) fn decode_word(bytes: &[u8], offset: usize) -> u32 {
    let mut word = [0u8; 4];
    word.copy_from_slice(&bytes[offset..offset + 4]);
    u32::from_le_bytes(word)
}

/// Writes `word` as four little-endian bytes starting at `offset`.
///
/// The buffer must hold at least `offset + 4` bytes; a shorter buffer is a
/// programming error and panics.
#[inline]
pub(crate) fn encode_word(bytes: &mut [u8], offset: usize, word: u32) {
    bytes[offset..offset + 4].copy_from_slice(&word.to_le_bytes());
}

/// Decodes a full 64-byte block into its sixteen message words.
#[inline]
pub(crate) fn decode_block(block: &[u8]) -> [u32; BLOCK_WORDS] {
    let mut words = [0u32; BLOCK_WORDS];
    for (index, word) in words.iter_mut().enumerate() {
        *word = decode_word(block, index * 4);
    }
    words
}
