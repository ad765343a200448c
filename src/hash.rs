//! Multiplicative hashing of 4-byte windows.
//!
//! Maps the 4 bytes at a source position, read little-endian, to a bucket
//! index at one of three table resolutions. Match-finders use the index to
//! bucket candidate positions; collisions are expected and left for the
//! match-finder to resolve.

use crate::types::{read_u32_le, HASH_LOG, HASH_LOG_64K, HASH_LOG_HC};

/// Knuth multiplicative-hash constant: 2³² divided by the golden ratio,
/// rounded to odd. Multiplication wraps; only the top bits are kept.
const HASH_MULTIPLIER: u32 = 2_654_435_761;

/// Bucket index in the standard table, `[0, HASH_TABLE_SIZE)`.
#[inline(always)]
pub fn hash(sequence: u32) -> u32 {
    sequence.wrapping_mul(HASH_MULTIPLIER) >> (32 - HASH_LOG)
}

/// Bucket index in the 64K table, `[0, HASH_TABLE_SIZE_64K)`.
///
/// One extra index bit over [`hash`]; usable when the whole input fits in
/// `LZ4_64K_LIMIT` bytes.
#[inline(always)]
pub fn hash64k(sequence: u32) -> u32 {
    sequence.wrapping_mul(HASH_MULTIPLIER) >> (32 - HASH_LOG_64K)
}

/// Bucket index in the high-compression table, `[0, HASH_TABLE_SIZE_HC)`.
#[inline(always)]
pub fn hash_hc(sequence: u32) -> u32 {
    sequence.wrapping_mul(HASH_MULTIPLIER) >> (32 - HASH_LOG_HC)
}

/// Hash the 4-byte window starting at `off`.
#[inline(always)]
pub fn hash_at(buf: &[u8], off: usize) -> u32 {
    hash(read_u32_le(buf, off))
}

/// Hash the 4-byte window starting at `off` for the 64K table.
#[inline(always)]
pub fn hash64k_at(buf: &[u8], off: usize) -> u32 {
    hash64k(read_u32_le(buf, off))
}

/// Hash the 4-byte window starting at `off` for the high-compression table.
#[inline(always)]
pub fn hash_hc_at(buf: &[u8], off: usize) -> u32 {
    hash_hc(read_u32_le(buf, off))
}
