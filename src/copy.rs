//! Overlap-aware copy routines for back-reference replay.
//!
//! During decompression a match is replayed by copying already-produced
//! bytes forward within the one destination buffer. The back-reference
//! distance may be shorter than the match length (distance 1, length 100
//! replicates a single byte 100 times), so the regions can overlap and the
//! byte-wise forward replay is the only universally correct strategy. The
//! bulk variants apply only when the gap proves the regions disjoint.
//!
//! Every routine verifies its bounds before writing and reports violations
//! as [`Lz4Error::MalformedInput`]; offsets come from the compressed stream
//! and are attacker-controlled.

use crate::types::{Lz4Error, COPY_LENGTH};

/// Round `len` up to the wild-copy granularity.
#[inline(always)]
fn wild_len(len: usize) -> usize {
    ((len - 1) & !(COPY_LENGTH - 1)) + COPY_LENGTH
}

/// Byte-wise forward replay of a back-reference within `dest`.
///
/// Correct for every overlap, including distance 1.
pub fn exact_incremental_copy(
    dest: &mut [u8],
    match_off: usize,
    d_off: usize,
    match_len: usize,
) -> Result<(), Lz4Error> {
    if match_len == 0 {
        return Ok(());
    }
    if match_off >= d_off || d_off + match_len > dest.len() {
        return Err(Lz4Error::MalformedInput);
    }
    for i in 0..match_len {
        dest[d_off + i] = dest[match_off + i];
    }
    Ok(())
}

/// Replay a back-reference, taking a single bulk copy when the gap
/// `d_off - match_off` proves the regions disjoint; otherwise fall back to
/// the byte-wise replay.
pub fn safe_incremental_copy(
    dest: &mut [u8],
    match_off: usize,
    d_off: usize,
    match_len: usize,
) -> Result<(), Lz4Error> {
    if match_len == 0 {
        return Ok(());
    }
    if match_off >= d_off || d_off + match_len > dest.len() {
        return Err(Lz4Error::MalformedInput);
    }
    if d_off - match_off >= match_len {
        dest.copy_within(match_off..match_off + match_len, d_off);
    } else {
        for i in 0..match_len {
            dest[d_off + i] = dest[match_off + i];
        }
    }
    Ok(())
}

/// Replay a back-reference with the over-copying bulk path.
///
/// The bulk branch copies up to the next multiple-of-8 boundary above
/// `match_len` and requires that much room past both offsets; the layer
/// allocating the destination must guarantee the slack. Bytes written past
/// `d_off + match_len` are not part of the logical output. Overlapping
/// references fall back to the byte-wise replay.
pub fn wild_incremental_copy(
    dest: &mut [u8],
    match_off: usize,
    d_off: usize,
    match_len: usize,
) -> Result<(), Lz4Error> {
    if match_len == 0 {
        return Ok(());
    }
    if match_off >= d_off || d_off + match_len > dest.len() {
        return Err(Lz4Error::MalformedInput);
    }
    if d_off - match_off >= match_len {
        let fast_len = wild_len(match_len);
        if match_off + fast_len > dest.len() || d_off + fast_len > dest.len() {
            return Err(Lz4Error::MalformedInput);
        }
        dest.copy_within(match_off..match_off + fast_len, d_off);
    } else {
        for i in 0..match_len {
            dest[d_off + i] = dest[match_off + i];
        }
    }
    Ok(())
}

/// Exact-length copy between two buffers.
pub fn safe_copy(
    src: &[u8],
    s_off: usize,
    dest: &mut [u8],
    d_off: usize,
    len: usize,
) -> Result<(), Lz4Error> {
    if s_off + len > src.len() || d_off + len > dest.len() {
        return Err(Lz4Error::MalformedInput);
    }
    dest[d_off..d_off + len].copy_from_slice(&src[s_off..s_off + len]);
    Ok(())
}

/// Two-buffer copy rounded up to the 8-byte boundary.
///
/// May write up to 7 bytes past `d_off + len`; both regions must hold the
/// rounded length. The encoder uses this for literal runs, whose capacity
/// check reserves the margin.
pub fn wild_copy(
    src: &[u8],
    s_off: usize,
    dest: &mut [u8],
    d_off: usize,
    len: usize,
) -> Result<(), Lz4Error> {
    if len == 0 {
        return Ok(());
    }
    let fast_len = wild_len(len);
    if s_off + fast_len > src.len() || d_off + fast_len > dest.len() {
        return Err(Lz4Error::MalformedInput);
    }
    dest[d_off..d_off + fast_len].copy_from_slice(&src[s_off..s_off + fast_len]);
    Ok(())
}
