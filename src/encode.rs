//! Sequence encoder.
//!
//! Serialises one literal run plus the match that follows it (or, at end of
//! input, one trailing literal-only run) into the token format: one token
//! byte whose high nibble holds the truncated literal-run length and whose
//! low nibble holds the truncated match length, optional sentinel-255
//! length-extension bytes, the literal bytes, and the 2-byte little-endian
//! back-reference distance.

use crate::copy::{safe_copy, wild_copy};
use crate::types::{
    write_u16_le, Lz4Error, LAST_LITERALS, MAX_DISTANCE, MIN_MATCH, ML_BITS, ML_MASK, RUN_MASK,
};

/// Worst-case compressed size for `length` input bytes.
///
/// Destinations at least this large can never trigger
/// [`Lz4Error::OutputTooSmall`].
#[inline]
pub const fn max_compressed_length(length: usize) -> usize {
    length + length / 255 + 16
}

/// Emit the sentinel-255 length extension for `len`: a byte 255 per full 255
/// step, then one byte holding the remainder.
///
/// Returns the new destination offset. The caller must have verified the
/// destination capacity beforehand.
pub fn write_len(mut len: usize, dest: &mut [u8], mut d_off: usize) -> usize {
    while len >= 0xFF {
        dest[d_off] = 0xFF;
        d_off += 1;
        len -= 0xFF;
    }
    dest[d_off] = len as u8;
    d_off + 1
}

/// Encode one sequence: the literals in `src[anchor..match_off]` followed by
/// a `match_len`-byte match back-referencing `match_ref`.
///
/// Capacity against `dest_end` is verified before the literals and again
/// before the match-length extension; the token byte is written last, once
/// both nibble overflows are resolved. Returns the new destination offset.
///
/// # Errors
///
/// [`Lz4Error::OutputTooSmall`] when the destination cannot hold the run
/// bytes, worst-case extension bytes, the 2-byte distance, and the
/// `LAST_LITERALS` margin. The destination may already contain partial
/// fields of this sequence; the caller must discard the whole buffer.
pub fn encode_sequence(
    src: &[u8],
    anchor: usize,
    match_off: usize,
    match_ref: usize,
    match_len: usize,
    dest: &mut [u8],
    mut d_off: usize,
    dest_end: usize,
) -> Result<usize, Lz4Error> {
    debug_assert!(anchor <= match_off);
    debug_assert!(match_ref < match_off);
    debug_assert!(match_len >= MIN_MATCH);
    debug_assert!(match_off - match_ref < MAX_DISTANCE);
    debug_assert!(dest_end <= dest.len());

    let run_len = match_off - anchor;
    let token_off = d_off;
    d_off += 1;

    if d_off + run_len + (2 + 1 + LAST_LITERALS) + (run_len >> 8) > dest_end {
        return Err(Lz4Error::OutputTooSmall);
    }

    let mut token: u8;
    if run_len >= RUN_MASK as usize {
        token = (RUN_MASK << ML_BITS) as u8;
        d_off = write_len(run_len - RUN_MASK as usize, dest, d_off);
    } else {
        token = (run_len << ML_BITS) as u8;
    }

    // Literals; the bulk copy may spill into the margin reserved above.
    wild_copy(src, anchor, dest, d_off, run_len)?;
    d_off += run_len;

    // Back-reference distance, least-significant byte first.
    let match_dec = match_off - match_ref;
    write_u16_le(dest, d_off, match_dec as u16);
    d_off += 2;

    let stored_match_len = match_len - MIN_MATCH;
    if d_off + (1 + LAST_LITERALS) + (stored_match_len >> 8) > dest_end {
        return Err(Lz4Error::OutputTooSmall);
    }
    if stored_match_len >= ML_MASK as usize {
        token |= ML_MASK as u8;
        d_off = write_len(stored_match_len - ML_MASK as usize, dest, d_off);
    } else {
        token |= stored_match_len as u8;
    }

    dest[token_off] = token;

    Ok(d_off)
}

/// Emit the final literal-only sequence for the unmatched tail of the input:
/// a token with match nibble 0 and no match fields.
///
/// Returns the new destination offset.
///
/// # Errors
///
/// [`Lz4Error::OutputTooSmall`] when the destination cannot hold the token,
/// extension bytes, and `src_len` literals.
pub fn last_literals(
    src: &[u8],
    s_off: usize,
    src_len: usize,
    dest: &mut [u8],
    mut d_off: usize,
    dest_end: usize,
) -> Result<usize, Lz4Error> {
    debug_assert!(dest_end <= dest.len());

    let run_len = src_len;

    if d_off + run_len + 1 + (run_len + 255 - RUN_MASK as usize) / 255 > dest_end {
        return Err(Lz4Error::OutputTooSmall);
    }

    if run_len >= RUN_MASK as usize {
        dest[d_off] = (RUN_MASK << ML_BITS) as u8;
        d_off += 1;
        d_off = write_len(run_len - RUN_MASK as usize, dest, d_off);
    } else {
        dest[d_off] = (run_len << ML_BITS) as u8;
        d_off += 1;
    }

    // The input tail has no slack to spill into; copy exactly.
    safe_copy(src, s_off, dest, d_off, run_len)?;
    d_off += run_len;

    Ok(d_off)
}
