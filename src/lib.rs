//! Core primitives of the LZ4 block format.
//!
//! This crate is the format-defining kernel shared by LZ4 block encoders and
//! decoders: multiplicative hashing of 4-byte windows for match discovery,
//! the token/sequence encoding scheme, a general-purpose varint codec,
//! overlap-aware copy routines for back-reference replay, and the
//! common-byte scanners used to measure and extend matches.
//!
//! Everything here operates on caller-supplied byte slices with explicit
//! offsets; no routine owns a cursor or retains state across calls, so every
//! routine is safe to drive concurrently on disjoint buffers.
//!
//! Match-finding strategy, hash-table data structures, the frame/streaming
//! wrapper, and checksums belong to the layers built on top of this crate.

pub mod copy;
pub mod encode;
pub mod hash;
pub mod scan;
pub mod types;
pub mod vint;

// Re-export the most important public API items at the crate level.
pub use copy::{
    exact_incremental_copy, safe_copy, safe_incremental_copy, wild_copy, wild_incremental_copy,
};
pub use encode::{encode_sequence, last_literals, max_compressed_length, write_len};
pub use hash::{hash, hash64k, hash64k_at, hash_at, hash_hc, hash_hc_at};
pub use scan::{common_bytes, common_bytes_backward, read_u32_eq};
pub use types::{Lz4Error, Match};
pub use vint::{read_vint, vint_length, write_vint};
