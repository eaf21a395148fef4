//! Variable-length unsigned integers with a shared first byte.
//!
//! # Encoding
//!
//! An integer may start inside a byte whose high bits belong to someone else
//! (node headers keep their type flags in bits 7 and 6). The caller says how
//! many low bits of that first byte belong to the integer:
//!
//! ```text
//! first byte (k = 6):   ┌───┬───┬───┬───────────────────┐
//!                       │ B │ X │ M │ g4 g3 g2 g1 g0    │  M = more follows
//!                       └───┴───┴───┴───────────────────┘
//! next bytes:           ┌───┬───────────────────────────┐
//!                       │ M │ g6 g5 g4 g3 g2 g1 g0      │
//!                       └───┴───────────────────────────┘
//! ```
//!
//! Of the `k` bits, the top one is the more-follows flag and the remaining
//! `k - 1` bits are the most significant group. Every following byte carries
//! its own flag in bit 7 and the next seven bits, most significant group
//! first: `value = (value << 7) | (byte & 0x7F)`. With `k = 8` this is the
//! plain high-bit-continuation scheme.
//!
//! Bits shifted past the 64th are dropped. A result with bit 63 set reads as
//! negative under signed semantics; callers that expect a length reject it.

use packtrie_core::{Result, TrieError};

/// Integer bits available in a leaf node's first byte.
pub const FIRST_BYTE_BITS_FOR_LEAVES: u32 = 6;

/// Integer bits available in a branch node's first byte.
pub const FIRST_BYTE_BITS_FOR_BRANCHES: u32 = 6;

/// Bits available when the integer starts on a byte of its own.
pub const FULL_BYTE_BITS: u32 = 8;

const CONTINUATION: u8 = 0x80;
const GROUP_MASK: u8 = 0x7F;

/// Decode one unsigned integer starting at `block[offset]`.
///
/// `first_byte_bits` is the number of low bits of `block[offset]` that belong
/// to the integer (1..=8). Returns the value and the offset just past its
/// last byte.
pub fn decode_unsigned(first_byte_bits: u32, block: &[u8], offset: usize) -> Result<(u64, usize)> {
    debug_assert!((1..=FULL_BYTE_BITS).contains(&first_byte_bits));

    let first = byte_at(block, offset)?;
    let flag = 1u8 << (first_byte_bits - 1);
    let mut value = u64::from(first & (flag - 1));
    let mut more = first & flag != 0;
    let mut offset = offset + 1;

    while more {
        let b = byte_at(block, offset)?;
        value = (value << 7) | u64::from(b & GROUP_MASK);
        more = b & CONTINUATION != 0;
        offset += 1;
    }

    Ok((value, offset))
}

/// Whether `value` would be negative as a signed 64-bit integer.
pub fn is_negative(value: u64) -> bool {
    (value as i64) < 0
}

fn byte_at(block: &[u8], offset: usize) -> Result<u8> {
    block.get(offset).copied().ok_or(TrieError::Truncated {
        what: "variable-length integer",
        offset: offset as u64,
        needed: 1,
        available: 0,
    })
}
