//! Error types for trie decoding
//!
//! Every failure is fatal to the decode that raised it: offsets of later
//! nodes are computed from earlier ones, so nothing after a corrupt node can
//! be trusted. Structural variants carry the payload offset at which the
//! problem was detected.

use std::fmt;
use std::io;
use thiserror::Error;

/// Result type alias for trie operations
pub type Result<T> = std::result::Result<T, TrieError>;

/// Which length field a structural error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthKind {
    /// Key suffix length of a suffixed leaf
    Suffix,
    /// Child block length of a branch
    Block,
}

impl fmt::Display for LengthKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthKind::Suffix => write!(f, "leaf suffix"),
            LengthKind::Block => write!(f, "branch block"),
        }
    }
}

/// Error types for reading and decoding packed tries
#[derive(Debug, Error)]
pub enum TrieError {
    /// Magic bytes at the start of the file do not match
    #[error(
        "Malformed input: no valid trie header found (byte {offset}: expected {expected:#04x}, found {found:#04x})"
    )]
    MalformedHeader {
        /// Offset of the first mismatching byte
        offset: usize,
        /// Byte required by the magic template
        expected: u8,
        /// Byte actually present
        found: u8,
    },

    /// Header length field composes to a negative number
    #[error("Malformed input: negative payload length {length} in header")]
    NegativePayloadLength {
        /// Composed (signed) length
        length: i64,
    },

    /// Header length field exceeds the configured payload limit
    #[error("Payload length {length} exceeds the maximum of {max} bytes")]
    PayloadTooLarge {
        /// Declared payload length
        length: u64,
        /// Configured maximum
        max: u64,
    },

    /// Input ended before a declared length was satisfied
    #[error("Truncated input: could not read {needed} bytes of {what} at offset {offset}; only got {available}")]
    Truncated {
        /// What was being read (header, payload, node, ...)
        what: &'static str,
        /// Offset at which the read started
        offset: u64,
        /// Bytes required
        needed: u64,
        /// Bytes actually available
        available: u64,
    },

    /// A length VInt has its sign bit set
    #[error("Corrupt trie structure: negative {kind} length at index {offset}")]
    NegativeLength {
        /// Which length field
        kind: LengthKind,
        /// Offset of the length encoding
        offset: usize,
        /// Composed value under signed semantics
        value: i64,
    },

    /// A length would move the cursor past the end of the payload
    #[error("Corrupt trie structure: {kind} length {length} (at offset {offset}) would extend past input end {limit}")]
    LengthOutOfBounds {
        /// Which length field
        kind: LengthKind,
        /// Offset of the length encoding
        offset: usize,
        /// Declared length
        length: u64,
        /// Payload length
        limit: usize,
    },

    /// A branch's children did not end exactly at its declared end
    #[error("Corrupt trie structure: branch block declared to extend from {start} to {declared_end}; extended to {actual_end}")]
    BlockLengthMismatch {
        /// First byte of the child block
        start: usize,
        /// Declared exclusive end
        declared_end: usize,
        /// Offset actually reached after the last child
        actual_end: usize,
    },

    /// Nesting deeper than the configured limit
    #[error("Trie nesting depth {depth} exceeds the maximum of {max} (node at offset {offset})")]
    DepthExceeded {
        /// Depth that was about to be entered
        depth: usize,
        /// Configured maximum
        max: usize,
        /// Offset of the node
        offset: usize,
    },

    /// The root node ended before the payload did
    #[error("Corrupt trie structure: root node ends at offset {offset} but payload is {len} bytes")]
    TrailingData {
        /// Offset where the root node ended
        offset: usize,
        /// Payload length
        len: usize,
    },

    /// I/O error reading input or writing records
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl TrieError {
    /// Returns `true` for errors caused by an inconsistent payload, as
    /// opposed to a bad header, short input or I/O failure.
    pub fn is_corruption(&self) -> bool {
        matches!(
            self,
            TrieError::NegativeLength { .. }
                | TrieError::LengthOutOfBounds { .. }
                | TrieError::BlockLengthMismatch { .. }
                | TrieError::TrailingData { .. }
        )
    }

    /// Payload offset at which the error was detected, when there is one.
    pub fn offset(&self) -> Option<u64> {
        match self {
            TrieError::MalformedHeader { offset, .. } => Some(*offset as u64),
            TrieError::Truncated { offset, .. } => Some(*offset),
            TrieError::NegativeLength { offset, .. }
            | TrieError::LengthOutOfBounds { offset, .. }
            | TrieError::DepthExceeded { offset, .. }
            | TrieError::TrailingData { offset, .. } => Some(*offset as u64),
            TrieError::BlockLengthMismatch { actual_end, .. } => Some(*actual_end as u64),
            TrieError::NegativePayloadLength { .. }
            | TrieError::PayloadTooLarge { .. }
            | TrieError::Io(_) => None,
        }
    }
}
