//! Trie node layout and the recursive node decoder.
//!
//! # Node Layout
//!
//! ```text
//! Leaf (bit 7 clear):
//! ┌──────────────────────────┬──────────────────────────┬──────────────────┐
//! │ 0 X value (VInt, k = 6)  │ suffix len (VInt, k = 8) │ suffix bytes     │
//! └──────────────────────────┴──────────────────────────┴──────────────────┘
//!                              └──────── only when X (bit 6) is set ───────┘
//!
//! Branch (bit 7 set):
//! ┌────────────────────────────┬──────────────────────┬─────┬───────┬─────┬───────┬───┐
//! │ 1 X block len (VInt, k = 6)│ value (VInt, k = 8)  │ sel │ child │ sel │ child │...│
//! └────────────────────────────┴──────────────────────┴─────┴───────┴─────┴───────┴───┘
//!                              └─ only when X is set ─┘
//!                              └───────────────── block len bytes ──────────────────┘
//! ```
//!
//! A branch child is one raw selector byte (the next key byte) followed by a
//! nested node. Children are stored in ascending selector order and a
//! branch's own value precedes them, so a pre-order walk yields keys in
//! ascending byte order.

use packtrie_core::{DecodeOptions, LengthKind, RecordSink, Result, TrieError};
use tracing::{debug, trace, warn};

use crate::key_buffer::KeyBuffer;
use crate::vint::{
    decode_unsigned, is_negative, FIRST_BYTE_BITS_FOR_BRANCHES, FIRST_BYTE_BITS_FOR_LEAVES,
    FULL_BYTE_BITS,
};

const BRANCH_FLAG: u8 = 0x80;
const EXTRA_FLAG: u8 = 0x40;
const LOW_BITS_MASK: u8 = 0x3F;

/// Leaf or branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Terminal node carrying a value
    Leaf,
    /// Node with a child block
    Branch,
}

/// The flags and integer bits packed into a node's first byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeHeader {
    /// Leaf or branch (bit 7)
    pub kind: NodeKind,
    /// Leaf has a key suffix / branch has its own value (bit 6)
    pub has_extra: bool,
    /// Low six bits of the node's primary integer
    pub low_bits: u8,
}

impl NodeHeader {
    /// Split a node's first byte into its fields.
    pub fn from_byte(byte: u8) -> Self {
        NodeHeader {
            kind: if byte & BRANCH_FLAG == 0 {
                NodeKind::Leaf
            } else {
                NodeKind::Branch
            },
            has_extra: byte & EXTRA_FLAG != 0,
            low_bits: byte & LOW_BITS_MASK,
        }
    }
}

/// Counters collected during a decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeStats {
    /// Records delivered to the sink
    pub records: u64,
    /// Leaf nodes visited
    pub leaves: u64,
    /// Branch nodes visited
    pub branches: u64,
    /// Deepest level reached (root is 0)
    pub max_depth: usize,
}

/// Result of decoding a whole payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOutcome {
    /// Offset just past the root node; equals the payload length
    pub end_offset: usize,
    /// Counters
    pub stats: DecodeStats,
}

/// Recursive decoder over one payload.
///
/// Each call to [`decode_node`](Self::decode_node) returns the offset
/// following the node it decoded, which is where the next sibling starts.
pub struct NodeDecoder<'a, S> {
    block: &'a [u8],
    sink: S,
    key: KeyBuffer,
    max_depth: usize,
    stats: DecodeStats,
}

impl<'a, S: RecordSink> NodeDecoder<'a, S> {
    /// Create a decoder that delivers records from `block` to `sink`.
    pub fn new(block: &'a [u8], sink: S, options: &DecodeOptions) -> Self {
        NodeDecoder {
            block,
            sink,
            key: KeyBuffer::with_capacity(options.initial_key_capacity),
            max_depth: options.max_depth,
            stats: DecodeStats::default(),
        }
    }

    /// Decode the node at `offset`, whose key is the first `depth` bytes of
    /// the key buffer.
    pub fn decode_node(&mut self, offset: usize, depth: usize) -> Result<usize> {
        if depth > self.max_depth {
            return Err(TrieError::DepthExceeded {
                depth,
                max: self.max_depth,
                offset,
            });
        }
        self.stats.max_depth = self.stats.max_depth.max(depth);

        let first = self
            .block
            .get(offset)
            .copied()
            .ok_or(TrieError::Truncated {
                what: "node header",
                offset: offset as u64,
                needed: 1,
                available: 0,
            })?;
        let header = NodeHeader::from_byte(first);

        match header.kind {
            NodeKind::Leaf => self.decode_leaf(header, offset, depth),
            NodeKind::Branch => self.decode_branch(header, offset, depth),
        }
    }

    /// Counters so far.
    pub fn stats(&self) -> DecodeStats {
        self.stats
    }

    /// Give back the sink and the final counters.
    pub fn finish(self) -> (S, DecodeStats) {
        (self.sink, self.stats)
    }

    fn decode_leaf(&mut self, header: NodeHeader, offset: usize, depth: usize) -> Result<usize> {
        self.stats.leaves += 1;
        let (value, offset) = decode_unsigned(FIRST_BYTE_BITS_FOR_LEAVES, self.block, offset)?;

        if !header.has_extra {
            self.emit(depth, &[], value)?;
            return Ok(offset);
        }

        let len_offset = offset;
        let (suffix_len, offset) = decode_unsigned(FULL_BYTE_BITS, self.block, offset)?;
        if is_negative(suffix_len) {
            return Err(TrieError::NegativeLength {
                kind: LengthKind::Suffix,
                offset: len_offset,
                value: suffix_len as i64,
            });
        }
        if suffix_len > (self.block.len() - offset) as u64 {
            return Err(TrieError::LengthOutOfBounds {
                kind: LengthKind::Suffix,
                offset: len_offset,
                length: suffix_len,
                limit: self.block.len(),
            });
        }

        let end = offset + suffix_len as usize;
        let block = self.block;
        self.emit(depth, &block[offset..end], value)?;
        Ok(end)
    }

    fn decode_branch(&mut self, header: NodeHeader, offset: usize, depth: usize) -> Result<usize> {
        self.stats.branches += 1;
        let len_offset = offset;
        let (block_len, mut offset) =
            decode_unsigned(FIRST_BYTE_BITS_FOR_BRANCHES, self.block, offset)?;
        if is_negative(block_len) {
            return Err(TrieError::NegativeLength {
                kind: LengthKind::Block,
                offset: len_offset,
                value: block_len as i64,
            });
        }
        if block_len > (self.block.len() - offset) as u64 {
            return Err(TrieError::LengthOutOfBounds {
                kind: LengthKind::Block,
                offset: len_offset,
                length: block_len,
                limit: self.block.len(),
            });
        }

        let start = offset;
        let end = offset + block_len as usize;
        trace!(offset = len_offset, depth, start, end, "branch");

        if header.has_extra {
            let (value, next) = decode_unsigned(FULL_BYTE_BITS, self.block, offset)?;
            self.emit(depth, &[], value)?;
            offset = next;
        }

        while offset < end {
            // offset < end <= block.len()
            let selector = self.block[offset];
            self.key.set(depth, selector);
            offset = self.decode_node(offset + 1, depth + 1)?;
        }

        if offset != end {
            return Err(TrieError::BlockLengthMismatch {
                start,
                declared_end: end,
                actual_end: offset,
            });
        }
        Ok(end)
    }

    fn emit(&mut self, depth: usize, suffix: &[u8], value: u64) -> Result<()> {
        self.sink.record(self.key.prefix(depth), suffix, value)?;
        self.stats.records += 1;
        Ok(())
    }
}

/// Decode a complete payload, delivering every record to `sink` in
/// ascending key order.
///
/// An empty payload is an empty trie. Otherwise the root node must consume
/// the payload exactly.
pub fn decode_trie<S: RecordSink>(
    block: &[u8],
    sink: S,
    options: &DecodeOptions,
) -> Result<DecodeOutcome> {
    if block.is_empty() {
        debug!("empty payload, no records");
        return Ok(DecodeOutcome {
            end_offset: 0,
            stats: DecodeStats::default(),
        });
    }

    let mut decoder = NodeDecoder::new(block, sink, options);
    let end_offset = decoder.decode_node(0, 0).map_err(|e| {
        warn!(error = %e, payload_len = block.len(), "trie decode failed");
        e
    })?;

    if end_offset != block.len() {
        warn!(end_offset, payload_len = block.len(), "root node ended early");
        return Err(TrieError::TrailingData {
            offset: end_offset,
            len: block.len(),
        });
    }

    let (_, stats) = decoder.finish();
    debug!(
        records = stats.records,
        leaves = stats.leaves,
        branches = stats.branches,
        max_depth = stats.max_depth,
        "decoded trie payload"
    );
    Ok(DecodeOutcome { end_offset, stats })
}
