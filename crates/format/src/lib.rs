//! On-disk format for packed tries
//!
//! A packed trie trades decode simplicity for size: node type, value and
//! child-block length share bit-packed variable-length integers. This crate
//! reads that format back:
//!
//! - `header`: 16-byte container header (magic + payload length)
//! - `vint`: variable-length integers that may start inside a node's type byte
//! - `node`: node header layout and the recursive, offset-driven decoder
//! - `key_buffer`: the key path shared across the recursion
//! - `reader`: whole-file access (`TrieFile`)
//! - `dumper`: line-oriented text rendering (`TrieDumper`)
//!
//! Encoding is not provided.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dumper; // Text rendering of records
pub mod header; // Container header
pub mod key_buffer; // Shared key path
pub mod node; // Node layout and recursive decoder
pub mod reader; // Whole-file access
pub mod vint; // Variable-length integers

pub use dumper::{LineWriter, TrieDumper};
pub use header::{open_header, read_payload, TrieHeader, TRIE_HEADER_SIZE, TRIE_MAGIC};
pub use key_buffer::KeyBuffer;
pub use node::{decode_trie, DecodeOutcome, DecodeStats, NodeDecoder, NodeHeader, NodeKind};
pub use reader::TrieFile;
pub use vint::{
    decode_unsigned, is_negative, FIRST_BYTE_BITS_FOR_BRANCHES, FIRST_BYTE_BITS_FOR_LEAVES,
    FULL_BYTE_BITS,
};
