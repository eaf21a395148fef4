//! packtrie - Decoder for bit-packed trie files
//!
//! A packed trie file is a 16-byte header followed by a payload holding a
//! serialized prefix tree that maps byte-string keys to unsigned integers.
//! This crate reads such files back into ordered `(key, value)` records.
//!
//! # Quick Start
//!
//! ```ignore
//! use packtrie::{TrieFile, Record};
//!
//! let trie = TrieFile::open("words.trie")?;
//! for Record { key, value } in trie.records()? {
//!     println!("{} = {}", String::from_utf8_lossy(&key), value);
//! }
//! ```
//!
//! # Architecture
//!
//! - [`packtrie_core`]: errors, records, sinks and decode options
//! - [`packtrie_format`]: the on-disk format (header, VInt codec, node decoder)
//!
//! Both are re-exported here.

pub use packtrie_core::*;
pub use packtrie_format::*;
