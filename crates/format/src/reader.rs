//! Whole-file access to a packed trie.
//!
//! The payload is always materialized before traversal begins; decoding
//! never runs against a partially read input.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use packtrie_core::{DecodeOptions, Record, RecordSink, Result};
use tracing::debug;

use crate::header::{open_header, read_payload, TrieHeader, TRIE_HEADER_SIZE};
use crate::node::{decode_trie, DecodeOutcome};

/// A validated header together with its fully read payload.
#[derive(Debug, Clone)]
pub struct TrieFile {
    header: TrieHeader,
    payload: Vec<u8>,
    options: DecodeOptions,
}

impl TrieFile {
    /// Open a trie file with default options.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with(path, DecodeOptions::default())
    }

    /// Open a trie file.
    pub fn open_with<P: AsRef<Path>>(path: P, options: DecodeOptions) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let trie = Self::from_reader(&mut BufReader::new(file), options)?;
        debug!(
            path = %path.display(),
            payload_len = trie.payload.len(),
            "Opened trie file"
        );
        Ok(trie)
    }

    /// Read header and payload from any byte source.
    ///
    /// Bytes after the declared payload are left unread.
    pub fn from_reader<R: Read>(reader: &mut R, options: DecodeOptions) -> Result<Self> {
        let header = open_header(reader)?;
        let payload = read_payload(reader, &header, &options)?;
        Ok(TrieFile {
            header,
            payload,
            options,
        })
    }

    /// Parse an in-memory file image.
    pub fn from_bytes(bytes: &[u8], options: DecodeOptions) -> Result<Self> {
        let mut reader = bytes;
        Self::from_reader(&mut reader, options)
    }

    /// The container header.
    pub fn header(&self) -> &TrieHeader {
        &self.header
    }

    /// The raw encoded trie.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Options this file was opened with.
    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Total file size covered by header and payload.
    pub fn encoded_len(&self) -> usize {
        TRIE_HEADER_SIZE + self.payload.len()
    }

    /// Deliver every record to `sink` in ascending key order.
    pub fn decode_into<S: RecordSink>(&self, sink: S) -> Result<DecodeOutcome> {
        decode_trie(&self.payload, sink, &self.options)
    }

    /// Collect every record.
    pub fn records(&self) -> Result<Vec<Record>> {
        let mut records = Vec::new();
        self.decode_into(&mut records)?;
        Ok(records)
    }
}
