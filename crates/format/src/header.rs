//! Packed trie container header.
//!
//! # Binary Format (16 bytes)
//!
//! ```text
//! ┌──────────────────────────────┬──────────────────────────────┐
//! │ magic "PkTrie\0\x01" (8)     │ payload length (8, BE)       │
//! └──────────────────────────────┴──────────────────────────────┘
//! ```
//!
//! The payload follows immediately; its root node starts at payload
//! offset 0.
//!
//! The length field has always been composed as a signed value: byte 8 is
//! sign-extended and bytes 9..16 are shifted in below it. That is exactly a
//! big-endian `i64`, so a length with the top bit set reads as negative and
//! is rejected rather than reinterpreted.

use std::io::{ErrorKind, Read};

use byteorder::{BigEndian, ByteOrder};
use packtrie_core::{DecodeOptions, Result, TrieError};
use tracing::debug;

/// Signature at the start of every packed trie file.
pub const TRIE_MAGIC: [u8; 8] = *b"PkTrie\x00\x01";

/// Size of the container header in bytes.
pub const TRIE_HEADER_SIZE: usize = 16;

/// Decoded container header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrieHeader {
    /// Byte length of the payload that follows the header
    pub payload_len: u64,
}

impl TrieHeader {
    /// Validate the magic and compose the payload length.
    pub fn from_bytes(bytes: &[u8; TRIE_HEADER_SIZE]) -> Result<Self> {
        if let Some((offset, (&expected, &found))) = TRIE_MAGIC
            .iter()
            .zip(bytes.iter())
            .enumerate()
            .find(|(_, (expected, found))| expected != found)
        {
            return Err(TrieError::MalformedHeader {
                offset,
                expected,
                found,
            });
        }

        let length = BigEndian::read_i64(&bytes[TRIE_MAGIC.len()..TRIE_HEADER_SIZE]);
        if length < 0 {
            return Err(TrieError::NegativePayloadLength { length });
        }

        Ok(TrieHeader {
            payload_len: length as u64,
        })
    }
}

/// Read and validate the 16-byte header from `reader`.
pub fn open_header<R: Read>(reader: &mut R) -> Result<TrieHeader> {
    let mut bytes = [0u8; TRIE_HEADER_SIZE];
    read_fully(reader, &mut bytes, "header", 0)?;
    let header = TrieHeader::from_bytes(&bytes)?;
    debug!(payload_len = header.payload_len, "read trie header");
    Ok(header)
}

/// Read exactly the payload declared by `header`.
pub fn read_payload<R: Read>(
    reader: &mut R,
    header: &TrieHeader,
    options: &DecodeOptions,
) -> Result<Vec<u8>> {
    if header.payload_len > options.max_payload_len {
        return Err(TrieError::PayloadTooLarge {
            length: header.payload_len,
            max: options.max_payload_len,
        });
    }

    let mut payload = vec![0u8; header.payload_len as usize];
    read_fully(reader, &mut payload, "payload", TRIE_HEADER_SIZE as u64)?;
    Ok(payload)
}

/// Fill `buf` completely, reporting how far we got if the input runs dry.
fn read_fully<R: Read>(
    reader: &mut R,
    buf: &mut [u8],
    what: &'static str,
    offset: u64,
) -> Result<()> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => {
                return Err(TrieError::Truncated {
                    what,
                    offset,
                    needed: buf.len() as u64,
                    available: filled as u64,
                })
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(TrieError::Io(e)),
        }
    }
    Ok(())
}
