//! Shared test utilities for the integration test suites.
//!
//! The library only decodes; this module carries a small reference encoder
//! so tests can build packed tries from plain `(key, value)` maps.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::io::Write;

use packtrie::{
    DecodeOptions, FIRST_BYTE_BITS_FOR_BRANCHES, FIRST_BYTE_BITS_FOR_LEAVES, FULL_BYTE_BITS,
    TRIE_MAGIC,
};
use tempfile::NamedTempFile;

// ============================================================================
// VInt encoding
// ============================================================================

/// Append `value` as a VInt whose first byte has `bits` integer bits and
/// carries `type_bits` in its remaining high bits.
pub fn write_vint(out: &mut Vec<u8>, bits: u32, type_bits: u8, value: u64) {
    let first_group_bits = bits - 1;
    let mut extra = 0u32;
    while extra < 9 && (value >> (first_group_bits + 7 * extra)) != 0 {
        extra += 1;
    }

    let first_group = (value >> (7 * extra)) & ((1u64 << first_group_bits) - 1);
    let flag = if extra > 0 { 1u8 << first_group_bits } else { 0 };
    out.push(type_bits | flag | first_group as u8);

    for i in (0..extra).rev() {
        let group = ((value >> (7 * i)) & 0x7F) as u8;
        out.push(if i > 0 { group | 0x80 } else { group });
    }
}

// ============================================================================
// Trie encoding
// ============================================================================

/// Encode a sorted map into a trie payload. An empty map is an empty payload.
pub fn encode_payload(entries: &BTreeMap<Vec<u8>, u64>) -> Vec<u8> {
    let entries: Vec<(&[u8], u64)> = entries.iter().map(|(k, v)| (k.as_slice(), *v)).collect();
    let mut out = Vec::new();
    if !entries.is_empty() {
        encode_node(&entries, 0, &mut out);
    }
    out
}

/// Encode a complete file image (header + payload).
pub fn encode_file(entries: &BTreeMap<Vec<u8>, u64>) -> Vec<u8> {
    wrap_payload(&encode_payload(entries))
}

/// Prefix `payload` with a valid header.
pub fn wrap_payload(payload: &[u8]) -> Vec<u8> {
    let mut bytes = TRIE_MAGIC.to_vec();
    bytes.extend_from_slice(&(payload.len() as u64).to_be_bytes());
    bytes.extend_from_slice(payload);
    bytes
}

fn encode_node(entries: &[(&[u8], u64)], depth: usize, out: &mut Vec<u8>) {
    if let [(key, value)] = entries {
        let suffix = &key[depth..];
        if suffix.is_empty() {
            write_vint(out, FIRST_BYTE_BITS_FOR_LEAVES, 0x00, *value);
        } else {
            write_vint(out, FIRST_BYTE_BITS_FOR_LEAVES, 0x40, *value);
            write_vint(out, FULL_BYTE_BITS, 0x00, suffix.len() as u64);
            out.extend_from_slice(suffix);
        }
        return;
    }

    let mut block = Vec::new();
    let mut rest = entries;
    let mut type_bits = 0x80;
    if let Some(((key, value), tail)) = rest.split_first() {
        if key.len() == depth {
            type_bits |= 0x40;
            write_vint(&mut block, FULL_BYTE_BITS, 0x00, *value);
            rest = tail;
        }
    }

    while let Some((key, _)) = rest.first() {
        let selector = key[depth];
        let count = rest
            .iter()
            .take_while(|(k, _)| k[depth] == selector)
            .count();
        block.push(selector);
        encode_node(&rest[..count], depth + 1, &mut block);
        rest = &rest[count..];
    }

    write_vint(out, FIRST_BYTE_BITS_FOR_BRANCHES, type_bits, block.len() as u64);
    out.extend_from_slice(&block);
}

// ============================================================================
// Fixtures
// ============================================================================

/// Build a map from string keys.
pub fn map(pairs: &[(&str, u64)]) -> BTreeMap<Vec<u8>, u64> {
    pairs
        .iter()
        .map(|(k, v)| (k.as_bytes().to_vec(), *v))
        .collect()
}

/// A handful of English words sharing prefixes.
pub fn words() -> BTreeMap<Vec<u8>, u64> {
    map(&[
        ("a", 1),
        ("an", 2),
        ("and", 3),
        ("ant", 4),
        ("antelope", 5),
        ("b", 6),
        ("banana", 700),
        ("band", 80_000),
        ("bandana", 9_000_000_000),
        ("zebra", u64::MAX),
    ])
}

/// Write a file image to a temporary file.
pub fn temp_trie_file(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(bytes).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

/// Options with a small key buffer so growth paths are exercised.
pub fn tight_options() -> DecodeOptions {
    DecodeOptions::new().initial_key_capacity(1)
}
