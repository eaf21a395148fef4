//! Integration tests for the packed trie format.
//!
//! Unit tests in crates/format/src/ cover each decoder piece against
//! hand-assembled bytes. These tests drive whole files built by the
//! reference encoder in tests/common through the public API.

#[path = "../common/mod.rs"]
mod common;

mod file_io;
mod scenarios;
