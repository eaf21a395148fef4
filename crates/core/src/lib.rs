//! Core types for packtrie
//!
//! This crate defines the types shared by the format decoder and its callers:
//! - TrieError: Error type hierarchy for header, truncation and structure failures
//! - Record / RecordSink: decoded `(key, value)` pairs and where they are delivered
//! - DecodeOptions: separator, recursion and allocation limits

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod options;
pub mod record;

pub use error::{LengthKind, Result, TrieError};
pub use options::{
    DecodeOptions, DEFAULT_INITIAL_KEY_CAPACITY, DEFAULT_MAX_DEPTH, DEFAULT_MAX_PAYLOAD_LEN,
    DEFAULT_SEPARATOR,
};
pub use record::{FnSink, Record, RecordSink};
