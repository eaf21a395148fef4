//! Decoded records and the sinks that receive them.
//!
//! The decoder never materializes a key unless the sink asks it to: a record
//! arrives as the shared path prefix plus an optional literal suffix taken
//! straight from the payload.

use std::fmt;

use crate::error::Result;

/// A decoded `(key, value)` pair.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Record {
    /// Raw key bytes
    pub key: Vec<u8>,
    /// Value stored under the key
    pub value: u64,
}

impl Record {
    /// Create a record from key bytes and a value.
    pub fn new(key: impl Into<Vec<u8>>, value: u64) -> Self {
        Record {
            key: key.into(),
            value,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", String::from_utf8_lossy(&self.key), self.value)
    }
}

/// Receives records in the order the decoder visits them.
///
/// The full key is `prefix` followed by `suffix`; `suffix` is empty for
/// everything except suffixed leaves. Both slices are only valid for the
/// duration of the call. Returning an error aborts the decode.
pub trait RecordSink {
    /// Accept one record.
    fn record(&mut self, prefix: &[u8], suffix: &[u8], value: u64) -> Result<()>;
}

impl RecordSink for Vec<Record> {
    fn record(&mut self, prefix: &[u8], suffix: &[u8], value: u64) -> Result<()> {
        let mut key = Vec::with_capacity(prefix.len() + suffix.len());
        key.extend_from_slice(prefix);
        key.extend_from_slice(suffix);
        self.push(Record { key, value });
        Ok(())
    }
}

impl<S: RecordSink + ?Sized> RecordSink for &mut S {
    fn record(&mut self, prefix: &[u8], suffix: &[u8], value: u64) -> Result<()> {
        (**self).record(prefix, suffix, value)
    }
}

/// Adapts a closure into a [`RecordSink`].
///
/// ```ignore
/// let mut count = 0;
/// decode_trie(&payload, FnSink(|_prefix: &[u8], _suffix: &[u8], _value| {
///     count += 1;
///     Ok(())
/// }), &DecodeOptions::default())?;
/// ```
pub struct FnSink<F>(pub F);

impl<F> RecordSink for FnSink<F>
where
    F: FnMut(&[u8], &[u8], u64) -> Result<()>,
{
    fn record(&mut self, prefix: &[u8], suffix: &[u8], value: u64) -> Result<()> {
        (self.0)(prefix, suffix, value)
    }
}
