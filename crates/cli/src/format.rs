//! Record → text/json line rendering.
//!
//! Two modes:
//! - **Lines** (default): `key SEP value`, keys written as raw bytes
//! - **JSON** (`--json`): one object per line; keys that are not UTF-8 are
//!   given as `key_base64`

use std::io::{self, Write};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use packtrie_core::{RecordSink, Result, TrieError};
use packtrie_format::{DecodeOutcome, LineWriter};
use serde::Serialize;

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Lines,
    Json,
}

#[derive(Serialize)]
struct JsonRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    key_base64: Option<String>,
    value: u64,
}

impl JsonRecord {
    fn new(key: Vec<u8>, value: u64) -> Self {
        match String::from_utf8(key) {
            Ok(key) => JsonRecord {
                key: Some(key),
                key_base64: None,
                value,
            },
            Err(e) => JsonRecord {
                key: None,
                key_base64: Some(STANDARD.encode(e.as_bytes())),
                value,
            },
        }
    }
}

/// Writes records as JSON objects, one per line.
pub struct JsonWriter<W: Write> {
    out: W,
}

impl<W: Write> RecordSink for JsonWriter<W> {
    fn record(&mut self, prefix: &[u8], suffix: &[u8], value: u64) -> Result<()> {
        let key = [prefix, suffix].concat();
        serde_json::to_writer(&mut self.out, &JsonRecord::new(key, value))
            .map_err(io::Error::from)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }
}

/// Sink for the selected output mode.
pub enum RecordWriter<W: Write> {
    Lines(LineWriter<W>),
    Json(JsonWriter<W>),
}

impl<W: Write> RecordWriter<W> {
    pub fn new(mode: OutputMode, out: W, separator: u8) -> Self {
        match mode {
            OutputMode::Lines => RecordWriter::Lines(LineWriter::new(out, separator)),
            OutputMode::Json => RecordWriter::Json(JsonWriter { out }),
        }
    }

    /// Flush buffered output.
    pub fn finish(self) -> Result<W> {
        match self {
            RecordWriter::Lines(writer) => writer.into_inner(),
            RecordWriter::Json(mut writer) => {
                writer.out.flush().map_err(TrieError::Io)?;
                Ok(writer.out)
            }
        }
    }
}

impl<W: Write> RecordSink for RecordWriter<W> {
    fn record(&mut self, prefix: &[u8], suffix: &[u8], value: u64) -> Result<()> {
        match self {
            RecordWriter::Lines(writer) => writer.record(prefix, suffix, value),
            RecordWriter::Json(writer) => writer.record(prefix, suffix, value),
        }
    }
}

/// Summary printed by `--stats`.
pub fn format_stats(outcome: &DecodeOutcome) -> String {
    let stats = &outcome.stats;
    format!(
        "records: {}\nleaves: {}\nbranches: {}\nmax depth: {}\npayload bytes: {}",
        stats.records, stats.leaves, stats.branches, stats.max_depth, outcome.end_offset
    )
}

/// Format an error with its context chain.
pub fn format_error(err: &anyhow::Error) -> String {
    format!("(error) {:#}", err)
}
