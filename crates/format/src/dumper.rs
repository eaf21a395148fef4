//! Line-oriented text rendering of a packed trie.
//!
//! Each record becomes `key SEP value LF`: the raw key bytes, one separator
//! byte, the value in decimal ASCII, and a newline. Keys are written as-is,
//! so a separator or newline inside a key is not escaped.

use std::io::{Read, Write};

use packtrie_core::{DecodeOptions, RecordSink, Result};
use tracing::debug;

use crate::node::DecodeOutcome;
use crate::reader::TrieFile;

/// A [`RecordSink`] that writes each record as one text line.
pub struct LineWriter<W: Write> {
    out: W,
    separator: u8,
    lines: u64,
}

impl<W: Write> LineWriter<W> {
    /// Write records to `out`, separating key and value with `separator`.
    pub fn new(out: W, separator: u8) -> Self {
        LineWriter {
            out,
            separator,
            lines: 0,
        }
    }

    /// Lines written so far.
    pub fn lines(&self) -> u64 {
        self.lines
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(mut self) -> Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> RecordSink for LineWriter<W> {
    fn record(&mut self, prefix: &[u8], suffix: &[u8], value: u64) -> Result<()> {
        self.out.write_all(prefix)?;
        self.out.write_all(suffix)?;
        self.out.write_all(&[self.separator])?;
        write!(self.out, "{}", value)?;
        self.out.write_all(b"\n")?;
        self.lines += 1;
        Ok(())
    }
}

/// Reads a packed trie and writes its records as text lines.
#[derive(Debug, Clone, Default)]
pub struct TrieDumper {
    options: DecodeOptions,
}

impl TrieDumper {
    /// Create a dumper; `options.separator` goes between key and value.
    pub fn new(options: DecodeOptions) -> Self {
        TrieDumper { options }
    }

    /// Read a whole trie from `input` and write every record to `output`.
    ///
    /// Output is flushed on success. On failure some lines may already have
    /// been written.
    pub fn dump<R: Read, W: Write>(&self, input: &mut R, output: W) -> Result<DecodeOutcome> {
        let trie = TrieFile::from_reader(input, self.options.clone())?;
        let mut writer = LineWriter::new(output, self.options.separator);
        let outcome = trie.decode_into(&mut writer)?;
        debug!(lines = writer.lines(), "dumped trie");
        writer.into_inner()?;
        Ok(outcome)
    }
}
