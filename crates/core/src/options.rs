//! Decode configuration.
//!
//! [`DecodeOptions`] collects the knobs shared by the file reader, the node
//! decoder and the text dumper. Use the builder methods to override the
//! defaults.

/// Default byte written between a key and its value by the text dumper.
pub const DEFAULT_SEPARATOR: u8 = b'\t';

/// Default limit on trie nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Default starting capacity of the shared key buffer.
pub const DEFAULT_INITIAL_KEY_CAPACITY: usize = 200;

/// Default upper bound on the payload length accepted from a header.
///
/// Matches the largest byte array other readers of the format can allocate.
pub const DEFAULT_MAX_PAYLOAD_LEN: u64 = i32::MAX as u64;

/// Options for reading and decoding a packed trie.
///
/// ```ignore
/// use packtrie_core::DecodeOptions;
///
/// let opts = DecodeOptions::new()
///     .separator(b'=')
///     .max_depth(64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Byte between key and value in rendered records.
    pub separator: u8,
    /// Deepest trie level the decoder will descend to.
    pub max_depth: usize,
    /// Initial capacity of the key buffer; it grows as needed.
    pub initial_key_capacity: usize,
    /// Largest payload length accepted from the header.
    pub max_payload_len: u64,
}

impl DecodeOptions {
    /// Create options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the key/value separator byte.
    pub fn separator(mut self, separator: u8) -> Self {
        self.separator = separator;
        self
    }

    /// Set the maximum nesting depth.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set the initial key buffer capacity.
    pub fn initial_key_capacity(mut self, capacity: usize) -> Self {
        self.initial_key_capacity = capacity;
        self
    }

    /// Set the maximum accepted payload length.
    pub fn max_payload_len(mut self, len: u64) -> Self {
        self.max_payload_len = len;
        self
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            max_depth: DEFAULT_MAX_DEPTH,
            initial_key_capacity: DEFAULT_INITIAL_KEY_CAPACITY,
            max_payload_len: DEFAULT_MAX_PAYLOAD_LEN,
        }
    }
}
