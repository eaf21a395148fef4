//! Path accumulator shared by every level of a decode.

/// Key bytes from the root to the node being decoded.
///
/// One buffer serves the whole traversal. A node at depth `d` sees the first
/// `d` bytes; entering a child overwrites byte `d` with the child's selector,
/// so sibling iterations never need an explicit undo.
#[derive(Debug, Default)]
pub struct KeyBuffer {
    bytes: Vec<u8>,
}

impl KeyBuffer {
    /// Create a buffer with room for `capacity` key bytes before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        KeyBuffer {
            bytes: Vec::with_capacity(capacity),
        }
    }

    /// Make `byte` the key byte at index `depth`, dropping anything deeper.
    pub fn set(&mut self, depth: usize, byte: u8) {
        debug_assert!(depth <= self.bytes.len());
        self.bytes.truncate(depth);
        self.bytes.push(byte);
    }

    /// The first `depth` key bytes.
    pub fn prefix(&self, depth: usize) -> &[u8] {
        &self.bytes[..depth]
    }

    /// Current allocation size.
    pub fn capacity(&self) -> usize {
        self.bytes.capacity()
    }
}
