//! Sentinel-terminated source buffer.
//!
//! The buffer guarantees `0x00` bytes after the source content, so the
//! cursor can read the current byte and look one byte ahead at any
//! position up to and including end of input without bounds checks failing.
//! The total size is rounded up to the next 64-byte boundary.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Minimum number of zero bytes after the source: the sentinel itself
/// plus room for `peek()` while sitting on it.
const MIN_TAIL: usize = 2;

/// Owned, sentinel-terminated copy of a source text.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, 0x00, padding_zeros...]
///  ^                ^           ^
///  0                |           rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
///
/// The buffer owns its bytes. Tokens cut from it are copied out, so they
/// stay valid after the buffer is dropped.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: usize,
}

impl SourceBuffer {
    /// Copy `source` into a zero-padded buffer.
    pub fn new(source: &str) -> Self {
        let source_bytes = source.as_bytes();
        let source_len = source_bytes.len();

        let padded_len = (source_len + MIN_TAIL + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // Sentinel and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source_bytes);

        Self { buf, source_len }
    }

    /// Create a [`Cursor`] positioned at `pos`.
    ///
    /// Positions past the end of the source are clamped to the sentinel,
    /// so a resumed cursor never starts inside the padding.
    pub fn cursor_at(&self, pos: usize) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len, pos.min(self.source_len))
    }
}

#[cfg(test)]
mod tests;
