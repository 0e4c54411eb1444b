//! Cursor over a sentinel-terminated buffer.
//!
//! The cursor advances through the buffer byte-by-byte. End of input is
//! detected when the current byte equals the sentinel (`0x00`) and the
//! position has reached the source length.
//!
//! # Interior Null Bytes
//!
//! A null at `pos < source_len` is an ordinary (illegal) source byte;
//! a null at `pos == source_len` is the sentinel.

/// Cheap, copyable position into a [`SourceBuffer`](crate::SourceBuffer).
///
/// # Invariant
///
/// `buf[source_len..]` is all zero and at least two bytes long, and
/// `pos <= source_len`. Callers only [`advance`](Self::advance) off a byte
/// that is not end of input, which keeps `pos` inside that bound.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: usize,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8], source_len: usize, pos: usize) -> Self {
        debug_assert!(
            source_len + 1 < buf.len(),
            "buffer must carry sentinel and lookahead padding"
        );
        debug_assert!(pos <= source_len, "cursor must start inside the source");
        Self {
            buf,
            pos,
            source_len,
        }
    }

    /// Returns the byte at the current position, `0x00` at end of input.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos]
    }

    /// Returns the byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos + 1]
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        debug_assert!(!self.is_eof(), "advanced past the sentinel");
        self.pos += 1;
    }

    /// Returns `true` once every source byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Source bytes from `start` up to (not including) the current position.
    pub fn bytes_from(&self, start: usize) -> &'a [u8] {
        debug_assert!(start <= self.pos, "slice start {start} exceeds cursor {}", self.pos);
        &self.buf[start..self.pos]
    }

    /// Advance while `pred` holds for the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false`, so the sentinel stops the loop. An
    /// interior null also stops it, which is fine for every classifier the
    /// scanner uses.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.buf[self.pos]) {
            self.pos += 1;
        }
    }

    /// Advance past whitespace: space, tab, newline, carriage return.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(is_whitespace);
    }
}

/// The four bytes that separate lexemes and carry no token.
#[inline]
fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}
