//! Byte-level layer underneath the Monkey scanner.
//!
//! Two pieces:
//! - [`SourceBuffer`]: an owned, sentinel-terminated copy of the source text
//! - [`Cursor`]: a `Copy` position into that buffer with one byte of lookahead
//!
//! Nothing here knows about token kinds or keywords. The scanner in
//! `monkey_lexer` drives a [`Cursor`] and decides what each byte means.
//!
//! # End of Input
//!
//! The buffer always ends with a `0x00` sentinel, so reading the current
//! byte past the last source byte yields `0` instead of going out of bounds.
//! A `0x00` *inside* the source is not end of input; [`Cursor::is_eof`]
//! compares the position against the source length to tell them apart.

mod cursor;
mod source_buffer;

pub use cursor::Cursor;
pub use source_buffer::SourceBuffer;
