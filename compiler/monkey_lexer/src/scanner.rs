//! Hand-written maximal-munch scanner.
//!
//! Pull-based: the caller asks for one [`Token`] at a time with
//! [`Scanner::next_token`] and stops after [`TokenKind::EndOfInput`].
//!
//! # Design
//!
//! Each call skips whitespace, then dispatches on the current byte. Every
//! dispatch arm is a terminal transition: it consumes exactly its lexeme
//! and hands back the token, leaving the cursor on the first byte after it.
//!
//! - Fixed tokens advance one byte, or two for `==` and `!=`.
//! - Identifier and integer runs stop *on* the first byte outside the run,
//!   which is already the next unread byte. No further advance happens.
//! - Anything unrecognized becomes a one-byte [`TokenKind::Illegal`].
//! - End of input consumes nothing and repeats on every later call.
//!
//! Errors are in-band: the scanner never fails and never panics.

use monkey_ir::{Token, TokenKind};
use monkey_lexer_core::{Cursor, SourceBuffer};
use tracing::{debug, trace};

use crate::keywords;

/// Cursor-driven scanner over one source unit.
///
/// Created once per source text and drained until end of input. It cannot
/// be rewound; scanning the same text again means building a new scanner.
#[derive(Debug)]
pub struct Scanner {
    buffer: SourceBuffer,
    /// Offset of the next unread byte. Never exceeds the source length.
    pos: usize,
}

impl Scanner {
    /// Copy `source` into a scanner primed on its first byte.
    pub fn new(source: &str) -> Self {
        Scanner {
            buffer: SourceBuffer::new(source),
            pos: 0,
        }
    }

    /// Produce the next token.
    ///
    /// Returns [`TokenKind::EndOfInput`] with an empty literal once the
    /// source is exhausted, and keeps returning it on every later call.
    pub fn next_token(&mut self) -> Token {
        let mut cursor = self.buffer.cursor_at(self.pos);
        cursor.eat_whitespace();

        let start = cursor.pos();
        let token = match cursor.current() {
            _ if cursor.is_eof() => Token::eof(),
            b'=' => one_or_two(&mut cursor, TokenKind::Assign, TokenKind::Equal),
            b'!' => one_or_two(&mut cursor, TokenKind::Bang, TokenKind::NotEqual),
            b'+' => single(&mut cursor, TokenKind::Plus),
            b'-' => single(&mut cursor, TokenKind::Minus),
            b'*' => single(&mut cursor, TokenKind::Star),
            b'/' => single(&mut cursor, TokenKind::Slash),
            b'<' => single(&mut cursor, TokenKind::LessThan),
            b'>' => single(&mut cursor, TokenKind::GreaterThan),
            b',' => single(&mut cursor, TokenKind::Comma),
            b';' => single(&mut cursor, TokenKind::Semicolon),
            b'(' => single(&mut cursor, TokenKind::LParen),
            b')' => single(&mut cursor, TokenKind::RParen),
            b'{' => single(&mut cursor, TokenKind::LBrace),
            b'}' => single(&mut cursor, TokenKind::RBrace),
            b if is_letter(b) => identifier(&mut cursor, start),
            b if b.is_ascii_digit() => integer(&mut cursor, start),
            _ => illegal(&mut cursor),
        };

        self.pos = cursor.pos();
        trace!(kind = ?token.kind, literal = %token.literal, offset = start, "token");
        token
    }
}

impl Iterator for Scanner {
    type Item = Token;

    /// Yields tokens up to, but not including, end of input.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

// End of input is sticky, so once `next` returns `None` it always will.
impl std::iter::FusedIterator for Scanner {}

/// Single-byte token with a fixed spelling.
fn single(cursor: &mut Cursor<'_>, kind: TokenKind) -> Token {
    cursor.advance();
    fixed(kind)
}

/// `=`/`==` and `!`/`!=`: one byte of lookahead decides.
fn one_or_two(cursor: &mut Cursor<'_>, one: TokenKind, two: TokenKind) -> Token {
    if cursor.peek() == b'=' {
        cursor.advance();
        cursor.advance();
        fixed(two)
    } else {
        cursor.advance();
        fixed(one)
    }
}

/// Maximal run of letters and underscores, resolved through the keyword table.
///
/// Digits end the run: `foo1` scans as `foo` then `1`.
fn identifier(cursor: &mut Cursor<'_>, start: usize) -> Token {
    cursor.eat_while(is_letter);
    let text = lexeme(cursor, start);
    Token::new(keywords::lookup(&text), text)
}

/// Maximal run of decimal digits. No sign, point, exponent or radix prefix.
fn integer(cursor: &mut Cursor<'_>, start: usize) -> Token {
    cursor.eat_while(|b| b.is_ascii_digit());
    Token::new(TokenKind::IntegerLiteral, lexeme(cursor, start))
}

/// One unrecognized byte.
///
/// The literal is the byte read as a Latin-1 code point, so a stray
/// non-ASCII byte still yields a valid one-character `String`.
fn illegal(cursor: &mut Cursor<'_>) -> Token {
    let byte = cursor.current();
    debug!(byte, offset = cursor.pos(), "illegal byte");
    cursor.advance();
    Token::new(TokenKind::Illegal, char::from(byte))
}

fn fixed(kind: TokenKind) -> Token {
    Token::new(kind, kind.fixed_lexeme().unwrap_or_default())
}

/// Owned copy of the source bytes from `start` to the cursor.
///
/// Only called on ASCII runs, so the lossy conversion never substitutes.
fn lexeme(cursor: &Cursor<'_>, start: usize) -> String {
    String::from_utf8_lossy(cursor.bytes_from(start)).into_owned()
}

#[inline]
fn is_letter(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}
