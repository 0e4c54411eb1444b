//! Token types for the Monkey scanner.

mod kind;

pub use kind::TokenKind;

use std::fmt;

/// A classified lexeme: its kind plus the exact source text it matched.
///
/// The literal is an owned copy, never a view into the source buffer.
/// Tokens are created by one `next_token` call and not mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Token {
            kind,
            literal: literal.into(),
        }
    }

    /// The end-of-input token, with an empty literal.
    pub fn eof() -> Self {
        Token::new(TokenKind::EndOfInput, String::new())
    }

    /// Returns `true` if this is the end-of-input token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

/// Renders as `Kind("literal")`, using the variant name rather than
/// [`TokenKind::display_name`] so every kind stays distinguishable in dumps.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?})", self.kind, self.literal)
    }
}
