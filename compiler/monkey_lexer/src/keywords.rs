//! Keyword resolution.
//!
//! Seven reserved words, matched case-sensitively against the whole
//! identifier run. Everything else is an identifier.

use monkey_ir::TokenKind;

/// Classify an identifier-shaped spelling.
///
/// Total: returns the keyword kind for `fn`, `let`, `true`, `false`,
/// `return`, `if`, `else`, and [`TokenKind::Identifier`] for anything else,
/// including case variants (`Let`) and near misses (`lets`).
///
/// Uses the length as a first-pass filter: reserved words are 2-6 bytes.
#[inline]
pub fn lookup(text: &str) -> TokenKind {
    match text.len() {
        2 => match text {
            "fn" => TokenKind::Function,
            "if" => TokenKind::If,
            _ => TokenKind::Identifier,
        },
        3 => match text {
            "let" => TokenKind::Let,
            _ => TokenKind::Identifier,
        },
        4 => match text {
            "true" => TokenKind::True,
            "else" => TokenKind::Else,
            _ => TokenKind::Identifier,
        },
        5 => match text {
            "false" => TokenKind::False,
            _ => TokenKind::Identifier,
        },
        6 => match text {
            "return" => TokenKind::Return,
            _ => TokenKind::Identifier,
        },
        _ => TokenKind::Identifier,
    }
}

#[cfg(test)]
mod tests;
