//! Scanner for the Monkey language.
//!
//! Turns source text into [`Token`]s on demand. The byte-level buffer and
//! cursor live in `monkey_lexer_core`; this crate owns the classification
//! rules and the keyword table.
//!
//! # Usage
//!
//! ```
//! use monkey_ir::TokenKind;
//! use monkey_lexer::Scanner;
//!
//! let mut scanner = Scanner::new("let five = 5;");
//! loop {
//!     let token = scanner.next_token();
//!     if token.kind == TokenKind::EndOfInput {
//!         break;
//!     }
//!     println!("{token}");
//! }
//! ```
//!
//! # Debugging
//!
//! The scanner emits `tracing` events: one `trace` per token and a `debug`
//! for every illegal byte. Enable with `RUST_LOG=monkey_lexer=trace`.

mod keywords;
mod scanner;

pub use keywords::lookup;
pub use scanner::Scanner;

use monkey_ir::Token;

/// Scan a whole source string.
///
/// The returned tokens end with exactly one `EndOfInput`. For streaming
/// access, drive a [`Scanner`] directly.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token();
        let done = token.is_eof();
        tokens.push(token);
        if done {
            break;
        }
    }
    tokens
}
