//! Token kinds for Monkey.

use std::fmt;

/// Every kind of token the scanner can produce.
///
/// The set is closed: the scanner maps every input byte to exactly one of
/// these, falling back to [`Illegal`](TokenKind::Illegal).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A byte no rule covers.
    Illegal,
    /// No input remains. Literal is empty.
    EndOfInput,

    /// Identifier: `foo`, `add_two`
    Identifier,
    /// Integer literal: `5`, `10`
    IntegerLiteral,

    Assign,      // =
    Plus,        // +
    Minus,       // -
    Bang,        // !
    Star,        // *
    Slash,       // /
    Equal,       // ==
    NotEqual,    // !=
    LessThan,    // <
    GreaterThan, // >

    Comma,     // ,
    Semicolon, // ;
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }

    Function, // fn
    Let,
    If,
    Else,
    True,
    False,
    Return,
}

impl TokenKind {
    /// Every token kind, in declaration order.
    pub const ALL: [TokenKind; 27] = [
        TokenKind::Illegal,
        TokenKind::EndOfInput,
        TokenKind::Identifier,
        TokenKind::IntegerLiteral,
        TokenKind::Assign,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Bang,
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::Equal,
        TokenKind::NotEqual,
        TokenKind::LessThan,
        TokenKind::GreaterThan,
        TokenKind::Comma,
        TokenKind::Semicolon,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::Function,
        TokenKind::Let,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::True,
        TokenKind::False,
        TokenKind::Return,
    ];

    /// The exact source spelling of kinds that only ever have one.
    ///
    /// Returns `None` for kinds whose literal varies with the input
    /// (identifiers, integers, illegal bytes) and for end of input.
    /// These spellings are what the parser sees in [`Token::literal`](crate::Token).
    pub const fn fixed_lexeme(self) -> Option<&'static str> {
        match self {
            TokenKind::Assign => Some("="),
            TokenKind::Plus => Some("+"),
            TokenKind::Minus => Some("-"),
            TokenKind::Bang => Some("!"),
            TokenKind::Star => Some("*"),
            TokenKind::Slash => Some("/"),
            TokenKind::Equal => Some("=="),
            TokenKind::NotEqual => Some("!="),
            TokenKind::LessThan => Some("<"),
            TokenKind::GreaterThan => Some(">"),
            TokenKind::Comma => Some(","),
            TokenKind::Semicolon => Some(";"),
            TokenKind::LParen => Some("("),
            TokenKind::RParen => Some(")"),
            TokenKind::LBrace => Some("{"),
            TokenKind::RBrace => Some("}"),
            TokenKind::Function => Some("fn"),
            TokenKind::Let => Some("let"),
            TokenKind::If => Some("if"),
            TokenKind::Else => Some("else"),
            TokenKind::True => Some("true"),
            TokenKind::False => Some("false"),
            TokenKind::Return => Some("return"),
            TokenKind::Illegal
            | TokenKind::EndOfInput
            | TokenKind::Identifier
            | TokenKind::IntegerLiteral => None,
        }
    }

    /// Human-readable name, for "expected X, found Y" style messages.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::Illegal => "illegal character",
            TokenKind::EndOfInput => "end of input",
            TokenKind::Identifier => "identifier",
            TokenKind::IntegerLiteral => "integer",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Bang => "!",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Equal => "==",
            TokenKind::NotEqual => "!=",
            TokenKind::LessThan => "<",
            TokenKind::GreaterThan => ">",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Function => "fn",
            TokenKind::Let => "let",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Return => "return",
        }
    }

    /// Returns `true` for the seven reserved words.
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Function
                | TokenKind::Let
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Return
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
