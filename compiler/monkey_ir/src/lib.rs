//! Monkey IR - shared front-end data types
//!
//! This crate contains the data the scanner produces and the parser consumes:
//! - Tokens: a closed [`TokenKind`] plus the owned literal text
//! - AST nodes: [`Program`], [`Statement`], [`Expression`], [`Identifier`]
//!
//! # Design Philosophy
//!
//! - **Closed sets**: token kinds, statements and expressions are enums,
//!   matched exhaustively. No trait objects.
//! - **Owned text**: every literal is a `String` copied out of the source,
//!   so tokens and nodes outlive the buffer they were scanned from.
//! - **No positions**: tokens carry no span. Diagnostics are phrased in
//!   terms of token text.

pub mod ast;
mod token;

pub use ast::{
    Expression, ExpressionStatement, Identifier, LetStatement, Node, Program, ReturnStatement,
    Statement,
};
pub use token::{Token, TokenKind};
