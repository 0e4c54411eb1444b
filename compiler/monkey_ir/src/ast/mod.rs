//! AST node shapes.
//!
//! The scanner never builds these; the parser does. This module only fixes
//! the shapes and the canonical-text contract every node shares:
//!
//! - [`Node::token_literal`]: literal of the token that introduced the node
//! - `Display`: full rendering of the node back to source-like text
//!
//! # Module Structure
//!
//! - `expr`: [`Expression`] and [`Identifier`]
//! - `stmt`: [`Statement`] and its three variants

mod expr;
mod stmt;

pub use expr::{Expression, Identifier};
pub use stmt::{ExpressionStatement, LetStatement, ReturnStatement, Statement};

use std::fmt;

/// Canonical-text contract shared by every node.
///
/// Used for diagnostics and REPL echo only.
pub trait Node: fmt::Display {
    /// Literal of the token the node was built from.
    fn token_literal(&self) -> &str;
}

/// Root of every tree the parser produces: an ordered list of statements.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Self {
        Program { statements }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Node for Program {
    /// Empty string for an empty program, otherwise the first statement's
    /// literal.
    fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map_or("", Statement::token_literal)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}
