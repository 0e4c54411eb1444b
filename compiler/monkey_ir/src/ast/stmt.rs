//! Statement Types
//!
//! Statement node and variants. Each variant keeps the token that opened it
//! so [`Node::token_literal`] can answer without re-scanning.

use std::fmt;

use super::{Expression, Identifier, Node};
use crate::Token;

/// `let <name> = <value>;`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LetStatement {
    /// The `Let` token.
    pub token: Token,
    pub name: Identifier,
    /// Absent while the parser cannot build the initializer yet.
    pub value: Option<Expression>,
}

impl LetStatement {
    pub fn new(token: Token, name: Identifier, value: Option<Expression>) -> Self {
        LetStatement { token, name, value }
    }
}

impl Node for LetStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl fmt::Display for LetStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} = ", self.token.literal, self.name)?;
        if let Some(value) = &self.value {
            write!(f, "{value}")?;
        }
        f.write_str(";")
    }
}

/// `return <value>;`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ReturnStatement {
    /// The `Return` token.
    pub token: Token,
    pub value: Option<Expression>,
}

impl ReturnStatement {
    pub fn new(token: Token, value: Option<Expression>) -> Self {
        ReturnStatement { token, value }
    }
}

impl Node for ReturnStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl fmt::Display for ReturnStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.token.literal)?;
        if let Some(value) = &self.value {
            write!(f, "{value}")?;
        }
        f.write_str(";")
    }
}

/// A bare expression used as a statement: `x + 10;`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExpressionStatement {
    /// First token of the expression.
    pub token: Token,
    pub value: Option<Expression>,
}

impl ExpressionStatement {
    pub fn new(token: Token, value: Option<Expression>) -> Self {
        ExpressionStatement { token, value }
    }
}

impl Node for ExpressionStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl fmt::Display for ExpressionStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{value}"),
            None => Ok(()),
        }
    }
}

/// Statement kinds.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        match self {
            Statement::Let(stmt) => stmt.token_literal(),
            Statement::Return(stmt) => stmt.token_literal(),
            Statement::Expression(stmt) => stmt.token_literal(),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let(stmt) => write!(f, "{stmt}"),
            Statement::Return(stmt) => write!(f, "{stmt}"),
            Statement::Expression(stmt) => write!(f, "{stmt}"),
        }
    }
}

impl From<LetStatement> for Statement {
    fn from(stmt: LetStatement) -> Self {
        Statement::Let(stmt)
    }
}

impl From<ReturnStatement> for Statement {
    fn from(stmt: ReturnStatement) -> Self {
        Statement::Return(stmt)
    }
}

impl From<ExpressionStatement> for Statement {
    fn from(stmt: ExpressionStatement) -> Self {
        Statement::Expression(stmt)
    }
}
