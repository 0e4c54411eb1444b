//! Expression Types

use std::fmt;

use super::Node;
use crate::Token;

/// Identifier expression: `x`, `add`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Identifier {
    /// The `Identifier` token.
    pub token: Token,
    pub value: String,
}

impl Identifier {
    /// Build an identifier whose name is the token's literal.
    pub fn new(token: Token) -> Self {
        let value = token.literal.clone();
        Identifier { token, value }
    }
}

impl Node for Identifier {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Expression variants.
///
/// Only identifiers exist so far. Further variants (prefix, infix, literals,
/// calls) belong here as the grammar grows.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Expression {
    Identifier(Identifier),
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        match self {
            Expression::Identifier(ident) => ident.token_literal(),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(ident) => write!(f, "{ident}"),
        }
    }
}

impl From<Identifier> for Expression {
    fn from(ident: Identifier) -> Self {
        Expression::Identifier(ident)
    }
}
