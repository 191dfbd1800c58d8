use crate::{Chain, Literal};

/// A complete expression: a base value followed by a (possibly empty) chain.
///
/// `names | exclude: Peter | join: ', '`
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub base: Base,
    pub chain: Chain,
}

/// The value an expression starts from.
#[derive(Debug, Clone, PartialEq)]
pub enum Base {
    /// An inline literal.
    Literal(Literal),

    /// A variable name for a value that is resolved at evaluation time.
    Variable(String),
}
