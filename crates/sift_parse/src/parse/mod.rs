use sift_ast::{Chain, Expression, Literal};

use crate::{lex::lexer::lex, ParseError};

use self::{
    chain::parse_stages, cursor::TokenCursor, expression::parse_expression_tokens,
    literal::parse_value, utils::take_eof,
};

mod chain;
mod cursor;
mod expression;
mod literal;
mod utils;


/// A specialized [`Result`] type for parsing.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a filter [`Chain`] such as `exclude: Peter | join: ', '` by consuming some input
/// `src` in its entirety.
///
/// # Errors
///
/// This function will return an error if the chain is empty or malformed.
pub fn parse_chain(src: &str) -> ParseResult<Chain> {
    let mut tokens = TokenCursor::from(lex(src)?);
    Ok(Chain::from(parse_stages(&mut tokens)?))
}

/// Parses an [`Expression`] such as `names | exclude: Peter` by consuming some input `src` in
/// its entirety.
///
/// The expression's chain may be empty.
///
/// # Errors
///
/// This function will return an error if the expression is malformed.
pub fn parse_expression(src: &str) -> ParseResult<Expression> {
    let mut tokens = TokenCursor::from(lex(src)?);
    parse_expression_tokens(&mut tokens)
}

/// Parses a single [`Literal`].
///
/// # Errors
///
/// This function will return an error if `src` is not exactly one literal.
pub fn parse_literal(src: &str) -> ParseResult<Literal> {
    let mut tokens = TokenCursor::from(lex(src)?);
    let literal = parse_value(&mut tokens)?;
    take_eof(&mut tokens)?;
    Ok(literal)
}
