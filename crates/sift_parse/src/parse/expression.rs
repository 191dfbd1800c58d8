use sift_ast::{Base, Chain, Expression};

use crate::token::TokenContents;

use super::{
    chain::parse_piped_stages,
    cursor::TokenCursor,
    literal::{is_identifier, parse_value},
    utils::expected_token,
    ParseResult,
};

/// Parses an expression: a base value followed by zero or more piped stages.
pub(crate) fn parse_expression_tokens(tokens: &mut TokenCursor) -> ParseResult<Expression> {
    let base = parse_base(tokens)?;

    let mut stages = Vec::new();
    parse_piped_stages(tokens, &mut stages)?;

    Ok(Expression {
        base,
        chain: Chain::from(stages),
    })
}

/// Parses the base of an expression.
///
/// Identifiers refer to variables. Everything else is a literal.
fn parse_base(tokens: &mut TokenCursor) -> ParseResult<Base> {
    match &tokens.peek().contents {
        TokenContents::Literal(word) if is_identifier(word) => {
            let name = word.clone();
            tokens.next();
            Ok(Base::Variable(name))
        }
        TokenContents::Eof | TokenContents::Pipe => Err(expected_token(tokens, "a value")),
        _ => Ok(Base::Literal(parse_value(tokens)?)),
    }
}
