use crate::{
    token::{Token, TokenContents},
    ParseError,
};

use super::{cursor::TokenCursor, ParseResult};

/// Advances past a token if the next matches the given contents.
/// Returns an error naming the `expected` token otherwise.
pub fn take_token(
    tokens: &mut TokenCursor,
    contents: &TokenContents,
    expected: &'static str,
) -> ParseResult<Token> {
    tokens
        .next_if(|token| &token.contents == contents)
        .ok_or_else(|| expected_token(tokens, expected))
}

/// Returns a [`ParseError::ExpectedToken`] around a copy of the next token.
pub fn expected_token(tokens: &mut TokenCursor, expected: &'static str) -> ParseError {
    ParseError::ExpectedToken(expected, tokens.peek().clone())
}

/// Advances the cursor and fails if there is any input left.
pub fn take_eof(tokens: &mut TokenCursor) -> ParseResult<()> {
    let next = tokens.next();
    match next.contents {
        TokenContents::Eof => Ok(()),
        _ => Err(ParseError::UnexpectedToken(next)),
    }
}
