use lazy_static::lazy_static;
use regex::Regex;
use sift_ast::Literal;

use crate::{token::TokenContents, ParseError};

use super::{cursor::TokenCursor, utils::take_token, ParseResult};

lazy_static! {
    static ref NUMBER: Regex =
        Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?$").expect("valid number pattern");
    static ref IDENTIFIER: Regex =
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid identifier pattern");
}

/// Returns `true` if a bare word can name a filter or a variable.
pub(crate) fn is_identifier(word: &str) -> bool {
    IDENTIFIER.is_match(word) && !is_keyword(word)
}

/// Returns `true` if a bare word denotes a non-text literal.
fn is_keyword(word: &str) -> bool {
    matches!(word, "null" | "true" | "false")
}

/// Returns the literal denoted by a bare word.
///
/// Keywords and numbers are recognized; everything else is text.
pub(crate) fn bare_literal(word: String) -> Literal {
    match word.as_str() {
        "null" => Literal::Null,
        "true" => Literal::Bool(true),
        "false" => Literal::Bool(false),
        number if NUMBER.is_match(number) => match number.parse() {
            Ok(n) => Literal::Number(n),
            Err(_) => Literal::Text(word),
        },
        _ => Literal::Text(word),
    }
}

/// Parses a literal value.
pub(crate) fn parse_value(tokens: &mut TokenCursor) -> ParseResult<Literal> {
    let token = tokens.next();
    match token.contents {
        TokenContents::Literal(word) => Ok(bare_literal(word)),
        TokenContents::Quoted(text) => Ok(Literal::Text(text)),
        TokenContents::OpenBracket => parse_list(tokens),
        TokenContents::OpenBrace => parse_map(tokens),
        _ => Err(ParseError::unexpected(token)),
    }
}

/// Parses the items of a list, after its opening bracket.
fn parse_list(tokens: &mut TokenCursor) -> ParseResult<Literal> {
    let mut items = Vec::new();
    if take_token(tokens, &TokenContents::CloseBracket, "']'").is_ok() {
        return Ok(Literal::List(items));
    }

    loop {
        items.push(parse_value(tokens)?);

        let next = tokens.next();
        match next.contents {
            TokenContents::Comma => (),
            TokenContents::CloseBracket => break,
            _ => return Err(ParseError::unexpected(next)),
        }
    }

    Ok(Literal::List(items))
}

/// Parses the entries of a mapping, after its opening brace.
fn parse_map(tokens: &mut TokenCursor) -> ParseResult<Literal> {
    let mut entries = Vec::new();
    if take_token(tokens, &TokenContents::CloseBrace, "'}'").is_ok() {
        return Ok(Literal::Map(entries));
    }

    loop {
        let key_token = tokens.next();
        let key = match key_token.contents {
            TokenContents::Literal(key) | TokenContents::Quoted(key) => key,
            _ => return Err(ParseError::unexpected(key_token)),
        };
        take_token(tokens, &TokenContents::Colon, "':'")?;
        entries.push((key, parse_value(tokens)?));

        let next = tokens.next();
        match next.contents {
            TokenContents::Comma => (),
            TokenContents::CloseBrace => break,
            _ => return Err(ParseError::unexpected(next)),
        }
    }

    Ok(Literal::Map(entries))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_recognizes_bare_literals() {
        assert_eq!(bare_literal("null".into()), Literal::Null);
        assert_eq!(bare_literal("true".into()), Literal::Bool(true));
        assert_eq!(bare_literal("false".into()), Literal::Bool(false));
        assert_eq!(bare_literal("42".into()), Literal::Number(42.0));
        assert_eq!(bare_literal("-1.5".into()), Literal::Number(-1.5));
        assert_eq!(bare_literal("1e3".into()), Literal::Number(1000.0));
        assert_eq!(bare_literal("Peter".into()), Literal::Text("Peter".into()));
        assert_eq!(bare_literal("1.2.3".into()), Literal::Text("1.2.3".into()));
        assert_eq!(bare_literal("-".into()), Literal::Text("-".into()));
    }

    #[test]
    fn it_recognizes_identifiers() {
        assert!(is_identifier("reverse"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("snake_case2"));
        assert!(!is_identifier("2fast"));
        assert!(!is_identifier("kebab-case"));
        assert!(!is_identifier("true"));
    }
}
