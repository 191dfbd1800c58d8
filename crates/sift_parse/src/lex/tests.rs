use super::lexer::*;
use crate::error::LexError;
use crate::token::{Span, Token, TokenContents::*};

fn tokens(src: &str) -> Vec<Token> {
    lex(src).expect("input should be lexable")
}

#[test]
fn lex_operators() {
    assert_eq!(tokens("|"), vec![Token::new(Pipe, Span::new(0, 1))]);
    assert_eq!(tokens(":"), vec![Token::new(Colon, Span::new(0, 1))]);
    assert_eq!(tokens(","), vec![Token::new(Comma, Span::new(0, 1))]);
    assert_eq!(
        tokens("{}[]"),
        vec![
            Token::new(OpenBrace, Span::new(0, 1)),
            Token::new(CloseBrace, Span::new(1, 2)),
            Token::new(OpenBracket, Span::new(2, 3)),
            Token::new(CloseBracket, Span::new(3, 4)),
        ]
    );
}

#[test]
fn lex_literal() {
    assert_eq!(
        tokens("reverse"),
        vec![Token::new(Literal("reverse".into()), Span::new(0, 7))]
    );
    assert_eq!(
        tokens("-1.5"),
        vec![Token::new(Literal("-1.5".into()), Span::new(0, 4))]
    );
    assert_eq!(
        tokens("Åsa"),
        vec![Token::new(Literal("Åsa".into()), Span::new(0, 4))]
    );
}

#[test]
fn lex_whitespace() {
    assert_eq!(
        tokens(" \t\n"),
        vec![Token::new(Whitespace, Span::new(0, 3))]
    );
}

#[test]
fn lex_quoted() {
    assert_eq!(
        tokens("'a | b'"),
        vec![Token::new(Quoted("a | b".into()), Span::new(0, 7))]
    );
    assert_eq!(
        tokens("\"it's\""),
        vec![Token::new(Quoted("it's".into()), Span::new(0, 6))]
    );
    assert_eq!(
        tokens(r#"'it\'s\n'"#),
        vec![Token::new(Quoted("it's\n".into()), Span::new(0, 9))]
    );
    assert_eq!(
        tokens("''"),
        vec![Token::new(Quoted("".into()), Span::new(0, 2))]
    );
}

#[test]
fn lex_unterminated_quote() {
    assert_eq!(
        lex("join: 'abc"),
        Err(LexError::UnterminatedQuote(Span::new(6, 10)))
    );
    assert_eq!(
        lex("'abc\\"),
        Err(LexError::UnterminatedQuote(Span::new(0, 5)))
    );
}

#[test]
fn lex_chain() {
    assert_eq!(
        tokens("exclude:Peter | join: ', '"),
        vec![
            Token::new(Literal("exclude".into()), Span::new(0, 7)),
            Token::new(Colon, Span::new(7, 8)),
            Token::new(Literal("Peter".into()), Span::new(8, 13)),
            Token::new(Whitespace, Span::new(13, 14)),
            Token::new(Pipe, Span::new(14, 15)),
            Token::new(Whitespace, Span::new(15, 16)),
            Token::new(Literal("join".into()), Span::new(16, 20)),
            Token::new(Colon, Span::new(20, 21)),
            Token::new(Whitespace, Span::new(21, 22)),
            Token::new(Quoted(", ".into()), Span::new(22, 26)),
        ]
    );
}

#[test]
fn lex_empty_input() {
    assert_eq!(tokens(""), vec![]);
}

#[test]
fn lex_nul_characters_as_text() {
    assert_eq!(
        tokens("a\0b |"),
        vec![
            Token::new(Literal("a\0b".into()), Span::new(0, 3)),
            Token::new(Whitespace, Span::new(3, 4)),
            Token::new(Pipe, Span::new(4, 5)),
        ]
    );
}
