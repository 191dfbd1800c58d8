use std::iter::Peekable;
use std::str::CharIndices;

use crate::error::LexError;
use crate::token::TokenContents::*;
use crate::token::{Span, Token, TokenContents};

/// Character representing the end of input (also known as end of file = EOF).
const EOF_CHAR: char = '\0';
type Input<'a> = Peekable<CharIndices<'a>>;
type LexResult = Result<Token, LexError>;

/// Lexes some input `str` and returns all tokens within the input.
///
/// The returned tokens do not include a trailing [`TokenContents::Eof`].
pub fn lex(src: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(src);
    let mut tokens = Vec::new();

    loop {
        match lexer.next_token() {
            Ok(token) if token.contents == Eof => break,
            Ok(token) => tokens.push(token),
            Err(error) => return Err(error),
        }
    }

    Ok(tokens)
}

/// Returns `true` if a character ends a bare literal.
fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || matches!(c, '|' | ':' | ',' | '{' | '}' | '[' | ']' | '"' | '\'')
}

/// A lexer takes some `str` input and tokenizes it, returning identified tokens
/// from the original input.
pub struct Lexer<'a> {
    src: &'a str,
    input: Input<'a>,
    input_length: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            input: src.char_indices().peekable(),
            input_length: src.len(),
        }
    }

    /// Advances the cursor and returns the next token.
    pub fn next_token(&mut self) -> LexResult {
        let Some(&(_, c)) = self.input.peek() else {
            return Ok(self.eof_token());
        };

        match c {
            '|' => self.eat_char(Pipe),
            ':' => self.eat_char(Colon),
            ',' => self.eat_char(Comma),
            '{' => self.eat_char(OpenBrace),
            '}' => self.eat_char(CloseBrace),
            '[' => self.eat_char(OpenBracket),
            ']' => self.eat_char(CloseBracket),
            '"' => self.eat_quoted('"'),
            '\'' => self.eat_quoted('\''),
            c if c.is_whitespace() => self.eat_whitespace(),
            _ => self.eat_literal(),
        }
    }

    /// Returns a token denoting the end of input.
    fn eof_token(&self) -> Token {
        Token::new(Eof, Span::new(self.input_length, self.input_length))
    }

    /// Eats a single character.
    fn eat_char(&mut self, contents: TokenContents) -> LexResult {
        let default = (self.input_length, EOF_CHAR);
        let (index, c) = self.input.next().unwrap_or(default);
        Ok(Token::new(contents, Span::new(index, index + c.len_utf8())))
    }

    /// Eats a quoted string, resolving escape sequences.
    ///
    /// `\n` and `\t` are turned into a newline and a tab. Any other escaped
    /// character, including the delimiter, is kept as-is.
    fn eat_quoted(&mut self, delimiter: char) -> LexResult {
        let default = (self.input_length, EOF_CHAR);
        let start = self.input.next().unwrap_or(default).0;
        let mut quoted = String::new();

        loop {
            let Some((index, c)) = self.input.next() else {
                return Err(LexError::UnterminatedQuote(Span::new(start, self.input_length)));
            };

            match c {
                '\\' => match self.input.next() {
                    Some((_, 'n')) => quoted.push('\n'),
                    Some((_, 't')) => quoted.push('\t'),
                    Some((_, escaped)) => quoted.push(escaped),
                    None => {
                        return Err(LexError::UnterminatedQuote(Span::new(
                            start,
                            self.input_length,
                        )))
                    }
                },
                c if c == delimiter => {
                    return Ok(Token::new(Quoted(quoted), Span::new(start, index + 1)));
                }
                c => quoted.push(c),
            }
        }
    }

    /// Eats consecutive whitespace.
    fn eat_whitespace(&mut self) -> LexResult {
        let span = self.eat_while(char::is_whitespace);
        Ok(Token::new(Whitespace, span))
    }

    /// Eats a bare word.
    fn eat_literal(&mut self) -> LexResult {
        let span = self.eat_while(|c| !is_delimiter(c));
        Ok(Token::new(
            Literal(self.src[span.start..span.end].to_string()),
            span,
        ))
    }

    /// Advances the cursor while a predicate holds and returns the consumed span.
    fn eat_while<F: Fn(char) -> bool>(&mut self, predicate: F) -> Span {
        let start = self
            .input
            .peek()
            .map_or(self.input_length, |&(index, _)| index);
        let mut end = start;

        while let Some(&(index, c)) = self.input.peek() {
            if !predicate(c) {
                break;
            }
            end = index + c.len_utf8();
            self.input.next();
        }

        Span::new(start, end)
    }
}
