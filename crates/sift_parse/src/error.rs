use thiserror::Error;

use crate::token::{Span, Token, TokenContents};

/// Lex errors are returned when input cannot be split into tokens.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    /// A quoted string is missing its closing quote.
    #[error("unterminated quoted string")]
    UnterminatedQuote(Span),
}

/// Parse errors are returned by a parser when input cannot be parsed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// A pipe is not followed by a filter.
    #[error("dangling pipe")]
    DanglingPipe(Span),

    /// The expression does not contain any filters.
    #[error("empty filter chain")]
    EmptyChain,

    /// There is nothing between two pipes, or before the first pipe.
    #[error("empty filter stage")]
    EmptyStage(Span),

    /// An expected token was not found in the input.
    #[error("expected {}, found: {:?}", .0, .1.contents)]
    ExpectedToken(&'static str, Token), // (expected, found).

    /// There is no more input while parsing a started list or mapping.
    #[error("incomplete sequence")]
    IncompleteSequence,

    /// A filter name is not an identifier.
    #[error("invalid filter name: {:?}", .0.contents)]
    InvalidFilterName(Token),

    /// The input could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// A colon is not followed by any arguments.
    #[error("missing filter arguments")]
    MissingArguments(Span),

    /// An unexpected token was found in the input.
    #[error("unexpected token: {:?}", .0.contents)]
    UnexpectedToken(Token),
}

impl ParseError {
    /// Returns a help text associated with the error.
    pub fn help(&self) -> &str {
        match self {
            ParseError::DanglingPipe(_) => "a filter name is expected after this pipe",
            ParseError::EmptyChain => "at least one filter is required",
            ParseError::EmptyStage(_) => "a filter name is expected before this pipe",
            ParseError::ExpectedToken(_, _) => "another token is expected here",
            ParseError::IncompleteSequence => "this sequence is incomplete",
            ParseError::InvalidFilterName(_) => "filter names are identifiers",
            ParseError::Lex(LexError::UnterminatedQuote(_)) => "this quote is never closed",
            ParseError::MissingArguments(_) => "arguments are expected after this colon",
            ParseError::UnexpectedToken(_) => "this token is unexpected here",
        }
    }

    /// Returns the positional span in which the error resides.
    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::DanglingPipe(span)
            | ParseError::EmptyStage(span)
            | ParseError::MissingArguments(span)
            | ParseError::Lex(LexError::UnterminatedQuote(span)) => Some(*span),
            ParseError::ExpectedToken(_, token)
            | ParseError::InvalidFilterName(token)
            | ParseError::UnexpectedToken(token) => Some(token.span),
            ParseError::EmptyChain | ParseError::IncompleteSequence => None,
        }
    }
}

impl ParseError {
    /// Returns an error for a token that is not expected at the current position.
    pub(crate) fn unexpected(token: Token) -> Self {
        match token.contents {
            TokenContents::Eof => ParseError::IncompleteSequence,
            _ => ParseError::UnexpectedToken(token),
        }
    }
}
