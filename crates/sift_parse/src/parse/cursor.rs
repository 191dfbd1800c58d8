use std::{iter::Peekable, vec::IntoIter};

use crate::token::{Span, Token, TokenContents};

/// A cursor for traversing through a peekable [`Token`] iterator while skipping trivial tokens.
#[derive(Clone)]
pub struct TokenCursor {
    /// Tokens that the cursor traverses.
    tokens: Peekable<IntoIter<Token>>,

    /// The token representing the cursor's EOF.
    /// This token is returned upon, and after, consuming all tokens.
    eof_token: Token,
}

impl TokenCursor {
    /// Returns a reference to the next non-trivial [`Token`] while advancing the cursor past
    /// trivial tokens.
    pub fn peek(&mut self) -> &Token {
        self.skip_trivial_tokens();
        self.tokens.peek().unwrap_or(&self.eof_token)
    }

    /// Returns the next non-trivial [`Token`] while advancing the cursor.
    pub fn next(&mut self) -> Token {
        self.skip_trivial_tokens();
        self.tokens.next().unwrap_or_else(|| self.eof_token.clone())
    }

    /// Returns the next non-trivial [`Token`] and advances the cursor if the token matches a
    /// predicate.
    pub fn next_if(&mut self, func: impl FnOnce(&Token) -> bool) -> Option<Token> {
        self.skip_trivial_tokens();
        self.tokens.next_if(func)
    }

    /// Skips all trivial tokens, stopping before the next non-trivial token.
    fn skip_trivial_tokens(&mut self) {
        while self.tokens.next_if(is_trivial).is_some() {}
    }
}

impl From<Vec<Token>> for TokenCursor {
    fn from(tokens: Vec<Token>) -> Self {
        let end = tokens.last().map_or(0, |token| token.span.end);
        Self {
            eof_token: Token::new(TokenContents::Eof, Span::new(end, end)),
            tokens: tokens.into_iter().peekable(),
        }
    }
}

/// Returns `true` if a [`Token`] is considered trivial.
/// Trivial tokens are typically discarded.
fn is_trivial(token: &Token) -> bool {
    matches!(token.contents, TokenContents::Whitespace)
}
