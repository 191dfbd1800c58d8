mod error;
mod lex;
mod parse;
mod token;

pub use error::{LexError, ParseError};
pub use lex::lexer::lex;
pub use parse::{parse_chain, parse_expression, parse_literal, ParseResult};
pub use token::{Span, Token, TokenContents};
