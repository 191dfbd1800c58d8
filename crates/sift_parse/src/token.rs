/// A byte range within the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        assert!(
            start <= end,
            "Span start {} cannot come after end {}",
            start,
            end
        );
        Self { start, end }
    }
}

/// A unit of input identified through lexical analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Token contents.
    pub contents: TokenContents,

    /// Token position in the input.
    pub span: Span,
}

impl Token {
    /// Constructs a new token.
    pub fn new(contents: TokenContents, span: Span) -> Self {
        Self { contents, span }
    }
}

/// The contents of a token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenContents {
    /// A bare word, such as a filter name, a number, or unquoted text.
    Literal(String),
    /// Text between `"` or `'` with escapes resolved.
    Quoted(String),

    /// "|"
    Pipe,
    /// ":"
    Colon,
    /// ","
    Comma,

    /// "{"
    OpenBrace,
    /// "}"
    CloseBrace,
    /// "["
    OpenBracket,
    /// "]"
    CloseBracket,

    Whitespace,

    /// End of input.
    Eof,
}
