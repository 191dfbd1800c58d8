/// A literal value as written in an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// `null`
    Null,

    /// `true` or `false`.
    Bool(bool),

    /// A numeric literal such as `42` or `-1.5`.
    Number(f64),

    /// Quoted text, or a bare word in argument position.
    Text(String),

    /// A bracketed list: `[a, b, c]`.
    List(Vec<Literal>),

    /// A braced mapping: `{ key: value }`.
    ///
    /// Entries are kept in source order. Duplicate keys are allowed here and
    /// resolved when the literal is turned into a value (last one wins).
    Map(Vec<(String, Literal)>),
}
