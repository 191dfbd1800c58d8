use crate::Literal;

/// A single filter reference within a chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Stage {
    /// Filter name.
    pub name: String,

    /// Filter arguments.
    pub args: Arguments,
}

impl Stage {
    /// Constructs a stage without any arguments.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Arguments::default(),
        }
    }

    /// Constructs a stage with positional arguments.
    pub fn with_args(name: impl Into<String>, args: Vec<Literal>) -> Self {
        Self {
            name: name.into(),
            args: Arguments::Positional(args),
        }
    }
}

/// Arguments given to a stage.
#[derive(Debug, Clone, PartialEq)]
pub enum Arguments {
    /// `filter: a, b, c`
    Positional(Vec<Literal>),

    /// `filter: { key: value, ... }`
    Options(Vec<(String, Literal)>),
}

impl Default for Arguments {
    fn default() -> Self {
        Arguments::Positional(Vec::new())
    }
}
