use sift_ast::{Arguments, Literal};
use sift_core::{Args, Value};

/// Returns the value denoted by a literal.
///
/// Duplicate mapping keys resolve to the last entry.
pub fn literal_value(literal: &Literal) -> Value {
    match literal {
        Literal::Null => Value::Null,
        Literal::Bool(value) => Value::Bool(*value),
        Literal::Number(n) => Value::Number(*n),
        Literal::Text(text) => Value::Text(text.clone()),
        Literal::List(items) => Value::List(items.iter().map(literal_value).collect()),
        Literal::Map(entries) => Value::Map(
            entries
                .iter()
                .map(|(key, value)| (key.clone(), literal_value(value)))
                .collect(),
        ),
    }
}

/// Returns filter arguments from parsed stage arguments.
pub(crate) fn resolve_args(args: &Arguments) -> Args {
    match args {
        Arguments::Positional(literals) => {
            Args::Positional(literals.iter().map(literal_value).collect())
        }
        Arguments::Options(entries) => Args::Options(
            entries
                .iter()
                .map(|(key, value)| (key.clone(), literal_value(value)))
                .collect(),
        ),
    }
}
