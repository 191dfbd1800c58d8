use sift_core::Value;
use sift_eval::literal_value;
use sift_parse::parse_literal;

/// Parses a `NAME=LITERAL` variable binding.
///
/// Values that are not valid literals are bound as plain text, so that
/// `--var greeting=hello world` works without quoting.
pub(crate) fn parse_var(binding: &str) -> Result<(String, Value), String> {
    let Some((name, literal)) = binding.split_once('=') else {
        return Err(format!("expected NAME=LITERAL, found '{binding}'"));
    };

    let name = name.trim();
    if name.is_empty() {
        return Err("variable names cannot be empty".to_owned());
    }

    let value = match parse_literal(literal) {
        Ok(literal) => literal_value(&literal),
        Err(error) => {
            tracing::debug!(variable = name, %error, "binding variable as text");
            Value::Text(literal.to_owned())
        }
    };

    Ok((name.to_owned(), value))
}
