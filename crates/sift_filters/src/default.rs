use sift_core::{Args, Filter, FilterError, FilterResult, Value};

/// A filter that replaces missing values with a fallback.
///
/// Null and empty text are considered missing.
#[derive(Debug, Clone)]
pub struct DefaultFilter;
impl Filter for DefaultFilter {
    fn name(&self) -> &str {
        "default"
    }

    fn apply(&self, input: Value, args: &Args) -> FilterResult {
        let fallback = match args.positional() {
            [] => return Err(FilterError::MissingArg("fallback")),
            [fallback] => fallback,
            _ => return Err(FilterError::TooManyArgs),
        };

        match input {
            Value::Null => Ok(fallback.clone()),
            Value::Text(text) if text.is_empty() => Ok(fallback.clone()),
            value => Ok(value),
        }
    }
}
