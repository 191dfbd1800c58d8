use std::collections::BTreeMap;

use crate::{Args, Filter, FilterError, FilterResult, Signature, Value};

/// Returns the result of applying a filter to a value.
///
/// A null input is replaced with the filter's default input. Arguments are
/// reshaped to match the filter's [`Signature`]: a single options mapping is
/// handed to keyword-style filters as-is, and to positional filters as one
/// positional map argument.
///
/// Errors raised by the filter are returned unmodified.
pub fn invoke(filter: &dyn Filter, input: Value, args: Args) -> FilterResult {
    let input = match input {
        Value::Null => filter.default_input(),
        value => value,
    };

    let args = shape_args(filter.signature(), args)?;
    filter.apply(input, &args)
}

/// Reshapes arguments to match a signature.
fn shape_args(signature: Signature, args: Args) -> Result<Args, FilterError> {
    match (signature, args) {
        (Signature::Positional, Args::Options(map)) => Ok(Args::Positional(vec![Value::Map(map)])),
        (Signature::Options, Args::Positional(mut values)) => {
            match (values.pop(), values.is_empty()) {
                (None, _) => Ok(Args::Options(BTreeMap::new())),
                (Some(Value::Map(map)), true) => Ok(Args::Options(map)),
                _ => Err(FilterError::InvalidArgs(
                    "expected a single options mapping".into(),
                )),
            }
        }
        (_, args) => Ok(args),
    }
}
