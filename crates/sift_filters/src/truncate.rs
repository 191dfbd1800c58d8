use sift_core::{Args, Filter, FilterError, FilterResult, Signature, Value};

use crate::integer_arg;

const DEFAULT_LENGTH: usize = 10;
const DEFAULT_SUFFIX: &str = "...";

/// A filter that shortens text, appending a suffix when anything is cut off.
///
/// Takes keyword-style options: `truncate: { length: 5, suffix: '…' }`.
/// Both options are optional.
#[derive(Debug, Clone)]
pub struct TruncateFilter;
impl Filter for TruncateFilter {
    fn name(&self) -> &str {
        "truncate"
    }

    fn signature(&self) -> Signature {
        Signature::Options
    }

    fn filter_text(&self, text: String, args: &Args) -> FilterResult {
        let mut length = DEFAULT_LENGTH;
        let mut suffix = DEFAULT_SUFFIX.to_string();

        for (key, value) in args.options().into_iter().flatten() {
            match key.as_str() {
                "length" => {
                    length = usize::try_from(integer_arg(value, "length")?).map_err(|_| {
                        FilterError::InvalidArgs("length cannot be negative".into())
                    })?;
                }
                "suffix" => suffix = value.to_string(),
                _ => return Err(FilterError::InvalidArgs(format!("unknown option '{key}'"))),
            }
        }

        if text.chars().count() <= length {
            return Ok(Value::Text(text));
        }

        let mut truncated: String = text.chars().take(length).collect();
        truncated.push_str(&suffix);
        Ok(Value::Text(truncated))
    }
}
