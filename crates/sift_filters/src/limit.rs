use sift_core::{Args, Filter, FilterError, FilterResult, Value};

use crate::integer_arg;

/// A filter that limits text and lists to a number of characters or items.
///
/// A negative limit keeps the last items instead of the first ones.
#[derive(Debug, Clone)]
pub struct LimitFilter;
impl Filter for LimitFilter {
    fn name(&self) -> &str {
        "limit"
    }

    fn filter_text(&self, text: String, args: &Args) -> FilterResult {
        let chars: Vec<char> = text.chars().collect();
        let range = bounds(chars.len(), limit(args)?);
        Ok(Value::Text(chars[range.0..range.1].iter().collect()))
    }

    fn filter_list(&self, mut list: Vec<Value>, args: &Args) -> FilterResult {
        let (start, end) = bounds(list.len(), limit(args)?);
        list.truncate(end);
        Ok(Value::List(list.split_off(start)))
    }
}

/// Returns the limit argument.
fn limit(args: &Args) -> Result<i64, FilterError> {
    match args.positional() {
        [] => Err(FilterError::MissingArg("limit")),
        [limit] => integer_arg(limit, "limit"),
        _ => Err(FilterError::TooManyArgs),
    }
}

/// Returns the range of items to keep from a sequence of `len` items.
fn bounds(len: usize, limit: i64) -> (usize, usize) {
    let n = usize::try_from(limit.unsigned_abs()).unwrap_or(usize::MAX).min(len);
    if limit >= 0 {
        (0, n)
    } else {
        (len - n, len)
    }
}
