use sift_core::{Args, Filter, FilterError, FilterResult, Value};

/// A filter that reverses text and lists.
///
/// Text is reversed character by character.
#[derive(Debug, Clone)]
pub struct ReverseFilter;
impl Filter for ReverseFilter {
    fn name(&self) -> &str {
        "reverse"
    }

    fn filter_text(&self, text: String, args: &Args) -> FilterResult {
        if !args.is_empty() {
            return Err(FilterError::NoArgsAllowed);
        }

        Ok(Value::Text(text.chars().rev().collect()))
    }

    fn filter_list(&self, mut list: Vec<Value>, args: &Args) -> FilterResult {
        if !args.is_empty() {
            return Err(FilterError::NoArgsAllowed);
        }

        list.reverse();
        Ok(Value::List(list))
    }
}
