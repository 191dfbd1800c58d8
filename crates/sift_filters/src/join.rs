use itertools::Itertools;
use sift_core::{Args, Filter, FilterError, FilterResult, Value};

/// A filter for joining lists into text using a separator.
#[derive(Debug, Clone)]
pub struct JoinFilter;
impl Filter for JoinFilter {
    fn name(&self) -> &str {
        "join"
    }

    fn default_input(&self) -> Value {
        Value::List(Vec::new())
    }

    fn filter_list(&self, list: Vec<Value>, args: &Args) -> FilterResult {
        match args.positional() {
            [] => Err(FilterError::MissingArg("separator")),
            [separator] => Ok(Value::Text(list.iter().join(&separator.to_string()))),
            _ => Err(FilterError::TooManyArgs),
        }
    }
}
