use sift_core::{Args, Filter, FilterError, FilterResult, Value};

use crate::integer_arg;

/// A filter that returns the first item in a list.
#[derive(Debug, Clone)]
pub struct FirstFilter;
impl Filter for FirstFilter {
    fn name(&self) -> &str {
        "first"
    }

    fn default_input(&self) -> Value {
        Value::List(Vec::new())
    }

    fn filter_list(&self, list: Vec<Value>, args: &Args) -> FilterResult {
        if !args.is_empty() {
            return Err(FilterError::NoArgsAllowed);
        }

        let Some(item) = list.into_iter().next() else {
            return Err(FilterError::NoSuchValue);
        };

        Ok(item)
    }
}

/// A filter that returns the last item in a list.
#[derive(Debug, Clone)]
pub struct LastFilter;
impl Filter for LastFilter {
    fn name(&self) -> &str {
        "last"
    }

    fn default_input(&self) -> Value {
        Value::List(Vec::new())
    }

    fn filter_list(&self, list: Vec<Value>, args: &Args) -> FilterResult {
        if !args.is_empty() {
            return Err(FilterError::NoArgsAllowed);
        }

        let Some(item) = list.into_iter().last() else {
            return Err(FilterError::NoSuchValue);
        };

        Ok(item)
    }
}

/// A filter that returns the `n`-th item in a list.
#[derive(Debug, Clone)]
pub struct NthFilter;
impl Filter for NthFilter {
    fn name(&self) -> &str {
        "nth"
    }

    fn default_input(&self) -> Value {
        Value::List(Vec::new())
    }

    fn filter_list(&self, list: Vec<Value>, args: &Args) -> FilterResult {
        let n = match args.positional() {
            [] => return Err(FilterError::MissingArg("index")),
            [n] => integer_arg(n, "index")?,
            _ => return Err(FilterError::TooManyArgs),
        };

        let Ok(n) = usize::try_from(n) else {
            return Err(FilterError::NoSuchValue);
        };

        let Some(item) = list.into_iter().nth(n) else {
            return Err(FilterError::NoSuchValue);
        };

        Ok(item)
    }
}
