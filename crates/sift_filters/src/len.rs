use std::collections::BTreeMap;

use sift_core::{Args, Filter, FilterError, FilterResult, Value};

/// A filter for returning the length of a value.
///
/// Text is measured in characters, lists in items, and maps in entries.
#[derive(Debug, Clone)]
pub struct LenFilter;
impl Filter for LenFilter {
    fn name(&self) -> &str {
        "len"
    }

    fn filter_text(&self, text: String, args: &Args) -> FilterResult {
        if !args.is_empty() {
            return Err(FilterError::NoArgsAllowed);
        }

        Ok(Value::from(text.chars().count()))
    }

    fn filter_list(&self, list: Vec<Value>, args: &Args) -> FilterResult {
        if !args.is_empty() {
            return Err(FilterError::NoArgsAllowed);
        }

        Ok(Value::from(list.len()))
    }

    fn filter_map(&self, map: BTreeMap<String, Value>, args: &Args) -> FilterResult {
        if !args.is_empty() {
            return Err(FilterError::NoArgsAllowed);
        }

        Ok(Value::from(map.len()))
    }
}
