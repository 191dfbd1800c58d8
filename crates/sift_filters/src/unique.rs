use sift_core::{Args, Filter, FilterError, FilterResult, Value};

/// A filter that removes duplicate values from lists.
///
/// The first occurrence of each value is kept.
#[derive(Debug, Clone)]
pub struct UniqueFilter;
impl Filter for UniqueFilter {
    fn name(&self) -> &str {
        "unique"
    }

    fn default_input(&self) -> Value {
        Value::List(Vec::new())
    }

    fn filter_list(&self, list: Vec<Value>, args: &Args) -> FilterResult {
        if !args.is_empty() {
            return Err(FilterError::NoArgsAllowed);
        }

        // Values hold floats, so equality is checked against every kept item.
        let mut unique: Vec<Value> = Vec::with_capacity(list.len());
        for value in list {
            if !unique.contains(&value) {
                unique.push(value);
            }
        }

        Ok(Value::List(unique))
    }
}
