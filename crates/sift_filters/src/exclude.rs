use sift_core::{Args, Filter, FilterError, FilterResult, Value};

/// A filter that removes values from lists.
///
/// Every argument is a value to exclude. A list argument excludes each of
/// its items.
#[derive(Debug, Clone)]
pub struct ExcludeFilter;
impl Filter for ExcludeFilter {
    fn name(&self) -> &str {
        "exclude"
    }

    fn default_input(&self) -> Value {
        Value::List(Vec::new())
    }

    fn filter_list(&self, list: Vec<Value>, args: &Args) -> FilterResult {
        let excluded: Vec<&Value> = match args.positional() {
            [] => return Err(FilterError::MissingArg("value")),
            args => args
                .iter()
                .flat_map(|arg| match arg {
                    Value::List(items) => items.iter().collect(),
                    value => vec![value],
                })
                .collect(),
        };

        let list = list
            .into_iter()
            .filter(|item| !excluded.contains(&item))
            .collect();

        Ok(Value::List(list))
    }
}
