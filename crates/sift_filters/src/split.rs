use sift_core::{Args, Filter, FilterError, FilterResult, Value};

/// A filter that splits text into lists using a separator.
#[derive(Debug, Clone)]
pub struct SplitFilter;
impl Filter for SplitFilter {
    fn name(&self) -> &str {
        "split"
    }

    fn filter_text(&self, text: String, args: &Args) -> FilterResult {
        match args.positional() {
            [] => Err(FilterError::MissingArg("separator")),
            [separator] => Ok(Value::list(text.split(&separator.to_string()))),
            _ => Err(FilterError::TooManyArgs),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{args, none};

    use super::*;

    #[test]
    fn it_accepts_one_arg() {
        assert_eq!(
            SplitFilter.filter_text("word".into(), &none()),
            Err(FilterError::MissingArg("separator"))
        );
        assert_eq!(
            SplitFilter.filter_text("word".into(), &args(vec!["1", "2"])),
            Err(FilterError::TooManyArgs)
        );
    }

    #[test]
    fn it_splits_text() -> Result<(), FilterError> {
        let filter = SplitFilter;

        assert_eq!(
            filter.filter_text("single".into(), &args(vec!["sep"]))?,
            Value::list(["single"])
        );

        assert_eq!(
            filter.filter_text("first,,third".into(), &args(vec![","]))?,
            Value::list(["first", "", "third"])
        );

        Ok(())
    }
}
