use sift_core::{Args, Filter, FilterError, FilterResult, Value};

/// A filter that replaces values.
///
/// For lists, the filter replaces entire items.
///
/// For text, the filter replaces character patterns.
#[derive(Debug, Clone)]
pub struct ReplaceFilter;
impl Filter for ReplaceFilter {
    fn name(&self) -> &str {
        "replace"
    }

    fn filter_list(&self, list: Vec<Value>, args: &Args) -> FilterResult {
        let (from, to) = from_to(args)?;

        let list = list
            .into_iter()
            .map(|item| if &item == from { to.clone() } else { item })
            .collect();

        Ok(Value::List(list))
    }

    fn filter_text(&self, text: String, args: &Args) -> FilterResult {
        let (from, to) = from_to(args)?;
        Ok(Value::Text(text.replace(&from.to_string(), &to.to_string())))
    }
}

/// Returns the `from` and `to` arguments.
fn from_to(args: &Args) -> Result<(&Value, &Value), FilterError> {
    match args.positional() {
        [] => Err(FilterError::MissingArg("from")),
        [_] => Err(FilterError::MissingArg("to")),
        [from, to] => Ok((from, to)),
        _ => Err(FilterError::TooManyArgs),
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{args, none};

    use super::*;

    #[test]
    fn it_accepts_two_args() {
        let filter = ReplaceFilter;
        assert_eq!(
            filter.filter_list(vec!["item".into()], &none()),
            Err(FilterError::MissingArg("from"))
        );
        assert_eq!(
            filter.filter_list(vec!["item".into()], &args(vec!["from"])),
            Err(FilterError::MissingArg("to"))
        );
        assert_eq!(
            filter.filter_text("word".into(), &args(vec!["from", "to", "extra"])),
            Err(FilterError::TooManyArgs)
        );
    }

    #[test]
    fn it_replaces_list_items() -> Result<(), FilterError> {
        assert_eq!(
            ReplaceFilter.filter_list(
                vec!["a".into(), "b".into(), "c".into()],
                &args(vec!["a", "b"])
            )?,
            Value::list(["b", "b", "c"])
        );

        Ok(())
    }

    #[test]
    fn it_replaces_text_chars() -> Result<(), FilterError> {
        assert_eq!(
            ReplaceFilter.filter_text("abc".into(), &args(vec!["b", "c"]))?,
            Value::from("acc"),
        );

        Ok(())
    }
}
