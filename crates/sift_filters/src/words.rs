use sift_core::{Args, Filter, FilterError, FilterResult, Value};

/// A filter for separating text into lists of whitespace separated words.
///
/// Empty words are removed.
#[derive(Debug, Clone)]
pub struct WordsFilter;
impl Filter for WordsFilter {
    fn name(&self) -> &str {
        "words"
    }

    fn filter_text(&self, text: String, args: &Args) -> FilterResult {
        if !args.is_empty() {
            return Err(FilterError::NoArgsAllowed);
        }

        Ok(Value::list(text.split_whitespace()))
    }
}
