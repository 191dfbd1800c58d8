use sift_core::{Args, Filter, FilterError, FilterResult, Value};

/// A filter for separating text into lists based on lines.
///
/// Lines are ended with either a newline (`\n`) or a carriage return with
/// a line feed (`\r\n`).
#[derive(Debug, Clone)]
pub struct LinesFilter;
impl Filter for LinesFilter {
    fn name(&self) -> &str {
        "lines"
    }

    fn filter_text(&self, text: String, args: &Args) -> FilterResult {
        if !args.is_empty() {
            return Err(FilterError::NoArgsAllowed);
        }

        Ok(Value::list(text.lines()))
    }
}
