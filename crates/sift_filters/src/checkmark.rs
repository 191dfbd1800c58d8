use sift_core::{Args, Filter, FilterError, FilterResult, Value};

/// Displayed for `true`.
const CHECK: &str = "\u{2713}";

/// Displayed for `false`.
const CROSS: &str = "\u{2717}";

/// A filter that displays booleans as a check mark or a cross.
///
/// A null input is displayed as a cross.
#[derive(Debug, Clone)]
pub struct CheckmarkFilter;
impl Filter for CheckmarkFilter {
    fn name(&self) -> &str {
        "checkmark"
    }

    fn default_input(&self) -> Value {
        Value::Bool(false)
    }

    fn filter_bool(&self, value: bool, args: &Args) -> FilterResult {
        if !args.is_empty() {
            return Err(FilterError::NoArgsAllowed);
        }

        Ok(Value::from(if value { CHECK } else { CROSS }))
    }
}
