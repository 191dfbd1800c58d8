use sift_core::{Args, Filter, FilterError, FilterResult, Value};

/// A filter that converts text into lowercase.
#[derive(Debug, Clone)]
pub struct LowercaseFilter;
impl Filter for LowercaseFilter {
    fn name(&self) -> &str {
        "lowercase"
    }

    fn filter_text(&self, text: String, args: &Args) -> FilterResult {
        if !args.is_empty() {
            return Err(FilterError::NoArgsAllowed);
        }

        Ok(Value::Text(text.to_lowercase()))
    }
}

/// A filter that converts text into uppercase.
#[derive(Debug, Clone)]
pub struct UppercaseFilter;
impl Filter for UppercaseFilter {
    fn name(&self) -> &str {
        "uppercase"
    }

    fn filter_text(&self, text: String, args: &Args) -> FilterResult {
        if !args.is_empty() {
            return Err(FilterError::NoArgsAllowed);
        }

        Ok(Value::Text(text.to_uppercase()))
    }
}

/// A filter that converts the first letter of text into uppercase.
#[derive(Debug, Clone)]
pub struct UcfirstFilter;
impl Filter for UcfirstFilter {
    fn name(&self) -> &str {
        "ucfirst"
    }

    fn filter_text(&self, text: String, args: &Args) -> FilterResult {
        if !args.is_empty() {
            return Err(FilterError::NoArgsAllowed);
        }

        let mut chars = text.chars();
        let Some(first) = chars.next() else {
            return Ok(Value::Text(String::new()));
        };

        Ok(Value::Text(first.to_uppercase().to_string() + chars.as_str()))
    }
}
