use std::{collections::BTreeMap, fmt::Display};

use crate::Value;

/// Filter-related errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// The filter failed for a reason of its own.
    Failed(String),

    /// The filter cannot be applied using the provided arguments.
    InvalidArgs(String),

    /// The filter is missing a required argument.
    MissingArg(&'static str),

    /// The filter does not accept any arguments.
    NoArgsAllowed,

    /// The filter does not return a value.
    NoSuchValue,

    /// The filter has been given too many arguments.
    TooManyArgs,

    /// The filter cannot be applied to this kind of value.
    UnsupportedInput(&'static str),
}

/// Specialized result type for filters.
pub type FilterResult = Result<Value, FilterError>;

/// The way a filter wants its arguments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Signature {
    /// `filter: a, b, c`
    #[default]
    Positional,

    /// `filter: { key: value }`
    Options,
}

/// Arguments passed to a filter.
#[derive(Debug, Clone, PartialEq)]
pub enum Args {
    Positional(Vec<Value>),
    Options(BTreeMap<String, Value>),
}

impl Args {
    /// Returns positional arguments. Options are never positional.
    pub fn positional(&self) -> &[Value] {
        match self {
            Args::Positional(values) => values,
            Args::Options(_) => &[],
        }
    }

    /// Returns the options mapping, if the arguments are keyword-style.
    pub fn options(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Args::Positional(_) => None,
            Args::Options(map) => Some(map),
        }
    }

    /// Returns a single option by key.
    pub fn option(&self, key: &str) -> Option<&Value> {
        self.options().and_then(|map| map.get(key))
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Args::Positional(values) => values.is_empty(),
            Args::Options(map) => map.is_empty(),
        }
    }
}

impl Default for Args {
    fn default() -> Self {
        Args::Positional(Vec::new())
    }
}

impl From<Vec<Value>> for Args {
    fn from(values: Vec<Value>) -> Self {
        Args::Positional(values)
    }
}

/// A filter represents a value transformation.
///
/// Implementors override the `filter_*` methods for the kinds of input they
/// support. Null input never reaches a filter directly: it is replaced with
/// [`Filter::default_input`] by [`crate::invoke`].
pub trait Filter: Send + Sync {
    /// Returns the filter's name.
    fn name(&self) -> &str;

    /// Returns the way the filter expects its arguments.
    fn signature(&self) -> Signature {
        Signature::Positional
    }

    /// Returns the value used in place of a null input.
    fn default_input(&self) -> Value {
        Value::Text(String::new())
    }

    /// Returns the result of applying the filter on any value.
    ///
    /// Dispatches to the `filter_*` method matching the kind of input.
    fn apply(&self, input: Value, args: &Args) -> FilterResult {
        match input {
            Value::Null => self.filter_null(args),
            Value::Bool(value) => self.filter_bool(value, args),
            Value::Number(n) => self.filter_number(n, args),
            Value::Text(text) => self.filter_text(text, args),
            Value::List(list) => self.filter_list(list, args),
            Value::Map(map) => self.filter_map(map, args),
        }
    }

    fn filter_null(&self, _args: &Args) -> FilterResult {
        Err(FilterError::UnsupportedInput("null"))
    }

    fn filter_bool(&self, _value: bool, _args: &Args) -> FilterResult {
        Err(FilterError::UnsupportedInput("bool"))
    }

    fn filter_number(&self, _n: f64, _args: &Args) -> FilterResult {
        Err(FilterError::UnsupportedInput("number"))
    }

    /// Returns the result of applying the filter on a piece of text.
    fn filter_text(&self, _text: String, _args: &Args) -> FilterResult {
        Err(FilterError::UnsupportedInput("text"))
    }

    /// Returns the result of applying the filter on a list.
    fn filter_list(&self, _list: Vec<Value>, _args: &Args) -> FilterResult {
        Err(FilterError::UnsupportedInput("list"))
    }

    fn filter_map(&self, _map: BTreeMap<String, Value>, _args: &Args) -> FilterResult {
        Err(FilterError::UnsupportedInput("map"))
    }
}

/// A filter backed by a plain function.
///
/// Used for filters supplied by a host, such as locale-aware formatting.
pub struct FnFilter<F> {
    name: String,
    func: F,
}

impl<F> FnFilter<F>
where
    F: Fn(Value, &Args) -> FilterResult + Send + Sync,
{
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F> Filter for FnFilter<F>
where
    F: Fn(Value, &Args) -> FilterResult + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, input: Value, args: &Args) -> FilterResult {
        (self.func)(input, args)
    }
}

impl Display for FilterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterError::Failed(msg) => write!(f, "{msg}"),
            FilterError::InvalidArgs(msg) => {
                write!(f, "invalid arguments for filter: {msg}")
            }
            FilterError::MissingArg(arg) => write!(f, "missing required argument '{arg}'"),
            FilterError::NoArgsAllowed => {
                write!(f, "the filter does not accept any arguments")
            }
            FilterError::NoSuchValue => write!(f, "no such value"),
            FilterError::TooManyArgs => write!(f, "too many arguments"),
            FilterError::UnsupportedInput(kind) => {
                write!(f, "the filter cannot be applied to values of type {kind}")
            }
        }
    }
}

impl std::error::Error for FilterError {}

#[cfg(test)]
mod tests {
    use super::*;

    struct TextOnly;
    impl Filter for TextOnly {
        fn name(&self) -> &str {
            "textonly"
        }

        fn filter_text(&self, text: String, _args: &Args) -> FilterResult {
            Ok(Value::Text(text))
        }
    }

    #[test]
    fn it_dispatches_on_input_kind() {
        assert_eq!(
            TextOnly.apply(Value::from("word"), &Args::default()),
            Ok(Value::from("word"))
        );
        assert_eq!(
            TextOnly.apply(Value::list(["word"]), &Args::default()),
            Err(FilterError::UnsupportedInput("list"))
        );
        assert_eq!(
            TextOnly.apply(Value::Bool(true), &Args::default()),
            Err(FilterError::UnsupportedInput("bool"))
        );
    }

    #[test]
    fn it_wraps_functions() {
        let filter = FnFilter::new("double", |input: Value, _: &Args| match input.as_f64() {
            Some(n) => Ok(Value::Number(n * 2.0)),
            None => Err(FilterError::UnsupportedInput("text")),
        });

        assert_eq!(filter.name(), "double");
        assert_eq!(
            filter.apply(Value::Number(2.0), &Args::default()),
            Ok(Value::Number(4.0))
        );
    }

    #[test]
    fn it_exposes_options() {
        let args = Args::Options(BTreeMap::from([("length".into(), Value::from(3_i64))]));
        assert_eq!(args.option("length"), Some(&Value::Number(3.0)));
        assert_eq!(args.option("suffix"), None);
        assert!(args.positional().is_empty());
        assert!(!args.is_empty());
    }
}
