mod checkmark;
mod default;
mod exclude;
mod join;
mod len;
mod limit;
mod lines;
mod list_items;
mod replace;
mod reverse;
mod sort;
mod split;
mod text_case;
mod truncate;
mod unique;
mod words;

pub use checkmark::CheckmarkFilter;
pub use default::DefaultFilter;
pub use exclude::ExcludeFilter;
pub use join::JoinFilter;
pub use len::LenFilter;
pub use limit::LimitFilter;
pub use lines::LinesFilter;
pub use list_items::{FirstFilter, LastFilter, NthFilter};
pub use replace::ReplaceFilter;
pub use reverse::ReverseFilter;
pub use sort::SortFilter;
pub use split::SplitFilter;
pub use text_case::{LowercaseFilter, UcfirstFilter, UppercaseFilter};
pub use truncate::TruncateFilter;
pub use unique::UniqueFilter;
pub use words::WordsFilter;

use sift_core::{Filter, FilterError, FilterRegistry, RegistryError, Value};

/// Returns all built-in filters.
pub fn all_filters() -> Vec<Box<dyn Filter>> {
    vec![
        Box::new(CheckmarkFilter),
        Box::new(DefaultFilter),
        Box::new(ExcludeFilter),
        Box::new(FirstFilter),
        Box::new(JoinFilter),
        Box::new(LastFilter),
        Box::new(LenFilter),
        Box::new(LimitFilter),
        Box::new(LinesFilter),
        Box::new(LowercaseFilter),
        Box::new(NthFilter),
        Box::new(ReplaceFilter),
        Box::new(ReverseFilter),
        Box::new(SortFilter),
        Box::new(SplitFilter),
        Box::new(TruncateFilter),
        Box::new(UcfirstFilter),
        Box::new(UniqueFilter),
        Box::new(UppercaseFilter),
        Box::new(WordsFilter),
    ]
}

/// Registers all built-in filters in a registry.
///
/// # Errors
///
/// Returns an error if a built-in filter's name is already taken and the
/// registry rejects duplicates.
pub fn register_all(registry: &FilterRegistry) -> Result<(), RegistryError> {
    for filter in all_filters() {
        registry.register_boxed(filter)?;
    }
    Ok(())
}

/// Returns an argument as a whole number.
pub(crate) fn integer_arg(value: &Value, name: &str) -> Result<i64, FilterError> {
    match value.as_f64() {
        Some(n) if n.fract() == 0.0 && n.is_finite() => Ok(n as i64),
        _ => Err(FilterError::InvalidArgs(format!(
            "invalid {name}: expected a whole number, found '{value}'"
        ))),
    }
}
