use std::sync::Arc;

use crate::{invoke, Args, Filter, FilterRegistry, FilterResult, Value};

/// Suffix appended to filter names to derive their harness names.
const SUFFIX: &str = "Filter";

/// Exposes registered filters as individually callable functions.
///
/// Filters are found under a derived name, `<name>Filter`, so that a filter
/// can be exercised on its own without parsing a chain:
///
/// ```
/// # use sift_core::{FilterHarness, FilterRegistry, Value};
/// let registry = FilterRegistry::new();
/// registry.register_fn("shout", |input, _| Ok(Value::Text(format!("{input}!")))).unwrap();
///
/// let harness = FilterHarness::new(&registry);
/// let shout = harness.get("shoutFilter").unwrap();
/// assert_eq!(shout.call("hey", vec![]), Ok(Value::from("hey!")));
/// ```
pub struct FilterHarness<'a> {
    registry: &'a FilterRegistry,
}

impl<'a> FilterHarness<'a> {
    pub fn new(registry: &'a FilterRegistry) -> Self {
        Self { registry }
    }

    /// Returns the harness name of a filter.
    pub fn derived_name(name: &str) -> String {
        format!("{name}{SUFFIX}")
    }

    /// Returns the harness names of all registered filters.
    pub fn names(&self) -> Vec<String> {
        self.registry
            .names()
            .iter()
            .map(|name| Self::derived_name(name))
            .collect()
    }

    /// Returns a callable filter by its harness name.
    pub fn get(&self, derived_name: &str) -> Option<BoundFilter> {
        let name = derived_name.strip_suffix(SUFFIX)?;
        let filter = self.registry.lookup(name).ok()?;
        Some(BoundFilter { filter })
    }
}

/// A single filter that can be called directly.
#[derive(Clone)]
pub struct BoundFilter {
    filter: Arc<dyn Filter>,
}

impl BoundFilter {
    pub fn name(&self) -> &str {
        self.filter.name()
    }

    /// Calls the filter with positional arguments.
    pub fn call(&self, input: impl Into<Value>, args: Vec<Value>) -> FilterResult {
        self.call_with(input, Args::Positional(args))
    }

    /// Calls the filter with any kind of arguments.
    pub fn call_with(&self, input: impl Into<Value>, args: Args) -> FilterResult {
        invoke(self.filter.as_ref(), input.into(), args)
    }
}
