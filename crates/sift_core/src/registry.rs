use std::{collections::HashMap, fmt::Display, sync::Arc};

use parking_lot::RwLock;

use crate::{filter::FnFilter, Args, Filter, FilterResult, Value};

/// What to do when a filter is registered under a name that is already taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Keep the existing filter and return [`RegistryError::DuplicateName`].
    #[default]
    Reject,

    /// Replace the existing filter.
    Overwrite,
}

/// Registry configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryConfig {
    pub duplicate_policy: DuplicatePolicy,
}

/// Registry-related errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A filter with the same name is already registered.
    DuplicateName(String),

    /// No filter with the name is registered.
    UnknownFilter(String),
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::DuplicateName(name) => {
                write!(f, "a filter named '{name}' is already registered")
            }
            RegistryError::UnknownFilter(name) => write!(f, "unknown filter: {name}"),
        }
    }
}

impl std::error::Error for RegistryError {}

/// A lookup table from filter names to filters.
///
/// Registration and lookup both take `&self`; the table is guarded by a
/// read-mostly lock so that a registry can be shared between threads.
#[derive(Default)]
pub struct FilterRegistry {
    config: RegistryConfig,
    filters: RwLock<HashMap<String, Arc<dyn Filter>>>,
}

impl FilterRegistry {
    /// Constructs an empty registry using the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs an empty registry.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            filters: RwLock::default(),
        }
    }

    /// Constructs a registry containing a set of filters.
    ///
    /// # Errors
    ///
    /// Returns an error if two filters share a name and the default policy
    /// rejects duplicates.
    pub fn with_filters(filters: Vec<Box<dyn Filter>>) -> Result<Self, RegistryError> {
        let registry = Self::new();
        for filter in filters {
            registry.register_boxed(filter)?;
        }
        Ok(registry)
    }

    /// Returns the registry's configuration.
    pub fn config(&self) -> RegistryConfig {
        self.config
    }

    /// Registers a filter under its own name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateName`] if the name is taken and the
    /// registry rejects duplicates.
    pub fn register<F: Filter + 'static>(&self, filter: F) -> Result<(), RegistryError> {
        self.insert(Arc::new(filter))
    }

    /// Registers a boxed filter under its own name.
    pub fn register_boxed(&self, filter: Box<dyn Filter>) -> Result<(), RegistryError> {
        self.insert(Arc::from(filter))
    }

    /// Registers a function as a filter.
    pub fn register_fn<F>(&self, name: impl Into<String>, func: F) -> Result<(), RegistryError>
    where
        F: Fn(Value, &Args) -> FilterResult + Send + Sync + 'static,
    {
        self.register(FnFilter::new(name, func))
    }

    fn insert(&self, filter: Arc<dyn Filter>) -> Result<(), RegistryError> {
        let name = filter.name().to_string();
        let mut filters = self.filters.write();

        if filters.contains_key(&name) {
            match self.config.duplicate_policy {
                DuplicatePolicy::Reject => return Err(RegistryError::DuplicateName(name)),
                DuplicatePolicy::Overwrite => {
                    tracing::warn!(filter = %name, "replacing registered filter");
                }
            }
        }

        tracing::debug!(filter = %name, "registered filter");
        filters.insert(name, filter);
        Ok(())
    }

    /// Returns the filter registered under a name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownFilter`] if there is no such filter.
    pub fn lookup(&self, name: &str) -> Result<Arc<dyn Filter>, RegistryError> {
        self.filters
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::UnknownFilter(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.filters.read().contains_key(name)
    }

    /// Returns all registered names in sorted order.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.filters.read().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.filters.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.read().is_empty()
    }

    /// Returns an independent registry sharing the currently registered filters.
    ///
    /// Filters registered on either registry afterwards are not seen by the other.
    pub fn fork(&self) -> Self {
        Self {
            config: self.config,
            filters: RwLock::new(self.filters.read().clone()),
        }
    }
}

impl std::fmt::Debug for FilterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterRegistry")
            .field("config", &self.config)
            .field("filters", &self.names())
            .finish()
    }
}
