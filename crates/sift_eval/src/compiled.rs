use std::sync::Arc;

use sift_ast::{Chain, Stage};
use sift_core::{Filter, FilterRegistry, Value};

use crate::{filter::apply_filter, EvalResult};

/// A chain whose filters have been looked up ahead of time.
///
/// Filters registered after compilation do not affect a compiled chain.
#[derive(Clone)]
pub struct CompiledChain {
    stages: Vec<(Stage, Arc<dyn Filter>)>,
}

impl CompiledChain {
    /// Resolves every stage of a chain against a registry.
    pub fn resolve(chain: &Chain, registry: &FilterRegistry) -> EvalResult<Self> {
        let stages = chain
            .stages
            .iter()
            .map(|stage| -> EvalResult<_> { Ok((stage.clone(), registry.lookup(&stage.name)?)) })
            .collect::<EvalResult<Vec<_>>>()?;
        Ok(Self { stages })
    }

    /// Applies the chain to an input value.
    pub fn apply(&self, input: impl Into<Value>) -> EvalResult<Value> {
        let mut value = input.into();
        for (stage, filter) in &self.stages {
            value = apply_filter(filter.as_ref(), stage, value)?;
        }
        Ok(value)
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}
