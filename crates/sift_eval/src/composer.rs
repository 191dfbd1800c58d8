use std::sync::Arc;

use parking_lot::Mutex;
use sift_ast::{Base, Chain};
use sift_core::{FilterRegistry, Value};
use sift_parse::{parse_chain, parse_expression};

use crate::{
    cache::ChainCache, compiled::CompiledChain, filter::apply_stage, literal::literal_value,
    EvalResult, Variables,
};

/// Number of parsed chains a composer keeps by default.
pub const DEFAULT_CACHE_CAPACITY: usize = 256;

/// Turns chain expressions into results by running them against a registry.
///
/// Parsed chains are cached by their source text, so running the same
/// expression repeatedly only parses it once. The cache is bounded; the
/// oldest chains are evicted first.
pub struct Composer<'r> {
    registry: &'r FilterRegistry,
    cache: Mutex<ChainCache>,
}

impl<'r> Composer<'r> {
    pub fn new(registry: &'r FilterRegistry) -> Self {
        Self::with_cache_capacity(registry, DEFAULT_CACHE_CAPACITY)
    }

    /// Constructs a composer caching at most `capacity` chains. A capacity of
    /// zero disables caching.
    pub fn with_cache_capacity(registry: &'r FilterRegistry, capacity: usize) -> Self {
        Self {
            registry,
            cache: Mutex::new(ChainCache::new(capacity)),
        }
    }

    /// Parses a chain expression, reusing an earlier parse when possible.
    ///
    /// Filter names are not resolved here. Unknown filters are reported when
    /// the chain is run.
    pub fn compose(&self, expression: &str) -> EvalResult<Arc<Chain>> {
        if let Some(chain) = self.cache.lock().get(expression) {
            return Ok(chain);
        }

        let chain = Arc::new(parse_chain(expression)?);
        tracing::debug!(expression, stages = chain.len(), "composed chain");

        self.cache.lock().insert(expression, Arc::clone(&chain));
        Ok(chain)
    }

    /// Parses and runs a chain expression on an input value.
    pub fn run(&self, expression: &str, input: impl Into<Value>) -> EvalResult<Value> {
        let chain = self.compose(expression)?;
        self.run_chain(&chain, input.into())
    }

    /// Runs each stage of a chain in order, feeding every output to the next
    /// stage.
    ///
    /// Evaluation stops at the first failing stage.
    pub fn run_chain(&self, chain: &Chain, input: Value) -> EvalResult<Value> {
        let mut value = input;
        for stage in &chain.stages {
            value = apply_stage(stage, value, self.registry)?;
        }
        Ok(value)
    }

    /// Evaluates a full expression such as `names | exclude: Peter`.
    ///
    /// A variable that is not defined evaluates to [`Value::Null`].
    pub fn evaluate(&self, expression: &str, variables: &Variables) -> EvalResult<Value> {
        let expression = parse_expression(expression)?;

        let input = match &expression.base {
            Base::Literal(literal) => literal_value(literal),
            Base::Variable(name) => match variables.get(name) {
                Some(value) => value.clone(),
                None => {
                    tracing::debug!(variable = %name, "undefined variable");
                    Value::Null
                }
            },
        };

        self.run_chain(&expression.chain, input)
    }

    /// Parses a chain and resolves all of its filters up front.
    pub fn compile(&self, expression: &str) -> EvalResult<CompiledChain> {
        let chain = self.compose(expression)?;
        CompiledChain::resolve(&chain, self.registry)
    }

    /// Returns the number of cached chains.
    pub fn cached(&self) -> usize {
        self.cache.lock().len()
    }
}
