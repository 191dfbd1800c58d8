use std::{
    collections::{HashMap, VecDeque},
    sync::Arc,
};

use sift_ast::Chain;

/// Parsed chains keyed by their source text.
///
/// Holds at most `capacity` chains. When full, the oldest chain is evicted.
pub(crate) struct ChainCache {
    capacity: usize,
    chains: HashMap<String, Arc<Chain>>,
    order: VecDeque<String>,
}

impl ChainCache {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            capacity,
            chains: HashMap::new(),
            order: VecDeque::new(),
        }
    }

    pub(crate) fn get(&self, expression: &str) -> Option<Arc<Chain>> {
        self.chains.get(expression).map(Arc::clone)
    }

    pub(crate) fn insert(&mut self, expression: &str, chain: Arc<Chain>) {
        if self.capacity == 0 || self.chains.contains_key(expression) {
            return;
        }

        while self.chains.len() >= self.capacity {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            tracing::trace!(expression = %oldest, "evicting cached chain");
            self.chains.remove(&oldest);
        }

        self.order.push_back(expression.to_owned());
        self.chains.insert(expression.to_owned(), chain);
    }

    pub(crate) fn len(&self) -> usize {
        self.chains.len()
    }
}
