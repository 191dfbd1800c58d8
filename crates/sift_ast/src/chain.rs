use crate::Stage;

/// An ordered sequence of stages, applied left to right.
///
/// The `n`-th stage receives the output of the `(n-1)`-th stage as its input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Chain {
    pub stages: Vec<Stage>,
}

impl Chain {
    /// Returns the number of stages in the chain.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Returns `true` if the chain has no stages.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl From<Vec<Stage>> for Chain {
    fn from(stages: Vec<Stage>) -> Self {
        Self { stages }
    }
}
