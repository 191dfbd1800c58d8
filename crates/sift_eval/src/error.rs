use sift_core::{FilterError, RegistryError};
use sift_parse::ParseError;
use thiserror::Error;

pub type EvalResult<T> = Result<T, EvalError>;

/// Errors raised while composing or running a filter chain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// A filter failed while being applied.
    #[error("filter '{0}' failed: {1}")]
    Filter(String, FilterError),

    /// The chain or expression could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Registry(RegistryError),

    /// A stage refers to a filter that is not registered.
    #[error("unknown filter: {0}")]
    UnknownFilter(String),
}

impl From<RegistryError> for EvalError {
    fn from(error: RegistryError) -> Self {
        match error {
            RegistryError::UnknownFilter(name) => EvalError::UnknownFilter(name),
            error => EvalError::Registry(error),
        }
    }
}
