//! Composes filter chains and runs them against a [`FilterRegistry`].
//!
//! [`FilterRegistry`]: sift_core::FilterRegistry

use std::collections::HashMap;

use sift_core::Value;

mod cache;
mod compiled;
mod composer;
mod error;
mod filter;
mod literal;

pub use compiled::CompiledChain;
pub use composer::{Composer, DEFAULT_CACHE_CAPACITY};
pub use error::{EvalError, EvalResult};
pub use literal::literal_value;

/// Named values that expressions may start from.
pub type Variables = HashMap<String, Value>;
