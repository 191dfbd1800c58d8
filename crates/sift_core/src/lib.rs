mod filter;
mod harness;
mod invoke;
mod registry;
mod value;

pub use filter::{Args, FnFilter, Filter, FilterError, FilterResult, Signature};
pub use harness::{BoundFilter, FilterHarness};
pub use invoke::invoke;
pub use registry::{DuplicatePolicy, FilterRegistry, RegistryConfig, RegistryError};
pub use value::Value;
