use sift_ast::Stage;
use sift_core::{invoke, Filter, FilterRegistry, Value};

use crate::{literal::resolve_args, EvalError, EvalResult};

/// Returns the result of applying a stage to a value.
pub(crate) fn apply_stage(
    stage: &Stage,
    value: Value,
    registry: &FilterRegistry,
) -> EvalResult<Value> {
    // Get the registered filter with a matching name.
    let filter = registry.lookup(&stage.name)?;
    apply_filter(filter.as_ref(), stage, value)
}

/// Returns the result of applying an already resolved filter to a value.
pub(crate) fn apply_filter(filter: &dyn Filter, stage: &Stage, value: Value) -> EvalResult<Value> {
    let args = resolve_args(&stage.args);
    tracing::trace!(filter = %stage.name, input = value.kind(), "applying filter");

    invoke(filter, value, args).map_err(|error| EvalError::Filter(stage.name.clone(), error))
}
