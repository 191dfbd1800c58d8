use std::cmp::Ordering;

use sift_core::{Args, Filter, FilterError, FilterResult, Value};

/// A filter that sorts lists.
///
/// Numbers are ordered numerically and text lexicographically. Values of
/// different kinds are grouped by kind, in the order null, bool, number,
/// text, list, map.
#[derive(Debug, Clone)]
pub struct SortFilter;
impl Filter for SortFilter {
    fn name(&self) -> &str {
        "sort"
    }

    fn default_input(&self) -> Value {
        Value::List(Vec::new())
    }

    fn filter_list(&self, mut list: Vec<Value>, args: &Args) -> FilterResult {
        if !args.is_empty() {
            return Err(FilterError::NoArgsAllowed);
        }

        list.sort_by(compare);
        Ok(Value::List(list))
    }
}

fn compare(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Number(a), Value::Number(b)) => a.total_cmp(b),
        (Value::Text(a), Value::Text(b)) => a.cmp(b),
        _ => rank(a).cmp(&rank(b)),
    }
}

fn rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::Text(_) => 3,
        Value::List(_) => 4,
        Value::Map(_) => 5,
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{args, none};

    use super::*;

    #[test]
    fn it_accepts_no_args() {
        assert_eq!(
            SortFilter.filter_list(vec!["item".into()], &args(vec!["not-allowed"])),
            Err(FilterError::NoArgsAllowed)
        );
    }

    #[test]
    fn it_sorts_lists() -> Result<(), FilterError> {
        assert_eq!(
            SortFilter.filter_list(vec!["c".into(), "a".into(), "c".into()], &none())?,
            Value::list(["a", "c", "c"])
        );

        Ok(())
    }

    #[test]
    fn it_sorts_numbers_numerically() -> Result<(), FilterError> {
        assert_eq!(
            SortFilter.filter_list(vec![10_i64.into(), 9_i64.into(), (-1_i64).into()], &none())?,
            Value::list([-1_i64, 9, 10])
        );

        Ok(())
    }

    #[test]
    fn it_groups_mixed_kinds() -> Result<(), FilterError> {
        assert_eq!(
            SortFilter.filter_list(
                vec!["a".into(), 1_i64.into(), true.into(), Value::Null],
                &none()
            )?,
            Value::List(vec![Value::Null, true.into(), 1_i64.into(), "a".into()])
        );

        Ok(())
    }

    #[test]
    fn it_sorts_nan_after_numbers() -> Result<(), FilterError> {
        let list = vec![
            Value::Number(f64::NAN),
            Value::Number(1.0),
            Value::Number(f64::NAN),
            Value::Number(-1.0),
        ];

        let Value::List(sorted) = SortFilter.filter_list(list, &none())? else {
            panic!("sorting should return a list");
        };

        assert_eq!(sorted[..2], [Value::Number(-1.0), Value::Number(1.0)]);
        assert!(sorted[2..]
            .iter()
            .all(|value| matches!(value, Value::Number(n) if n.is_nan())));

        Ok(())
    }
}
