use std::collections::BTreeMap;

use proptest::prelude::*;
use sift_core::{invoke, Args, FilterError, FilterHarness, FilterRegistry, Value};
use sift_eval::{Composer, EvalError, EvalResult, Variables};
use sift_filters::{all_filters, register_all};
use sift_parse::{ParseError, Span};

fn registry() -> FilterRegistry {
    let registry = FilterRegistry::new();
    register_all(&registry).expect("built-in filters have unique names");
    registry
}

fn names() -> Value {
    Value::list(["Peter", "Anton", "John"])
}

#[test]
fn it_excludes_values() -> EvalResult<()> {
    let registry = registry();
    let composer = Composer::new(&registry);

    assert_eq!(
        composer.run("exclude:Peter", names())?,
        Value::list(["Anton", "John"])
    );
    assert_eq!(composer.run("exclude: Paul", names())?, names());

    Ok(())
}

#[test]
fn it_displays_checkmarks() -> EvalResult<()> {
    let registry = registry();
    let composer = Composer::new(&registry);

    assert_eq!(composer.run("checkmark", true)?, Value::from("\u{2713}"));
    assert_eq!(composer.run("checkmark", false)?, Value::from("\u{2717}"));
    assert_eq!(composer.run("checkmark", Value::Null)?, Value::from("\u{2717}"));

    Ok(())
}

#[test]
fn it_threads_values_through_stages() -> EvalResult<()> {
    let registry = registry();
    let composer = Composer::new(&registry);

    assert_eq!(
        composer.run("exclude: Anton | sort | join: ', ' | uppercase", names())?,
        Value::from("JOHN, PETER")
    );
    assert_eq!(
        composer.run("words | reverse | join: ' '", "one two three")?,
        Value::from("three two one")
    );

    Ok(())
}

#[test]
fn it_passes_options() -> EvalResult<()> {
    let registry = registry();
    let composer = Composer::new(&registry);

    assert_eq!(
        composer.run("truncate: { length: 5, suffix: '~' }", "sifting")?,
        Value::from("sifti~")
    );
    assert_eq!(composer.run("truncate", "short")?, Value::from("short"));
    assert_eq!(
        composer.run("truncate: { width: 5 }", "sifting"),
        Err(EvalError::Filter(
            "truncate".into(),
            FilterError::InvalidArgs("unknown option 'width'".into())
        ))
    );

    Ok(())
}

#[test]
fn it_stops_at_unknown_filters() {
    let registry = registry();
    let calls = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));
    let counter = std::sync::Arc::clone(&calls);
    registry
        .register_fn("count", move |input, _| {
            counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            Ok(input)
        })
        .expect("name is free");

    let composer = Composer::new(&registry);
    assert_eq!(
        composer.run("reverse | missing | count", "abc"),
        Err(EvalError::UnknownFilter("missing".into()))
    );
    assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 0);
}

#[test]
fn it_reports_parse_errors() {
    let registry = registry();
    let composer = Composer::new(&registry);

    assert_eq!(
        composer.run("reverse |", "abc"),
        Err(EvalError::Parse(ParseError::DanglingPipe(Span::new(8, 9))))
    );
    assert_eq!(
        composer.run("", "abc"),
        Err(EvalError::Parse(ParseError::EmptyChain))
    );
}

#[test]
fn it_handles_null_inputs() {
    let registry = registry();

    for filter in all_filters() {
        let filter = registry
            .lookup(filter.name())
            .expect("filter should be registered");
        let result = invoke(filter.as_ref(), Value::Null, Args::default());

        assert!(
            !matches!(result, Err(FilterError::UnsupportedInput(_))),
            "{} should accept null input, got {:?}",
            filter.name(),
            result
        );
    }
}

#[test]
fn it_exposes_filters_through_the_harness() -> Result<(), FilterError> {
    let registry = registry();
    let harness = FilterHarness::new(&registry);

    let reverse = harness
        .get("reverseFilter")
        .expect("reverse should be registered");
    assert_eq!(reverse.call("sift", vec![])?, Value::from("tfis"));
    assert_eq!(
        harness.names().len(),
        all_filters().len(),
        "every filter should have a derived name"
    );

    Ok(())
}

#[test]
fn it_runs_host_filters() -> EvalResult<()> {
    let registry = registry();
    registry.register_fn("currency", |input, args| {
        let amount = input
            .as_f64()
            .ok_or(FilterError::UnsupportedInput("non-numeric"))?;
        let symbol = match args.positional() {
            [] => "$".to_string(),
            [symbol] => symbol.to_string(),
            _ => return Err(FilterError::TooManyArgs),
        };
        Ok(Value::Text(format!("{symbol}{amount:.2}")))
    })?;

    let composer = Composer::new(&registry);
    assert_eq!(composer.run("currency", 3.5)?, Value::from("$3.50"));
    assert_eq!(
        composer.run("currency: '€' | reverse", "12")?,
        Value::from("00.21€")
    );

    Ok(())
}

#[test]
fn it_evaluates_expressions() -> EvalResult<()> {
    let registry = registry();
    let composer = Composer::new(&registry);
    let variables = Variables::from([("names".to_string(), names())]);

    assert_eq!(
        composer.evaluate("names | exclude: [Peter, John] | first", &variables)?,
        Value::from("Anton")
    );
    assert_eq!(
        composer.evaluate("['b', 'a'] | sort | join: ''", &variables)?,
        Value::from("ab")
    );
    assert_eq!(
        composer.evaluate("nobody | default: 'n/a'", &variables)?,
        Value::from("n/a")
    );
    assert_eq!(
        composer.evaluate("{b: 1, a: 2} | len", &variables)?,
        Value::Number(2.0)
    );

    Ok(())
}

#[test]
fn it_reuses_compiled_chains() -> EvalResult<()> {
    let registry = registry();
    let composer = Composer::new(&registry);
    let compiled = composer.compile("lowercase | ucfirst")?;

    assert_eq!(compiled.apply("hELLO")?, Value::from("Hello"));
    assert_eq!(compiled.apply("wORLD")?, Value::from("World"));
    assert_eq!(composer.cached(), 1);

    Ok(())
}

#[test]
fn it_passes_mappings_to_positional_filters() -> EvalResult<()> {
    let registry = registry();
    let composer = Composer::new(&registry);

    let mapping = Value::Map(BTreeMap::from([("a".to_string(), Value::Number(1.0))]));
    assert_eq!(
        composer.run("default: {a: 1}", Value::Null)?,
        mapping
    );

    Ok(())
}

#[test]
fn it_deduplicates_by_value() -> EvalResult<()> {
    let registry = registry();
    let composer = Composer::new(&registry);

    assert_eq!(
        composer.evaluate("[['a, b'], [a, b], [a, b]] | unique | len", &Variables::new())?,
        Value::Number(2.0)
    );

    Ok(())
}

#[test]
fn it_sorts_host_values_with_nan() -> EvalResult<()> {
    let registry = registry();
    registry.register_fn("nans", |_, _| {
        Ok(Value::List(vec![
            Value::Number(f64::NAN),
            Value::Number(2.0),
            Value::Number(f64::NAN),
            Value::Number(1.0),
        ]))
    })?;

    let composer = Composer::new(&registry);
    assert_eq!(
        composer.run("nans | sort | first", Value::Null)?,
        Value::Number(1.0)
    );

    Ok(())
}

const TEXT_FILTERS: [&str; 4] = ["reverse", "uppercase", "lowercase", "ucfirst"];

proptest! {
    #[test]
    fn chains_compose_filters(
        text in "[a-zA-Z ]{0,16}",
        a in prop::sample::select(TEXT_FILTERS.to_vec()),
        b in prop::sample::select(TEXT_FILTERS.to_vec()),
    ) {
        let registry = registry();
        let composer = Composer::new(&registry);

        let first = registry.lookup(a).unwrap();
        let second = registry.lookup(b).unwrap();
        let expected = invoke(first.as_ref(), Value::from(text.as_str()), Args::default())
            .and_then(|value| invoke(second.as_ref(), value, Args::default()))
            .unwrap();

        let chain = format!("{a} | {b}");
        prop_assert_eq!(composer.run(&chain, text.as_str()).unwrap(), expected);
    }

    #[test]
    fn reversing_twice_is_identity(text in any::<String>()) {
        let registry = registry();
        let composer = Composer::new(&registry);
        prop_assert_eq!(
            composer.run("reverse | reverse", text.as_str()).unwrap(),
            Value::Text(text)
        );
    }
}
