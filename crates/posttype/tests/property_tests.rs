//! Property-based tests for the column merge and the configuration engine.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p posttype --test property_tests
//!
//! # More cases
//! PROPTEST_CASES=10000 cargo test -p posttype --test property_tests
//! ```

use std::collections::HashSet;

use proptest::prelude::*;
use serde_json::{Value, json};

use posttype::{
    CHECKBOX_COLUMN, ConfigSchema, Columns, OptionSpec, Overrides, ValueType, merge_columns,
    resolve,
};

// =============================================================================
// Test Strategies
// =============================================================================

/// Column keys drawn from a small alphabet so remove/order lists hit real keys.
fn column_key() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(CHECKBOX_COLUMN.to_string()),
        Just("title".to_string()),
        Just("date".to_string()),
        "[a-e]{1,2}",
        "owner-[a-c]",
    ]
}

fn column_set() -> impl Strategy<Value = Columns> {
    prop::collection::vec((column_key(), "[A-Z][a-z]{0,6}"), 0..8)
        .prop_map(|pairs| pairs.into_iter().collect())
}

fn key_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(column_key(), 0..6)
}

/// Arbitrary JSON scalars and small containers.
fn json_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z ]{0,10}".prop_map(Value::from),
        prop::collection::vec("[a-z]{1,4}", 0..3).prop_map(|v| json!(v)),
        "[a-z]{1,4}".prop_map(|k| {
            let mut map = serde_json::Map::new();
            map.insert(k, json!(1));
            Value::Object(map)
        }),
    ]
}

fn merged_keys(columns: &Columns) -> Vec<String> {
    columns.keys().cloned().collect()
}

// =============================================================================
// Column Merge Properties
// =============================================================================

proptest! {
    /// Ordering never loses or duplicates a column.
    #[test]
    fn merge_is_permutation_of_unordered(
        base in column_set(),
        remove in key_list(),
        add in column_set(),
        order in key_list(),
    ) {
        let unordered = merge_columns(base.clone(), &remove, add.clone(), &[]);
        let ordered = merge_columns(base, &remove, add, &order);

        let a: HashSet<String> = unordered.keys().cloned().collect();
        let b: HashSet<String> = ordered.keys().cloned().collect();
        prop_assert_eq!(a, b);
        prop_assert_eq!(unordered.len(), ordered.len());
    }

    /// Removed keys are gone unless re-added.
    #[test]
    fn removed_keys_absent(
        base in column_set(),
        remove in key_list(),
        add in column_set(),
    ) {
        let merged = merge_columns(base, &remove, add.clone(), &[]);
        for key in &remove {
            prop_assert_eq!(merged.contains_key(key), add.contains_key(key));
        }
    }

    /// Present directive keys appear in directive order.
    #[test]
    fn directive_order_respected(
        base in column_set(),
        order in key_list(),
    ) {
        let merged = merge_columns(base, &[], Vec::<(String, String)>::new(), &order);
        let positions: Vec<usize> = order
            .iter()
            .filter_map(|key| merged.get_index_of(key))
            .collect();

        let mut seen = HashSet::new();
        let firsts: Vec<usize> = positions.into_iter().filter(|p| seen.insert(*p)).collect();
        let mut sorted = firsts.clone();
        sorted.sort_unstable();
        prop_assert_eq!(firsts, sorted);
    }

    /// The checkbox leads whenever the directive omits it.
    #[test]
    fn checkbox_pinned(base in column_set(), order in key_list()) {
        prop_assume!(!order.is_empty());
        prop_assume!(!order.iter().any(|k| k == CHECKBOX_COLUMN));
        prop_assume!(base.contains_key(CHECKBOX_COLUMN));

        let merged = merge_columns(base, &[], Vec::<(String, String)>::new(), &order);
        prop_assert_eq!(merged.get_index_of(CHECKBOX_COLUMN), Some(0));
    }

    /// Merging is deterministic.
    #[test]
    fn merge_deterministic(
        base in column_set(),
        remove in key_list(),
        add in column_set(),
        order in key_list(),
    ) {
        let first = merge_columns(base.clone(), &remove, add.clone(), &order);
        let second = merge_columns(base, &remove, add, &order);
        prop_assert_eq!(merged_keys(&first), merged_keys(&second));
    }
}

// =============================================================================
// Engine Properties
// =============================================================================

fn flag_schema() -> ConfigSchema {
    ConfigSchema::builder()
        .option("flag", OptionSpec::new(ValueType::Boolean).with_default(true))
        .option(
            "archive",
            OptionSpec::new([ValueType::Boolean, ValueType::String]).with_default(false),
        )
        .build()
        .unwrap()
}

proptest! {
    /// A value is accepted exactly when its type is declared (or it is null).
    #[test]
    fn acceptance_matches_declared_types(value in json_value()) {
        let mut input = Overrides::new();
        input.insert("archive".to_string(), value.clone());

        let accepted = matches!(value, Value::Null | Value::Bool(_) | Value::String(_));
        let result = resolve(&flag_schema(), &input);
        prop_assert_eq!(result.is_ok(), accepted);

        if let Ok(record) = result {
            prop_assert_eq!(record.len(), 2);
            prop_assert_eq!(record["flag"].clone(), Some(json!(true)));
        }
    }

    /// Resolution is a pure function of its inputs.
    #[test]
    fn resolve_deterministic(flag in any::<bool>(), archive in "[a-z]{0,8}") {
        let input: Overrides = serde_json::from_value(json!({"flag": flag, "archive": archive})).unwrap();
        let schema = flag_schema();
        prop_assert_eq!(resolve(&schema, &input).unwrap(), resolve(&schema, &input).unwrap());
    }
}
