//! Property tests for the validation laws

use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use valider::*;

fn kinds(errors: &ValidationErrors, field: &str) -> Vec<FailureKind> {
    errors.get(field).iter().map(|e| e.kind()).collect()
}

/// Nested string sequences over a small alphabet so hits and misses both occur.
fn nested_words() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec("[a-f]", 0..6), 0..6)
}

fn allowed_words() -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set("[a-f]", 0..6)
}

#[cfg(feature = "json")]
fn json_string_tree() -> impl Strategy<Value = serde_json::Value> {
    use serde_json::Value;

    let leaf = "[a-f]".prop_map(Value::String);
    leaf.prop_recursive(4, 64, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

#[cfg(feature = "json")]
fn string_leaves(value: &serde_json::Value, out: &mut Vec<String>) {
    use serde_json::Value;

    match value {
        Value::String(s) => out.push(s.clone()),
        Value::Array(items) => items.iter().for_each(|item| string_leaves(item, out)),
        Value::Object(map) => map.values().for_each(|item| string_leaves(item, out)),
        _ => {}
    }
}

proptest! {
    /// Only `required` fires on an empty string, whatever the other arguments.
    #[test]
    fn empty_string_is_optional_unless_required(
        expected in ".{0,8}",
        len in 0usize..32,
        min in 0usize..16,
        span in 0usize..16,
        members in prop::collection::vec("[a-z]{1,4}", 0..4),
    ) {
        let members: Vec<&str> = members.iter().map(String::as_str).collect();
        let mut errors = ValidationErrors::new();
        Validator::new(&mut errors)
            .string("", "f")
            .equal(&expected)
            .len(len)
            .range(min, min + span)
            .one_of(&members)
            .required();
        prop_assert_eq!(kinds(&errors, "f"), vec![FailureKind::Required]);
    }

    /// Zero integers and empty byte strings follow the same law.
    #[test]
    fn zero_values_are_optional_unless_required(
        expected in any::<i64>(),
        min in -100i64..100,
        span in 0i64..100,
        raw in prop::collection::vec(any::<u8>(), 1..8),
    ) {
        let mut errors = ValidationErrors::new();
        let mut v = Validator::new(&mut errors);
        v.int(0, "n")
            .equal(expected)
            .len(3)
            .range(min, min + span)
            .one_of(&[expected])
            .required();
        v.bytes(&[], "b")
            .equal(&raw)
            .len(raw.len())
            .range(1, 2)
            .one_of(&[raw.as_slice()])
            .required();
        prop_assert_eq!(kinds(&errors, "n"), vec![FailureKind::Required]);
        prop_assert_eq!(kinds(&errors, "b"), vec![FailureKind::Required]);
    }

    /// One `NotInSet` per flattened leaf outside the set, and nothing else.
    #[test]
    fn membership_counts_missing_leaves(subject in nested_words(), allowed in allowed_words()) {
        let missing = subject
            .iter()
            .flatten()
            .filter(|word| !allowed.contains(*word))
            .count();

        let mut errors = ValidationErrors::new();
        let set = AllowedSet::strings(allowed.iter().map(String::as_str));
        check_in(&subject, &set, "f", &mut errors);

        prop_assert_eq!(kinds(&errors, "f"), vec![FailureKind::NotInSet; missing]);
    }

    /// Repeating a failing rule appends one failure per call.
    #[test]
    fn failures_are_never_deduplicated(calls in 1usize..16) {
        let mut errors = ValidationErrors::new();
        let mut v = Validator::new(&mut errors);
        for _ in 0..calls {
            v.slice(&vec!["x"], "f").one_of(["y"]);
        }
        prop_assert_eq!(errors.get("f").len(), calls);
    }

    /// Integer leaves against a string set are caller errors, never misses.
    #[test]
    fn family_mismatch_is_bad_parameter(
        subject in prop::collection::vec(any::<i32>(), 1..8),
        allowed in prop::collection::vec("[0-9]{1,3}", 0..4),
    ) {
        let mut errors = ValidationErrors::new();
        check_in(&subject, &AllowedSet::from(allowed), "f", &mut errors);
        prop_assert_eq!(kinds(&errors, "f"), vec![FailureKind::BadParameter; subject.len()]);
    }

    /// Empty containers satisfy any membership or date rule.
    #[test]
    fn empty_containers_are_vacuous(allowed in allowed_words(), layout in prop_oneof![
        Just(DateLayout::DATE),
        Just(DateLayout::TIME),
        Just(DateLayout::RFC3339),
    ]) {
        let layout = DateLayout::new(layout).unwrap();
        let set = AllowedSet::strings(allowed.iter().map(String::as_str));
        let empty_seq: Vec<Vec<String>> = Vec::new();
        let empty_map: BTreeMap<String, String> = BTreeMap::new();

        let mut errors = ValidationErrors::new();
        check_in(&empty_seq, &set, "f", &mut errors);
        check_in(&empty_map, &set, "f", &mut errors);
        check_date_format(&empty_seq, &layout, "f", &mut errors);
        check_date_format(&empty_map, &layout, "f", &mut errors);
        prop_assert!(errors.is_valid());
    }
}

#[cfg(feature = "json")]
proptest! {
    /// Arbitrary JSON trees are flattened exactly like native containers.
    #[test]
    fn json_membership_counts_missing_leaves(subject in json_string_tree(), allowed in allowed_words()) {
        let mut leaves = Vec::new();
        string_leaves(&subject, &mut leaves);
        let missing = leaves.iter().filter(|word| !allowed.contains(*word)).count();

        let mut errors = ValidationErrors::new();
        let set = AllowedSet::strings(allowed.iter().map(String::as_str));
        check_in(&subject, &set, "f", &mut errors);

        prop_assert_eq!(errors.get("f").len(), missing);
    }
}
