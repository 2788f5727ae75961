//! Property-based tests for flattening and reconciliation.

use super::{reconcile, SkipSet};
use crate::error::Error;
use crate::flatten::{flatten, FlatEntry};
use crate::metadata::Parameter;
use proptest::prelude::*;

fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z0-9]{0,8}"
}

fn scalar_strategy() -> impl Strategy<Value = serde_yaml::Value> {
    prop_oneof![
        Just(serde_yaml::Value::Null),
        any::<bool>().prop_map(serde_yaml::Value::Bool),
        any::<i32>().prop_map(|n| serde_yaml::Value::Number(n.into())),
        "[a-z ]{0,10}".prop_map(serde_yaml::Value::String),
    ]
}

// Arbitrary values tree with a mapping root.
fn tree_strategy() -> impl Strategy<Value = serde_yaml::Value> {
    let leaf = scalar_strategy();
    let node = leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(serde_yaml::Value::Sequence),
            prop::collection::btree_map(key_strategy(), inner, 0..4).prop_map(|m| {
                serde_yaml::Value::Mapping(
                    m.into_iter()
                        .map(|(k, v)| (serde_yaml::Value::String(k), v))
                        .collect(),
                )
            }),
        ]
    });
    prop::collection::btree_map(key_strategy(), node, 0..6).prop_map(|m| {
        serde_yaml::Value::Mapping(
            m.into_iter()
                .map(|(k, v)| (serde_yaml::Value::String(k), v))
                .collect(),
        )
    })
}

fn declare_all(entries: &[FlatEntry]) -> Vec<Parameter> {
    entries.iter().map(|e| Parameter::new(&e.path)).collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        .. ProptestConfig::default()
    })]

    // Flattened paths are sorted and unique
    #[test]
    fn flatten_sorted_and_unique(tree in tree_strategy()) {
        let entries = flatten(&tree);
        for pair in entries.windows(2) {
            prop_assert!(pair[0].path < pair[1].path);
        }
    }

    // Only paths outside sequences are schema-eligible
    #[test]
    fn flatten_schema_flag_matches_brackets(tree in tree_strategy()) {
        for entry in flatten(&tree) {
            prop_assert_eq!(entry.schema, !entry.path.contains('['));
        }
    }

    // Undocumented sequences never fail the check
    #[test]
    fn undocumented_sequences_are_skipped(tree in tree_strategy()) {
        let entries = flatten(&tree);
        let declared: Vec<Parameter> = entries
            .iter()
            .filter(|e| !e.path.contains('['))
            .map(|e| Parameter::new(&e.path))
            .collect();
        prop_assert!(reconcile(&entries, &declared).is_ok());
    }

    // Declaring every real path reconciles cleanly
    #[test]
    fn full_declaration_reconciles(tree in tree_strategy()) {
        let entries = flatten(&tree);
        let report = reconcile(&entries, &declare_all(&entries)).unwrap();
        prop_assert_eq!(report.checked, entries.len());
    }

    // Dropping one declaration outside a sequence yields exactly that missing key
    #[test]
    fn dropped_declaration_is_missing(tree in tree_strategy(), pick in any::<prop::sample::Index>()) {
        let entries = flatten(&tree);
        let candidates: Vec<usize> = entries
            .iter()
            .enumerate()
            .filter(|(_, e)| !e.path.contains('['))
            .map(|(i, _)| i)
            .collect();
        prop_assume!(!candidates.is_empty());
        let mut declared = declare_all(&entries);
        let removed = declared.remove(candidates[pick.index(candidates.len())]);

        match reconcile(&entries, &declared) {
            Err(Error::Validation { missing, orphan }) => {
                prop_assert_eq!(missing, vec![removed.name]);
                prop_assert!(orphan.is_empty());
            }
            other => prop_assert!(false, "expected validation error, got {:?}", other),
        }
    }

    // One extra declaration yields exactly that orphan key
    #[test]
    fn undeclared_path_is_orphan(tree in tree_strategy()) {
        let entries = flatten(&tree);
        let mut declared = declare_all(&entries);
        declared.push(Parameter::new("_orphan.key"));

        match reconcile(&entries, &declared) {
            Err(Error::Validation { missing, orphan }) => {
                prop_assert!(missing.is_empty());
                prop_assert_eq!(orphan, vec!["_orphan.key".to_string()]);
            }
            other => prop_assert!(false, "expected validation error, got {:?}", other),
        }
    }

    // A skip on a top-level key removes its whole subtree from the check
    #[test]
    fn skip_covers_subtree(tree in tree_strategy(), pick in any::<prop::sample::Index>()) {
        let entries = flatten(&tree);
        prop_assume!(!entries.is_empty());
        let chosen = &entries[pick.index(entries.len())].path;
        let root = chosen
            .split(|c| c == '.' || c == '[')
            .next()
            .unwrap_or_default()
            .to_string();

        let mut declared: Vec<Parameter> = declare_all(&entries)
            .into_iter()
            .filter(|p| p.name != root
                && !p.name.starts_with(&format!("{root}."))
                && !p.name.starts_with(&format!("{root}[")))
            .collect();
        declared.push(Parameter::skip(&root));

        prop_assert!(SkipSet::from_declared(&declared).covers(chosen));
        prop_assert!(reconcile(&entries, &declared).is_ok());
    }
}
