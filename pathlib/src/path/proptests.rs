//! Property-based tests for the path algebra.
//!
//! The normalize module already checks cleaning on its own. This module
//! checks how `PathValue` operations compose.

use super::normalize::clean;
use super::value::PathValue;
use proptest::prelude::*;
use std::path::Path;

fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

fn messy_path_strategy() -> impl Strategy<Value = String> {
    (
        any::<bool>(),
        prop::collection::vec(
            prop_oneof![
                4 => segment_strategy(),
                1 => Just(".".to_string()),
                1 => Just("..".to_string()),
                1 => Just(String::new()),
            ],
            0..8,
        ),
    )
        .prop_map(|(rooted, parts)| {
            let joined = parts.join("/");
            if rooted {
                format!("/{joined}")
            } else {
                joined
            }
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 5000,
        .. ProptestConfig::default()
    })]

    // of(of(s).to_string()) == of(s)
    #[test]
    fn renormalizing_is_idempotent(s in messy_path_strategy()) {
        let once = PathValue::new(&s);
        let twice = PathValue::new(once.to_string());
        prop_assert_eq!(once, twice);
    }

    // The stored form is exactly the cleaned input
    #[test]
    fn stored_path_is_cleaned_input(s in messy_path_strategy()) {
        let value = PathValue::new(&s);
        let cleaned = clean(Path::new(&s));
        prop_assert_eq!(value.as_path(), cleaned.as_path());
    }

    // join(a).join(b) == join(a/b)
    #[test]
    fn join_is_associative(base in messy_path_strategy(), a in segment_strategy(), b in segment_strategy()) {
        let value = PathValue::new(&base);
        prop_assert_eq!(
            value.join(&a).join(&b).to_string(),
            value.join(format!("{a}/{b}")).to_string()
        );
    }

    // parent undoes join for a plain segment
    #[test]
    fn parent_undoes_join(base in messy_path_strategy(), seg in segment_strategy()) {
        let value = PathValue::new(&base);
        let joined = value.join(&seg);
        prop_assert_eq!(joined.name(), seg);
        prop_assert_eq!(joined.parent(), value);
    }

    // ancestor(0) == parent()
    #[test]
    fn ancestor_zero_is_parent(s in messy_path_strategy()) {
        let value = PathValue::new(&s);
        prop_assert_eq!(value.ancestor(0), value.parent());
    }

    // Deeper ancestors never get longer, and never return the path itself
    // unless it is already a boundary
    #[test]
    fn ancestors_shrink(s in messy_path_strategy(), depth in 0usize..10) {
        let value = PathValue::new(&s);
        let shallow = value.ancestor(depth);
        let deep = value.ancestor(depth + 1);
        prop_assert!(deep.as_path().components().count() <= shallow.as_path().components().count());
        if !value.is_boundary() && !value.name().starts_with("..") {
            prop_assert_ne!(shallow, value);
        }
    }
}
