//! Property-based tests for tokenization and expansion invariants.

use std::collections::HashSet;

use proptest::prelude::*;

use crate::{expand, to_canonical_target_script, to_source_script, tokenize};

fn arb_latin_word() -> impl Strategy<Value = String> {
    // Weighted towards letters that form digraphs (s, h, c, k, t, z, g, v, e, y).
    prop::collection::vec(
        prop_oneof![
            3 => prop::sample::select(vec!['s', 'h', 'c', 'k', 't', 'z', 'g', 'v', 'e', 'y']),
            2 => prop::sample::select(vec!['a', 'b', 'd', 'i', 'l', 'm', 'n', 'o', 'p', 'r', 'u', 'x']),
            1 => prop::sample::select(vec!['w', '1', ' ', '-', 'S', 'H', 'ա', 'ո', 'ւ']),
        ],
        0..8,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn spans_reconstruct_lowercased_input(input in any::<String>()) {
        let t = tokenize(&input);
        prop_assert_eq!(t.reconstruct(), input.to_lowercase());
    }

    #[test]
    fn segments_are_one_to_three_chars(input in arb_latin_word()) {
        let t = tokenize(&input);
        for seg in t.segments() {
            prop_assert!((1..=3).contains(&seg.len()));
            prop_assert!(!seg.substitutions.is_empty());
        }
    }

    #[test]
    fn canonical_is_deterministic(input in arb_latin_word()) {
        prop_assert_eq!(
            to_canonical_target_script(&input),
            to_canonical_target_script(&input)
        );
    }

    #[test]
    fn candidate_set_bounded_by_product(input in arb_latin_word()) {
        let t = tokenize(&input);
        let all: Vec<String> = expand(&t).collect();
        let unique: HashSet<&String> = all.iter().collect();
        prop_assert_eq!(all.len(), t.candidate_count());
        prop_assert!(unique.len() <= t.candidate_count());
        prop_assert_eq!(all.first().cloned(), Some(t.canonical()));
    }

    #[test]
    fn reverse_never_fails(input in any::<String>()) {
        let out = to_source_script(&input);
        // Unmapped characters pass through, so non-Armenian input is unchanged.
        if !input.chars().any(|c| ('\u{0531}'..='\u{058F}').contains(&c)) {
            prop_assert_eq!(out, input);
        }
    }
}
