//! Property tests for the trie matching laws.

use oid_filter::{FilterError, OidTrie, TrieConfig};
use proptest::prelude::*;

fn oid() -> impl Strategy<Value = String> {
    prop::collection::vec(0u32..300, 1..8)
        .prop_map(|segments| segments.iter().map(|s| format!(".{}", s)).collect())
}

fn trie_with(prefixes: &[String]) -> OidTrie {
    OidTrie::with_prefixes(TrieConfig::oid(), prefixes).unwrap()
}

proptest! {
    #[test]
    fn inserted_values_are_found(prefixes in prop::collection::vec(oid(), 1..20)) {
        let trie = trie_with(&prefixes);
        for p in &prefixes {
            prop_assert!(trie.find(p));
            prop_assert!(trie.match_prefix(p));
        }
    }

    #[test]
    fn insert_is_idempotent(prefixes in prop::collection::vec(oid(), 1..20)) {
        let once = trie_with(&prefixes);
        let mut twice = trie_with(&prefixes);
        twice.insert_all(&prefixes).unwrap();

        prop_assert_eq!(once.len(), twice.len());
        prop_assert_eq!(once.node_count(), twice.node_count());
    }

    #[test]
    fn insertion_order_does_not_matter(prefixes in prop::collection::vec(oid(), 1..20), probe in oid()) {
        let bulk = trie_with(&prefixes);
        let mut reversed = OidTrie::new(TrieConfig::oid());
        for p in prefixes.iter().rev() {
            reversed.insert(p).unwrap();
        }

        prop_assert_eq!(bulk.find(&probe), reversed.find(&probe));
        prop_assert_eq!(bulk.match_prefix(&probe), reversed.match_prefix(&probe));
    }

    #[test]
    fn stored_prefix_covers_continuations(prefix in oid(), tail in "[0-9.]{0,12}") {
        let trie = trie_with(&[prefix.clone()]);
        let input = format!("{}{}", prefix, tail);
        prop_assert!(trie.match_prefix(&input));
    }

    #[test]
    fn prefix_of_stored_value_matches(value in oid(), cut in 1usize..40) {
        let trie = trie_with(&[value.clone()]);
        let cut = cut.min(value.len());
        prop_assert!(trie.match_prefix(&value[..cut]));
    }

    #[test]
    fn match_prefix_agrees_with_string_prefixes(
        prefixes in prop::collection::vec(oid(), 1..10),
        probe in oid(),
    ) {
        let trie = trie_with(&prefixes);
        let expected = prefixes
            .iter()
            .any(|p| probe.starts_with(p.as_str()) || p.starts_with(probe.as_str()));
        prop_assert_eq!(trie.match_prefix(&probe), expected);
    }

    #[test]
    fn find_agrees_with_membership(prefixes in prop::collection::vec(oid(), 1..10), probe in oid()) {
        let trie = trie_with(&prefixes);
        prop_assert_eq!(trie.find(&probe), prefixes.contains(&probe));
    }

    #[test]
    fn rejected_values_never_match(value in "[0-9.]{0,6}[a-z,\\-][0-9.]{0,6}") {
        let mut trie = OidTrie::new(TrieConfig::oid());
        let is_invalid = matches!(trie.insert(&value), Err(FilterError::InvalidCharacter { .. }));
        prop_assert!(is_invalid);
        prop_assert!(!trie.find(&value));
        prop_assert!(!trie.match_prefix(&value));
        prop_assert_eq!(trie.node_count(), 1);
    }

    #[test]
    fn empty_input_never_matches(prefixes in prop::collection::vec(oid(), 0..10)) {
        let trie = trie_with(&prefixes);
        prop_assert!(!trie.find(""));
        prop_assert!(!trie.match_prefix(""));
    }
}
