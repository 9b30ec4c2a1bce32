use std::collections::BTreeSet;
use std::rc::Rc;

use proptest::prelude::*;

use super::builder::{build_trie, Word};
use super::node::TrieNode;

/// Sorted, deduplicated word lists over a small alphabet, so shared prefixes
/// and exact-prefix collisions actually occur.
fn word_lists() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::btree_set("[a-d]{1,8}", 1..32)
        .prop_map(|set| set.into_iter().collect())
}

fn descend(root: &Rc<TrieNode<char>>, word: &str) -> Rc<TrieNode<char>> {
    word.chars()
        .fold(Rc::clone(root), |node, ch| node.find_prefix(String::from(ch)))
}

fn as_buckets(words: &[String]) -> Vec<Word<char>> {
    words.iter().map(|w| w.chars().collect()).collect()
}

proptest! {
    /// Every stored word is a word, whether reached in one query or one
    /// character at a time; strict prefixes are words only if stored.
    #[test]
    fn membership_matches_the_input_set(words in word_lists()) {
        let set: BTreeSet<&str> = words.iter().map(String::as_str).collect();
        let root = build_trie(&words).unwrap();

        for word in &words {
            prop_assert!(root.find_prefix(word.as_str()).is_word(), "missing word {word:?}");
            prop_assert!(descend(&root, word).is_word(), "missing word {word:?} (char-by-char)");

            for cut in 1..word.len() {
                let prefix = &word[..cut];
                prop_assert_eq!(
                    descend(&root, prefix).is_word(),
                    set.contains(prefix),
                    "wrong answer for strict prefix {:?}", prefix
                );
            }
        }
    }

    /// Probes outside the stored set never report word-hood.
    #[test]
    fn non_members_are_rejected(words in word_lists(), probes in proptest::collection::vec("[a-e]{1,9}", 1..16)) {
        let set: BTreeSet<&str> = words.iter().map(String::as_str).collect();
        let root = build_trie(&words).unwrap();

        for probe in &probes {
            if !set.contains(probe.as_str()) {
                prop_assert!(!root.find_prefix(probe.as_str()).is_word(), "phantom word {probe:?}");
                prop_assert!(!descend(&root, probe).is_word(), "phantom word {probe:?} (char-by-char)");
            }
        }
    }

    /// Resolution partitions without losing or inventing words: after any
    /// amount of querying, walking the tree reconstructs the input exactly.
    #[test]
    fn words_round_trip_through_resolution(words in word_lists()) {
        let root = build_trie(&words).unwrap();

        // Force resolution along every path, plus some misses for good measure.
        for word in &words {
            descend(&root, word).is_word();
        }
        root.find_prefix("zzz").is_word();

        prop_assert_eq!(root.collect_words(), as_buckets(&words));
        prop_assert_eq!(root.find_prefix("").collect_words(), as_buckets(&words));
    }

    /// Repeating a query pass neither reshapes the tree nor changes answers.
    #[test]
    fn query_passes_are_idempotent(words in word_lists()) {
        let root = build_trie(&words).unwrap();

        let run = |root: &Rc<TrieNode<char>>| -> Vec<bool> {
            words.iter().map(|w| descend(root, w).is_word()).collect()
        };

        let first_answers = run(&root);
        let first_shape = root.to_json();
        let second_answers = run(&root);

        prop_assert_eq!(first_answers, second_answers);
        prop_assert_eq!(first_shape, root.to_json());
    }

    /// A prefix query answers the same word set as filtering the input list.
    #[test]
    fn prefix_queries_select_the_extending_words(words in word_lists(), prefix in "[a-d]{0,4}") {
        let root = build_trie(&words).unwrap();

        let expected: Vec<String> = words
            .iter()
            .filter(|w| w.starts_with(&prefix))
            .cloned()
            .collect();
        let node = root.find_prefix(prefix.as_str());

        prop_assert_eq!(node.collect_words(), as_buckets(&expected));
    }
}
