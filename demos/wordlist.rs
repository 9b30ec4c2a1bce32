//! Example: building a Wordlist wrapper around TrieNode.
//!
//! This shows how to create a convenient high-level API on top of the raw trie
//! node interface. The `Wordlist` struct wraps a root `TrieNode` and provides
//! word lookup, prefix checking, and enumeration, and demonstrates how the
//! lazily-resolved shape evolves as queries come in.
//!
//! Run with: cargo run --example wordlist

use std::rc::Rc;

use lazytrie::trie::builder::build_trie;
use lazytrie::trie::TrieNode;

/// A convenient wrapper around a trie root node for word validation.
struct Wordlist {
    root: Rc<TrieNode<char>>,
}

impl Wordlist {
    fn new(root: Rc<TrieNode<char>>) -> Self {
        Wordlist { root }
    }

    /// Returns true if the word is in the wordlist.
    fn is_word(&self, word: &str) -> bool {
        self.root.find_prefix(word).is_word()
    }

    /// Returns true if any word in the wordlist starts with the given prefix.
    fn has_prefix(&self, prefix: &str) -> bool {
        !self.root.find_prefix(prefix).collect_words().is_empty()
    }

    /// Returns all words starting with the given prefix.
    fn complete(&self, prefix: &str) -> Vec<String> {
        self.root
            .find_prefix(prefix)
            .collect_words()
            .into_iter()
            .map(|word| word.into_iter().collect())
            .collect()
    }
}

fn main() {
    let words = ["bake", "baked", "baker", "cake", "caked", "fake", "lake"];
    let root = build_trie(words).unwrap();
    let wordlist = Wordlist::new(Rc::clone(&root));

    // Word lookup
    println!("Word lookup:");
    for word in ["bake", "baker", "bakes", "cake", "lake", "make"] {
        println!("  {word}: {}", if wordlist.is_word(word) { "yes" } else { "no" });
    }

    // Prefix checking
    println!("\nPrefix checking:");
    for prefix in ["ba", "cak", "ma", "fak"] {
        println!("  {prefix}*: {}", if wordlist.has_prefix(prefix) { "yes" } else { "no" });
    }

    // Completion
    println!("\nCompletions of 'bak': {:?}", wordlist.complete("bak"));

    // The structural dump reflects exactly the paths queried so far: subtrees
    // nobody asked about are still flat word buckets.
    println!("\nResolved shape after those queries:");
    println!("{}", serde_json::to_string_pretty(&root.to_json()).unwrap());
}
