//! # lazytrie
//!
//! A lazily-compressed [radix trie](https://en.wikipedia.org/wiki/Radix_tree)
//! built from a pre-sorted word list.
//!
//! The trie starts out as a single node holding the whole word list. Nothing is
//! compressed up front: the first query on a node *resolves* it, partitioning its
//! bucket into children keyed by maximal shared-prefix edges. Children stay
//! unresolved until they are queried themselves, so compression cost is paid one
//! level at a time and only along paths that are actually looked at.
//!
//! Two queries are supported: exact-word membership and prefix lookup. Prefix
//! lookup returns the sub-trie of all words extending a prefix, splitting an edge
//! on the fly when the prefix ends partway along it.
//!
//! ## Quick start
//!
//! ```
//! use lazytrie::trie::builder::build_trie;
//!
//! let root = build_trie(["flop", "foo", "foobar", "fweeh", "fwerp"]).unwrap();
//!
//! let foo = root.find_prefix("foo");
//! assert!(foo.is_word());
//! assert!(!root.find_prefix("fo").is_word());
//! assert!(root.find_prefix("foob").find_prefix("ar").is_word());
//!
//! // Unmatched prefixes yield an empty result, not an error.
//! assert!(!root.find_prefix("zzz").is_word());
//! ```
//!
//! ## Generic usage
//!
//! The trie is generic over the character type, so it works just as well on byte
//! or integer sequences:
//!
//! ```
//! use lazytrie::trie::builder::build_trie;
//!
//! let words: Vec<Vec<u8>> = vec![vec![1, 2, 3], vec![1, 2, 4], vec![2, 3, 4]];
//! let root = build_trie(words).unwrap();
//!
//! assert!(root.find_prefix([1u8, 2, 3]).is_word());
//! assert!(!root.find_prefix([1u8, 2]).is_word());
//! assert_eq!(root.find_prefix([1u8, 2]).collect_words().len(), 2);
//! ```
//!
//! ## Laziness is observable
//!
//! [`to_json`](trie::TrieNode::to_json) dumps the current structural state
//! without forcing any resolution, so the serialized shape depends on which
//! nodes have been queried so far:
//!
//! ```
//! use lazytrie::trie::builder::build_trie;
//!
//! let root = build_trie(["bake", "bat"]).unwrap();
//! assert!(root.to_json()["words"].is_array()); // untouched: still a flat bucket
//!
//! root.is_word();
//! assert!(root.to_json()["words"].is_null()); // resolved: edges now visible
//! ```

#![warn(missing_docs)]

/// Core trie data structure: node type, checked builder, and character trait.
pub mod trie;
