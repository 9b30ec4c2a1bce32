//! Structural JSON dump of a trie.
//!
//! The dump is a read-only walk of the current state: unresolved nodes show
//! their raw word bucket and an empty children object, resolved nodes show
//! `null` words and their edges. Nothing is resolved by serializing, so the
//! shape observably depends on which nodes have been queried so far.

use serde_json::{json, Map, Value};

use super::char_trait::TrieChar;
use super::node::{State, TrieNode};

impl<C: TrieChar> TrieNode<C> {
    /// Serializes the current structural state of this subtree as
    /// `{ "words": <bucket or null>, "children": { <label>: <child>, … } }`.
    ///
    /// Words and edge labels are rendered through the character type's
    /// `Display` impl, so the output is a plain nested string map for any
    /// `TrieChar`. Never triggers resolution; serialize-after-query and
    /// serialize-before-query give different (both valid) shapes.
    pub fn to_json(&self) -> Value {
        match &*self.state.borrow() {
            State::Unresolved(words) => json!({
                "words": words.iter().map(|w| render(w)).collect::<Vec<_>>(),
                "children": Map::new(),
            }),
            State::Resolved(children) => {
                let mut rendered = Map::new();
                for (label, child) in children {
                    rendered.insert(render(label), child.to_json());
                }
                json!({
                    "words": Value::Null,
                    "children": rendered,
                })
            }
        }
    }
}

fn render<C: TrieChar>(chars: &[C]) -> String {
    use std::fmt::Write;
    let mut out = String::new();
    for ch in chars {
        write!(out, "{ch}").expect("writing to a String cannot fail");
    }
    out
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use crate::trie::node::TrieNode;

    #[test]
    fn unresolved_node_dumps_its_bucket() {
        let root = TrieNode::from_sorted_words(["flop", "foo"]);
        assert_eq!(
            root.to_json(),
            json!({ "words": ["flop", "foo"], "children": {} })
        );
    }

    #[test]
    fn resolving_moves_words_into_edges() {
        let root = TrieNode::from_sorted_words(["flop", "foo"]);
        root.is_word();
        assert_eq!(
            root.to_json(),
            json!({
                "words": null,
                "children": {
                    "f": { "words": ["flop", "foo"], "children": {} },
                },
            })
        );
    }

    #[test]
    fn terminal_marker_serializes_as_empty_label() {
        let root = TrieNode::from_sorted_words(["foo", "foobar"]);
        root.find_prefix("foo").is_word();
        assert_eq!(
            root.to_json(),
            json!({
                "words": null,
                "children": {
                    "foo": {
                        "words": null,
                        "children": {
                            "": { "words": ["foo"], "children": {} },
                            "bar": { "words": ["foobar"], "children": {} },
                        },
                    },
                },
            })
        );
    }

    #[test]
    fn serialization_reflects_query_history_not_the_full_tree() {
        let root = TrieNode::from_sorted_words(["bake", "bat", "cap"]);
        let before = root.to_json();
        assert!(before["words"].is_array());

        root.find_prefix("ba");
        let after = root.to_json();
        assert!(after["words"].is_null());
        // The untouched "cap" subtree is still a flat bucket.
        assert_eq!(after["children"]["cap"]["words"], json!(["cap"]));
    }

    #[test]
    fn labels_render_through_display_for_non_char_types() {
        let root = TrieNode::from_sorted_words(vec![vec![1u8, 2], vec![1u8, 3]]);
        root.is_word();
        assert_eq!(
            root.to_json(),
            json!({
                "words": null,
                "children": {
                    "1": { "words": ["12", "13"], "children": {} },
                },
            })
        );
    }
}
