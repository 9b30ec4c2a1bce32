/// Checked trie construction from word lists and dictionary files.
pub mod builder;
/// Trait for types that can serve as trie characters.
pub mod char_trait;
/// The trie node with its lazy resolve and prefix lookup operations.
pub mod node;
/// Structural JSON serialization of the current (possibly partial) tree shape.
pub mod serialize;

pub use builder::{IntoWord, TrieError, Word};
pub use char_trait::TrieChar;
pub use node::TrieNode;

#[cfg(test)]
mod proptests;
