use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait for types that can serve as trie characters.
///
/// This trait is automatically implemented for any type satisfying all the
/// required bounds (`char`, `u8`, `u16`, `u32`, etc.).
///
/// - `Copy`: words and edge labels store characters by value
/// - `Eq + Ord`: comparing characters and validating word order
/// - `Hash`: edge labels are keys in the children map
/// - `Debug`: debug printing of nodes and errors
/// - `Display`: rendering edge labels in the structural JSON dump
pub trait TrieChar: Copy + Eq + Ord + Hash + Debug + Display {}

impl<T: Copy + Eq + Ord + Hash + Debug + Display> TrieChar for T {}
