use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::rc::Rc;

use smallvec::SmallVec;

use super::char_trait::TrieChar;
use super::node::TrieNode;

/// Character buffer for a single word. Words up to 32 characters live inline.
pub type Word<C> = SmallVec<[C; 32]>;

/// Trait for types that can be used as a word when building or querying a trie.
///
/// Implemented for common string and sequence types so that
/// [`build_trie`] and [`TrieNode::find_prefix`] accept them directly without
/// manual conversion.
pub trait IntoWord<C: TrieChar> {
    /// Collects this word into a character buffer.
    fn collect_word(self) -> Word<C>;
}

// String types → char

impl IntoWord<char> for &str {
    fn collect_word(self) -> Word<char> {
        self.chars().collect()
    }
}

impl IntoWord<char> for &&str {
    fn collect_word(self) -> Word<char> {
        self.chars().collect()
    }
}

impl IntoWord<char> for String {
    fn collect_word(self) -> Word<char> {
        self.chars().collect()
    }
}

impl IntoWord<char> for &String {
    fn collect_word(self) -> Word<char> {
        self.chars().collect()
    }
}

// Generic sequence types → C

impl<C: TrieChar> IntoWord<C> for Word<C> {
    fn collect_word(self) -> Word<C> {
        self
    }
}

impl<C: TrieChar> IntoWord<C> for &[C] {
    fn collect_word(self) -> Word<C> {
        self.iter().copied().collect()
    }
}

impl<C: TrieChar> IntoWord<C> for Vec<C> {
    fn collect_word(self) -> Word<C> {
        self.into_iter().collect()
    }
}

impl<C: TrieChar> IntoWord<C> for &Vec<C> {
    fn collect_word(self) -> Word<C> {
        self.iter().copied().collect()
    }
}

impl<C: TrieChar, const N: usize> IntoWord<C> for [C; N] {
    fn collect_word(self) -> Word<C> {
        self.into_iter().collect()
    }
}

impl<C: TrieChar, const N: usize> IntoWord<C> for &[C; N] {
    fn collect_word(self) -> Word<C> {
        self.iter().copied().collect()
    }
}

/// Errors that can occur when building a trie from a word list.
#[derive(Debug, PartialEq)]
pub enum TrieError<C: TrieChar> {
    /// Words were not in strictly increasing lexicographic order.
    ///
    /// Contains the two words that were out of order (previous word, current
    /// word). Duplicates are reported here too, since a repeated word is not
    /// strictly greater than its predecessor.
    Order(Vec<C>, Vec<C>),
    /// No words were provided. A trie node with an empty bucket cannot be
    /// resolved, so the problem is reported at construction instead.
    EmptyWordList,
}

impl<C: TrieChar> std::fmt::Display for TrieError<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrieError::Order(s1, s2) => write!(f, "OrderError - {s1:?} came before {s2:?}"),
            TrieError::EmptyWordList => write!(f, "EmptyWordList - at least one word is required"),
        }
    }
}

impl<C: TrieChar> Error for TrieError<C> {}

/// Builds a trie from an iterator of words and returns the root node.
///
/// Each word must implement [`IntoWord`], allowing this function to accept
/// `&str`, `String`, slices, vectors, arrays, or any other supported word type.
///
/// Words **must** be provided in strictly increasing lexicographic order
/// (sorted, no duplicates), or this function returns an error naming the
/// offending pair. The trie itself is built lazily: this function only
/// validates and stores the list, and compression happens per node on first
/// query.
///
/// # Examples
///
/// ```
/// use lazytrie::trie::builder::build_trie;
///
/// let root = build_trie(["BAKE", "CAKE", "FAKE", "LAKE", "MAKE"]).unwrap();
/// assert!(root.find_prefix("CAKE").is_word());
/// assert!(!root.find_prefix("AKE").is_word());
/// ```
///
/// Building from byte sequences:
///
/// ```
/// use lazytrie::trie::builder::build_trie;
///
/// let words: Vec<Vec<u8>> = vec![vec![1, 2, 3], vec![1, 2, 4], vec![2, 3, 4]];
/// let root = build_trie(words).unwrap();
/// assert!(root.find_prefix([1u8, 2, 3]).is_word());
/// assert!(!root.find_prefix([1u8, 2, 5]).is_word());
/// ```
pub fn build_trie<C, W>(words: impl IntoIterator<Item = W>) -> Result<Rc<TrieNode<C>>, TrieError<C>>
where
    C: TrieChar,
    W: IntoWord<C>,
{
    let mut collected: Vec<Word<C>> = Vec::new();
    for word in words {
        let word = word.collect_word();
        if let Some(prev) = collected.last() {
            if *prev >= word {
                return Err(TrieError::Order(prev.to_vec(), word.to_vec()));
            }
        }
        collected.push(word);
    }
    if collected.is_empty() {
        return Err(TrieError::EmptyWordList);
    }
    Ok(TrieNode::from_sorted_words(collected))
}

/// Builds a trie from a dictionary file and returns the root node.
///
/// Reads words from a text file (one word per line). Words must be in strictly
/// increasing order. Lines starting with '#' are treated as comments and
/// ignored. Empty lines are skipped.
///
/// # Examples
///
/// ```no_run
/// use lazytrie::trie::builder::build_trie_from_file;
///
/// let root = build_trie_from_file("dictionary.txt").unwrap();
/// assert!(root.find_prefix("aardvark").is_word());
/// ```
pub fn build_trie_from_file(filename: &str) -> Result<Rc<TrieNode<char>>, Box<dyn Error>> {
    let file = File::open(filename)?;
    let mut reader = BufReader::new(file);
    let mut words: Vec<Word<char>> = Vec::new();

    // Instead of using BufReader::lines() we optimize by calling read_line
    // repeatedly, which allows us to reuse the same string instead of
    // allocating a new one for every line.
    let mut buf = String::with_capacity(80);
    loop {
        let bytes_read = reader.read_line(&mut buf);
        match bytes_read {
            Ok(0) => break,
            Err(e) => return Err(e.into()),
            _ => {}
        }
        let word = buf.trim_end();
        if !word.is_empty() && !is_comment(word) {
            words.push(word.chars().collect());
        }
        buf.clear();
    }
    Ok(build_trie(words)?)
}

/// Returns true if this line is a comment.
pub(crate) fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}
