use std::cell::RefCell;
use std::rc::Rc;

use hashbrown::HashMap;

use super::builder::{IntoWord, Word};
use super::char_trait::TrieChar;

/// Children of a resolved node, keyed by edge label.
///
/// The empty label is the terminal marker: its presence means the path to the
/// owning node is itself a stored word. All other labels are non-empty, and no
/// sibling label is a prefix of another.
pub(crate) type Children<C> = HashMap<Box<[C]>, Rc<TrieNode<C>>>;

/// The two lifecycle states of a node. The transition from `Unresolved` to
/// `Resolved` is one-way and happens at most once, on first query.
#[derive(Debug)]
pub(crate) enum State<C: TrieChar> {
    /// Not yet queried: a flat bucket of full words (each word includes the
    /// node's depth-prefix), sorted and duplicate-free.
    Unresolved(Vec<Word<C>>),
    /// Queried at least once: the bucket partitioned into shared-prefix edges.
    Resolved(Children<C>),
}

/// A node in a lazily-compressed radix trie.
///
/// A node starts out holding a flat word bucket. The first call to
/// [`is_word`](TrieNode::is_word) or [`find_prefix`](TrieNode::find_prefix)
/// resolves it: the bucket is partitioned into children keyed by the maximal
/// prefix each contiguous group shares beyond the node's depth. Children are
/// created unresolved and stay that way until queried themselves.
///
/// Nodes are handed out as `Rc<TrieNode<C>>` because prefix lookup can return
/// shared views into the tree: an exact edge match returns the child itself,
/// and a query that stops partway along an edge returns a transient node that
/// shares (does not copy) the subtree hanging off that edge.
///
/// Single-threaded by design: interior state lives in a `RefCell` and subtrees
/// are shared with `Rc`, so the type is neither `Send` nor `Sync`.
#[derive(Debug)]
pub struct TrieNode<C: TrieChar> {
    depth: usize,
    pub(crate) state: RefCell<State<C>>,
}

impl<C: TrieChar> TrieNode<C> {
    /// Creates an unresolved root node from a word list.
    ///
    /// The caller must supply the words in strictly increasing lexicographic
    /// order with no duplicates; behavior on unsorted or duplicated input is
    /// undefined. Use [`build_trie`](super::builder::build_trie) for a checked
    /// variant.
    pub fn from_sorted_words<W>(words: impl IntoIterator<Item = W>) -> Rc<Self>
    where
        W: IntoWord<C>,
    {
        Self::from_sorted_words_at_depth(words, 0)
    }

    /// Creates an unresolved node whose path from the root has already
    /// consumed `depth` characters.
    ///
    /// Every word must begin with the same `depth` characters. The same
    /// ordering contract as [`from_sorted_words`](TrieNode::from_sorted_words)
    /// applies.
    pub fn from_sorted_words_at_depth<W>(
        words: impl IntoIterator<Item = W>,
        depth: usize,
    ) -> Rc<Self>
    where
        W: IntoWord<C>,
    {
        let words = words.into_iter().map(IntoWord::collect_word).collect();
        Rc::new(Self::unresolved(depth, words))
    }

    /// Returns the canonical empty node: depth 0, no words, no children.
    ///
    /// This is what [`find_prefix`](TrieNode::find_prefix) returns for a
    /// prefix no stored word extends. It is constructed already resolved, so
    /// querying it never trips the non-empty-bucket contract of resolution:
    /// `is_word` is `false` and any further `find_prefix` yields another
    /// empty node.
    pub fn empty() -> Rc<Self> {
        Rc::new(Self::resolved(0, Children::new()))
    }

    fn unresolved(depth: usize, words: Vec<Word<C>>) -> Self {
        TrieNode {
            depth,
            state: RefCell::new(State::Unresolved(words)),
        }
    }

    fn resolved(depth: usize, children: Children<C>) -> Self {
        TrieNode {
            depth,
            state: RefCell::new(State::Resolved(children)),
        }
    }

    /// Number of characters consumed by the path from the root to this node.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// True if this node has been resolved into children.
    pub fn is_resolved(&self) -> bool {
        matches!(&*self.state.borrow(), State::Resolved(_))
    }

    /// True if the path from the root to this node spells a stored word.
    ///
    /// Forces resolution on first call; the result is cached by the resolved
    /// state thereafter.
    pub fn is_word(&self) -> bool {
        self.ensure_resolved();
        let state = self.state.borrow();
        match &*state {
            State::Resolved(children) => {
                let terminal: &[C] = &[];
                children.contains_key(terminal)
            }
            State::Unresolved(_) => unreachable!("node was just resolved"),
        }
    }

    /// Returns the sub-trie of all words extending this node's path by
    /// `prefix` (a *relative* prefix: characters beyond this node's depth).
    ///
    /// Forces resolution on first call. Three ways a child edge can overlap
    /// the query:
    ///
    /// - the edge label equals `prefix`: that child is returned directly
    ///   (shared, not copied);
    /// - the label extends past `prefix`: a transient node is synthesized
    ///   whose single child is the original subtree under the shortened
    ///   label, so sub-prefixes of the remaining label keep working;
    /// - `prefix` extends past the label: the search recurses into that
    ///   child with the label stripped off the front.
    ///
    /// An empty `prefix` yields a resolved view sharing all of this node's
    /// children — behaviorally equivalent to the node itself. A prefix no
    /// word extends yields [`TrieNode::empty`]; there is no error path.
    pub fn find_prefix(&self, prefix: impl IntoWord<C>) -> Rc<TrieNode<C>> {
        let prefix = prefix.collect_word();
        self.find_prefix_slice(&prefix)
    }

    fn find_prefix_slice(&self, prefix: &[C]) -> Rc<TrieNode<C>> {
        self.ensure_resolved();
        let state = self.state.borrow();
        let children = match &*state {
            State::Resolved(children) => children,
            State::Unresolved(_) => unreachable!("node was just resolved"),
        };

        if prefix.is_empty() {
            return Rc::new(Self::resolved(self.depth, children.clone()));
        }
        if let Some(child) = children.get(prefix) {
            return Rc::clone(child);
        }
        for (label, child) in children {
            if label.is_empty() {
                // Terminal marker: only an empty prefix could match it, and
                // that case never reaches this scan.
                continue;
            }
            if label.len() > prefix.len() && label.starts_with(prefix) {
                // The query stops partway along this edge. Re-key the child
                // under the unconsumed remainder of the label; the subtree is
                // shared, not copied.
                let remainder: Box<[C]> = label[prefix.len()..].into();
                let mut view = Children::with_capacity(1);
                view.insert(remainder, Rc::clone(child));
                return Rc::new(Self::resolved(self.depth + prefix.len(), view));
            }
            if prefix.len() > label.len() && prefix.starts_with(label) {
                return child.find_prefix_slice(&prefix[label.len()..]);
            }
        }
        TrieNode::empty()
    }

    /// Returns every word reachable from this node, in sorted order.
    ///
    /// Unresolved buckets are read as-is, so this never triggers resolution.
    pub fn collect_words(&self) -> Vec<Word<C>> {
        match &*self.state.borrow() {
            State::Unresolved(words) => words.clone(),
            State::Resolved(children) => {
                let mut words: Vec<Word<C>> = children
                    .values()
                    .flat_map(|child| child.collect_words())
                    .collect();
                words.sort();
                words
            }
        }
    }

    fn ensure_resolved(&self) {
        if matches!(&*self.state.borrow(), State::Unresolved(_)) {
            self.resolve();
        }
    }

    /// Partitions this node's word bucket into children and clears the bucket.
    ///
    /// Single left-to-right pass: a running common prefix shrinks as words are
    /// scanned, and whenever it shrinks all the way back to this node's depth
    /// the group scanned so far is flushed as one child, keyed by the portion
    /// of the group's shared prefix beyond `depth`. Sorted input guarantees
    /// words sharing a prefix are contiguous, so one pass suffices.
    ///
    /// A word equal to the node's own depth-prefix flushes as the terminal
    /// marker: an empty-labeled child holding just that word.
    ///
    /// # Panics
    ///
    /// Panics if the bucket is empty; that indicates a caller bug (an empty
    /// word list, or a constructed node that violates the sorted-input
    /// contract).
    fn resolve(&self) {
        let mut state = self.state.borrow_mut();
        let mut words = match &mut *state {
            State::Resolved(_) => return,
            State::Unresolved(words) => std::mem::take(words),
        };
        assert!(
            !words.is_empty(),
            "cannot resolve a node with an empty word bucket"
        );

        let depth = self.depth;
        // (start index, shared prefix length) per child group.
        let mut groups: Vec<(usize, usize)> = Vec::new();
        let mut start = 0;
        let mut prefix_len = words[0].len();
        for i in 1..words.len() {
            let shared = common_prefix_len(&words[start][..prefix_len], &words[i]);
            if shared == depth {
                groups.push((start, prefix_len));
                start = i;
                prefix_len = words[i].len();
            } else {
                prefix_len = shared;
            }
        }
        groups.push((start, prefix_len));

        let mut children = Children::with_capacity(groups.len());
        for &(start, prefix_len) in groups.iter().rev() {
            let bucket = words.split_off(start);
            let label: Box<[C]> = bucket[0][depth..prefix_len].into();
            let child = TrieNode::unresolved(prefix_len, bucket);
            children.insert(label, Rc::new(child));
        }

        *state = State::Resolved(children);
    }
}

/// Length of the longest common prefix of two character sequences.
fn common_prefix_len<C: TrieChar>(left: &[C], right: &[C]) -> usize {
    left.iter()
        .zip(right)
        .take_while(|(l, r)| l == r)
        .count()
}
