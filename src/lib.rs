//! # hybrid-trie
//!
//! A word set stored as a ternary search trie ("hybrid trie"): each node holds
//! one character and three links. `left`/`right` branch between alternative
//! characters at the same position (a binary search tree), `middle` advances
//! to the next character of the word.
//!
//! Besides membership and prefix counting the trie reports structural
//! statistics, and can be built with treap-style balancing so the
//! left/right axis stays shallow regardless of insertion order.
//!
//! ## Example
//!
//! ```rust
//! use hybrid_trie::{HybridTrie, UniquePriorities};
//!
//! let mut trie = HybridTrie::new();
//! trie.insert_all(["lou", "leve", "les", "loups"]).unwrap();
//!
//! assert!(trie.contains("les").unwrap());
//! assert_eq!(trie.prefix_count("lou").unwrap(), 2);
//! assert_eq!(trie.words(), ["les", "leve", "lou", "loups"]);
//!
//! let mut balanced = HybridTrie::new();
//! let mut priorities = UniquePriorities::seeded(42);
//! balanced.insert_all_balanced(["a", "b", "c", "d"], &mut priorities).unwrap();
//! assert_eq!(balanced.word_count(), 4);
//! ```

#![forbid(unsafe_code)]

pub mod dot;
pub mod error;
mod iter;
mod node;
pub mod priority;
mod stats;
pub mod words;

use std::cmp::Ordering;

use smallvec::SmallVec;

pub use error::{Error, Result};
pub use iter::Words;
pub use node::{Node, NodeId};
pub use priority::{PrioritySource, UniquePriorities};
pub use stats::TrieStats;

use node::{rotate_left, rotate_right, IdSource, Link};

/// A word decoded into characters.
type Key = SmallVec<[char; 24]>;

fn word_key(word: &str) -> Result<Key> {
    if word.is_empty() {
        return Err(Error::EMPTY_WORD);
    }
    Ok(word.chars().collect())
}

/// Decode a whole word list up front so a bad entry rejects the batch before
/// anything is inserted.
fn word_keys<I, S>(words: I) -> Result<Vec<Key>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let keys = words
        .into_iter()
        .map(|w| word_key(w.as_ref()).map_err(|_| Error::EMPTY_WORD_IN_LIST))
        .collect::<Result<Vec<_>>>()?;
    if keys.is_empty() {
        return Err(Error::EMPTY_WORD_LIST);
    }
    Ok(keys)
}

// =============================================================================
// HybridTrie
// =============================================================================

/// A set of words stored as a ternary search trie.
///
/// Characters compare by code point. Mutation needs `&mut self`; the trie does
/// no internal locking.
#[derive(Clone, Default)]
pub struct HybridTrie {
    root: Link,
    ids: IdSource,
}

impl HybridTrie {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, for read-only traversal (e.g. graph export).
    #[inline]
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Remove every word.
    pub fn clear(&mut self) {
        // Tear down iteratively: dropping a deep Box chain recursively can
        // exhaust the stack.
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.middle.take());
            stack.extend(node.right.take());
        }
    }

    fn find(&self, key: &[char]) -> Option<&Node> {
        let mut current = self.root.as_deref();
        let mut pos = 0;
        while let Some(node) = current {
            match key[pos].cmp(&node.character) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
                Ordering::Equal if pos + 1 == key.len() => return Some(node),
                Ordering::Equal => {
                    pos += 1;
                    current = node.middle.as_deref();
                }
            }
        }
        None
    }
}

// =============================================================================
// Insertion
// =============================================================================

impl HybridTrie {
    /// Store `word`. Inserting a stored word changes nothing.
    pub fn insert(&mut self, word: &str) -> Result<()> {
        let key = word_key(word)?;
        self.insert_key(&key);
        Ok(())
    }

    /// Store every word of `words`.
    ///
    /// Fails without inserting anything if the list is empty or holds an
    /// empty word.
    pub fn insert_all<I, S>(&mut self, words: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keys = word_keys(words)?;
        for key in &keys {
            self.insert_key(key);
        }
        log::debug!("inserted {} words", keys.len());
        Ok(())
    }

    fn insert_key(&mut self, key: &[char]) {
        let root = self.root.take();
        self.root = Some(Self::insert_recursive(root, key, 0, &mut self.ids));
    }

    fn insert_recursive(node: Link, key: &[char], pos: usize, ids: &mut IdSource) -> Box<Node> {
        let c = key[pos];
        let mut node = node.unwrap_or_else(|| Box::new(Node::new(c, ids.next_id())));

        match c.cmp(&node.character) {
            Ordering::Less => {
                node.left = Some(Self::insert_recursive(node.left.take(), key, pos, ids));
            }
            Ordering::Greater => {
                node.right = Some(Self::insert_recursive(node.right.take(), key, pos, ids));
            }
            Ordering::Equal => {
                if pos + 1 < key.len() {
                    node.middle = Some(Self::insert_recursive(node.middle.take(), key, pos + 1, ids));
                } else if !node.is_terminal() {
                    node.terminal_weight = 1;
                }
            }
        }
        node
    }

    /// Store `word`, keeping the left/right axis heap-ordered on priority.
    ///
    /// A newly stored word takes its weight from `priorities`; a word that is
    /// already stored keeps the weight it has. Use the same source for every
    /// balanced insertion into one trie so weights stay unique.
    pub fn insert_balanced<P>(&mut self, word: &str, priorities: &mut P) -> Result<()>
    where
        P: PrioritySource + ?Sized,
    {
        let key = word_key(word)?;
        self.insert_balanced_key(&key, priorities);
        Ok(())
    }

    /// Balanced counterpart of [`insert_all`](Self::insert_all).
    pub fn insert_all_balanced<I, S, P>(&mut self, words: I, priorities: &mut P) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        P: PrioritySource + ?Sized,
    {
        let keys = word_keys(words)?;
        for key in &keys {
            self.insert_balanced_key(key, priorities);
        }
        log::debug!("inserted {} words with balancing", keys.len());
        Ok(())
    }

    fn insert_balanced_key<P>(&mut self, key: &[char], priorities: &mut P)
    where
        P: PrioritySource + ?Sized,
    {
        let root = self.root.take();
        self.root = Some(Self::insert_balanced_recursive(
            root,
            key,
            0,
            &mut self.ids,
            priorities,
        ));
    }

    fn insert_balanced_recursive<P>(
        node: Link,
        key: &[char],
        pos: usize,
        ids: &mut IdSource,
        priorities: &mut P,
    ) -> Box<Node>
    where
        P: PrioritySource + ?Sized,
    {
        let c = key[pos];
        let mut node = node.unwrap_or_else(|| Box::new(Node::new(c, ids.next_id())));

        match c.cmp(&node.character) {
            Ordering::Less => {
                let left =
                    Self::insert_balanced_recursive(node.left.take(), key, pos, ids, priorities);
                let rises = left.priority > node.priority;
                node.left = Some(left);
                if rises {
                    node = rotate_right(node);
                }
            }
            Ordering::Greater => {
                let right =
                    Self::insert_balanced_recursive(node.right.take(), key, pos, ids, priorities);
                let rises = right.priority > node.priority;
                node.right = Some(right);
                if rises {
                    node = rotate_left(node);
                }
            }
            Ordering::Equal => {
                if pos + 1 < key.len() {
                    node.middle = Some(Self::insert_balanced_recursive(
                        node.middle.take(),
                        key,
                        pos + 1,
                        ids,
                        priorities,
                    ));
                } else if !node.is_terminal() {
                    node.terminal_weight = priorities.next_priority();
                }
                node.refresh_priority();
            }
        }
        node
    }
}

// =============================================================================
// Queries
// =============================================================================

impl HybridTrie {
    /// Whether `word` is stored.
    pub fn contains(&self, word: &str) -> Result<bool> {
        let key = word_key(word)?;
        Ok(self.find(&key).is_some_and(Node::is_terminal))
    }

    /// Number of stored words starting with `prefix`, `prefix` itself included.
    pub fn prefix_count(&self, prefix: &str) -> Result<usize> {
        let key = word_key(prefix)?;
        let Some(node) = self.find(&key) else {
            return Ok(0);
        };
        match node.middle() {
            None => {
                // Dead nodes are pruned, so a node without continuation ends a word.
                debug_assert!(node.is_terminal());
                Ok(1)
            }
            Some(middle) => Ok(stats::count_terminals(Some(middle)) + node.is_terminal() as usize),
        }
    }

    /// Stored words in code point order.
    pub fn iter(&self) -> Words<'_> {
        Words::new(self.root())
    }

    /// Stored words in code point order, collected.
    pub fn words(&self) -> Vec<String> {
        self.iter().collect()
    }

    pub fn node_count(&self) -> usize {
        stats::count_nodes(self.root())
    }

    pub fn word_count(&self) -> usize {
        stats::count_terminals(self.root())
    }

    /// Empty child slots over all nodes.
    pub fn null_link_count(&self) -> usize {
        stats::count_null_links(self.root())
    }

    /// Depth of the deepest word end; the root is at depth 0 and every edge
    /// adds one level.
    pub fn height(&self) -> usize {
        stats::height(self.root())
    }

    /// Number of nodes without children.
    pub fn leaf_count(&self) -> usize {
        stats::leaf_depths(self.root()).0
    }

    /// Mean depth of childless nodes, `0.0` for an empty trie.
    pub fn average_leaf_depth(&self) -> f64 {
        let (leaves, total) = stats::leaf_depths(self.root());
        if leaves == 0 {
            0.0
        } else {
            total as f64 / leaves as f64
        }
    }

    /// All structural figures in one walk.
    pub fn stats(&self) -> TrieStats {
        stats::collect(self.root())
    }

    /// Graphviz rendering, see [`dot`].
    pub fn to_dot(&self) -> String {
        let mut out = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = dot::write_dot(self, &mut out);
        String::from_utf8_lossy(&out).into_owned()
    }
}

// =============================================================================
// Removal
// =============================================================================

impl HybridTrie {
    /// Remove `word`. Returns `false`, leaving the trie untouched, if it was
    /// not stored.
    pub fn remove(&mut self, word: &str) -> Result<bool> {
        let key = word_key(word)?;
        let Some(root) = self.root.take() else {
            return Ok(false);
        };
        let (root, removed) = Self::remove_recursive(root, &key, 0);
        self.root = root;
        if removed {
            log::trace!("removed {word:?}");
        }
        Ok(removed)
    }

    /// Returns the node that now occupies the slot `node` came from.
    fn remove_recursive(mut node: Box<Node>, key: &[char], pos: usize) -> (Link, bool) {
        let removed = match key[pos].cmp(&node.character) {
            Ordering::Less => match node.left.take() {
                Some(left) => {
                    let (left, removed) = Self::remove_recursive(left, key, pos);
                    node.left = left;
                    removed
                }
                None => false,
            },
            Ordering::Greater => match node.right.take() {
                Some(right) => {
                    let (right, removed) = Self::remove_recursive(right, key, pos);
                    node.right = right;
                    removed
                }
                None => false,
            },
            Ordering::Equal if pos + 1 < key.len() => match node.middle.take() {
                Some(middle) => {
                    let (middle, removed) = Self::remove_recursive(middle, key, pos + 1);
                    node.middle = middle;
                    removed
                }
                None => false,
            },
            Ordering::Equal => {
                let removed = node.is_terminal();
                node.terminal_weight = 0;
                removed
            }
        };

        if !removed {
            return (Some(node), false);
        }
        node.refresh_priority();
        if node.middle.is_none() && !node.is_terminal() {
            return (Self::splice_out(node), true);
        }
        (Some(node), true)
    }

    /// Unlink `node` from the left/right axis, returning its replacement.
    fn splice_out(mut node: Box<Node>) -> Link {
        match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (Some(left), None) => Some(left),
            (None, Some(right)) => Some(right),
            (Some(left), Some(mut right)) => match Self::detach_leftmost(&mut right) {
                // The right child is its own subtree's minimum.
                None => {
                    right.left = Some(left);
                    Some(right)
                }
                Some(mut successor) => {
                    successor.left = Some(left);
                    successor.right = Some(right);
                    Some(successor)
                }
            },
        }
    }

    /// Detach the minimum of `node`'s left subtree; its right subtree takes
    /// its place. `None` if `node` has no left child.
    fn detach_leftmost(node: &mut Node) -> Link {
        match node.left {
            Some(ref mut left) if left.left.is_some() => Self::detach_leftmost(left),
            _ => {
                let mut min = node.left.take()?;
                node.left = min.right.take();
                Some(min)
            }
        }
    }
}

impl Drop for HybridTrie {
    fn drop(&mut self) {
        self.clear();
    }
}

impl std::fmt::Debug for HybridTrie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a HybridTrie {
    type Item = String;
    type IntoIter = Words<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


#[cfg(test)]
mod proptests;
