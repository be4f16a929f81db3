//! Trie cells.
//!
//! A node sits on two axes at once:
//!
//! - `left` / `right`: sibling characters at the same word position, kept in
//!   binary-search-tree order by `character`.
//! - `middle`: the next character position of the same word.

use std::fmt;

pub(crate) type Link = Option<Box<Node>>;

/// Identity of a node, unique among the nodes a trie ever created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u64);

impl NodeId {
    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Hands out [`NodeId`]s for one trie.
#[derive(Debug, Clone, Default)]
pub(crate) struct IdSource {
    next: u64,
}

impl IdSource {
    #[inline]
    pub(crate) fn next_id(&mut self) -> NodeId {
        let id = NodeId(self.next);
        self.next += 1;
        id
    }
}

/// A single trie cell.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) character: char,
    /// `0` when no word ends here, otherwise the word's balancing weight.
    pub(crate) terminal_weight: u64,
    /// max(`terminal_weight`, `middle.priority`); maintained by balanced insertion only.
    pub(crate) priority: u64,
    pub(crate) id: NodeId,
    pub(crate) left: Link,
    pub(crate) middle: Link,
    pub(crate) right: Link,
}

impl Node {
    pub(crate) fn new(character: char, id: NodeId) -> Self {
        Self {
            character,
            terminal_weight: 0,
            priority: 0,
            id,
            left: None,
            middle: None,
            right: None,
        }
    }

    #[inline]
    pub fn character(&self) -> char {
        self.character
    }

    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.terminal_weight != 0
    }

    #[inline]
    pub fn terminal_weight(&self) -> u64 {
        self.terminal_weight
    }

    #[inline]
    pub fn priority(&self) -> u64 {
        self.priority
    }

    #[inline]
    pub fn has_any_child(&self) -> bool {
        self.left.is_some() || self.middle.is_some() || self.right.is_some()
    }

    #[inline]
    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    #[inline]
    pub fn middle(&self) -> Option<&Node> {
        self.middle.as_deref()
    }

    #[inline]
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// Number of empty child slots (0..=3).
    #[inline]
    pub(crate) fn null_links(&self) -> usize {
        self.left.is_none() as usize + self.middle.is_none() as usize + self.right.is_none() as usize
    }

    /// Recompute `priority` from the node's own weight and its middle subtree.
    #[inline]
    pub(crate) fn refresh_priority(&mut self) {
        let below = self.middle.as_ref().map_or(0, |m| m.priority);
        self.priority = self.terminal_weight.max(below);
    }
}

/// Right rotation: the left child becomes the subtree root.
pub(crate) fn rotate_right(mut node: Box<Node>) -> Box<Node> {
    match node.left.take() {
        Some(mut pivot) => {
            node.left = pivot.right.take();
            pivot.right = Some(node);
            pivot
        }
        None => node,
    }
}

/// Left rotation: the right child becomes the subtree root.
pub(crate) fn rotate_left(mut node: Box<Node>) -> Box<Node> {
    match node.right.take() {
        Some(mut pivot) => {
            node.right = pivot.left.take();
            pivot.left = Some(node);
            pivot
        }
        None => node,
    }
}
