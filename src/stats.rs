//! Whole-tree statistics.
//!
//! Every walk uses an explicit stack, so deep left/right chains (e.g. after
//! inserting a sorted word list without balancing) cannot overflow the call
//! stack.

use crate::node::Node;

/// Structural figures of a trie, gathered in one walk.
///
/// Depth counts one level per edge on any axis; the root is at depth 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrieStats {
    /// Total number of nodes.
    pub nodes: usize,
    /// Nodes where a stored word ends.
    pub words: usize,
    /// Empty child slots across all nodes.
    pub null_links: usize,
    /// Nodes without any child.
    pub leaves: usize,
    /// Maximum depth of a terminal node.
    pub height: usize,
    /// Sum of the depths of all leaves.
    pub total_leaf_depth: usize,
}

impl TrieStats {
    /// Mean leaf depth, `0.0` when there are no leaves.
    pub fn average_leaf_depth(&self) -> f64 {
        if self.leaves == 0 {
            0.0
        } else {
            self.total_leaf_depth as f64 / self.leaves as f64
        }
    }
}

/// Visit every node below (and including) `root` with its depth.
fn walk<'a>(root: Option<&'a Node>, mut visit: impl FnMut(&'a Node, usize)) {
    let mut stack: Vec<(&Node, usize)> = Vec::new();
    if let Some(root) = root {
        stack.push((root, 0));
    }
    while let Some((node, depth)) = stack.pop() {
        visit(node, depth);
        for child in [node.right(), node.middle(), node.left()].into_iter().flatten() {
            stack.push((child, depth + 1));
        }
    }
}

pub(crate) fn collect(root: Option<&Node>) -> TrieStats {
    let mut stats = TrieStats::default();
    walk(root, |node, depth| {
        stats.nodes += 1;
        stats.null_links += node.null_links();
        if node.is_terminal() {
            stats.words += 1;
            stats.height = stats.height.max(depth);
        }
        if !node.has_any_child() {
            stats.leaves += 1;
            stats.total_leaf_depth += depth;
        }
    });
    stats
}

pub(crate) fn count_nodes(root: Option<&Node>) -> usize {
    let mut n = 0;
    walk(root, |_, _| n += 1);
    n
}

pub(crate) fn count_terminals(root: Option<&Node>) -> usize {
    let mut n = 0;
    walk(root, |node, _| n += node.is_terminal() as usize);
    n
}

pub(crate) fn count_null_links(root: Option<&Node>) -> usize {
    let mut n = 0;
    walk(root, |node, _| n += node.null_links());
    n
}

pub(crate) fn height(root: Option<&Node>) -> usize {
    let mut h = 0;
    walk(root, |node, depth| {
        if node.is_terminal() {
            h = h.max(depth);
        }
    });
    h
}

/// `(leaf count, sum of leaf depths)`.
pub(crate) fn leaf_depths(root: Option<&Node>) -> (usize, usize) {
    let (mut leaves, mut total) = (0, 0);
    walk(root, |node, depth| {
        if !node.has_any_child() {
            leaves += 1;
            total += depth;
        }
    });
    (leaves, total)
}
