use smallvec::SmallVec;

use crate::node::Node;

enum Frame<'a> {
    /// Expand into right subtree, the node itself, then left subtree.
    Enter(&'a Node, usize),
    /// Append the node's character at `position`, emit if terminal, descend middle.
    Visit(&'a Node, usize),
}

/// Stored words in code point order.
///
/// Produced by [`HybridTrie::iter`](crate::HybridTrie::iter).
pub struct Words<'a> {
    stack: Vec<Frame<'a>>,
    path: SmallVec<[char; 32]>,
}

impl<'a> Words<'a> {
    pub(crate) fn new(root: Option<&'a Node>) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = root {
            stack.push(Frame::Enter(root, 0));
        }
        Self {
            stack,
            path: SmallVec::new(),
        }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(frame) = self.stack.pop() {
            match frame {
                Frame::Enter(node, position) => {
                    if let Some(right) = node.right() {
                        self.stack.push(Frame::Enter(right, position));
                    }
                    self.stack.push(Frame::Visit(node, position));
                    if let Some(left) = node.left() {
                        self.stack.push(Frame::Enter(left, position));
                    }
                }
                Frame::Visit(node, position) => {
                    self.path.truncate(position);
                    self.path.push(node.character());
                    if let Some(middle) = node.middle() {
                        self.stack.push(Frame::Enter(middle, position + 1));
                    }
                    if node.is_terminal() {
                        return Some(self.path.iter().collect());
                    }
                }
            }
        }
        None
    }
}

impl std::iter::FusedIterator for Words<'_> {}
