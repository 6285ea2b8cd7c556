//! Traversal
//!
//! Lazy pre-order sequences over a tree. Each iterator owns a private stack of
//! pending nodes, so independent traversals over one tree never interfere.
//! An iterator is one-shot: build a new one from the root to traverse again.
use crate::node::{Node, TreeNode};
use crate::visitor::Visitor;
use std::iter::FusedIterator;

/// Pre-order iterator: a node is produced before its descendants, and
/// earlier-added children are exhausted before later ones are started.
pub struct PreOrderIter<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> PreOrderIter<'a> {
    pub fn new(root: &'a TreeNode) -> Self {
        PreOrderIter { stack: vec![root] }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Reversed so the first child is on top of the stack.
        self.stack.extend(node.children().into_iter().rev());
        Some(node)
    }
}

impl FusedIterator for PreOrderIter<'_> {}

/// Pre-order iterator that also yields each node's depth (root is 0).
pub struct DepthIter<'a> {
    stack: Vec<(usize, &'a TreeNode)>,
}

impl<'a> DepthIter<'a> {
    pub fn new(root: &'a TreeNode) -> Self {
        DepthIter { stack: vec![(0, root)] }
    }
}

impl<'a> Iterator for DepthIter<'a> {
    type Item = (usize, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack.extend(node.children().into_iter().rev().map(|c| (depth + 1, c)));
        Some((depth, node))
    }
}

impl FusedIterator for DepthIter<'_> {}

/// Accept `visitor` on every node reachable from `root`, in pre-order.
pub fn walk(root: &TreeNode, visitor: &mut dyn Visitor) {
    for node in PreOrderIter::new(root) {
        node.accept(visitor);
    }
}

/// Like `walk`, passing each node's depth through `Node::accept_at`.
pub fn walk_with_depth(root: &TreeNode, visitor: &mut dyn Visitor) {
    for (depth, node) in DepthIter::new(root) {
        node.accept_at(visitor, depth);
    }
}
