//! Visitor
//!
//! Analyses over a triage tree that live outside the node types. Nodes select
//! the visitor operation through `Node::accept`, visitors accumulate results
//! that the caller reads once a traversal has completed.
use crate::node::{DecisionNode, LeafNode};
use log::debug;
use std::cmp::max;

/// Per-variant operations invoked by `Node::accept`.
///
/// Only `visit_leaf` is required. The depth-aware variants are called by
/// `walk_with_depth` and forward to the plain operations unless overridden.
pub trait Visitor {
    fn visit_decision(&mut self, _node: &DecisionNode) {}

    fn visit_leaf(&mut self, leaf: &LeafNode);

    fn visit_decision_at(&mut self, node: &DecisionNode, _depth: usize) {
        self.visit_decision(node);
    }

    fn visit_leaf_at(&mut self, leaf: &LeafNode, _depth: usize) {
        self.visit_leaf(leaf);
    }
}

/// Counts leaf visits.
///
/// The count is only meaningful after every leaf has been visited exactly
/// once, i.e. after a complete traversal.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CountLeavesVisitor {
    pub count: usize,
}

impl CountLeavesVisitor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Visitor for CountLeavesVisitor {
    fn visit_leaf(&mut self, leaf: &LeafNode) {
        debug!("Visiting leaf: {}", leaf.result);
        self.count += 1;
    }
}

/// Measures the depth of a tree, counting a leaf as one level below the
/// decision node that led to it.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DepthVisitor {
    pub current_depth: usize,
    pub max_depth: usize,
}

impl DepthVisitor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Visitor for DepthVisitor {
    fn visit_decision(&mut self, _node: &DecisionNode) {
        self.current_depth += 1;
        self.max_depth = max(self.max_depth, self.current_depth);
    }

    fn visit_leaf(&mut self, _leaf: &LeafNode) {
        self.max_depth = max(self.max_depth, self.current_depth + 1);
    }

    fn visit_decision_at(&mut self, node: &DecisionNode, depth: usize) {
        self.current_depth = depth;
        self.visit_decision(node);
    }

    fn visit_leaf_at(&mut self, leaf: &LeafNode, depth: usize) {
        self.current_depth = depth;
        self.visit_leaf(leaf);
    }
}

/// Collects leaf results in the order they are visited.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LeafResultsVisitor {
    pub results: Vec<String>,
}

impl LeafResultsVisitor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Visitor for LeafResultsVisitor {
    fn visit_leaf(&mut self, leaf: &LeafNode) {
        self.results.push(leaf.result.clone());
    }
}

/// Counts decision and leaf visits separately.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CountNodesVisitor {
    pub decisions: usize,
    pub leaves: usize,
}

impl CountNodesVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> usize {
        self.decisions + self.leaves
    }
}

impl Visitor for CountNodesVisitor {
    fn visit_decision(&mut self, _node: &DecisionNode) {
        self.decisions += 1;
    }

    fn visit_leaf(&mut self, _leaf: &LeafNode) {
        self.leaves += 1;
    }
}
