//! Node
//!
//! The two node variants of a triage tree and the capability set they share.
//! A decision node asks a question and owns labelled branches, a leaf node
//! carries the final classification.
use crate::visitor::Visitor;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

/// Handle to a node held by a parent branch, a `Tree` or a traversal stack.
pub type NodeRef = Rc<TreeNode>;

/// Capabilities every node supports, whatever its variant.
pub trait Node {
    /// Call back into the visitor with the operation matching this node's variant.
    fn accept(&self, visitor: &mut dyn Visitor);
    /// Same as `accept`, with the depth at which the driver reached this node.
    fn accept_at(&self, visitor: &mut dyn Visitor, depth: usize);
    /// Child nodes in the order they were added.
    fn children(&self) -> Vec<&TreeNode> {
        Vec::new()
    }
}

/// A labelled edge from a decision node to one of its children.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Branch {
    /// Answer that selects this branch, e.g. "Sim" / "Não".
    pub condition: String,
    pub node: NodeRef,
}

/// Internal node: a question with one branch per possible answer.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct DecisionNode {
    pub question: String,
    pub branches: Vec<Branch>,
}

impl DecisionNode {
    pub fn new(question: impl Into<String>) -> Self {
        DecisionNode {
            question: question.into(),
            branches: Vec::new(),
        }
    }

    /// Append a branch. Conditions are not checked for duplicates and no
    /// cycle detection happens here, the caller keeps the structure a tree.
    pub fn add_child(&mut self, condition: impl Into<String>, node: impl Into<NodeRef>) {
        self.branches.push(Branch {
            condition: condition.into(),
            node: node.into(),
        });
    }

    /// Chained form of `add_child`.
    pub fn with_child(mut self, condition: impl Into<String>, node: impl Into<NodeRef>) -> Self {
        self.add_child(condition, node);
        self
    }

    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    /// A decision node without branches ends traversal just like a leaf.
    pub fn is_terminal(&self) -> bool {
        self.branches.is_empty()
    }
}

impl Drop for DecisionNode {
    // Frees descendants from an explicit stack so deep chains don't exhaust the call stack.
    fn drop(&mut self) {
        let mut pending: Vec<Branch> = std::mem::take(&mut self.branches);
        while let Some(branch) = pending.pop() {
            // Nodes still referenced by another parent are left to that parent.
            if let Ok(TreeNode::Decision(mut child)) = Rc::try_unwrap(branch.node) {
                pending.append(&mut child.branches);
            }
        }
    }
}

impl Node for DecisionNode {
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_decision(self);
    }

    fn accept_at(&self, visitor: &mut dyn Visitor, depth: usize) {
        visitor.visit_decision_at(self, depth);
    }

    fn children(&self) -> Vec<&TreeNode> {
        self.branches.iter().map(|b| b.node.as_ref()).collect()
    }
}

/// Terminal node carrying the triage outcome.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct LeafNode {
    pub result: String,
}

impl LeafNode {
    pub fn new(result: impl Into<String>) -> Self {
        LeafNode { result: result.into() }
    }
}

impl Node for LeafNode {
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_leaf(self);
    }

    fn accept_at(&self, visitor: &mut dyn Visitor, depth: usize) {
        visitor.visit_leaf_at(self, depth);
    }
}

/// Either node variant. Branches and trees hold nodes through this type.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub enum TreeNode {
    Decision(DecisionNode),
    Leaf(LeafNode),
}

impl TreeNode {
    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf(_))
    }

    pub fn as_decision(&self) -> Option<&DecisionNode> {
        match self {
            TreeNode::Decision(d) => Some(d),
            TreeNode::Leaf(_) => None,
        }
    }

    pub fn as_leaf(&self) -> Option<&LeafNode> {
        match self {
            TreeNode::Leaf(l) => Some(l),
            TreeNode::Decision(_) => None,
        }
    }

    /// The question of a decision node or the result of a leaf.
    pub fn label(&self) -> &str {
        match self {
            TreeNode::Decision(d) => &d.question,
            TreeNode::Leaf(l) => &l.result,
        }
    }

    /// Outgoing branches, empty for leaves.
    pub fn branches(&self) -> &[Branch] {
        match self {
            TreeNode::Decision(d) => d.branches(),
            TreeNode::Leaf(_) => &[],
        }
    }
}

impl Node for TreeNode {
    fn accept(&self, visitor: &mut dyn Visitor) {
        match self {
            TreeNode::Decision(d) => d.accept(visitor),
            TreeNode::Leaf(l) => l.accept(visitor),
        }
    }

    fn accept_at(&self, visitor: &mut dyn Visitor, depth: usize) {
        match self {
            TreeNode::Decision(d) => d.accept_at(visitor, depth),
            TreeNode::Leaf(l) => l.accept_at(visitor, depth),
        }
    }

    fn children(&self) -> Vec<&TreeNode> {
        match self {
            TreeNode::Decision(d) => d.children(),
            TreeNode::Leaf(l) => l.children(),
        }
    }
}

impl From<DecisionNode> for TreeNode {
    fn from(node: DecisionNode) -> Self {
        TreeNode::Decision(node)
    }
}

impl From<LeafNode> for TreeNode {
    fn from(node: LeafNode) -> Self {
        TreeNode::Leaf(node)
    }
}

impl From<DecisionNode> for NodeRef {
    fn from(node: DecisionNode) -> Self {
        Rc::new(TreeNode::Decision(node))
    }
}

impl From<LeafNode> for NodeRef {
    fn from(node: LeafNode) -> Self {
        Rc::new(TreeNode::Leaf(node))
    }
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TreeNode::Decision(d) => write!(f, "{} ({} branches)", d.question, d.branches.len()),
            TreeNode::Leaf(l) => write!(f, "leaf={}", l.result),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl Visitor for Recorder {
        fn visit_decision(&mut self, node: &DecisionNode) {
            self.calls.push(format!("decision:{}", node.question));
        }

        fn visit_leaf(&mut self, leaf: &LeafNode) {
            self.calls.push(format!("leaf:{}", leaf.result));
        }
    }

    #[test]
    fn test_accept_dispatches_on_variant() {
        let nodes: Vec<TreeNode> = vec![DecisionNode::new("Q1").into(), LeafNode::new("R1").into()];
        let mut recorder = Recorder::default();
        for n in &nodes {
            n.accept(&mut recorder);
        }
        assert_eq!(recorder.calls, vec!["decision:Q1", "leaf:R1"]);
    }

    #[test]
    fn test_accept_at_defaults_to_plain_visit() {
        let node = TreeNode::from(LeafNode::new("R1"));
        let mut recorder = Recorder::default();
        node.accept_at(&mut recorder, 4);
        assert_eq!(recorder.calls, vec!["leaf:R1"]);
    }

    #[test]
    fn test_children_keep_insertion_order() {
        let mut root = DecisionNode::new("Q1");
        root.add_child("Yes", LeafNode::new("R1"));
        root.add_child("No", LeafNode::new("R2"));
        root.add_child("Maybe", DecisionNode::new("Q2"));

        let labels: Vec<&str> = root.children().iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["R1", "R2", "Q2"]);
        let conditions: Vec<&str> = root.branches().iter().map(|b| b.condition.as_str()).collect();
        assert_eq!(conditions, vec!["Yes", "No", "Maybe"]);
    }

    #[test]
    fn test_leaf_and_empty_decision_have_no_children() {
        let leaf = TreeNode::from(LeafNode::new("R1"));
        assert!(leaf.children().is_empty());
        assert!(leaf.branches().is_empty());

        let decision = DecisionNode::new("Q1");
        assert!(decision.is_terminal());
        assert!(TreeNode::from(decision).children().is_empty());
    }

    #[test]
    fn test_duplicate_conditions_are_accepted() {
        let node = DecisionNode::new("Q1")
            .with_child("Yes", LeafNode::new("R1"))
            .with_child("Yes", LeafNode::new("R2"));
        assert_eq!(node.branches().len(), 2);
    }

    #[test]
    fn test_drop_keeps_nodes_held_elsewhere() {
        let shared: NodeRef = DecisionNode::new("Q2").with_child("Yes", LeafNode::new("R1")).into();
        let first = DecisionNode::new("Q1").with_child("Yes", NodeRef::clone(&shared));
        let second = DecisionNode::new("Q3").with_child("No", NodeRef::clone(&shared));
        drop(first);
        assert_eq!(Rc::strong_count(&shared), 2);
        assert_eq!(second.children()[0].children()[0].label(), "R1");
    }

    #[test]
    fn test_drop_deep_chain() {
        let mut node: NodeRef = LeafNode::new("end").into();
        for _ in 0..100_000 {
            node = DecisionNode::new("Q").with_child("Yes", node).into();
        }
        drop(node);
    }

    #[test]
    fn test_variant_accessors() {
        let node = TreeNode::from(DecisionNode::new("Q1"));
        assert!(!node.is_leaf());
        assert_eq!(node.as_decision().map(|d| d.question.as_str()), Some("Q1"));
        assert!(node.as_leaf().is_none());
        assert_eq!(node.to_string(), "Q1 (0 branches)");
        assert_eq!(TreeNode::from(LeafNode::new("R1")).to_string(), "leaf=R1");
    }
}
