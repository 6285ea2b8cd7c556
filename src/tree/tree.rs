use crate::errors::TriageError;
use crate::node::{DecisionNode, Node, NodeRef, TreeNode};
use crate::traversal::{walk, walk_with_depth, DepthIter, PreOrderIter};
use crate::utils::indent;
use crate::visitor::{CountLeavesVisitor, DepthVisitor, LeafResultsVisitor, Visitor};
use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::rc::Rc;

/// A rooted triage tree.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Tree {
    pub root: NodeRef,
}

impl Tree {
    pub fn new(root: impl Into<NodeRef>) -> Self {
        Tree { root: root.into() }
    }

    /// A fresh pre-order iterator over the tree.
    pub fn iter(&self) -> PreOrderIter<'_> {
        PreOrderIter::new(&self.root)
    }

    /// A fresh pre-order iterator yielding `(depth, node)`.
    pub fn iter_depth(&self) -> DepthIter<'_> {
        DepthIter::new(&self.root)
    }

    pub fn walk(&self, visitor: &mut dyn Visitor) {
        walk(&self.root, visitor);
    }

    pub fn walk_with_depth(&self, visitor: &mut dyn Visitor) {
        walk_with_depth(&self.root, visitor);
    }

    /// Number of nodes produced by a full traversal. A shared node is
    /// counted once per path that reaches it.
    pub fn n_nodes(&self) -> usize {
        self.iter().count()
    }

    pub fn count_leaves(&self) -> usize {
        let mut counter = CountLeavesVisitor::new();
        self.walk(&mut counter);
        counter.count
    }

    /// Depth in levels, a leaf counting one below its parent.
    pub fn max_depth(&self) -> usize {
        let mut depth = DepthVisitor::new();
        self.walk_with_depth(&mut depth);
        depth.max_depth
    }

    /// Leaf results in pre-order.
    pub fn leaf_results(&self) -> Vec<String> {
        let mut results = LeafResultsVisitor::new();
        self.walk(&mut results);
        results.results
    }

    /// Nodes referenced by more than one branch, in discovery order.
    /// Identity is by instance, two equal leaves built separately are not shared.
    pub fn shared_nodes(&self) -> Vec<&TreeNode> {
        let mut incoming: HashMap<*const TreeNode, usize> = HashMap::new();
        let mut seen: HashSet<*const TreeNode> = HashSet::new();
        let mut order: Vec<&TreeNode> = Vec::new();
        let mut stack: Vec<&TreeNode> = vec![self.root.as_ref()];

        while let Some(node) = stack.pop() {
            if !seen.insert(node as *const TreeNode) {
                continue;
            }
            for child in node.children().into_iter().rev() {
                let ptr = child as *const TreeNode;
                let count = incoming.entry(ptr).or_insert(0);
                *count += 1;
                if *count == 2 {
                    order.push(child);
                }
                stack.push(child);
            }
        }
        order
    }

    /// Fails on the first node that is shared between parents.
    pub fn check_shape(&self) -> Result<(), TriageError> {
        match self.shared_nodes().first() {
            Some(node) => Err(TriageError::SharedNode(node.label().to_string())),
            None => Ok(()),
        }
    }

    /// Deep copy in which every path gets its own node instances.
    pub fn unshare(&self) -> Tree {
        Tree {
            root: copy_node(&self.root),
        }
    }
}

enum CopyStep<'a> {
    Visit(&'a TreeNode),
    Assemble(&'a DecisionNode),
}

/// Copies bottom-up from an explicit stack, so depth is bounded by memory only.
fn copy_node(root: &TreeNode) -> NodeRef {
    let mut steps = vec![CopyStep::Visit(root)];
    let mut built: Vec<NodeRef> = Vec::new();
    while let Some(step) = steps.pop() {
        match step {
            CopyStep::Visit(TreeNode::Leaf(l)) => built.push(l.clone().into()),
            CopyStep::Visit(TreeNode::Decision(d)) => {
                steps.push(CopyStep::Assemble(d));
                steps.extend(d.branches().iter().rev().map(|b| CopyStep::Visit(b.node.as_ref())));
            }
            CopyStep::Assemble(d) => {
                let children = built.split_off(built.len() - d.branches().len());
                let mut copy = DecisionNode::new(d.question.clone());
                for (b, child) in d.branches().iter().zip(children) {
                    copy.add_child(b.condition.clone(), child);
                }
                built.push(copy.into());
            }
        }
    }
    // Only the copied root is left.
    built.pop().unwrap_or_else(|| root.clone().into())
}

impl From<NodeRef> for Tree {
    fn from(root: NodeRef) -> Self {
        Tree { root }
    }
}

impl Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut print_buffer: Vec<(usize, Option<&str>, &TreeNode)> = vec![(0, None, self.root.as_ref())];
        while let Some((depth, condition, node)) = print_buffer.pop() {
            match condition {
                Some(c) => writeln!(f, "{}{} -> {}", indent(depth), c, node)?,
                None => writeln!(f, "{}", node)?,
            }
            for b in node.branches().iter().rev() {
                print_buffer.push((depth + 1, Some(b.condition.as_str()), b.node.as_ref()));
            }
        }
        Ok(())
    }
}
