mod constants;
mod utils;

// Modules
pub mod builder;
pub mod errors;
pub mod node;
pub mod traversal;
pub mod tree;
pub mod visitor;

// Individual classes, and functions
pub use builder::config::{BuilderConfig, LeafSharing, StageKind};
pub use builder::TreeBuilder;
pub use errors::TriageError;
pub use node::{Branch, DecisionNode, LeafNode, Node, NodeRef, TreeNode};
pub use traversal::{walk, walk_with_depth, DepthIter, PreOrderIter};
pub use tree::io::TreeIO;
pub use tree::tree::Tree;
pub use visitor::{CountLeavesVisitor, CountNodesVisitor, DepthVisitor, LeafResultsVisitor, Visitor};
