//! Stage
//!
//! Swappable construction phases. Only `Splitting` creates structure, the
//! other stages mark where stopping and pruning rules plug in.
use crate::builder::config::LeafSharing;
use crate::builder::triage::triage_tree;
use crate::errors::TriageError;
use crate::tree::tree::Tree;
use log::{info, warn};

/// One phase of tree construction.
pub trait Stage {
    fn name(&self) -> &str;
    /// Produce a tree, given the tree built by earlier stages, if any.
    fn build(&self, tree: Option<&Tree>) -> Result<Tree, TriageError>;
}

/// Builds the canonical triage tree.
#[derive(Debug, Default, Clone, Copy)]
pub struct Splitting {
    pub leaf_sharing: LeafSharing,
}

impl Splitting {
    pub fn new(leaf_sharing: LeafSharing) -> Self {
        Splitting { leaf_sharing }
    }
}

impl Stage for Splitting {
    fn name(&self) -> &str {
        "Splitting"
    }

    fn build(&self, tree: Option<&Tree>) -> Result<Tree, TriageError> {
        info!("Stage: {}", self.name());
        if tree.is_some() {
            warn!("Splitting replaces the tree built by an earlier stage.");
        }
        Ok(triage_tree(self.leaf_sharing))
    }
}

/// Keeps the current tree unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stopping;

impl Stage for Stopping {
    fn name(&self) -> &str {
        "Stopping"
    }

    fn build(&self, tree: Option<&Tree>) -> Result<Tree, TriageError> {
        info!("Stage: {}", self.name());
        tree.cloned().ok_or_else(|| TriageError::MissingTree(self.name().to_string()))
    }
}

/// Keeps the current tree unchanged, reporting its size.
#[derive(Debug, Default, Clone, Copy)]
pub struct Pruning;

impl Stage for Pruning {
    fn name(&self) -> &str {
        "Pruning"
    }

    fn build(&self, tree: Option<&Tree>) -> Result<Tree, TriageError> {
        info!("Stage: {}", self.name());
        let tree = tree.ok_or_else(|| TriageError::MissingTree(self.name().to_string()))?;
        let n_nodes = tree.n_nodes();
        info!("Pruned nodes: {} -> {}", n_nodes, n_nodes);
        Ok(tree.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_splitting_builds_triage_tree() {
        let tree = Splitting::default().build(None).unwrap();
        assert_eq!(tree.n_nodes(), 7);
        // Rebuilding over an existing tree yields a new canonical tree.
        let rebuilt = Splitting::new(LeafSharing::Duplicated).build(Some(&tree)).unwrap();
        assert_eq!(rebuilt, tree);
        assert!(!Rc::ptr_eq(&rebuilt.root, &tree.root));
    }

    #[test]
    fn test_stopping_and_pruning_keep_tree() {
        let tree = Splitting::default().build(None).unwrap();
        let stopped = Stopping.build(Some(&tree)).unwrap();
        assert!(Rc::ptr_eq(&stopped.root, &tree.root));
        let pruned = Pruning.build(Some(&stopped)).unwrap();
        assert!(Rc::ptr_eq(&pruned.root, &tree.root));
    }

    #[test]
    fn test_refining_stages_need_a_tree() {
        assert!(matches!(Stopping.build(None), Err(TriageError::MissingTree(s)) if s == "Stopping"));
        assert!(matches!(Pruning.build(None), Err(TriageError::MissingTree(s)) if s == "Pruning"));
    }
}
