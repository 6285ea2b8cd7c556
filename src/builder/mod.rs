//! Builder
//!
//! Holds the active construction stage and the tree built so far. `build`
//! delegates to the active stage, and stages can be swapped between calls.
pub mod config;
pub mod stage;
pub mod triage;

use crate::builder::config::BuilderConfig;
use crate::builder::stage::{Splitting, Stage};
use crate::errors::TriageError;
use crate::tree::tree::Tree;
use log::debug;

pub struct TreeBuilder {
    stage: Box<dyn Stage>,
    tree: Option<Tree>,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new(Box::new(Splitting::default()))
    }
}

impl TreeBuilder {
    pub fn new(stage: Box<dyn Stage>) -> Self {
        TreeBuilder { stage, tree: None }
    }

    /// Start from an already built tree.
    pub fn with_tree(mut self, tree: Tree) -> Self {
        self.tree = Some(tree);
        self
    }

    pub fn set_stage(&mut self, stage: Box<dyn Stage>) {
        debug!("Switching stage: {} -> {}", self.stage.name(), stage.name());
        self.stage = stage;
    }

    pub fn stage_name(&self) -> &str {
        self.stage.name()
    }

    /// Run the active stage on the current tree and keep its result.
    pub fn build(&mut self) -> Result<&Tree, TriageError> {
        let tree = self.stage.build(self.tree.as_ref())?;
        Ok(&*self.tree.insert(tree))
    }

    pub fn tree(&self) -> Option<&Tree> {
        self.tree.as_ref()
    }

    pub fn into_tree(self) -> Option<Tree> {
        self.tree
    }

    /// Run every configured stage in order and return the final tree.
    pub fn from_config(config: &BuilderConfig) -> Result<Tree, TriageError> {
        let empty = || TriageError::MissingTree("empty pipeline".to_string());
        let mut stages = config.stages.iter().map(|kind| kind.instantiate(config.leaf_sharing));
        let mut builder = TreeBuilder::new(stages.next().ok_or_else(empty)?);
        builder.build()?;
        for stage in stages {
            builder.set_stage(stage);
            builder.build()?;
        }
        builder.into_tree().ok_or_else(empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::config::{LeafSharing, StageKind};
    use crate::builder::stage::{Pruning, Stopping};
    use std::rc::Rc;

    #[test]
    fn test_builder_switches_stages() {
        let mut builder = TreeBuilder::default();
        assert_eq!(builder.stage_name(), "Splitting");
        assert!(builder.tree().is_none());

        let root = Rc::clone(&builder.build().unwrap().root);

        builder.set_stage(Box::new(Stopping));
        assert_eq!(builder.stage_name(), "Stopping");
        assert!(Rc::ptr_eq(&builder.build().unwrap().root, &root));

        builder.set_stage(Box::new(Pruning));
        assert!(Rc::ptr_eq(&builder.build().unwrap().root, &root));

        let tree = builder.into_tree().unwrap();
        assert_eq!(tree.count_leaves(), 4);
    }

    #[test]
    fn test_failed_stage_keeps_previous_state() {
        let mut builder = TreeBuilder::new(Box::new(Stopping));
        assert!(builder.build().is_err());
        assert!(builder.tree().is_none());
    }

    #[test]
    fn test_with_tree_starts_from_existing() {
        let existing = triage::triage_tree(LeafSharing::Duplicated);
        let mut builder = TreeBuilder::new(Box::new(Pruning)).with_tree(existing.clone());
        let tree = builder.build().unwrap();
        assert!(Rc::ptr_eq(&tree.root, &existing.root));
    }

    #[test]
    fn test_from_config() {
        let tree = TreeBuilder::from_config(&BuilderConfig::default()).unwrap();
        assert_eq!(tree.n_nodes(), 7);
        assert_eq!(tree.shared_nodes().len(), 1);

        let config = BuilderConfig {
            stages: vec![StageKind::Splitting, StageKind::Pruning],
            leaf_sharing: LeafSharing::Duplicated,
        };
        let tree = TreeBuilder::from_config(&config).unwrap();
        assert!(tree.shared_nodes().is_empty());
    }

    #[test]
    fn test_from_config_errors() {
        let config = BuilderConfig {
            stages: vec![StageKind::Pruning, StageKind::Splitting],
            ..Default::default()
        };
        assert!(matches!(
            TreeBuilder::from_config(&config),
            Err(TriageError::MissingTree(s)) if s == "Pruning"
        ));

        let config = BuilderConfig {
            stages: Vec::new(),
            ..Default::default()
        };
        assert!(TreeBuilder::from_config(&config).is_err());
    }
}
