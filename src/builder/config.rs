//! Builder Configuration
//!
//! Defines which stages the builder runs and how the canonical triage tree
//! wires its repeated outcome.
use crate::builder::stage::{Pruning, Splitting, Stage, Stopping};
use crate::errors::TriageError;
use crate::tree::io::TreeIO;
use crate::utils::parse_error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Construction stages, in the order a pipeline usually runs them.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum StageKind {
    /// Build the canonical triage tree.
    Splitting,
    /// Keep the current tree as it is.
    Stopping,
    /// Placeholder for pruning, keeps the current tree.
    Pruning,
}

impl StageKind {
    pub fn instantiate(&self, leaf_sharing: LeafSharing) -> Box<dyn Stage> {
        match self {
            StageKind::Splitting => Box::new(Splitting::new(leaf_sharing)),
            StageKind::Stopping => Box::new(Stopping),
            StageKind::Pruning => Box::new(Pruning),
        }
    }
}

impl FromStr for StageKind {
    type Err = TriageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Splitting" => Ok(StageKind::Splitting),
            "Stopping" => Ok(StageKind::Stopping),
            "Pruning" => Ok(StageKind::Pruning),
            _ => Err(parse_error(s, "StageKind", &["Splitting", "Stopping", "Pruning"])),
        }
    }
}

/// How the canonical tree wires the "URGÊNCIA" outcome reached from two parents.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LeafSharing {
    /// One leaf instance referenced by both parents.
    #[default]
    Shared,
    /// A separate leaf instance per parent.
    Duplicated,
}

impl FromStr for LeafSharing {
    type Err = TriageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Shared" => Ok(LeafSharing::Shared),
            "Duplicated" => Ok(LeafSharing::Duplicated),
            _ => Err(parse_error(s, "LeafSharing", &["Shared", "Duplicated"])),
        }
    }
}

fn default_stages() -> Vec<StageKind> {
    vec![StageKind::Splitting, StageKind::Stopping, StageKind::Pruning]
}
fn default_leaf_sharing() -> LeafSharing {
    LeafSharing::Shared
}

/// Configuration for `TreeBuilder::from_config`.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
pub struct BuilderConfig {
    /// Stages to run, in order.
    #[serde(default = "default_stages")]
    pub stages: Vec<StageKind>,
    /// Wiring of the repeated outcome leaf.
    #[serde(default = "default_leaf_sharing")]
    pub leaf_sharing: LeafSharing,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        BuilderConfig {
            stages: default_stages(),
            leaf_sharing: default_leaf_sharing(),
        }
    }
}

impl TreeIO for BuilderConfig {}
