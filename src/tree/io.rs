//! IO
//!
//! JSON persistence for trees and builder configuration.
use crate::errors::TriageError;
use crate::tree::tree::Tree;
use log::warn;
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::path::Path;

/// Save and load values as JSON.
pub trait TreeIO: Serialize + DeserializeOwned + Sized {
    /// Runs before a value is serialized.
    fn before_dump(&self) {}

    /// Dump as a json string.
    fn json_dump(&self) -> Result<String, TriageError> {
        self.before_dump();
        serde_json::to_string(self).map_err(|e| TriageError::UnableToWrite(e.to_string()))
    }

    /// Load from a json string.
    fn from_json(json_str: &str) -> Result<Self, TriageError> {
        serde_json::from_str::<Self>(json_str).map_err(|e| TriageError::UnableToRead(e.to_string()))
    }

    /// * `path` - Destination file, overwritten if present.
    fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), TriageError> {
        fs::write(path, self.json_dump()?).map_err(|e| TriageError::UnableToWrite(e.to_string()))
    }

    /// * `path` - File written by `save`.
    fn load<P: AsRef<Path>>(path: P) -> Result<Self, TriageError> {
        let json_str = fs::read_to_string(path).map_err(|e| TriageError::UnableToRead(e.to_string()))?;
        Self::from_json(&json_str)
    }
}

/// A node shared between parents is written once per parent. Loading the
/// JSON back gives each parent its own copy: traversal order, leaf counts
/// and depth are unchanged, `Tree::shared_nodes` comes back empty.
impl TreeIO for Tree {
    fn before_dump(&self) {
        for node in self.shared_nodes() {
            warn!("Node {} is shared and will load back as separate copies.", node.label());
        }
    }
}
