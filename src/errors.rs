//! Errors
//!
//! Custom error types used throughout the `triage-tree` crate.
use thiserror::Error;

/// Errors that can occur while building, checking or storing a triage tree.
#[derive(Debug, Error)]
pub enum TriageError {
    /// Unable to write a tree or configuration.
    #[error("Unable to write to file: {0}")]
    UnableToWrite(String),
    /// Unable to read a tree or configuration.
    #[error("Unable to read from a file {0}")]
    UnableToRead(String),
    /// Invalid value parsing.
    #[error("Invalid value {0} passed for {1}, expected one of {2}.")]
    ParseString(String, String, String),
    /// A stage that refines an existing tree was run before any tree was built.
    #[error("The {0} stage requires an existing tree, but none has been built yet.")]
    MissingTree(String),
    /// A node is reachable through more than one parent.
    #[error("Node {0} is shared between more than one parent.")]
    SharedNode(String),
}
