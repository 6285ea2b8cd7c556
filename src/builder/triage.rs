//! Triage
//!
//! The fixed emergency-room triage questionnaire.
use crate::builder::config::LeafSharing;
use crate::constants::{
    ACCIDENT_QUESTION, BREATHING_QUESTION, CONDITION_NO, CONDITION_YES, OUTCOME_EMERGENCY, OUTCOME_NOT_URGENT,
    OUTCOME_URGENT, ROOT_QUESTION,
};
use crate::node::{DecisionNode, LeafNode, NodeRef};
use crate::tree::tree::Tree;

/// Build the canonical triage tree.
///
/// "URGÊNCIA" is reachable both from the breathing question and from the
/// accident question. With `LeafSharing::Shared` both branches point at the
/// same leaf instance, and any traversal visits it twice.
pub fn triage_tree(leaf_sharing: LeafSharing) -> Tree {
    let urgent: NodeRef = LeafNode::new(OUTCOME_URGENT).into();
    let urgent_after_accident = match leaf_sharing {
        LeafSharing::Shared => NodeRef::clone(&urgent),
        LeafSharing::Duplicated => LeafNode::new(OUTCOME_URGENT).into(),
    };

    let breathing = DecisionNode::new(BREATHING_QUESTION)
        .with_child(CONDITION_YES, LeafNode::new(OUTCOME_EMERGENCY))
        .with_child(CONDITION_NO, urgent);

    let accident = DecisionNode::new(ACCIDENT_QUESTION)
        .with_child(CONDITION_YES, urgent_after_accident)
        .with_child(CONDITION_NO, LeafNode::new(OUTCOME_NOT_URGENT));

    let root = DecisionNode::new(ROOT_QUESTION)
        .with_child(CONDITION_YES, breathing)
        .with_child(CONDITION_NO, accident);

    Tree::new(root)
}
