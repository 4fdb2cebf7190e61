//! The frozen Random Forest model.

use crate::node::{Node, NodeId};

/// A fitted Random Forest: per-tree root ids plus one flat node array.
///
/// Node ids are globally unique across the whole forest, so the model
/// serializes as-is and predictions re-traverse it without any rebuilding.
/// The model is immutable once training completes; concurrent readers are
/// safe.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RandomForestModel {
    pub(crate) num_feature: usize,
    pub(crate) num_class: usize,
    pub(crate) num_tree: usize,
    pub(crate) root_ids: Vec<NodeId>,
    pub(crate) nodes: Vec<Node>,
}

impl RandomForestModel {
    /// Return the number of features the model was trained on.
    #[must_use]
    pub fn num_feature(&self) -> usize {
        self.num_feature
    }

    /// Return the number of classes.
    #[must_use]
    pub fn num_class(&self) -> usize {
        self.num_class
    }

    /// Return the number of trees in the ensemble.
    #[must_use]
    pub fn num_tree(&self) -> usize {
        self.num_tree
    }

    /// Return the root node id of each tree.
    #[must_use]
    pub fn root_ids(&self) -> &[NodeId] {
        &self.root_ids
    }

    /// Return the flat node array covering all trees.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Return the total number of nodes across all trees.
    #[must_use]
    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }
}
