use std::fmt;

/// Zero-based feature column index.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
    serde::Serialize, serde::Deserialize,
)]
pub struct FeatureIndex(usize);

impl FeatureIndex {
    /// Create a new feature index from a zero-based column position.
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Return the zero-based feature column index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for FeatureIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a node in the shared arena.
///
/// Ids are globally unique within a model, not per-tree: every tree's root
/// and children index into the same flat node array.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
    serde::Serialize, serde::Deserialize,
)]
pub struct NodeId(usize);

impl NodeId {
    /// Create a new node id from a zero-based arena position.
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Return the zero-based arena index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The role a node plays in its tree.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum NodeKind {
    /// Allocated but not yet classified as split or leaf.
    ///
    /// Only exists while a tree is under construction; a finalized model
    /// never contains unexpanded nodes.
    Unexpanded,
    /// An interior node partitioning samples by `feature < value`.
    Split {
        /// Feature column tested at this node.
        feature: FeatureIndex,
        /// Threshold: samples with `feature < value` go left.
        value: f64,
        /// Id of the left child.
        left: NodeId,
        /// Id of the right child.
        right: NodeId,
    },
    /// A terminal node carrying a fixed predicted class.
    Leaf {
        /// Predicted class id.
        class: usize,
    },
}

/// One node of a decision tree.
///
/// Nodes reference children by [`NodeId`], never by pointer, so the whole
/// forest serializes as one flat array and traversal is plain indexing.
/// The per-node training subset lives only in the builder's work queue and
/// is gone once the model is frozen.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Node {
    /// Depth of this node in its tree; the root is depth 1.
    pub(crate) depth: usize,
    /// Split, leaf, or construction placeholder.
    pub(crate) kind: NodeKind,
}

impl Node {
    /// Return the depth of this node; the root of each tree is depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Return the node kind.
    #[must_use]
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Return `true` if this node is a terminal leaf.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }
}

/// Append-only, id-addressed node store shared by all trees of a forest.
#[derive(Debug, Clone, Default)]
pub(crate) struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub(crate) fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Append an unexpanded node at the given depth and return its id.
    pub(crate) fn alloc(&mut self, depth: usize) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Node {
            depth,
            kind: NodeKind::Unexpanded,
        });
        id
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Turn an unexpanded node into an interior split.
    pub(crate) fn make_split(
        &mut self,
        id: NodeId,
        feature: FeatureIndex,
        value: f64,
        left: NodeId,
        right: NodeId,
    ) {
        self.nodes[id.index()].kind = NodeKind::Split {
            feature,
            value,
            left,
            right,
        };
    }

    /// Turn an unexpanded node into a terminal leaf.
    pub(crate) fn make_leaf(&mut self, id: NodeId, class: usize) {
        self.nodes[id.index()].kind = NodeKind::Leaf { class };
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Consume the arena and return the flat node array.
    pub(crate) fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }
}
