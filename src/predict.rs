//! Majority-vote prediction over the finalized model.

use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::error::ForestError;
use crate::model::RandomForestModel;
use crate::node::{NodeId, NodeKind};

impl RandomForestModel {
    /// Predict the class for a single feature vector.
    ///
    /// Each tree is traversed from its root with the training-time rule
    /// (`feature < value` goes left); the class with the most votes across
    /// trees wins, ties resolved by lowest class id.
    ///
    /// # Errors
    ///
    /// | Variant | When |
    /// |---|---|
    /// | [`ForestError::EmptyForest`] | the model has zero trees |
    /// | [`ForestError::PredictionFeatureMismatch`] | wrong feature count |
    /// | [`ForestError::MalformedModel`] | a traversal escapes the node array |
    pub fn predict(&self, features: &[f64]) -> Result<usize, ForestError> {
        if self.root_ids.is_empty() {
            return Err(ForestError::EmptyForest);
        }
        if features.len() != self.num_feature {
            return Err(ForestError::PredictionFeatureMismatch {
                expected: self.num_feature,
                got: features.len(),
            });
        }

        let mut votes = vec![0usize; self.num_class];
        for &root in &self.root_ids {
            let class = self.traverse(root, features)?;
            votes[class] += 1;
        }

        let mut best = 0;
        for class in 1..self.num_class {
            if votes[class] > votes[best] {
                best = class;
            }
        }
        Ok(best)
    }

    /// Predict classes for a batch of feature vectors, preserving input
    /// order. Traversals only read the model, so the batch is evaluated in
    /// parallel.
    ///
    /// # Errors
    ///
    /// Fails with the same variants as [`RandomForestModel::predict`] if any
    /// input is rejected.
    pub fn predict_batch(&self, inputs: &[Vec<f64>]) -> Result<Vec<usize>, ForestError> {
        inputs
            .into_par_iter()
            .map(|features| self.predict(features))
            .collect()
    }

    /// Walk one tree from `root` and return the class of the leaf reached.
    fn traverse(&self, root: NodeId, features: &[f64]) -> Result<usize, ForestError> {
        let mut id = root;
        loop {
            let node = self
                .nodes
                .get(id.index())
                .ok_or_else(|| ForestError::MalformedModel {
                    reason: format!("node id {id} out of bounds"),
                })?;
            match node.kind() {
                NodeKind::Leaf { class } => {
                    if *class >= self.num_class {
                        return Err(ForestError::MalformedModel {
                            reason: format!("leaf class {class} out of range at node {id}"),
                        });
                    }
                    return Ok(*class);
                }
                NodeKind::Split {
                    feature,
                    value,
                    left,
                    right,
                } => {
                    let v = features.get(feature.index()).ok_or_else(|| {
                        ForestError::MalformedModel {
                            reason: format!("split feature {feature} out of range at node {id}"),
                        }
                    })?;
                    id = if *v < *value { *left } else { *right };
                }
                NodeKind::Unexpanded => {
                    return Err(ForestError::MalformedModel {
                        reason: format!("unexpanded node {id} in finalized model"),
                    });
                }
            }
        }
    }
}
