//! Exhaustive split search minimizing weighted Gini impurity.

use crate::node::FeatureIndex;
use crate::sample::Sample;

/// The winning `(row, feature, value)` of a split search.
#[derive(Debug, Clone, Copy)]
#[allow(dead_code)]
pub(crate) struct SplitCandidate {
    /// Row whose feature value became the threshold.
    pub(crate) row: usize,
    /// Feature column to test.
    pub(crate) feature: FeatureIndex,
    /// Threshold: samples with `feature < value` go left.
    pub(crate) value: f64,
    /// Weighted Gini impurity of the induced partition.
    pub(crate) gini: f64,
}

/// Gini impurity of a partition from its per-class counts: `1 - Σ (c/n)²`.
///
/// An empty partition is pure (0.0).
pub(crate) fn gini_impurity(class_counts: &[usize], n_samples: usize) -> f64 {
    if n_samples == 0 {
        return 0.0;
    }
    let n = n_samples as f64;
    let sum_sq: f64 = class_counts
        .iter()
        .map(|&c| {
            let p = c as f64 / n;
            p * p
        })
        .sum();
    1.0 - sum_sq
}

/// Weighted Gini impurity of a left/right split.
fn weighted_gini(left_counts: &[usize], right_counts: &[usize]) -> f64 {
    let num_left: usize = left_counts.iter().sum();
    let num_right: usize = right_counts.iter().sum();
    let left_term = gini_impurity(left_counts, num_left);
    let right_term = gini_impurity(right_counts, num_right);
    (num_left as f64 * left_term + num_right as f64 * right_term)
        / (num_left + num_right) as f64
}

/// Find the split minimizing weighted Gini impurity.
///
/// Every sample row paired with every feature column is tried as a candidate
/// threshold, with the rule `feature < value` — O(samples² · features).
/// Ties keep the first candidate in row-major, then feature-major order
/// (strictly-less-than replacement only).
///
/// There is no failure path: any non-empty sample set yields a split, even a
/// degenerate one where all samples land on one side. An empty set returns
/// the default candidate (feature 0, value 0.0), which partitions nothing.
pub(crate) fn find_split(
    samples: &[Sample],
    num_feature: usize,
    num_class: usize,
) -> SplitCandidate {
    let mut best = SplitCandidate {
        row: 0,
        feature: FeatureIndex::new(0),
        value: 0.0,
        gini: 1.0,
    };

    let mut left_counts = vec![0usize; num_class];
    let mut right_counts = vec![0usize; num_class];

    for (row, candidate) in samples.iter().enumerate() {
        for feature in 0..num_feature {
            let value = candidate.features()[feature];

            left_counts.fill(0);
            right_counts.fill(0);
            for sample in samples {
                if sample.features()[feature] < value {
                    left_counts[sample.label()] += 1;
                } else {
                    right_counts[sample.label()] += 1;
                }
            }

            let gini = weighted_gini(&left_counts, &right_counts);
            if gini < best.gini {
                best = SplitCandidate {
                    row,
                    feature: FeatureIndex::new(feature),
                    value,
                    gini,
                };
            }
        }
    }

    best
}
