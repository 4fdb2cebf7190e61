//! Labeled training samples and per-tree subsampling.
//!
//! The per-tree draw reuses a hold-out split: elements are moved out of the
//! pool one uniform pick at a time until the requested size is reached, then
//! the pool is restored. The result is a subset sampled *without* replacement,
//! not a true bootstrap-with-replacement — this matches the original model
//! contract and is deliberately left as-is.

use rand::Rng;

use crate::error::ForestError;

/// One labeled feature vector.
///
/// Samples are immutable once created; ownership moves with whichever
/// collection currently holds them (training set, per-tree subset,
/// left/right partition).
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Sample {
    features: Vec<f64>,
    label: usize,
}

impl Sample {
    /// Create a new sample from a feature vector and a class label.
    #[must_use]
    pub fn new(features: Vec<f64>, label: usize) -> Self {
        Self { features, label }
    }

    /// Return the feature vector.
    #[must_use]
    pub fn features(&self) -> &[f64] {
        &self.features
    }

    /// Return the class label.
    #[must_use]
    pub fn label(&self) -> usize {
        self.label
    }
}

/// Validate a training set against the configured dimensions.
///
/// # Errors
///
/// | Variant | When |
/// |---|---|
/// | [`ForestError::FeatureCountMismatch`] | a sample's vector length differs from `num_feature` |
/// | [`ForestError::LabelOutOfRange`] | a label is outside `[0, num_class)` |
/// | [`ForestError::NonFiniteValue`] | a feature value is NaN or infinite |
pub(crate) fn validate(
    samples: &[Sample],
    num_feature: usize,
    num_class: usize,
) -> Result<(), ForestError> {
    for (sample_index, sample) in samples.iter().enumerate() {
        if sample.features.len() != num_feature {
            return Err(ForestError::FeatureCountMismatch {
                expected: num_feature,
                got: sample.features.len(),
                sample_index,
            });
        }
        if sample.label >= num_class {
            return Err(ForestError::LabelOutOfRange {
                label: sample.label,
                num_class,
                sample_index,
            });
        }
        for (feature_index, &val) in sample.features.iter().enumerate() {
            if !val.is_finite() {
                return Err(ForestError::NonFiniteValue {
                    sample_index,
                    feature_index,
                });
            }
        }
    }
    Ok(())
}

/// Draw a per-tree training subset of size `round(sample_rate * n)`.
///
/// Indices are picked uniformly from a shrinking remainder and moved into
/// the draw; the pool conceptually gets the removed elements back afterwards,
/// so the caller's training set is untouched. Sampling is without
/// replacement: the draw never contains the same training row twice.
pub(crate) fn draw_subset(
    samples: &[Sample],
    sample_rate: f64,
    rng: &mut impl Rng,
) -> Vec<Sample> {
    let target = (sample_rate * samples.len() as f64).round() as usize;
    let keep = samples.len() - target;

    let mut remainder: Vec<usize> = (0..samples.len()).collect();
    let mut drawn = Vec::with_capacity(target);
    while remainder.len() > keep {
        let pick = rng.gen_range(0..remainder.len());
        drawn.push(remainder.remove(pick));
    }
    drawn.into_iter().map(|i| samples[i].clone()).collect()
}

/// Return the samples whose label equals `class`, preserving relative order.
#[must_use]
pub fn filter_by_class(samples: &[Sample], class: usize) -> Vec<Sample> {
    samples
        .iter()
        .filter(|s| s.label == class)
        .cloned()
        .collect()
}
