//! Configuration builder for Random Forest training.

use crate::error::ForestError;
use crate::model::RandomForestModel;
use crate::sample::Sample;

/// Configuration for Random Forest training.
///
/// Construct via [`RandomForestConfig::new`], then chain `with_*` methods.
///
/// # Defaults
///
/// | Parameter     | Default            |
/// |---------------|--------------------|
/// | `num_tree`    | 100                |
/// | `max_depth`   | `None` (unlimited) |
/// | `min_size`    | 1                  |
/// | `sample_rate` | 0.8                |
/// | `seed`        | `None` (entropy)   |
#[derive(Debug, Clone)]
pub struct RandomForestConfig {
    pub(crate) num_feature: usize,
    pub(crate) num_class: usize,
    pub(crate) num_tree: usize,
    pub(crate) max_depth: Option<usize>,
    pub(crate) min_size: usize,
    pub(crate) sample_rate: f64,
    pub(crate) seed: Option<u64>,
}

impl RandomForestConfig {
    /// Create a new config for the given feature and class counts.
    #[must_use]
    pub fn new(num_feature: usize, num_class: usize) -> Self {
        Self {
            num_feature,
            num_class,
            num_tree: 100,
            max_depth: None,
            min_size: 1,
            sample_rate: 0.8,
            seed: None,
        }
    }

    // --- Setters ---

    /// Set the ensemble size.
    ///
    /// Zero is allowed and yields an empty forest; prediction on it fails
    /// with [`ForestError::EmptyForest`].
    #[must_use]
    pub fn with_num_tree(mut self, num_tree: usize) -> Self {
        self.num_tree = num_tree;
        self
    }

    /// Set the per-tree depth ceiling (root is depth 1). `None` means
    /// unlimited.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the minimum partition size required to keep expanding a node.
    #[must_use]
    pub fn with_min_size(mut self, min_size: usize) -> Self {
        self.min_size = min_size;
        self
    }

    /// Set the fraction of the training set drawn for each tree.
    #[must_use]
    pub fn with_sample_rate(mut self, sample_rate: f64) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Set a random seed for reproducibility.
    ///
    /// The default (`None`) seeds from OS entropy, matching the production
    /// behavior of drawing from an unseeded source.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    // --- Getters ---

    /// Return the number of features.
    #[must_use]
    pub fn num_feature(&self) -> usize {
        self.num_feature
    }

    /// Return the number of classes.
    #[must_use]
    pub fn num_class(&self) -> usize {
        self.num_class
    }

    /// Return the ensemble size.
    #[must_use]
    pub fn num_tree(&self) -> usize {
        self.num_tree
    }

    /// Return the depth ceiling, if any.
    #[must_use]
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Return the minimum partition size for expansion.
    #[must_use]
    pub fn min_size(&self) -> usize {
        self.min_size
    }

    /// Return the per-tree sampling fraction.
    #[must_use]
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Return the seed, if one was set.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Train a Random Forest on the provided samples.
    ///
    /// # Errors
    ///
    /// | Variant | When |
    /// |---|---|
    /// | [`ForestError::ZeroFeatures`] | `num_feature` is zero |
    /// | [`ForestError::ZeroClasses`] | `num_class` is zero |
    /// | [`ForestError::EmptyDataset`] | `samples` is empty |
    /// | [`ForestError::InvalidSampleRate`] | `sample_rate` is outside (0.0, 1.0] |
    /// | [`ForestError::FeatureCountMismatch`] | a sample has the wrong vector length |
    /// | [`ForestError::LabelOutOfRange`] | a label is outside `[0, num_class)` |
    /// | [`ForestError::NonFiniteValue`] | a feature value is NaN or infinite |
    pub fn fit(&self, samples: &[Sample]) -> Result<RandomForestModel, ForestError> {
        crate::forest::train(self, samples)
    }
}
