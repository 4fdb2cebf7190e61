use std::path::PathBuf;

/// Errors from Random Forest training, prediction, and model I/O.
#[derive(Debug, thiserror::Error)]
pub enum ForestError {
    /// Returned when the training dataset has zero samples.
    #[error("training dataset has zero samples")]
    EmptyDataset,

    /// Returned when num_feature is zero.
    #[error("num_feature must be at least 1")]
    ZeroFeatures,

    /// Returned when num_class is zero.
    #[error("num_class must be at least 1")]
    ZeroClasses,

    /// Returned when a sample has a different number of features than expected.
    #[error("sample {sample_index} has {got} features, expected {expected}")]
    FeatureCountMismatch {
        /// The expected number of features.
        expected: usize,
        /// The actual number of features in the sample.
        got: usize,
        /// The zero-based index of the offending sample.
        sample_index: usize,
    },

    /// Returned when a sample's class label is outside `[0, num_class)`.
    #[error("sample {sample_index} has label {label}, expected a label in [0, {num_class})")]
    LabelOutOfRange {
        /// The out-of-range label.
        label: usize,
        /// The number of classes the forest was configured with.
        num_class: usize,
        /// The zero-based index of the offending sample.
        sample_index: usize,
    },

    /// Returned when a feature value is NaN or infinite.
    #[error("non-finite value at sample {sample_index}, feature {feature_index}")]
    NonFiniteValue {
        /// The zero-based index of the offending sample.
        sample_index: usize,
        /// The zero-based index of the offending feature column.
        feature_index: usize,
    },

    /// Returned when sample_rate is not in (0.0, 1.0].
    #[error("sample_rate must be in (0.0, 1.0], got {rate}")]
    InvalidSampleRate {
        /// The invalid sample_rate value provided.
        rate: f64,
    },

    /// Returned when a prediction input has the wrong number of features.
    #[error("prediction input has {got} features, expected {expected}")]
    PredictionFeatureMismatch {
        /// The expected number of features.
        expected: usize,
        /// The actual number of features in the prediction input.
        got: usize,
    },

    /// Returned when predict is called on a forest with zero trees.
    #[error("cannot predict with an empty forest (num_tree = 0)")]
    EmptyForest,

    /// Returned when a loaded model is structurally inconsistent.
    #[error("malformed model: {reason}")]
    MalformedModel {
        /// Human-readable description of the inconsistency.
        reason: String,
    },

    /// Returned when model serialization fails.
    #[error("failed to serialize model")]
    SerializeModel {
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// Returned when model deserialization fails.
    #[error("failed to deserialize model")]
    DeserializeModel {
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// Returned when writing the model file fails.
    #[error("failed to write model to {path}")]
    WriteModel {
        /// Path to the file that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Returned when reading the model file fails.
    #[error("failed to read model from {path}")]
    ReadModel {
        /// Path to the model file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Returned when loading a model with an incompatible format version.
    #[error("incompatible model version: expected {expected}, found {found}")]
    IncompatibleModelVersion {
        /// The model format version this build expects.
        expected: u32,
        /// The model format version found in the document.
        found: u32,
    },
}
