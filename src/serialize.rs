//! Model persistence as a versioned JSON document.
//!
//! The model is a portable JSON value: a predictor process can load it and
//! serve predictions without retraining. A format version travels in the
//! envelope so incompatible documents are rejected on load.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::error::ForestError;
use crate::model::RandomForestModel;

/// Current model document version.
const FORMAT_VERSION: u32 = 1;

/// Versioned envelope around the serialized model.
#[derive(serde::Serialize, serde::Deserialize)]
struct ModelEnvelope {
    /// Format version for compatibility checking.
    format_version: u32,
    /// The model itself.
    model: RandomForestModel,
}

impl RandomForestModel {
    /// Serialize the model to a pretty-printed JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ForestError::SerializeModel`] if encoding fails.
    pub fn to_json(&self) -> Result<String, ForestError> {
        let envelope = ModelEnvelope {
            format_version: FORMAT_VERSION,
            model: self.clone(),
        };
        serde_json::to_string_pretty(&envelope)
            .map_err(|source| ForestError::SerializeModel { source })
    }

    /// Deserialize a model from a JSON string, checking the format version.
    ///
    /// # Errors
    ///
    /// | Variant | When |
    /// |---|---|
    /// | [`ForestError::DeserializeModel`] | the document is not valid model JSON |
    /// | [`ForestError::IncompatibleModelVersion`] | the format version differs |
    pub fn from_json(json: &str) -> Result<Self, ForestError> {
        let envelope: ModelEnvelope = serde_json::from_str(json)
            .map_err(|source| ForestError::DeserializeModel { source })?;
        if envelope.format_version != FORMAT_VERSION {
            return Err(ForestError::IncompatibleModelVersion {
                expected: FORMAT_VERSION,
                found: envelope.format_version,
            });
        }
        debug!(
            num_tree = envelope.model.num_tree,
            num_feature = envelope.model.num_feature,
            num_class = envelope.model.num_class,
            n_nodes = envelope.model.nodes.len(),
            "model decoded"
        );
        Ok(envelope.model)
    }

    /// Save the model to a JSON file.
    ///
    /// # Errors
    ///
    /// | Variant | When |
    /// |---|---|
    /// | [`ForestError::SerializeModel`] | encoding failed |
    /// | [`ForestError::WriteModel`] | the file could not be written |
    #[instrument(skip(self), fields(path = %path.as_ref().display()))]
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ForestError> {
        let path = path.as_ref();
        let json = self.to_json()?;
        std::fs::write(path, &json).map_err(|source| ForestError::WriteModel {
            path: path.to_path_buf(),
            source,
        })?;
        info!(
            size_bytes = json.len(),
            num_tree = self.num_tree,
            "model saved"
        );
        Ok(())
    }

    /// Load a model from a JSON file.
    ///
    /// # Errors
    ///
    /// | Variant | When |
    /// |---|---|
    /// | [`ForestError::ReadModel`] | the file could not be read |
    /// | [`ForestError::DeserializeModel`] | the document is not valid model JSON |
    /// | [`ForestError::IncompatibleModelVersion`] | the format version differs |
    #[instrument(fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ForestError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ForestError::ReadModel {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use crate::config::RandomForestConfig;
    use crate::error::ForestError;
    use crate::model::RandomForestModel;
    use crate::sample::Sample;

    fn train_simple_model() -> RandomForestModel {
        let samples = vec![
            Sample::new(vec![0.1], 0),
            Sample::new(vec![0.2], 0),
            Sample::new(vec![0.9], 1),
            Sample::new(vec![1.0], 1),
        ];
        RandomForestConfig::new(1, 2)
            .with_num_tree(5)
            .with_seed(42)
            .fit(&samples)
            .unwrap()
    }

    #[test]
    fn json_round_trip_preserves_model() {
        let model = train_simple_model();
        let json = model.to_json().unwrap();
        let restored = RandomForestModel::from_json(&json).unwrap();
        assert_eq!(model, restored);
        for input in [[0.15], [0.95], [0.5]] {
            assert_eq!(
                model.predict(&input).unwrap(),
                restored.predict(&input).unwrap()
            );
        }
    }

    #[test]
    fn file_round_trip_preserves_predictions() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("model.json");
        let model = train_simple_model();
        model.save(&path).unwrap();
        let loaded = RandomForestModel::load(&path).unwrap();
        assert_eq!(model, loaded);
    }

    #[test]
    fn version_mismatch_rejected() {
        let model = train_simple_model();
        let json = model.to_json().unwrap().replace(
            "\"format_version\": 1",
            "\"format_version\": 999",
        );
        let err = RandomForestModel::from_json(&json).unwrap_err();
        assert!(matches!(
            err,
            ForestError::IncompatibleModelVersion {
                expected: 1,
                found: 999
            }
        ));
    }

    #[test]
    fn corrupt_document_rejected() {
        let err = RandomForestModel::from_json("not a model").unwrap_err();
        assert!(matches!(err, ForestError::DeserializeModel { .. }));
    }

    #[test]
    fn load_nonexistent_file_error() {
        let dir = TempDir::new().unwrap();
        let err = RandomForestModel::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ForestError::ReadModel { .. }));
    }
}
