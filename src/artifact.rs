//! On-disk format of a trained estimator.

use std::io::Read;

use machine_learning::{Estimator, arch::EstimatorBuilder, specs::ModelSpec};
use serde::{Deserialize, Serialize};

use crate::{error::LoadErr, features::FEATURE_NAMES};

/// A serialized estimator: its architecture plus the flat vector of trained parameters.
///
/// For every layer, `params` holds the `(inputs, outputs)` weight matrix in row-major order
/// followed by its biases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub feature_names: Option<Vec<String>>,
    pub model: ModelSpec,
    pub params: Vec<f32>,
}

impl ModelArtifact {
    /// Decodes an artifact from its JSON representation.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadErr> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Builds the estimator described by this artifact.
    ///
    /// # Returns
    /// The estimator or an error if the artifact is inconsistent or was trained on a different
    /// feature layout.
    pub fn into_estimator(self) -> Result<Estimator, LoadErr> {
        if let Some(names) = &self.feature_names {
            if names.iter().map(String::as_str).ne(FEATURE_NAMES) {
                return Err(LoadErr::FeatureOrder { got: names.clone() });
            }
        }

        Ok(EstimatorBuilder::new().build(&self.model, self.params)?)
    }
}
