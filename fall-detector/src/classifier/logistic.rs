use std::path::Path;

use serde::{Deserialize, Serialize};

use common::{Classifier, InferenceError};

use crate::errors::PipelineError;

/// Model schema understood by this build.
pub const MODEL_SCHEMA_VERSION: u32 = 1;

/// Single-output logistic model, `p = sigmoid(w . x + b)`, described in JSON:
///
/// ```json
/// { "schema_version": 1, "input_len": 120, "weights": [ ... ], "bias": 0.0 }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogisticModel {
    schema_version: u32,
    input_len: usize,
    weights: Vec<f32>,
    bias: f32,
}

impl LogisticModel {
    pub fn new(weights: Vec<f32>, bias: f32) -> Self {
        Self {
            schema_version: MODEL_SCHEMA_VERSION,
            input_len: weights.len(),
            weights,
            bias,
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Returns ModelSchema error on malformed JSON, unknown schema version or inconsistent
    /// weight count.
    pub fn from_json(contents: &str) -> Result<Self, PipelineError> {
        let model: LogisticModel = serde_json::from_str(contents)
            .map_err(|e| PipelineError::ModelSchema(e.to_string()))?;
        if model.schema_version != MODEL_SCHEMA_VERSION {
            return Err(PipelineError::ModelSchema(format!(
                "schema version {} not supported, expected {}",
                model.schema_version, MODEL_SCHEMA_VERSION
            )));
        }
        if model.weights.len() != model.input_len {
            return Err(PipelineError::ModelSchema(format!(
                "{} weights for {} inputs",
                model.weights.len(),
                model.input_len
            )));
        }
        Ok(model)
    }
}

impl Classifier for LogisticModel {
    fn input_len(&self) -> usize {
        self.input_len
    }

    fn infer(&mut self, features: &[f32]) -> Result<Vec<f32>, InferenceError> {
        if features.len() != self.input_len {
            return Err(InferenceError(format!(
                "got {} features, expected {}",
                features.len(),
                self.input_len
            )));
        }
        let logit: f32 = self
            .weights
            .iter()
            .zip(features)
            .map(|(w, x)| w * x)
            .sum::<f32>()
            + self.bias;
        if !logit.is_finite() {
            return Err(InferenceError(format!("non finite logit {logit}")));
        }
        Ok(vec![1.0 / (1.0 + (-logit).exp())])
    }
}
