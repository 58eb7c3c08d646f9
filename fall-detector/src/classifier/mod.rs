//! Boundary to the inference engine.

pub mod logistic;

pub use logistic::LogisticModel;

use log::debug;
use uuid::Uuid;

use common::constants::N_FEATURES;
use common::{ClassificationResult, Classifier, InferenceError};

use crate::errors::PipelineError;

const FALLDOWN_OUTPUT_IDX: usize = 0;

/// Runs a [`Classifier`] on complete windows and turns its output into a [`ClassificationResult`].
pub struct ClassifierAdapter<C: Classifier> {
    classifier: C,
}

impl<C: Classifier> ClassifierAdapter<C> {
    /// Returns ModelSchema error if the classifier does not take one full window as input.
    pub fn new(classifier: C) -> Result<Self, PipelineError> {
        let input_len = classifier.input_len();
        if input_len != N_FEATURES {
            return Err(PipelineError::ModelSchema(format!(
                "classifier expects {input_len} features, windows provide {N_FEATURES}"
            )));
        }
        Ok(Self { classifier })
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Classifies one complete window. The first model output is the fall probability.
    pub fn classify(
        &mut self,
        window_id: Uuid,
        features: &[f32; N_FEATURES],
    ) -> Result<ClassificationResult, InferenceError> {
        let output = self.classifier.infer(features)?;
        let p = output
            .get(FALLDOWN_OUTPUT_IDX)
            .copied()
            .ok_or_else(|| InferenceError("classifier returned no output".to_string()))?;
        debug!("Window {} classified, p(falldown) = {}", window_id, p);
        Ok(ClassificationResult::from_falldown_probability(window_id, p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedOutput {
        input_len: usize,
        output: Vec<f32>,
    }

    impl Classifier for FixedOutput {
        fn input_len(&self) -> usize {
            self.input_len
        }

        fn infer(&mut self, _features: &[f32]) -> Result<Vec<f32>, InferenceError> {
            Ok(self.output.clone())
        }
    }

    #[test]
    fn test_rejects_wrong_input_len() {
        let result = ClassifierAdapter::new(FixedOutput {
            input_len: 60,
            output: vec![0.5],
        });
        assert!(matches!(result, Err(PipelineError::ModelSchema(_))));
    }

    #[test]
    fn test_classify() {
        let mut adapter = ClassifierAdapter::new(FixedOutput {
            input_len: N_FEATURES,
            output: vec![0.8],
        })
        .unwrap();
        let id = Uuid::new_v4();
        let result = adapter.classify(id, &[0.5; N_FEATURES]).unwrap();
        assert_eq!(result.window_id(), id);
        assert!((result.probability("falldown").unwrap() - 80.0).abs() < 1e-4);
        assert!((result.probability("normal").unwrap() - 20.0).abs() < 1e-4);
    }

    #[test]
    fn test_empty_output_is_inference_error() {
        let mut adapter = ClassifierAdapter::new(FixedOutput {
            input_len: N_FEATURES,
            output: vec![],
        })
        .unwrap();
        assert!(adapter
            .classify(Uuid::new_v4(), &[0.5; N_FEATURES])
            .is_err());
    }
}
