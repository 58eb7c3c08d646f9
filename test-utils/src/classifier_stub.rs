use common::constants::N_FEATURES;
use common::{Classifier, InferenceError};

/// Classifier returning scripted probabilities and keeping every window it received.
#[derive(Clone, Debug, Default)]
pub struct StubClassifier {
    outputs: Vec<Result<f32, String>>,
    calls: usize,
    windows: Vec<Vec<f32>>,
}

impl StubClassifier {
    /// Always answers `p`.
    pub fn constant(p: f32) -> Self {
        Self::sequence(vec![Ok(p)])
    }

    /// Always fails with `message`.
    pub fn failing(message: &str) -> Self {
        Self::sequence(vec![Err(message.to_string())])
    }

    /// Answers the given outputs in order, repeating the last one.
    pub fn sequence(outputs: Vec<Result<f32, String>>) -> Self {
        Self {
            outputs,
            calls: 0,
            windows: vec![],
        }
    }

    /// Feature buffers received, in call order.
    pub fn windows(&self) -> &[Vec<f32>] {
        &self.windows
    }

    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl Classifier for StubClassifier {
    fn input_len(&self) -> usize {
        N_FEATURES
    }

    fn infer(&mut self, features: &[f32]) -> Result<Vec<f32>, InferenceError> {
        self.windows.push(features.to_vec());
        let output = self
            .outputs
            .get(self.calls)
            .or(self.outputs.last())
            .cloned()
            .unwrap_or_else(|| Err("no output scripted".to_string()));
        self.calls += 1;
        output.map(|p| vec![p]).map_err(InferenceError)
    }
}
