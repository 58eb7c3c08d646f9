use std::fmt;

/// Failure reported by the inference engine while running a window.
#[derive(Clone, Debug, PartialEq)]
pub struct InferenceError(pub String);

impl fmt::Display for InferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "inference failed: {}", self.0)
    }
}

impl std::error::Error for InferenceError {}

/// Black-box classifier mapping a normalized feature buffer to class probabilities.
pub trait Classifier {
    /// Number of features expected by `infer`.
    fn input_len(&self) -> usize;
    /// Runs the model on `features` and returns its output vector.
    fn infer(&mut self, features: &[f32]) -> Result<Vec<f32>, InferenceError>;
}
