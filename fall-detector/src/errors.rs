//! Module errors

use std::fmt;

use common::InferenceError;

/// Represents the different types of errors that can occur in the fall detector.
///
/// Every variant is fatal for the pipeline that raised it: there is no retry and no degraded mode.
#[derive(Clone, Debug, PartialEq)]
pub enum PipelineError {
    /// Error indicating that the sample source could not be initialized.
    SensorInit(String),

    /// Error indicating that the model does not match the expected schema or input shape.
    ModelSchema(String),

    /// Error indicating that the inference engine failed on a complete window.
    Inference(String),

    /// Error indicating an invalid configuration value or file.
    Config(String),

    /// Error indicating an I/O failure on a data file or output stream.
    Io(String),

    Other(String),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::SensorInit(msg) => write!(f, "sensor initialization failed: {msg}"),
            PipelineError::ModelSchema(msg) => write!(f, "model schema mismatch: {msg}"),
            PipelineError::Inference(msg) => write!(f, "invoke failed: {msg}"),
            PipelineError::Config(msg) => write!(f, "invalid configuration: {msg}"),
            PipelineError::Io(msg) => write!(f, "i/o error: {msg}"),
            PipelineError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<InferenceError> for PipelineError {
    fn from(value: InferenceError) -> Self {
        PipelineError::Inference(value.0)
    }
}

impl From<std::io::Error> for PipelineError {
    fn from(value: std::io::Error) -> Self {
        PipelineError::Io(value.to_string())
    }
}

impl From<csv::Error> for PipelineError {
    fn from(value: csv::Error) -> Self {
        PipelineError::Io(value.to_string())
    }
}

impl From<serde_json::Error> for PipelineError {
    fn from(value: serde_json::Error) -> Self {
        PipelineError::Config(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_inference_error() {
        let err = PipelineError::from(InferenceError("tensor arena exhausted".to_string()));
        assert_eq!(
            err,
            PipelineError::Inference("tensor arena exhausted".to_string())
        );
        assert_eq!(err.to_string(), "invoke failed: tensor arena exhausted");
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.csv");
        assert!(matches!(PipelineError::from(io), PipelineError::Io(_)));
    }
}
