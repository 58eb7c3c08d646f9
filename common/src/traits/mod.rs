pub mod classifier;
pub mod sink;
pub mod source;

pub use crate::traits::classifier::{Classifier, InferenceError};
pub use crate::traits::sink::ResultSink;
pub use crate::traits::source::{SampleSource, SourceStatus};
