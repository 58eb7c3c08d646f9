//! General functionality for the `fall-detector` workspace
//!
//! Holds the sensor and result types shared by the pipeline and its collaborators, together
//! with the traits that mark the boundaries to the outside world: where samples come from
//! ([`SampleSource`]), who classifies a window ([`Classifier`]) and where results go ([`ResultSink`]).

pub mod constants;

#[doc(hidden)]
pub mod traits;
#[doc(hidden)]
pub mod types;

// Re-export traits
#[doc(inline)]
pub use traits::{Classifier, InferenceError, ResultSink, SampleSource, SourceStatus};

// Re-export types
#[doc(inline)]
pub use types::{buffers, ClassificationResult, Clock, ImuSample, SensorTick, XYZ};
